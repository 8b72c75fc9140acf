//! termdeck - fixed-width in-world terminal with pluggable screens
//!
//! Emulates a small computer terminal: a fixed-width character display plus
//! a scrollable menu of independently implemented screens, driven by
//! discrete key-press events.
//!
//! The engine core is [`engine::Terminal`]: it owns the screen registry,
//! the navigation state machine, the key registry, and the two render
//! buffers, and isolates every screen failure at the dispatch/refresh
//! boundary. Screens implement [`screen::Screen`] and are registered
//! explicitly - there is no discovery mechanism.
//!
//! The host side ([`app`], [`tui`], [`config`], [`cli`]) drives the engine
//! from a single-threaded crossterm event loop and renders both buffers
//! with ratatui.

pub mod app;
pub mod cli;
pub mod compose;
pub mod config;
pub mod engine;
pub mod host;
pub mod keys;
pub mod logging;
pub mod nav;
pub mod registry;
pub mod screen;
pub mod screens;
pub mod sink;
pub mod tui;
