//! Terminal engine - registry, navigation, dispatch, and the refresh tick
//!
//! One [`Terminal`] instance owns everything: the screen registry, the
//! navigation state, the key registry snapshot, and both render buffers.
//! The host constructs it once at startup and threads it through its input
//! and frame callbacks; there are no globals.
//!
//! Failure isolation happens here. Screen callbacks return `Result` and the
//! engine catches and logs at each boundary: per screen during initialize,
//! per event during dispatch, per tick during refresh. A failed refresh
//! leaves the previous buffers untouched.

use crate::compose;
use crate::host::Host;
use crate::keys::{KeyEntity, KeyRegistry};
use crate::nav::NavState;
use crate::registry::{ScreenId, ScreenRegistry};
use crate::screen::{KeyPress, Screen, KEY_DOWN, KEY_UP};
use crate::sink::{darken, lighten, DisplaySink, Rgb, ACCENT_TINT};
use tracing::{debug, error, warn};

/// The terminal navigation and rendering engine.
pub struct Terminal {
    registry: ScreenRegistry,
    nav: NavState,
    keys: KeyRegistry,
    screen_buffer: String,
    menu_buffer: String,
    initialized: bool,
    enabled: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            registry: ScreenRegistry::new(),
            nav: NavState::new(),
            keys: KeyRegistry::default(),
            screen_buffer: String::new(),
            menu_buffer: String::new(),
            initialized: false,
            enabled: true,
        }
    }

    /// Append a screen to the registry. Display order is registration order.
    pub fn register(&mut self, screen: Box<dyn Screen>) -> ScreenId {
        self.registry.register(screen)
    }

    /// Remove a screen and re-establish the navigation invariant.
    pub fn unregister(&mut self, id: ScreenId) {
        self.registry.unregister(id);
        self.nav.clamp(self.registry.len());
        self.update_menu();
    }

    /// Finish setup: snapshot the key registry, focus the first screen, and
    /// start every screen exactly once.
    ///
    /// Must be called once after all screens are registered. A second call
    /// is refused so screens are never double-started. One screen's failed
    /// `on_start` is logged and does not prevent the others from starting.
    pub fn initialize(&mut self, key_scan: Vec<KeyEntity>, host: &mut dyn Host) {
        if self.initialized {
            warn!("terminal already initialized, skipping to avoid double start");
            return;
        }
        self.initialized = true;

        if self.registry.is_empty() {
            warn!("no screens registered at initialize");
        }

        self.keys = KeyRegistry::from_scan(key_scan);
        if self.keys.is_empty() {
            warn!("keyboard scan found no keys, key lookups will always miss");
        }
        debug!(keys = self.keys.len(), screens = self.registry.len(), "terminal initialized");

        for screen in self.registry.iter_mut() {
            if let Err(err) = screen.on_start(host) {
                error!(screen = screen.title(), error = %err, "screen failed to start");
            }
        }

        self.update_menu();
    }

    /// Route one key press: reserved up/down drive navigation, then the
    /// event is forwarded to the focused screen regardless.
    ///
    /// Safe no-op on an empty registry. A failing key handler is logged and
    /// never propagates.
    pub fn dispatch(&mut self, key: &KeyPress, host: &mut dyn Host) {
        let n = self.registry.len();
        match key.identifier() {
            KEY_UP => {
                self.nav.retreat(n);
                self.update_menu();
            }
            KEY_DOWN => {
                self.nav.advance(n);
                self.update_menu();
            }
            _ => {}
        }

        if let Some(screen) = self.registry.get_mut(self.nav.focused()) {
            if let Err(err) = screen.on_key(key, host) {
                warn!(screen = screen.title(), key = key.identifier(), error = %err,
                    "key handler failed");
            }
        }
    }

    /// Recompute both buffers from current state and push them to the sink.
    ///
    /// Runs on the host's frame cadence. Skips when disabled or when no
    /// screen is focused. Buffer writes are all-or-nothing: if the focused
    /// screen's content fails, this tick is abandoned and the sink keeps
    /// showing the previous buffers.
    pub fn refresh(&mut self, sink: &mut dyn DisplaySink, host: &dyn Host) {
        if !self.enabled {
            return;
        }
        let focused = self.nav.focused();
        let Some(screen) = self.registry.get_mut(focused) else {
            return;
        };

        // Our buffers are authoritative while enabled
        sink.set_passthrough(false);

        let content = match screen.content(host) {
            Ok(content) => content,
            Err(err) => {
                warn!(screen = screen.title(), error = %err,
                    "content failed, keeping previous buffer");
                return;
            }
        };
        self.screen_buffer = compose::main_buffer(screen.title(), screen.description(), &content);
        self.update_menu();

        sink.set_screen_text(&self.screen_buffer);
        sink.set_menu_text(&self.menu_buffer);
    }

    /// Toggle the engine. Disabling restores the sink's own surfaces.
    pub fn set_enabled(&mut self, enabled: bool, sink: &mut dyn DisplaySink) {
        self.enabled = enabled;
        if !enabled {
            sink.set_passthrough(true);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Accent colors derived from the sink's foreground: a lighter and a
    /// darker variant at a fixed ±30% tint.
    pub fn accent_colors(&self, sink: &dyn DisplaySink) -> (Rgb, Rgb) {
        let fg = sink.foreground();
        (lighten(fg, ACCENT_TINT), darken(fg, ACCENT_TINT))
    }

    /// Key registry snapshot built at initialize.
    pub fn keys(&self) -> &KeyRegistry {
        &self.keys
    }

    pub fn screen_count(&self) -> usize {
        self.registry.len()
    }

    pub fn focused_index(&self) -> usize {
        self.nav.focused()
    }

    pub fn page(&self) -> usize {
        self.nav.page()
    }

    pub fn screen_buffer(&self) -> &str {
        &self.screen_buffer
    }

    pub fn menu_buffer(&self) -> &str {
        &self.menu_buffer
    }

    fn update_menu(&mut self) {
        self.menu_buffer = compose::menu_buffer(&self.registry.titles(), &self.nav);
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
