//! Bundled screens
//!
//! Each screen implements the [`Screen`](crate::screen::Screen) trait and
//! nothing else; the engine knows them only through the contract. They are
//! registered explicitly in `main.rs` - there is no discovery mechanism.

mod about;
mod name;
mod session;

pub use about::AboutScreen;
pub use name::NameScreen;
pub use session::SessionScreen;
