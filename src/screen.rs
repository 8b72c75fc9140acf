//! Screen contract - the capability trait every terminal feature implements
//!
//! A screen is one pluggable unit of content plus key handling. The engine
//! only ever talks to screens through this trait: it reads `title` and
//! `description` for the main buffer header, asks for `content` each refresh
//! tick, and forwards every key press to the focused screen's `on_key`.
//!
//! All fallible operations return `anyhow::Result` and are caught at the
//! dispatch/refresh/initialize boundaries - a broken screen never takes the
//! engine down with it.

use crate::host::Host;
use anyhow::Result;

/// Reserved key identifier that retreats the menu selection.
pub const KEY_UP: &str = "up";
/// Reserved key identifier that advances the menu selection.
pub const KEY_DOWN: &str = "down";

/// A discrete key-press event delivered by the host keyboard.
///
/// The identifier is the host's character string for the key (`"a"`, `"3"`,
/// `"enter"`, `"up"`). Screens use [`KeyPress::is_function_key`] to tell
/// character input apart from control input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    identifier: String,
    function_key: bool,
}

impl KeyPress {
    /// A printable character key (letters, digits).
    pub fn character(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            function_key: false,
        }
    }

    /// A function/modifier key (`"enter"`, `"delete"`, `"up"`, `"option1"`, ...).
    pub fn function(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            function_key: true,
        }
    }

    /// The host's string identifier for this key.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Whether this is a function/modifier key rather than character input.
    pub fn is_function_key(&self) -> bool {
        self.function_key
    }
}

/// Contract every registered screen satisfies.
///
/// Lifecycle: constructed during setup, registered into the
/// [`ScreenRegistry`](crate::registry::ScreenRegistry), `on_start` invoked
/// exactly once after the full registry is assembled, then it lives until
/// explicit unregistration. The registry holds the only owning reference.
pub trait Screen {
    /// Short, stable name shown in the menu buffer.
    fn title(&self) -> &str;

    /// One-line help text rendered under the title. Empty means no
    /// description block in the main buffer.
    fn description(&self) -> &str {
        ""
    }

    /// Current body text for the main buffer. May be empty.
    ///
    /// An `Err` here aborts the current refresh tick; the previous buffer
    /// contents stay on screen and the next tick retries naturally.
    fn content(&mut self, host: &dyn Host) -> Result<String>;

    /// Handle a key press. Called for every event while focused, including
    /// the reserved navigation keys (after the navigation transition ran).
    fn on_key(&mut self, _key: &KeyPress, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }

    /// Called exactly once, after all screens are registered. A failure is
    /// logged and does not prevent other screens from starting.
    fn on_start(&mut self, _host: &mut dyn Host) -> Result<()> {
        Ok(())
    }
}
