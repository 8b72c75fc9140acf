//! Session screen - join, inspect, and leave a session by code

use crate::host::{Host, MAX_JOIN_CODE_LEN};
use crate::screen::{KeyPress, Screen};
use anyhow::Result;

/// Shows the current session and lets the player type a join code.
#[derive(Default)]
pub struct SessionScreen;

impl SessionScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for SessionScreen {
    fn title(&self) -> &str {
        "Session"
    }

    fn description(&self) -> &str {
        "Press [Option 1] to leave the current session.\n\
         Press [Enter] to join a code."
    }

    fn content(&mut self, host: &dyn Host) -> Result<String> {
        let code = host.session_code().unwrap_or("N/A");
        Ok(format!(
            "    Current session code: {}\n\n    Join code: {}\n\n    Players: {}\n",
            code,
            host.join_code(),
            host.player_count()
        ))
    }

    fn on_key(&mut self, key: &KeyPress, host: &mut dyn Host) -> Result<()> {
        if !key.is_function_key() && host.join_code().len() < MAX_JOIN_CODE_LEN {
            let mut code = host.join_code().to_string();
            code.push_str(key.identifier());
            host.set_join_code(code);
        }

        match key.identifier() {
            "delete" => {
                // pop, not byte slicing: identifiers may be multi-byte
                let mut code = host.join_code().to_string();
                code.pop();
                host.set_join_code(code);
            }
            "option1" => host.leave_session()?,
            "enter" => host.join_entered()?,
            _ => {}
        }
        Ok(())
    }
}
