//! Name screen - edit the player name

use crate::host::{Host, MAX_NAME_LEN};
use crate::screen::{KeyPress, Screen};
use anyhow::Result;

/// Lets the player retype their name. The pending edit lives here; it is
/// only pushed to the host on enter.
#[derive(Default)]
pub struct NameScreen {
    pending: String,
}

impl NameScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for NameScreen {
    fn title(&self) -> &str {
        "Name"
    }

    fn description(&self) -> &str {
        "Type a new name, then press [Enter]."
    }

    fn content(&mut self, host: &dyn Host) -> Result<String> {
        Ok(format!(
            "    Current name: {}\n\n    New name: {}\n",
            host.player_name(),
            self.pending
        ))
    }

    fn on_key(&mut self, key: &KeyPress, host: &mut dyn Host) -> Result<()> {
        if !key.is_function_key() && self.pending.len() < MAX_NAME_LEN {
            self.pending.push_str(key.identifier());
        }

        match key.identifier() {
            "delete" => {
                self.pending.pop();
            }
            "enter" if !self.pending.is_empty() => {
                host.set_player_name(std::mem::take(&mut self.pending))?;
            }
            _ => {}
        }
        Ok(())
    }

    fn on_start(&mut self, host: &mut dyn Host) -> Result<()> {
        self.pending = host.player_name().to_string();
        Ok(())
    }
}
