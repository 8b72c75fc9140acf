//! Host adapter - the narrow surface screens see of the outside world
//!
//! Screens never reach into host internals directly; they go through this
//! trait, which exposes exactly the state the bundled screens need: the
//! pending join-code buffer, the current session, and the player name. The
//! binary ships [`LocalHost`], an in-memory shim that stands in for a real
//! networked host.

use anyhow::{bail, Result};

/// Longest join code a screen may type in before input is ignored.
pub const MAX_JOIN_CODE_LEN: usize = 10;

/// Longest player name accepted by the host.
pub const MAX_NAME_LEN: usize = 12;

/// Host state accessor used by screens.
pub trait Host {
    /// Code of the session we are currently in, if any.
    fn session_code(&self) -> Option<&str>;

    /// Player count of the current session, 0 when not in one.
    fn player_count(&self) -> usize;

    /// The join code typed so far but not yet submitted.
    fn join_code(&self) -> &str;

    fn set_join_code(&mut self, code: String);

    /// Submit the pending join code and enter that session.
    fn join_entered(&mut self) -> Result<()>;

    /// Leave the current session. No-op when not in one.
    fn leave_session(&mut self) -> Result<()>;

    fn player_name(&self) -> &str;

    fn set_player_name(&mut self, name: String) -> Result<()>;
}

/// Standalone in-memory host used by the binary and by tests.
#[derive(Debug, Default)]
pub struct LocalHost {
    session: Option<String>,
    players: usize,
    join_code: String,
    player_name: String,
}

impl LocalHost {
    pub fn new() -> Self {
        Self {
            player_name: "PLAYER".to_string(),
            ..Self::default()
        }
    }
}

impl Host for LocalHost {
    fn session_code(&self) -> Option<&str> {
        self.session.as_deref()
    }

    fn player_count(&self) -> usize {
        self.players
    }

    fn join_code(&self) -> &str {
        &self.join_code
    }

    fn set_join_code(&mut self, code: String) {
        self.join_code = code;
    }

    fn join_entered(&mut self) -> Result<()> {
        if self.join_code.is_empty() {
            bail!("no join code entered");
        }
        self.session = Some(std::mem::take(&mut self.join_code));
        self.players = 1;
        Ok(())
    }

    fn leave_session(&mut self) -> Result<()> {
        self.session = None;
        self.players = 0;
        Ok(())
    }

    fn player_name(&self) -> &str {
        &self.player_name
    }

    fn set_player_name(&mut self, name: String) -> Result<()> {
        if name.len() > MAX_NAME_LEN {
            bail!("name longer than {MAX_NAME_LEN} characters");
        }
        self.player_name = name;
        Ok(())
    }
}
