//! About screen - version line plus a scrolling marquee demo

use crate::compose::{self, SCREEN_WIDTH};
use crate::host::Host;
use crate::screen::{KeyPress, Screen};
use anyhow::Result;
use std::time::Instant;

const MARQUEE: &str =
    "termdeck: a fixed-width terminal with pluggable screens. Use the arrow keys to browse.";
const MARQUEE_SPEED: f64 = 5.0;

/// Static info screen. Doubles as the marquee showcase: its banner line is
/// wider than the display and cycles on the screen's own monotonic clock.
pub struct AboutScreen {
    epoch: Instant,
    acknowledged: bool,
}

impl AboutScreen {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            acknowledged: false,
        }
    }
}

impl Default for AboutScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for AboutScreen {
    fn title(&self) -> &str {
        "About"
    }

    fn description(&self) -> &str {
        "Press [Option 1] for something to happen."
    }

    fn content(&mut self, _host: &dyn Host) -> Result<String> {
        let banner = compose::scrolling(MARQUEE, MARQUEE_SPEED, SCREEN_WIDTH, self.epoch.elapsed());
        let mut body = format!("{banner}\n\nversion {}\n", env!("CARGO_PKG_VERSION"));
        if self.acknowledged {
            body.push_str("\nSomething happened!\n");
        }
        Ok(body)
    }

    fn on_key(&mut self, key: &KeyPress, _host: &mut dyn Host) -> Result<()> {
        if key.identifier() == "option1" {
            self.acknowledged = true;
        }
        Ok(())
    }
}
