// termdeck binary - wires the engine to the real host
//
// Loads config, installs file logging, registers the bundled screens,
// builds the keyboard scan, and hands everything to the event loop.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use termdeck::cli::Cli;
use termdeck::config::Config;
use termdeck::engine::Terminal;
use termdeck::host::LocalHost;
use termdeck::keys::KeyEntity;
use termdeck::screen::{KEY_DOWN, KEY_UP};
use termdeck::screens::{AboutScreen, NameScreen, SessionScreen};
use termdeck::tui::TuiSink;
use termdeck::{app, logging};
use tracing::{error, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    if let Some(filter) = cli.log_filter {
        config.log_filter = filter;
    }

    // Logging is best-effort: an unwritable log dir should not keep the
    // terminal from coming up
    let _log_guard = match logging::init(&config.log_dir, &config.log_filter) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("termdeck: logging disabled: {err:#}");
            None
        }
    };

    let mut host = LocalHost::new();
    let mut engine = Terminal::new();
    engine.register(Box::new(SessionScreen::new()));
    engine.register(Box::new(NameScreen::new()));
    engine.register(Box::new(AboutScreen::new()));
    engine.initialize(keyboard_scan(), &mut host);

    for reserved in [KEY_UP, KEY_DOWN] {
        if engine.keys().lookup(reserved).is_none() {
            warn!(key = reserved, "reserved key missing from keyboard scan");
        }
    }

    let mut sink = TuiSink::new(config.foreground_rgb());
    let (_, border) = engine.accent_colors(&sink);
    sink.set_border(border);

    let result = app::run(
        &mut engine,
        &mut host,
        &mut sink,
        Duration::from_millis(config.tick_ms),
    );
    if let Err(ref err) = result {
        error!(error = %err, "host loop exited with error");
    }
    result
}

/// Enumerate the keys the in-world keyboard exposes. Mirrors what the host
/// loop can actually deliver (see `app::map_key`).
fn keyboard_scan() -> Vec<KeyEntity> {
    let mut scan = Vec::new();
    for c in 'a'..='z' {
        scan.push(KeyEntity::new(c.to_string(), false));
    }
    for d in '0'..='9' {
        scan.push(KeyEntity::new(d.to_string(), false));
    }
    for id in ["up", "down", "enter", "delete", "option1", "option2", "option3"] {
        scan.push(KeyEntity::new(id, true));
    }
    scan
}
