// App module - terminal setup and the synchronous event loop
//
// Single-threaded and cooperative: key dispatch and the refresh tick run
// interleaved on this one loop, never concurrently, so no locking exists
// anywhere in the engine. crossterm::event::poll doubles as the tick timer.

use crate::engine::Terminal;
use crate::host::Host;
use crate::screen::KeyPress;
use crate::tui::TuiSink;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::{Duration, Instant};

/// What a crossterm key event means to the host loop.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    /// Forward to the engine as a key press
    Press(KeyPress),
    /// Leave the event loop
    Quit,
    /// Not a key the in-world keyboard has
    Ignore,
}

/// Run the host loop until the user quits.
///
/// Sets up the terminal, drives dispatch and the refresh tick, and restores
/// the terminal on the way out (also on error).
pub fn run(
    engine: &mut Terminal,
    host: &mut dyn Host,
    sink: &mut TuiSink,
    tick: Duration,
) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend).context("failed to create terminal")?;

    let result = run_event_loop(&mut terminal, engine, host, sink, tick);

    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to restore terminal")?;
    terminal.show_cursor().context("failed to show cursor")?;

    result
}

fn run_event_loop(
    terminal: &mut ratatui::Terminal<CrosstermBackend<io::Stdout>>,
    engine: &mut Terminal,
    host: &mut dyn Host,
    sink: &mut TuiSink,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();
    engine.refresh(sink, host);

    loop {
        terminal
            .draw(|f| sink.draw(f))
            .context("failed to draw frame")?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).context("failed to poll events")? {
            if let Event::Key(key) = event::read().context("failed to read event")? {
                if key.kind == KeyEventKind::Press {
                    match map_key(&key) {
                        Action::Press(press) => engine.dispatch(&press, host),
                        Action::Quit => return Ok(()),
                        Action::Ignore => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick {
            engine.refresh(sink, host);
            last_tick = Instant::now();
        }
    }
}

/// Translate a crossterm key event into the engine's key identifiers.
///
/// Arrows become the reserved "up"/"down" tokens; F-keys become the
/// "option" function keys; printable characters pass through lower-cased.
fn map_key(key: &KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Up => Action::Press(KeyPress::function("up")),
        KeyCode::Down => Action::Press(KeyPress::function("down")),
        KeyCode::Enter => Action::Press(KeyPress::function("enter")),
        KeyCode::Backspace | KeyCode::Delete => Action::Press(KeyPress::function("delete")),
        KeyCode::F(n @ 1..=3) => Action::Press(KeyPress::function(format!("option{n}"))),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
            Action::Press(KeyPress::character(c.to_ascii_lowercase().to_string()))
        }
        _ => Action::Ignore,
    }
}
