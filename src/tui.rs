// TUI sink - renders the two engine buffers with ratatui
//
// The menu buffer gets a narrow column on the left, the main buffer the
// rest. When passthrough is enabled the engine's buffers are hidden and the
// stock standby surface shows instead, mirroring a host display the engine
// has released.

use crate::sink::{DisplaySink, Rgb};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the menu column: marker + 9-column label + borders.
const MENU_COLUMN_WIDTH: u16 = 13;

/// The physical display surfaces, backed by a ratatui frame.
pub struct TuiSink {
    screen_text: String,
    menu_text: String,
    passthrough: bool,
    foreground: Rgb,
    border: Rgb,
}

impl TuiSink {
    pub fn new(foreground: Rgb) -> Self {
        Self {
            screen_text: String::new(),
            menu_text: String::new(),
            passthrough: true,
            foreground,
            border: foreground,
        }
    }

    /// Border accent, normally the darker engine-derived variant of the
    /// foreground.
    pub fn set_border(&mut self, border: Rgb) {
        self.border = border;
    }

    fn style(&self) -> Style {
        let (r, g, b) = self.foreground;
        Style::default().fg(Color::Rgb(r, g, b))
    }

    fn border_style(&self) -> Style {
        let (r, g, b) = self.border;
        Style::default().fg(Color::Rgb(r, g, b))
    }

    /// Draw the current surfaces into the frame.
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(MENU_COLUMN_WIDTH), Constraint::Min(0)])
            .split(f.area());

        if self.passthrough {
            self.draw_standby(f, f.area());
            return;
        }

        let menu = Paragraph::new(self.menu_text.as_str())
            .style(self.style())
            .block(Block::default().borders(Borders::ALL).border_style(self.border_style()));
        f.render_widget(menu, chunks[0]);

        let screen = Paragraph::new(self.screen_text.as_str())
            .style(self.style())
            .block(Block::default().borders(Borders::ALL).border_style(self.border_style()));
        f.render_widget(screen, chunks[1]);
    }

    fn draw_standby(&self, f: &mut Frame, area: Rect) {
        let standby = Paragraph::new("\n\n  STANDBY")
            .style(self.style())
            .block(Block::default().borders(Borders::ALL).border_style(self.border_style()));
        f.render_widget(standby, area);
    }
}

impl DisplaySink for TuiSink {
    fn set_screen_text(&mut self, text: &str) {
        self.screen_text = text.to_string();
    }

    fn set_menu_text(&mut self, text: &str) {
        self.menu_text = text.to_string();
    }

    fn foreground(&self) -> Rgb {
        self.foreground
    }

    fn set_passthrough(&mut self, enabled: bool) {
        self.passthrough = enabled;
    }
}
