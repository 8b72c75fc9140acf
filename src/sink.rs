//! Display sink - the two text surfaces the engine writes into
//!
//! The engine owns the buffer contents; the sink owns the physical
//! surfaces. Each refresh tick replaces both surfaces wholesale, so a sink
//! never sees a partially composed buffer. The passthrough toggle lets an
//! externally owned surface (the host's stock display) show through while
//! the engine is disabled.

/// Tint factor for the derived accent colors.
pub const ACCENT_TINT: f64 = 0.3;

/// An RGB color as reported by the sink's foreground.
pub type Rgb = (u8, u8, u8);

/// Write targets for the composed buffers.
pub trait DisplaySink {
    /// Replace the main content surface.
    fn set_screen_text(&mut self, text: &str);

    /// Replace the menu/function-list surface.
    fn set_menu_text(&mut self, text: &str);

    /// Current foreground color of the content surface.
    fn foreground(&self) -> Rgb;

    /// Show (`true`) or hide (`false`) the externally owned passthrough
    /// surfaces. The engine hides them before composing so its buffers are
    /// authoritative, and restores them on disable.
    fn set_passthrough(&mut self, enabled: bool);
}

/// Lighten a color by moving each channel toward white by `factor`.
pub fn lighten(color: Rgb, factor: f64) -> Rgb {
    let shift = |c: u8| c.saturating_add(((255 - c) as f64 * factor) as u8);
    (shift(color.0), shift(color.1), shift(color.2))
}

/// Darken a color by moving each channel toward black by `factor`.
pub fn darken(color: Rgb, factor: f64) -> Rgb {
    let shift = |c: u8| (c as f64 * (1.0 - factor)) as u8;
    (shift(color.0), shift(color.1), shift(color.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_moves_toward_white() {
        assert_eq!(lighten((100, 100, 100), 0.3), (146, 146, 146));
        assert_eq!(lighten((255, 255, 255), 0.3), (255, 255, 255));
    }

    #[test]
    fn test_darken_moves_toward_black() {
        assert_eq!(darken((100, 100, 100), 0.3), (70, 70, 70));
        assert_eq!(darken((0, 0, 0), 0.3), (0, 0, 0));
    }

}
