//! Text composer - turns screen data into the two fixed-width buffers
//!
//! Two independent render passes per refresh tick: the main buffer (title /
//! divider / description / content) and the menu buffer (one page of screen
//! titles plus selection marker). Both are pure functions of the current
//! navigation state and the focused screen - composing never mutates either.
//!
//! Widths are measured in display columns (unicode-width), so CJK and emoji
//! titles truncate where they actually land on screen.

use crate::nav::{NavState, PAGE_SIZE};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal rule between the title, description, and content blocks.
/// Its length (including the line break) defines the centering width.
pub const DIVIDER: &str = "==========================================\n";

/// Character width of the display, used as the default marquee window.
pub const SCREEN_WIDTH: usize = 43;

/// Maximum menu entry label width.
const MENU_TITLE_MAX: usize = 9;

/// Marker prefixed to the focused menu entry.
const SELECTION_MARKER: char = '>';

/// Separator appended to marquee text before it wraps around.
const MARQUEE_SEPARATOR: &str = " --- ";

/// Compose the main buffer for the focused screen.
///
/// Every line is upper-cased except the divider itself. Empty title or
/// description skips that block entirely, and empty content stays empty.
pub fn main_buffer(title: &str, description: &str, content: &str) -> String {
    let mut text = String::new();
    if !title.is_empty() {
        text.push_str(&center(&title.to_uppercase(), ' '));
        text.push('\n');
        text.push_str(DIVIDER);
    }
    if !description.is_empty() {
        text.push_str(&description.to_uppercase());
        text.push('\n');
        text.push_str(DIVIDER);
    }
    text.push_str(&content.to_uppercase());
    text
}

/// Compose the menu buffer: one page of titles with the focused entry
/// marked, and a trailing ellipsis row when more pages follow.
///
/// At most `PAGE_SIZE + 1` lines. Titles are upper-cased, trimmed, and
/// truncated to 9 columns.
pub fn menu_buffer(titles: &[&str], nav: &NavState) -> String {
    let mut out = String::new();
    let base = nav.page() * PAGE_SIZE;
    for row in 0..PAGE_SIZE {
        let index = base + row;
        let Some(title) = titles.get(index) else {
            break;
        };
        let label = title.to_uppercase();
        let label = truncate_columns(label.trim(), MENU_TITLE_MAX);
        out.push(if index == nav.focused() {
            SELECTION_MARKER
        } else {
            ' '
        });
        out.push_str(label);
        out.push('\n');
    }
    if titles.len() > base + PAGE_SIZE {
        out.push_str(" ...");
    }
    out
}

/// Center `text` within the divider width using floor-division padding.
///
/// Padding is emitted symmetrically, so odd leftovers shorten the line by
/// one rather than drifting the text off-center. Text wider than the
/// divider gets zero padding, never a panic.
pub fn center(text: &str, pad: char) -> String {
    let width = DIVIDER.len();
    let padding = width.saturating_sub(text.width()) / 2;
    let fill: String = std::iter::repeat(pad).take(padding).collect();
    format!("{fill}{text}{fill}")
}

/// Marquee a long line through a fixed window, driven by a monotonic clock.
///
/// Text narrower than the window is returned unchanged. Otherwise the text
/// is extended with `" --- "` and a `width`-character window slides through
/// it at `speed` characters per second, wrapping to the front when it runs
/// past the end. The cycle repeats with period `len(text) + 5`.
pub fn scrolling(text: &str, speed: f64, width: usize, elapsed: Duration) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < width {
        return text.to_string();
    }
    let extended: Vec<char> = chars
        .into_iter()
        .chain(MARQUEE_SEPARATOR.chars())
        .collect();
    let len = extended.len();
    let start = (elapsed.as_secs_f64() * speed) as usize % len;
    (0..width.min(len))
        .map(|offset| extended[(start + offset) % len])
        .collect()
}

/// Truncate to at most `max_cols` display columns on a char boundary.
fn truncate_columns(s: &str, max_cols: usize) -> &str {
    let mut cols = 0;
    for (index, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if cols + w > max_cols {
            return &s[..index];
        }
        cols += w;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavState;

    #[test]
    fn test_divider_width() {
        // 42 '=' plus the line break
        assert_eq!(DIVIDER.len(), 43);
        assert!(DIVIDER.ends_with('\n'));
    }

    #[test]
    fn test_center_short_text() {
        let centered = center("HI", ' ');
        // (43 - 2) / 2 = 20 on each side
        assert_eq!(centered, format!("{}HI{}", " ".repeat(20), " ".repeat(20)));
    }

    #[test]
    fn test_center_exact_width_has_no_padding() {
        let text = "x".repeat(DIVIDER.len());
        assert_eq!(center(&text, ' '), text);
    }

    #[test]
    fn test_center_oversized_text_is_unpadded() {
        let text = "y".repeat(DIVIDER.len() + 10);
        assert_eq!(center(&text, ' '), text);
    }

    #[test]
    fn test_main_buffer_full_layout() {
        let text = main_buffer("Room", "Join a room.", "code: abc");
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("ROOM"));
        assert_eq!(lines[1], DIVIDER.trim_end());
        assert_eq!(lines[2], "JOIN A ROOM.");
        assert_eq!(lines[3], DIVIDER.trim_end());
        assert_eq!(lines[4], "CODE: ABC");
    }

    #[test]
    fn test_main_buffer_skips_empty_blocks() {
        assert_eq!(main_buffer("", "", ""), "");
        let text = main_buffer("T", "", "body");
        assert_eq!(text.matches(DIVIDER).count(), 1);
        assert!(text.ends_with("BODY"));
    }

    #[test]
    fn test_menu_marks_focused_entry() {
        let titles = vec!["Room", "Name", "Test"];
        let mut nav = NavState::new();
        nav.advance(3);
        let menu = menu_buffer(&titles, &nav);
        assert_eq!(menu, " ROOM\n>NAME\n TEST\n");
    }

    #[test]
    fn test_menu_truncates_long_titles() {
        let titles = vec!["VeryLongScreenTitle"];
        let menu = menu_buffer(&titles, &NavState::new());
        assert_eq!(menu, ">VERYLONGS\n");
    }

    #[test]
    fn test_menu_page_window_and_ellipsis() {
        let owned: Vec<String> = (0..15).map(|i| format!("s{i}")).collect();
        let titles: Vec<&str> = owned.iter().map(String::as_str).collect();
        let nav = NavState::new();
        let menu = menu_buffer(&titles, &nav);
        // 13 entries plus the ellipsis row
        assert_eq!(menu.lines().count(), PAGE_SIZE + 1);
        assert!(menu.ends_with(" ..."));

        // Second page holds the remaining two entries, no ellipsis
        let mut nav = NavState::new();
        for _ in 0..13 {
            nav.advance(15);
        }
        let menu = menu_buffer(&titles, &nav);
        assert_eq!(menu, ">S13\n S14\n");
    }

    #[test]
    fn test_menu_line_count_never_exceeds_page_plus_one() {
        let owned: Vec<String> = (0..40).map(|i| format!("screen{i}")).collect();
        let titles: Vec<&str> = owned.iter().map(String::as_str).collect();
        let mut nav = NavState::new();
        for _ in 0..40 {
            nav.advance(titles.len());
            let menu = menu_buffer(&titles, &nav);
            assert!(menu.lines().count() <= PAGE_SIZE + 1);
        }
    }

    #[test]
    fn test_scrolling_short_text_unchanged() {
        let out = scrolling("short", 5.0, SCREEN_WIDTH, Duration::from_secs(9));
        assert_eq!(out, "short");
    }

    #[test]
    fn test_scrolling_window_slides_and_wraps() {
        let text = "abcdefghij"; // 10 chars, window 10 -> extended len 15
        let at = |secs: f64| scrolling(text, 1.0, 10, Duration::from_secs_f64(secs));
        assert_eq!(at(0.0), "abcdefghij");
        assert_eq!(at(1.0), "bcdefghij ");
        assert_eq!(at(11.0), "--- abcdef");
        // Period is len(text) + len(" --- ") = 15
        assert_eq!(at(15.0), at(0.0));
    }

    #[test]
    fn test_truncate_columns_counts_display_width() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_columns("日本語dead", 9), "日本語dea");
        assert_eq!(truncate_columns("ascii", 9), "ascii");
    }
}
