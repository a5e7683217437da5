//! Layout calculations for the Math Buddies TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals at least this wide get the wider icon grid.
pub const WIDE_COLUMNS: u16 = 100;

/// Screen areas while playing.
pub struct PlayLayout {
    pub header: Rect,
    pub card: Rect,
    pub banner: Rect,
    pub keypad: Rect,
    pub status_bar: Rect,
    pub footer: Rect,
}

impl PlayLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score and streak
                Constraint::Min(9),    // Problem card
                Constraint::Length(3), // Feedback banner
                Constraint::Length(7), // Keypad
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            card: chunks[1],
            banner: chunks[2],
            keypad: centered_horizontally(40, chunks[3]),
            status_bar: chunks[4],
            footer: chunks[5],
        }
    }
}

/// Whether the terminal is wide enough for five icons per row.
pub fn is_wide(area: Rect) -> bool {
    area.width >= WIDE_COLUMNS
}

/// Create a centered rect with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn centered_horizontally(width: u16, area: Rect) -> Rect {
    centered_rect_fixed(width, area.height, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_layout_stacks_vertically() {
        let layout = PlayLayout::calculate(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.keypad.height, 7);
        assert_eq!(layout.footer.y, 29);
        assert!(layout.card.height >= 9);
        assert_eq!(layout.keypad.width, 40);
        assert_eq!(layout.keypad.x, 20);
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(60, 12, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_wide_threshold() {
        assert!(!is_wide(Rect::new(0, 0, 99, 30)));
        assert!(is_wide(Rect::new(0, 0, 100, 30)));
    }
}
