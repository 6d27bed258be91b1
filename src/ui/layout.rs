//! Layout calculations for the Picart TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header bar.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer bar.
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Layout Structs
// ============================================================================

/// Top-level screen areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Splits the screen into header, cart list and footer.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Calculate a centered popup area with a fixed size, keeping a two-cell
/// margin inside the parent.
///
/// # Arguments
/// * `parent` - Parent area
/// * `width` - Desired popup width
/// * `height` - Desired popup height
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
