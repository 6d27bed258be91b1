//! Theme and styling constants for the Picart TUI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success toast color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning toast color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Cart badge background.
pub const ACCENT_COLOR: Color = Color::Magenta;

/// Item id badge background.
pub const ID_BADGE_COLOR: Color = Color::Blue;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for highlighted items with emphasis.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
