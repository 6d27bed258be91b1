//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner of the screen, coloured
//! by the toast's kind.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{Toast, ToastKind};
use crate::theme::{SUCCESS_COLOR, WARNING_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Extra padding added to message length for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let toast_area = calculate_toast_position(area, &toast.message);

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block(toast.kind);
    frame.render_widget(toast_block.clone(), toast_area);

    let inner_area = toast_block.inner(toast_area);
    let toast_text = Paragraph::new(toast.message.as_str())
        .style(
            Style::default()
                .fg(determine_text_color(toast.kind))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(
        toast_x,
        toast_y,
        toast_width,
        TOAST_HEIGHT.min(area.height),
    )
}

#[must_use]
fn create_toast_block(kind: ToastKind) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(determine_text_color(kind)))
        .style(Style::default().bg(Color::Black))
}

#[must_use]
const fn determine_text_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => SUCCESS_COLOR,
        ToastKind::Warning => WARNING_COLOR,
    }
}

// ============================================================================
// Tests
// ============================================================================
