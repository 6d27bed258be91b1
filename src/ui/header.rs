//! Header rendering: the app title and the cart badge.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::APP_TITLE;
use crate::format::format_compact_quantity;
use crate::state::App;
use crate::theme::ACCENT_COLOR;

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block.clone(), area);

    if area.height <= 2 {
        return;
    }
    let inner = header_block.inner(area);

    let title = Paragraph::new(Line::from(APP_TITLE.cyan().bold())).alignment(Alignment::Left);
    frame.render_widget(title, Rect { x: inner.x + 1, width: inner.width.saturating_sub(1), ..inner });

    let badge = Paragraph::new(cart_badge(app.cart.count())).alignment(Alignment::Right);
    frame.render_widget(badge, Rect { width: inner.width.saturating_sub(1), ..inner });
}

/// The cart badge: a cart label and the compact item count.
fn cart_badge(count: usize) -> Line<'static> {
    let count = format_compact_quantity(i64::try_from(count).unwrap_or(i64::MAX));
    let style = Style::default()
        .fg(Color::White)
        .bg(ACCENT_COLOR)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(" Cart ", style),
        Span::styled(format!("{count} "), style),
    ])
}

// ============================================================================
// Tests
// ============================================================================
