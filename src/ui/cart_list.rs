//! The cart list panel.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::cart::CartItem;
use crate::constants::CART_TITLE;
use crate::format::{LIST_NAME_MAX_CHARS, format_compact_quantity, truncate_name};
use crate::state::App;
use crate::theme::{HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR};

use super::helpers::create_border_block;

/// Marker drawn in front of the selected row.
const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Render the cart list, or hints when the cart is empty.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block(CART_TITLE, !app.input_context().is_popup());

    if app.cart.count() == 0 {
        let hints = Paragraph::new(empty_cart_lines())
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hints, area);
        return;
    }

    let rows: Vec<ListItem> = app.cart.items().iter().map(item_row).collect();
    let list = List::new(rows)
        .block(block)
        .highlight_style(HIGHLIGHT_STYLE)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default().with_selected(app.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}

/// `<name> ⇄ <quantity>` with the name shortened to fit the list.
fn item_row(item: &CartItem) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            truncate_name(&item.item_name, LIST_NAME_MAX_CHARS),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ⇄ "),
        Span::styled(
            format_compact_quantity(item.quantity),
            Style::default().fg(PRIMARY_COLOR),
        ),
    ]))
}

fn empty_cart_lines() -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from("No items in your cart."),
        Line::default(),
        Line::from("Press 'a' to add stuff in the cart."),
    ]
}

// ============================================================================
// Tests
// ============================================================================
