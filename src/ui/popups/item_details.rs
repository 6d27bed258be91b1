//! Item details popup: every field of one item, each copyable.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::cart::CartItem;
use crate::state::DetailField;
use crate::theme::{HIGHLIGHT_STYLE, ID_BADGE_COLOR, MUTED_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 52;
// four fields × two lines + help + borders
const POPUP_HEIGHT: u16 = 12;

/// Render the details of `item` with `selected` highlighted.
pub fn render(frame: &mut Frame, area: Rect, item: &CartItem, selected: DetailField) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let popup_block = create_popup_block("Item Info");

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = DetailField::ALL
        .into_iter()
        .flat_map(|field| field_lines(item, field, field == selected))
        .collect();
    lines.push(Line::styled(
        "↑↓: Select  c/Enter: Copy  Esc: Close",
        Style::default().fg(MUTED_COLOR),
    ));

    let details = Paragraph::new(lines)
        .block(popup_block)
        .alignment(Alignment::Left);
    frame.render_widget(details, popup_area);
}

/// Heading line and value line for one field.
fn field_lines(item: &CartItem, field: DetailField, selected: bool) -> [Line<'static>; 2] {
    let marker = if selected { "▶ " } else { "  " };
    let heading = Line::from(vec![
        Span::raw(marker),
        Span::styled(field.heading(), Style::default().fg(MUTED_COLOR)),
    ]);

    let value_style = match field {
        DetailField::Id => Style::default().fg(Color::White).bg(ID_BADGE_COLOR),
        _ => Style::default().add_modifier(Modifier::BOLD),
    };
    let mut value = Line::from(vec![
        Span::raw("  "),
        Span::styled(display_value(item, field), value_style),
    ]);
    if selected {
        value = value.patch_style(HIGHLIGHT_STYLE);
    }

    [heading, value]
}

fn display_value(item: &CartItem, field: DetailField) -> String {
    match field {
        DetailField::Name => item.item_name.clone(),
        DetailField::Quantity => item.quantity.to_string(),
        DetailField::AddedTime => item.formatted_created_at.clone(),
        DetailField::Id => format!("#{}", item.id),
    }
}

// ============================================================================
// Tests
// ============================================================================
