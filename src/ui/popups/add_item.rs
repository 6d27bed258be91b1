//! Add item form popup.
//!
//! Two input boxes (name and amount), the compact amount in large type, and
//! a submit hint that lights up once the form is valid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::format::format_compact_quantity;
use crate::state::{AddItemForm, FormField};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 48;
// 2 fields × 3 lines + amount + spacer + hint + help + borders
const POPUP_HEIGHT: u16 = 12;

/// Render the add item form.
pub fn render(frame: &mut Frame, area: Rect, form: &AddItemForm) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let popup_block = create_popup_block("Add Item");

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_field(frame, rows[0], FormField::Name, &form.name, form.active_field);
    render_field(
        frame,
        rows[1],
        FormField::Quantity,
        &form.quantity_input(),
        form.active_field,
    );

    let amount = Paragraph::new(Line::from(vec![
        Span::styled("Amount: ", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            format_compact_quantity(form.quantity),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(amount, rows[2]);

    frame.render_widget(
        Paragraph::new(submit_hint(form)).alignment(Alignment::Center),
        rows[4],
    );

    let help = Paragraph::new("Tab:Field  +/-:Amount  ^U:Clear  Esc:Close")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[5]);
}

fn submit_hint(form: &AddItemForm) -> Line<'static> {
    if form.is_valid() {
        Line::styled(
            "Enter: Add to cart",
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(
            "Enter a name and an amount",
            Style::default().fg(MUTED_COLOR),
        )
    }
}

fn render_field(frame: &mut Frame, area: Rect, field: FormField, value: &str, active: FormField) {
    let is_active = field == active;
    let border_style = if is_active {
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    let (display, text_style) = match (value.is_empty(), is_active) {
        (true, true) => ("_".to_string(), Style::default().fg(PRIMARY_COLOR)),
        (true, false) => (placeholder(field).to_string(), Style::default().fg(MUTED_COLOR)),
        (false, true) => (format!("{value}_"), Style::default()),
        (false, false) => (value.to_string(), Style::default()),
    };

    let input = Paragraph::new(display).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", field.label())),
    );
    frame.render_widget(input, area);
}

const fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "<required>",
        FormField::Quantity => "0",
    }
}

// ============================================================================
// Tests
// ============================================================================
