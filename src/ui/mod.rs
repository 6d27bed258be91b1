//! UI rendering for the Picart TUI.
//!
//! - `cart_list` - The cart panel
//! - `popups` - Add item form and item details
//! - `components` - Reusable components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` / `footer` - Top and bottom bars
//! - `helpers` - Styled block constructors

pub mod cart_list;
pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen: bars, cart list, the open popup, then the toast
/// on top of everything.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    header::render(frame, layout.header, app);
    cart_list::render(frame, layout.content, app);
    footer::render(frame, layout.footer, app);

    render_popups(app, frame, size);

    if let Some(toast) = &app.ui.toast {
        components::render_toast(frame, size, toast);
    }
}

fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.popup {
        PopupState::AddItem(form) => popups::add_item::render(frame, area, form),
        PopupState::ItemDetails { item_id, field } => {
            if let Some(item) = app.cart.get(item_id) {
                popups::item_details::render(frame, area, item, *field);
            }
        }
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{
        CartItemMother, FakeClipboard, app_with, buffer_to_string, cart_with, mock_app,
        test_terminal,
    };
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;
    use std::sync::Arc;

    fn draw(terminal: &mut Terminal<TestBackend>, app: &App) -> String {
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_main_screen(mock_app: App, mut test_terminal: Terminal<TestBackend>) {
        let content = draw(&mut test_terminal, &mock_app);

        assert!(content.contains("Picart"));
        assert!(content.contains("Shopping Cart:"));
        assert!(content.contains("No items in your cart."));
        assert!(content.contains("a:Add"));
    }

    #[rstest]
    fn test_popups_and_toast_overlay(mut test_terminal: Terminal<TestBackend>) {
        let cart = cart_with(&[CartItemMother::bread()]);
        let mut app = app_with(cart, Arc::new(FakeClipboard::default()));

        app.execute_command(AppCommand::OpenDetails);
        let content = draw(&mut test_terminal, &app);
        assert!(content.contains("Item Info"));
        assert!(content.contains("#0123456789abcdef"));

        app.execute_command(AppCommand::Dismiss);
        app.execute_command(AppCommand::OpenAddItem);
        app.ui.show_success("Cleared!");
        let content = draw(&mut test_terminal, &app);
        assert!(content.contains("Add Item"));
        assert!(content.contains("Cleared!"));
    }

    #[rstest]
    fn test_details_for_missing_item_draws_nothing(
        mut mock_app: App,
        mut test_terminal: Terminal<TestBackend>,
    ) {
        mock_app.ui.popup = PopupState::ItemDetails {
            item_id: "ffffffffffffffff".to_string(),
            field: crate::state::DetailField::Name,
        };

        let content = draw(&mut test_terminal, &mock_app);
        assert!(!content.contains("Item Info"));
    }
}
