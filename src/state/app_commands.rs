//! Command execution and input handling for the Picart application.
//!
//! Key events are mapped to [`AppCommand`]s for the current
//! [`InputContext`], then executed against the cart and UI state.

use crossterm::event::KeyEvent;
use tracing::{debug, warn};

use super::{AddItemForm, App, AppMessage, DetailField, PopupState};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::format::format_compact_quantity;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which key bindings are active.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        match &self.ui.popup {
            PopupState::None => InputContext::Main,
            PopupState::AddItem(_) => InputContext::AddItem,
            PopupState::ItemDetails { .. } => InputContext::ItemDetails,
        }
    }

    /// Executes an application command.
    pub fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Dismiss => {
                self.ui.popup = PopupState::None;
            }

            // === Cart List ===
            AppCommand::OpenAddItem => {
                self.ui.popup = PopupState::AddItem(AddItemForm::new());
            }
            AppCommand::MoveUp => {
                self.ui.select_previous(self.cart.count());
            }
            AppCommand::MoveDown => {
                self.ui.select_next(self.cart.count());
            }
            AppCommand::OpenDetails => {
                self.open_details();
            }
            AppCommand::DeleteSelected => {
                self.delete_selected();
            }
            AppCommand::CopyCartCount => {
                self.copy_cart_count();
            }

            // === Add Item Form ===
            AppCommand::TypeChar(c) => self.with_form(|form| form.push_char(c)),
            AppCommand::Backspace => self.with_form(AddItemForm::backspace),
            AppCommand::SwitchField => self.with_form(AddItemForm::toggle_field),
            AppCommand::IncrementQuantity => self.with_form(AddItemForm::increment),
            AppCommand::DecrementQuantity => self.with_form(AddItemForm::decrement),
            AppCommand::SubmitItem => {
                self.submit_item();
            }
            AppCommand::ClearForm => {
                self.clear_form();
            }

            // === Item Details ===
            AppCommand::DetailFieldUp => self.with_detail_field(DetailField::prev),
            AppCommand::DetailFieldDown => self.with_detail_field(DetailField::next),
            AppCommand::CopyDetailField => {
                self.copy_detail_field();
            }

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Popups
    // ========================================================================

    fn with_form(&mut self, edit: impl FnOnce(&mut AddItemForm)) {
        if let PopupState::AddItem(form) = &mut self.ui.popup {
            edit(form);
        }
    }

    fn with_detail_field(&mut self, step: impl FnOnce(DetailField) -> DetailField) {
        if let PopupState::ItemDetails { field, .. } = &mut self.ui.popup {
            *field = step(*field);
        }
    }

    fn open_details(&mut self) {
        if let Some(item_id) = self.selected_item().map(|item| item.id.clone()) {
            self.ui.popup = PopupState::ItemDetails {
                item_id,
                field: DetailField::default(),
            };
        }
    }

    // ========================================================================
    // Cart Mutations
    // ========================================================================

    /// Adds the form's item to the cart. Does nothing while the form is
    /// incomplete.
    pub(crate) fn submit_item(&mut self) {
        let PopupState::AddItem(form) = &self.ui.popup else {
            return;
        };
        if !form.is_valid() {
            debug!("Ignoring submit of incomplete form");
            return;
        }

        match self.cart.add(&form.name, form.quantity) {
            Ok(item) => {
                self.ui.popup = PopupState::None;
                self.ui.selected = self.cart.count().checked_sub(1);
                self.ui.show_success(format!("Added {}", item.item_name));
            }
            Err(err) => {
                warn!("Add rejected: {err}");
                self.ui.show_warning(err.to_string());
            }
        }
    }

    fn clear_form(&mut self) {
        let PopupState::AddItem(form) = &mut self.ui.popup else {
            return;
        };
        if form.is_dirty() {
            form.reset();
            self.ui.show_success("Cleared!");
        }
    }

    /// Removes the highlighted item.
    pub(crate) fn delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id.clone()) else {
            return;
        };

        if let Some(removed) = self.cart.remove(&id) {
            self.ui.clamp_selection(self.cart.count());
            self.ui.show_success(format!("Deleted {}", removed.item_name));
        }
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    fn copy_cart_count(&mut self) {
        let count = self.cart.count();
        if count == 0 {
            return;
        }
        let text = count.to_string();
        let label = format_compact_quantity(i64::try_from(count).unwrap_or(i64::MAX));
        self.copy_to_clipboard(text, label);
    }

    fn copy_detail_field(&mut self) {
        let PopupState::ItemDetails { item_id, field } = &self.ui.popup else {
            return;
        };
        let field = *field;
        let Some(item) = self.cart.get(item_id) else {
            return;
        };

        let text = match field {
            DetailField::Name => item.item_name.clone(),
            DetailField::Quantity => item.quantity.to_string(),
            DetailField::AddedTime => item.formatted_created_at.clone(),
            DetailField::Id => item.id.clone(),
        };
        self.copy_to_clipboard(text, field.copy_label().to_string());
    }

    /// Copies `text` on the blocking pool; the outcome arrives later as
    /// [`AppMessage::CopyFinished`].
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn copy_to_clipboard(&self, text: String, label: String) {
        let clipboard = self.clipboard.clone();
        let message_tx = self.message_tx.clone();

        debug!(%label, "Starting clipboard copy");
        tokio::task::spawn_blocking(move || {
            let result = clipboard.set_text(&text);
            let _ = message_tx.send(AppMessage::CopyFinished { label, result });
        });
    }
}
