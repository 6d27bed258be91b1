//! Key bindings: translating key events into application commands.
//!
//! Mapping is a pure function of the key and the [`InputContext`], so every
//! binding can be tested without an app or a terminal.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which set of key bindings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the cart list.
    Main,
    /// The add-item form is open.
    AddItem,
    /// The details popup of one item is open.
    ItemDetails,
}

impl InputContext {
    /// Returns `true` if this context represents a popup.
    #[must_use]
    pub const fn is_popup(&self) -> bool {
        !matches!(self, Self::Main)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything a key press can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Close the current popup.
    Dismiss,

    // === Cart List ===
    /// Open the add-item form.
    OpenAddItem,
    /// Move the highlight up.
    MoveUp,
    /// Move the highlight down.
    MoveDown,
    /// Open details for the highlighted item.
    OpenDetails,
    /// Delete the highlighted item.
    DeleteSelected,
    /// Copy the number of items in the cart.
    CopyCartCount,

    // === Add Item Form ===
    /// Type a character into the active field.
    TypeChar(char),
    /// Delete the last character of the active field.
    Backspace,
    /// Switch between the name and quantity fields.
    SwitchField,
    /// Raise the quantity by one.
    IncrementQuantity,
    /// Lower the quantity by one, stopping at zero.
    DecrementQuantity,
    /// Add the item if the form is valid.
    SubmitItem,
    /// Empty the form.
    ClearForm,

    // === Item Details ===
    /// Highlight the previous detail row.
    DetailFieldUp,
    /// Highlight the next detail row.
    DetailFieldDown,
    /// Copy the highlighted detail row's value.
    CopyDetailField,

    /// No action for this key.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// `Ctrl+C` quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::AddItem => Self::map_add_item_keys(key),
            InputContext::ItemDetails => Self::map_item_details_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('a' | '+') => AppCommand::OpenAddItem,
            KeyCode::Char('d') | KeyCode::Delete => AppCommand::DeleteSelected,
            KeyCode::Char('y') => AppCommand::CopyCartCount,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::OpenDetails,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_add_item_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitItem,
            KeyCode::Tab | KeyCode::BackTab => AppCommand::SwitchField,
            KeyCode::Up => AppCommand::IncrementQuantity,
            KeyCode::Down => AppCommand::DecrementQuantity,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppCommand::ClearForm
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppCommand::TypeChar(c)
            }
            _ => AppCommand::Noop,
        }
    }

    fn map_item_details_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => AppCommand::Dismiss,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::DetailFieldUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::DetailFieldDown,
            KeyCode::Enter | KeyCode::Char('c') => AppCommand::CopyDetailField,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
