//! UI presentation state: list selection, popups, the add-item form and
//! toast notifications.
//!
//! Nothing here touches the cart. The form only collects and validates
//! input; [`App`](super::App) decides when to hand it to the store.

use crate::constants::DEFAULT_TOAST_TICKS;

// ============================================================================
// Toasts
// ============================================================================

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation of a completed action.
    Success,
    /// Something the user asked for did not happen.
    Warning,
}

/// A transient, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Remaining ticks before the toast disappears.
    pub ticks: u8,
}

// ============================================================================
// Add Item Form
// ============================================================================

/// Fields of the add-item form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Quantity,
}

impl FormField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::Name,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Quantity => "Amount",
        }
    }
}

/// Input collected by the add-item popup.
///
/// The quantity only ever holds a non-negative whole number: typing accepts
/// digits, and stepping down stops at zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddItemForm {
    pub name: String,
    pub quantity: i64,
    pub active_field: FormField,
}

impl AddItemForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves focus to the other field.
    pub fn toggle_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    /// Applies a typed character to the active field.
    ///
    /// In the quantity field digits are appended, `+` and `-` step the
    /// value, and anything else is ignored.
    pub fn push_char(&mut self, c: char) {
        match self.active_field {
            FormField::Name => self.name.push(c),
            FormField::Quantity => match c {
                '+' => self.increment(),
                '-' => self.decrement(),
                _ => {
                    if let Some(digit) = c.to_digit(10)
                        && let Some(next) = self
                            .quantity
                            .checked_mul(10)
                            .and_then(|q| q.checked_add(i64::from(digit)))
                    {
                        self.quantity = next;
                    }
                }
            },
        }
    }

    /// Deletes the last character of the active field.
    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Quantity => self.quantity /= 10,
        }
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.quantity = if self.quantity <= 1 {
            0
        } else {
            self.quantity - 1
        };
    }

    /// Returns `true` when the form may be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.quantity != 0
    }

    /// Returns `true` when anything has been entered.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.name.is_empty() || self.quantity != 0
    }

    /// Empties both fields and focuses the name field.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Quantity as shown in its input box; zero shows as empty.
    #[must_use]
    pub fn quantity_input(&self) -> String {
        if self.quantity == 0 {
            String::new()
        } else {
            self.quantity.to_string()
        }
    }
}

// ============================================================================
// Item Details
// ============================================================================

/// Copyable rows of the item details popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailField {
    #[default]
    Name,
    Quantity,
    AddedTime,
    Id,
}

impl DetailField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Quantity, Self::AddedTime, Self::Id];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::AddedTime,
            Self::AddedTime => Self::Id,
            Self::Id => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Id,
            Self::Quantity => Self::Name,
            Self::AddedTime => Self::Quantity,
            Self::Id => Self::AddedTime,
        }
    }

    /// Row heading in the popup.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Name => "Name:",
            Self::Quantity => "Quantity:",
            Self::AddedTime => "Added Time:",
            Self::Id => "ID:",
        }
    }

    /// Short name used in the "Copied ..." toast.
    #[must_use]
    pub const fn copy_label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Quantity => "Quantity",
            Self::AddedTime => "Time",
            Self::Id => "ID",
        }
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// The modal currently covering the cart list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    AddItem(AddItemForm),
    ItemDetails {
        item_id: String,
        field: DetailField,
    },
}


// ============================================================================
// UI State
// ============================================================================

/// Presentation state owned by the app.
#[derive(Debug)]
pub struct UiState {
    pub popup: PopupState,
    /// Index of the highlighted cart row.
    pub selected: Option<usize>,
    pub toast: Option<Toast>,
    /// Lifetime given to new toasts.
    pub toast_ticks: u8,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TICKS)
    }
}

impl UiState {
    #[must_use]
    pub fn new(toast_ticks: u8) -> Self {
        Self {
            popup: PopupState::None,
            selected: None,
            toast: None,
            toast_ticks: toast_ticks.max(1),
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Moves the highlight down, stopping at the last row.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves the highlight up, stopping at the first row.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Keeps the highlight on a valid row after the list changed length.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show_toast(ToastKind::Success, message);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.show_toast(ToastKind::Warning, message);
    }

    fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            kind,
            message: message.into(),
            ticks: self.toast_ticks,
        });
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        let Some(toast) = self.toast.as_mut() else {
            return false;
        };

        if toast.ticks > 1 {
            toast.ticks -= 1;
            false
        } else {
            self.toast = None;
            true
        }
    }

    #[cfg(test)]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|toast| toast.message.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form_with(name: &str, quantity: i64) -> AddItemForm {
        AddItemForm {
            name: name.to_string(),
            quantity,
            active_field: FormField::Name,
        }
    }

    #[test]
    fn test_form_typing_targets_active_field() {
        let mut form = AddItemForm::new();
        for c in "milk".chars() {
            form.push_char(c);
        }
        form.toggle_field();
        for c in "12".chars() {
            form.push_char(c);
        }

        assert_eq!(form.name, "milk");
        assert_eq!(form.quantity, 12);
        assert_eq!(form.active_field, FormField::Quantity);
    }

    #[test]
    fn test_quantity_field_ignores_non_digits() {
        let mut form = AddItemForm::new();
        form.toggle_field();
        for c in "4a.x2".chars() {
            form.push_char(c);
        }
        assert_eq!(form.quantity, 42);
    }

    #[test]
    fn test_quantity_field_rejects_overflowing_digits() {
        let mut form = AddItemForm::new();
        form.toggle_field();
        form.quantity = i64::MAX / 10 + 1;
        form.push_char('9');
        assert_eq!(form.quantity, i64::MAX / 10 + 1);
    }

    #[test]
    fn test_quantity_steps() {
        let mut form = AddItemForm::new();
        form.toggle_field();

        form.push_char('+');
        form.increment();
        assert_eq!(form.quantity, 2);

        form.push_char('-');
        form.decrement();
        form.decrement();
        assert_eq!(form.quantity, 0, "never steps below zero");
    }

    #[test]
    fn test_backspace() {
        let mut form = form_with("tea", 123);
        form.backspace();
        assert_eq!(form.name, "te");

        form.toggle_field();
        form.backspace();
        assert_eq!(form.quantity, 12);
        form.backspace();
        form.backspace();
        form.backspace();
        assert_eq!(form.quantity, 0);
    }

    #[rstest]
    #[case::complete("milk", 2, true)]
    #[case::no_name("", 2, false)]
    #[case::blank_name("   ", 2, false)]
    #[case::no_quantity("milk", 0, false)]
    fn test_form_validity(#[case] name: &str, #[case] quantity: i64, #[case] valid: bool) {
        assert_eq!(form_with(name, quantity).is_valid(), valid);
    }

    #[rstest]
    #[case::empty("", 0, false)]
    #[case::name_only("m", 0, true)]
    #[case::quantity_only("", 3, true)]
    fn test_form_dirtiness(#[case] name: &str, #[case] quantity: i64, #[case] dirty: bool) {
        assert_eq!(form_with(name, quantity).is_dirty(), dirty);
    }

    #[test]
    fn test_form_reset() {
        let mut form = form_with("milk", 5);
        form.toggle_field();
        form.reset();
        assert_eq!(form, AddItemForm::new());
        assert_eq!(form.quantity_input(), "");
    }

    #[test]
    fn test_detail_field_cycles() {
        let mut field = DetailField::Name;
        for expected in DetailField::ALL.iter().cycle().skip(1).take(4) {
            field = field.next();
            assert_eq!(field, *expected);
        }
        assert_eq!(DetailField::Name.prev(), DetailField::Id);
        assert_eq!(DetailField::Id.prev(), DetailField::AddedTime);
    }

    #[test]
    fn test_selection_bounds() {
        let mut ui = UiState::default();

        ui.select_next(0);
        assert_eq!(ui.selected, None);

        ui.select_next(3);
        assert_eq!(ui.selected, Some(0));
        ui.select_next(3);
        ui.select_next(3);
        ui.select_next(3);
        assert_eq!(ui.selected, Some(2));

        ui.select_previous(3);
        ui.select_previous(3);
        ui.select_previous(3);
        assert_eq!(ui.selected, Some(0));
    }

    #[test]
    fn test_clamp_selection() {
        let mut ui = UiState::default();
        ui.clamp_selection(2);
        assert_eq!(ui.selected, Some(0));

        ui.selected = Some(5);
        ui.clamp_selection(2);
        assert_eq!(ui.selected, Some(1));

        ui.clamp_selection(0);
        assert_eq!(ui.selected, None);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiState::new(2);
        assert!(ui.toast_message().is_none());

        ui.show_success("Added Milk");
        assert_eq!(ui.toast_message(), Some("Added Milk"));
        assert_eq!(ui.toast.as_ref().map(|t| t.kind), Some(ToastKind::Success));

        assert!(!ui.tick_toast());
        assert!(ui.tick_toast());
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_warning_replaces_success() {
        let mut ui = UiState::default();
        ui.show_success("Copied Name");
        ui.show_warning("Error: cannot copy!");

        let toast = ui.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Warning);
        assert_eq!(toast.ticks, DEFAULT_TOAST_TICKS);
    }

    #[test]
    fn test_zero_toast_ticks_still_shows_once() {
        let ui = UiState::new(0);
        assert_eq!(ui.toast_ticks, 1);
    }
}
