//! Application state for the Picart TUI.
//!
//! The [`App`] couples the domain cart with presentation state:
//!
//! - [`CartStore`] - the items and their durable mirror
//! - [`UiState`] - selection, popups, the add-item form and toasts
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │                    App                    │
//! ├─────────────────────┬─────────────────────┤
//! │      CartStore      │       UiState       │
//! │  - items            │  - selection        │
//! │  - storage          │  - popups / form    │
//! │                     │  - toasts           │
//! └─────────────────────┴─────────────────────┘
//! ```
//!
//! Clipboard copies run on tokio's blocking pool and report back through
//! [`AppMessage`]s drained once per loop iteration.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::cart::CartStore;
use crate::platform::{ClipboardProvider, ClipboardResult};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use ui_state::{
    AddItemForm, DetailField, FormField, PopupState, Toast, ToastKind, UiState,
};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background work to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A clipboard copy finished. `label` names what was copied.
    CopyFinished {
        label: String,
        result: ClipboardResult<()>,
    },
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
pub struct App {
    /// The shopping cart.
    pub cart: CartStore,

    /// Selection, popups and toasts.
    pub ui: UiState,

    /// Whether the application should exit.
    pub exit: bool,

    /// Clipboard used for copy actions.
    pub(crate) clipboard: Arc<dyn ClipboardProvider>,

    // Sends use `let _ = tx.send(...)`: the receiver only goes away at
    // shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cart", &self.cart)
            .field("ui", &self.ui)
            .field("exit", &self.exit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Index of the highlighted row, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.ui.selected.filter(|&i| i < self.cart.count())
    }

    /// The highlighted cart item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&crate::cart::CartItem> {
        self.selected_index().and_then(|i| self.cart.items().get(i))
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling, clipboard actions
mod app_commands;

// ============================================================================
// Tests
// ============================================================================
