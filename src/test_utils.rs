//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting setup code across tests.

use std::sync::{Arc, Mutex};

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::cart::{CART_STORAGE_KEY, CartItem, CartStore};
use crate::platform::{ClipboardError, ClipboardProvider, ClipboardResult};
use crate::state::App;
use crate::storage::MemoryStorage;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// 16 October 2025, 15:04:05 UTC.
pub const FIXED_EPOCH_MS: i64 = 1_760_627_045_000;

pub struct CartItemMother;

impl CartItemMother {
    #[must_use]
    pub fn bread() -> CartItem {
        CartItem::new("0123456789abcdef", "bread", 2, FIXED_EPOCH_MS)
    }

    #[must_use]
    pub fn milk() -> CartItem {
        CartItem::new("fedcba9876543210", "milk", 5, FIXED_EPOCH_MS)
    }

    #[must_use]
    pub fn with_quantity(id: &str, name: &str, quantity: i64) -> CartItem {
        CartItem::new(id, name, quantity, FIXED_EPOCH_MS)
    }
}

/// Builds a cart whose storage already holds `items`.
#[must_use]
pub fn cart_with(items: &[CartItem]) -> CartStore {
    let raw = serde_json::to_string(items).expect("items should serialize");
    let storage = MemoryStorage::with_entry(CART_STORAGE_KEY, &raw);
    CartStore::initialize(Box::new(storage))
}

// ============================================================================
// Clipboard
// ============================================================================

/// Clipboard that records copied text, or refuses everything.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeClipboard {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().expect("clipboard lock").clone()
    }
}

impl ClipboardProvider for FakeClipboard {
    fn set_text(&self, text: &str) -> ClipboardResult<()> {
        if self.fail {
            return Err(ClipboardError::NotAvailable);
        }
        self.copied
            .lock()
            .expect("clipboard lock")
            .push(text.to_string());
        Ok(())
    }
}

// ============================================================================
// App and Terminal Fixtures
// ============================================================================

/// App over `cart` with a recording clipboard and a three-tick toast.
#[must_use]
pub fn app_with(cart: CartStore, clipboard: Arc<FakeClipboard>) -> App {
    App::new(cart, clipboard, 3)
}

#[fixture]
pub fn mock_app() -> App {
    app_with(
        CartStore::initialize(Box::new(MemoryStorage::new())),
        Arc::new(FakeClipboard::default()),
    )
}

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(60, 20)).expect("terminal creation should succeed")
}

/// Renders a buffer as newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            result.push_str(buffer[(area.x + x, area.y + y)].symbol());
        }
        if y + 1 < area.height {
            result.push('\n');
        }
    }
    result
}
