//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Cross-platform clipboard access
//! - [`paths`] - Configuration, data and log locations

pub mod clipboard;
pub mod paths;

pub use clipboard::{ClipboardError, ClipboardManager, ClipboardProvider, ClipboardResult};
pub use paths::AppPaths;
