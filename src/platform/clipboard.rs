//! Cross-platform clipboard access.
//!
//! On Linux the manager tries, in order, `wl-copy` (Wayland), `xclip` and
//! `xsel` (X11), then falls back to the `arboard` crate. External tools are
//! preferred because they keep the clipboard content alive after the
//! process exits. macOS and Windows use `arboard` directly.
//!
//! Every copy is a single attempt. Failures are reported to the caller so
//! it can show the right notification; nothing is retried.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard could be reached on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// The clipboard was reached but refused the text.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Provider Trait
// ============================================================================

/// Something that can place text on a clipboard.
///
/// Implementations are called from a blocking worker thread.
pub trait ClipboardProvider: Send + Sync {
    /// Copies `text`, replacing the current clipboard content.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or rejects the text.
    fn set_text(&self, text: &str) -> ClipboardResult<()>;
}

// ============================================================================
// Clipboard Manager
// ============================================================================

/// System clipboard used by the application.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardManager {
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// Creates a manager that prefers external tools on Linux.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::NotAvailable`] when no clipboard can be
    /// opened and [`ClipboardError::CopyFailed`] when it rejects the text.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text) {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|err| {
            tracing::debug!("arboard clipboard unavailable: {err}");
            ClipboardError::NotAvailable
        })?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        let copied = child.wait().map(|s| s.success()).unwrap_or(false);
        tracing::debug!(tool, copied, "external clipboard tool");
        copied
    }
}

impl ClipboardProvider for ClipboardManager {
    fn set_text(&self, text: &str) -> ClipboardResult<()> {
        self.copy_text(text)
    }
}

// ============================================================================
// Tests
// ============================================================================
