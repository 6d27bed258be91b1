//! Message processing for the Picart application.

use tracing::warn;

use super::{App, AppMessage};

impl App {
    /// Handles every message queued by background work.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CopyFinished {
                label,
                result: Ok(()),
            } => {
                self.ui.show_success(format!("Copied {label}"));
            }
            AppMessage::CopyFinished {
                label,
                result: Err(err),
            } => {
                warn!(%label, "Clipboard copy failed: {err}");
                self.ui.show_warning("Error: cannot copy!");
            }
        }
    }
}
