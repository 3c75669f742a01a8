//! Clipboard export

use crate::platform::DisplayServer;

/// Where exported text ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    /// No clipboard; the caller should print the text
    Unavailable,
}

/// Copy text to the system clipboard if one is reachable
pub fn copy_text(text: &str) -> CopyOutcome {
    let display_server = DisplayServer::detect();
    if !display_server.has_clipboard() {
        tracing::debug!("No display server, skipping clipboard");
        return CopyOutcome::Unavailable;
    }

    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match result {
        Ok(()) => {
            tracing::info!(bytes = text.len(), "Copied to clipboard");
            CopyOutcome::Clipboard
        }
        Err(e) => {
            tracing::warn!(error = %e, display_server = %display_server, "Clipboard unavailable");
            CopyOutcome::Unavailable
        }
    }
}
