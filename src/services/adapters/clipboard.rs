//! System clipboard adapter.
//!
//! Wraps arboard. The clipboard is optional at runtime: headless sessions
//! keep working, copy just reports failure upward.

use crate::services::ports::export::{Clipboard, ClipboardError};

pub struct ClipboardService {
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        let clipboard = arboard::Clipboard::new().ok();
        Self { clipboard }
    }

    pub fn is_available(&self) -> bool {
        self.clipboard.is_some()
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for ClipboardService {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or(ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::SetFailed(e.to_string()))
    }
}
