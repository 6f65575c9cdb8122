/// Fixed save convention for exported markdown.
pub const EXPORT_FILENAME: &str = "document.md";
pub const EXPORT_MIME: &str = "text/markdown";

/// Hands content to the user as a named download/file. Fire and forget:
/// I/O failures are owned by the adapter (logged, not propagated).
pub trait FileExporter: Send + Sync {
    fn export(&self, content: &str, mime: &str, filename: &str);
}

/// System clipboard write access. `set_text` is fallible because a clipboard
/// may simply not exist (headless sessions). Stays on the owner thread.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug)]
pub enum ClipboardError {
    NotAvailable,
    SetFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "clipboard not available"),
            ClipboardError::SetFailed(e) => write!(f, "clipboard write failed: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}
