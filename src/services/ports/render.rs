pub type Result<T> = std::result::Result<T, RenderError>;

/// Markdown rendering failed. Carries a human-readable message only; the
/// session surfaces it as a `Failed` outcome and nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RenderError {}

/// Converts markdown text to an HTML fragment.
///
/// Pluggable: the session core assumes nothing about the dialect or the
/// implementation. Implementations must be callable from executor tasks.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> Result<String>;
}
