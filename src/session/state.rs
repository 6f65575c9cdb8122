/// Placeholder shown while there is nothing to preview.
pub const PLACEHOLDER_MESSAGE: &str = "Start typing to see a preview";

/// Welcome document seeded into a fresh editor at startup.
pub const DEFAULT_MARKDOWN: &str = r#"# Hello, Markdown!

Welcome to **mdpad**.

## Features

- Live debounced preview
- Load and save `.md` files
- Copy the rendered HTML

## Example

Write some `code` inline, or a code block:

```
fn hello() -> &'static str { "Hello, World!" }
```

> Quotes work too!
"#;

/// Shown while a render attempt is running.
pub const RENDERING_MESSAGE: &str = "Rendering...";

/// Latest render outcome for the current text. Exactly one value is current
/// at any time; only `Store::dispatch` writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Idle,
    Pending,
    Rendering,
    Succeeded(String),
    Failed(String),
}

/// What the preview pane should show. Never stored: always recomputed from
/// `(text, outcome)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewViewState {
    Message(&'static str),
    Rendered(String),
    Error(String),
}

/// One editing session: the markdown text plus the latest render outcome.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub text: String,
    pub outcome: RenderOutcome,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            outcome: RenderOutcome::Idle,
        }
    }

    /// Fixed precedence: Rendering > Failed > Succeeded > placeholder.
    pub fn preview(&self) -> PreviewViewState {
        match &self.outcome {
            RenderOutcome::Rendering => PreviewViewState::Message(RENDERING_MESSAGE),
            RenderOutcome::Failed(message) => PreviewViewState::Error(message.clone()),
            RenderOutcome::Succeeded(html) => PreviewViewState::Rendered(html.clone()),
            RenderOutcome::Idle | RenderOutcome::Pending => {
                PreviewViewState::Message(PLACEHOLDER_MESSAGE)
            }
        }
    }

    pub fn save_enabled(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn copy_enabled(&self) -> bool {
        matches!(self.outcome, RenderOutcome::Succeeded(_))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncates `text` to its first `max` characters in place. Returns the
/// number of characters dropped.
pub(crate) fn truncate_chars(text: &mut String, max: usize) -> usize {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => {
            let dropped = text[byte_idx..].chars().count();
            text.truncate(byte_idx);
            dropped
        }
        None => 0,
    }
}
