//! Markdown renderer adapter backed by pulldown-cmark.

use crate::services::ports::render::{MarkdownRenderer, Result};
use pulldown_cmark::{html, Options, Parser};

/// CommonMark renderer with the extensions the editor advertises.
pub struct PulldownRenderer {
    options: Options,
}

impl PulldownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options }
    }
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        Ok(out)
    }
}
