use crate::services::ports::render::RenderError;

/// Everything that can happen to a session, user-initiated or posted back by
/// async tasks over the bus.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the markdown text. Validates length, resets the outcome and
    /// supersedes any scheduled or in-flight render.
    SetText(String),
    /// Empty the buffer and return the outcome to `Idle` immediately.
    Clear,
    /// Content arrived from a user-selected file. Same pipeline as `SetText`.
    LoadFromFile(String),
    /// Export the current markdown, or tell the user there is nothing to save.
    Save,
    /// Copy the rendered HTML, or tell the user there is nothing to copy.
    CopyHtml,
    /// The debounce timer for render generation `job` elapsed.
    DebounceElapsed { job: u64 },
    /// Render generation `job` finished.
    RenderFinished {
        job: u64,
        result: Result<String, RenderError>,
    },
}
