/// Side effects requested by the store. The controller executes them; the
/// store itself never touches a timer, a renderer or the OS.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Arm the debounce timer for render generation `job`.
    ScheduleRender { job: u64 },
    /// Run the renderer for generation `job` over `markdown`.
    InvokeRender { job: u64, markdown: String },
    /// Hand the markdown to the export collaborator.
    ExportMarkdown { content: String },
    SetClipboardText(String),
    Notify(String),
    /// An update exceeded the length ceiling and was cut down. Side channel
    /// only; never routed to the user.
    WarnTruncated { dropped: usize },
}
