use std::path::PathBuf;
use std::sync::Arc;

use crate::services::ports::{
    AsyncExecutor, Clipboard, FileExporter, MarkdownRenderer, Notifier, SessionConfig,
    EXPORT_FILENAME, EXPORT_MIME,
};

use super::bus::{session_bus, SessionBusReceiver, SessionBusSender};
use super::state::{PreviewViewState, SessionState};
use super::store::Store;
use super::{Action, Effect};

/// Owns the store and the capability ports, and bridges between the
/// synchronous reducer and the async world.
///
/// The controller is the session's single logical owner: user-facing entry
/// points dispatch directly, async tasks (debounce timers, render jobs, file
/// reads) post actions on the bus, and `pump` folds those back in on the
/// owner thread. Every entry point reports whether observable state changed
/// so the view layer knows when to re-read.
pub struct SessionController {
    store: Store,
    bus: SessionBusSender,
    rx: SessionBusReceiver,
    executor: Arc<dyn AsyncExecutor>,
    renderer: Arc<dyn MarkdownRenderer>,
    notifier: Arc<dyn Notifier>,
    exporter: Arc<dyn FileExporter>,
    clipboard: Box<dyn Clipboard>,
}

impl SessionController {
    pub fn new(
        config: SessionConfig,
        executor: Arc<dyn AsyncExecutor>,
        renderer: Arc<dyn MarkdownRenderer>,
        notifier: Arc<dyn Notifier>,
        exporter: Arc<dyn FileExporter>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let (bus, rx) = session_bus();
        Self {
            store: Store::new(config),
            bus,
            rx,
            executor,
            renderer,
            notifier,
            exporter,
            clipboard,
        }
    }

    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    pub fn preview(&self) -> PreviewViewState {
        self.store.state().preview()
    }

    pub fn save_enabled(&self) -> bool {
        self.store.state().save_enabled()
    }

    pub fn copy_enabled(&self) -> bool {
        self.store.state().copy_enabled()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.dispatch(Action::SetText(text.into()))
    }

    pub fn clear(&mut self) -> bool {
        self.dispatch(Action::Clear)
    }

    pub fn save(&mut self) -> bool {
        self.dispatch(Action::Save)
    }

    pub fn copy_html(&mut self) -> bool {
        self.dispatch(Action::CopyHtml)
    }

    /// Content already read from a user-selected file. Same pipeline as
    /// `set_text`, no bypass.
    pub fn load_from_file(&mut self, content: impl Into<String>) -> bool {
        self.dispatch(Action::LoadFromFile(content.into()))
    }

    /// Reads a markdown file off the owner thread. Success flows into the
    /// session over the bus; failure only reaches the Notifier.
    pub fn load_markdown_file(&self, path: PathBuf) {
        let tx = self.bus.clone();
        let notifier = Arc::clone(&self.notifier);
        self.executor.spawn(Box::pin(async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => {
                    let _ = tx.send_action(Action::LoadFromFile(content));
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "file load failed");
                    notifier.notify(&format!("Could not read {}", path.display()));
                }
            }
        }));
    }

    /// Drains actions posted by async tasks and dispatches them in arrival
    /// order. Returns whether any of them changed observable state.
    pub fn pump(&mut self) -> bool {
        let mut state_changed = false;
        while let Ok(action) = self.rx.try_recv() {
            state_changed |= self.dispatch(action);
        }
        state_changed
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleRender { job } => {
                let tx = self.bus.clone();
                let delay = self.store.config().debounce();
                self.executor.spawn(Box::pin(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send_action(Action::DebounceElapsed { job });
                }));
            }
            Effect::InvokeRender { job, markdown } => {
                let tx = self.bus.clone();
                let renderer = Arc::clone(&self.renderer);
                self.executor.spawn(Box::pin(async move {
                    let result = renderer.render(&markdown);
                    let _ = tx.send_action(Action::RenderFinished { job, result });
                }));
            }
            Effect::ExportMarkdown { content } => {
                self.exporter.export(&content, EXPORT_MIME, EXPORT_FILENAME);
            }
            Effect::SetClipboardText(text) => {
                if let Err(e) = self.clipboard.set_text(&text) {
                    tracing::warn!(error = %e, "clipboard write failed");
                }
            }
            Effect::Notify(message) => {
                self.notifier.notify(&message);
            }
            Effect::WarnTruncated { dropped } => {
                // Deliberately a log line, not a user-facing alert.
                tracing::warn!(
                    dropped,
                    max_len = self.store.config().max_len,
                    "text exceeded length ceiling and was truncated"
                );
            }
        }
    }
}
