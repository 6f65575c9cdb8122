use crate::services::ports::SessionConfig;

use super::state::{truncate_chars, RenderOutcome, SessionState};
use super::{Action, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

/// The single synchronous reducer for a session.
///
/// All mutation is serialized through `dispatch`; async tasks only post
/// actions back via the bus. `job` is the current render generation: every
/// text mutation advances it, and timer/render completions stamped with an
/// older generation are dead on arrival. That guard is what keeps a stale
/// render from ever overwriting a newer outcome.
pub struct Store {
    state: SessionState,
    config: SessionConfig,
    job: u64,
}

impl Store {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: SessionState::new(),
            config,
            job: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current render generation. Only the task stamped with this value
    /// may advance the outcome.
    pub fn current_job(&self) -> u64 {
        self.job
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetText(text) | Action::LoadFromFile(text) => self.apply_set_text(text),
            Action::Clear => {
                let state_changed =
                    !self.state.text.is_empty() || self.state.outcome != RenderOutcome::Idle;

                // Supersede any armed timer or in-flight render; their
                // messages will arrive stamped with a dead generation.
                self.job += 1;
                self.state.text.clear();
                self.state.outcome = RenderOutcome::Idle;

                DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
            Action::Save => {
                let effects = if self.state.save_enabled() {
                    vec![Effect::ExportMarkdown {
                        content: self.state.text.clone(),
                    }]
                } else {
                    vec![Effect::Notify("No markdown content to save.".to_string())]
                };
                DispatchResult {
                    effects,
                    state_changed: false,
                }
            }
            Action::CopyHtml => {
                let effects = match &self.state.outcome {
                    RenderOutcome::Succeeded(html) => vec![
                        Effect::SetClipboardText(html.clone()),
                        Effect::Notify("HTML copied to clipboard".to_string()),
                    ],
                    _ => vec![Effect::Notify("No rendered HTML to copy.".to_string())],
                };
                DispatchResult {
                    effects,
                    state_changed: false,
                }
            }
            Action::DebounceElapsed { job } => {
                if job != self.job {
                    tracing::trace!(job, current = self.job, "stale debounce timer dropped");
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                if self.state.text.trim().is_empty() {
                    // Blank text: never invoke the renderer.
                    let state_changed = self.state.outcome != RenderOutcome::Idle;
                    self.state.outcome = RenderOutcome::Idle;
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed,
                    };
                }

                self.state.outcome = RenderOutcome::Rendering;
                DispatchResult {
                    effects: vec![Effect::InvokeRender {
                        job,
                        markdown: self.state.text.clone(),
                    }],
                    state_changed: true,
                }
            }
            Action::RenderFinished { job, result } => {
                if job != self.job {
                    tracing::debug!(job, current = self.job, "stale render result discarded");
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                self.state.outcome = match result {
                    Ok(html) => RenderOutcome::Succeeded(html),
                    Err(e) => {
                        tracing::warn!(error = %e, "render failed");
                        RenderOutcome::Failed(e.message)
                    }
                };
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
        }
    }

    fn apply_set_text(&mut self, mut text: String) -> DispatchResult {
        let mut effects = Vec::new();

        let dropped = truncate_chars(&mut text, self.config.max_len);
        if dropped > 0 {
            effects.push(Effect::WarnTruncated { dropped });
        }

        let state_changed =
            self.state.text != text || self.state.outcome != RenderOutcome::Pending;
        self.state.text = text;
        self.state.outcome = RenderOutcome::Pending;

        self.job += 1;
        effects.push(Effect::ScheduleRender { job: self.job });

        DispatchResult {
            effects,
            state_changed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/store.rs"]
mod tests;
