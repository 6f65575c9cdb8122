use std::time::Duration;

/// Tunable limits for one editing session.
///
/// Both knobs are overridable so tests can run with a tiny length bound or a
/// near-zero debounce interval.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Content length ceiling, in characters. Longer updates are truncated.
    pub max_len: usize,
    /// Quiet interval after the last edit before a render attempt starts.
    pub debounce_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_len: 100_000,
            debounce_ms: 300,
        }
    }
}

impl SessionConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
