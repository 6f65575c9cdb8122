//! Tokio-backed executor adapter.

use crate::services::ports::{AsyncExecutor, BoxFuture};

/// Owns the tokio runtime for the process and exposes it through the
/// `AsyncExecutor` port.
pub struct TokioExecutor {
    runtime: tokio::runtime::Runtime,
}

impl TokioExecutor {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }

    pub fn handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }
}

impl AsyncExecutor for TokioExecutor {
    fn spawn(&self, task: BoxFuture) {
        self.runtime.spawn(task);
    }
}

/// Executor borrowing an already-running runtime, e.g. inside tests.
pub struct HandleExecutor {
    handle: tokio::runtime::Handle,
}

impl HandleExecutor {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }
}

impl AsyncExecutor for HandleExecutor {
    fn spawn(&self, task: BoxFuture) {
        self.handle.spawn(task);
    }
}
