//! Service ports: traits + data contracts.

pub mod config;
pub mod export;
pub mod notify;
pub mod render;

pub use config::SessionConfig;
pub use export::{Clipboard, ClipboardError, FileExporter, EXPORT_FILENAME, EXPORT_MIME};
pub use notify::Notifier;
pub use render::{MarkdownRenderer, RenderError};

use std::future::Future;
use std::pin::Pin;

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

pub trait AsyncExecutor: Send + Sync {
    fn spawn(&self, task: BoxFuture);
}
