//! OS/runtime specific implementations of the service ports.

pub mod clipboard;
pub mod file;
pub mod notify;
pub mod render;
pub mod runtime;

pub use clipboard::ClipboardService;
pub use file::DownloadExporter;
pub use notify::{ConsoleNotifier, LogNotifier};
pub use render::PulldownRenderer;
pub use runtime::{HandleExecutor, TokioExecutor};
