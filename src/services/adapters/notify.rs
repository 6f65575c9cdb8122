//! Notifier adapters.

use crate::services::ports::Notifier;

/// Prints notifications straight to stdout. Used by the line-oriented driver.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("* {}", message);
    }
}

/// Routes notifications into the tracing log instead of the terminal.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(message, "notify");
    }
}
