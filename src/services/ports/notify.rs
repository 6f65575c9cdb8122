/// Delivers a short message to the user. Best effort, no failure contract;
/// where the message lands (toast, status line, console) is the adapter's
/// business.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
