//! mdpad - debounced markdown editing session
//!
//! Module structure:
//! - session: the kernel (SessionState, Store, SessionController)
//! - services: ports + adapters (renderer, notifier, export, clipboard, executor)
//! - logging: tracing initialization

pub mod logging;
pub mod services;
pub mod session;
