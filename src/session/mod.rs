//! The session kernel: state, actions, effects, the reducer and the
//! controller that bridges it to the async world.

pub mod action;
pub mod bus;
pub mod controller;
pub mod effect;
pub mod state;
pub mod store;

pub use action::Action;
pub use bus::{session_bus, SessionBusReceiver, SessionBusSender};
pub use controller::SessionController;
pub use effect::Effect;
pub use state::{
    PreviewViewState, RenderOutcome, SessionState, DEFAULT_MARKDOWN, PLACEHOLDER_MESSAGE,
    RENDERING_MESSAGE,
};
pub use store::{DispatchResult, Store};
