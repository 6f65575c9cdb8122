use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::Action;

/// Clonable sending half handed to async tasks (timers, render jobs, file
/// reads). Everything they produce funnels back to the owner thread as
/// plain actions, in send order.
#[derive(Clone)]
pub struct SessionBusSender {
    tx: Sender<Action>,
}

pub struct SessionBusReceiver {
    rx: Receiver<Action>,
}

pub fn session_bus() -> (SessionBusSender, SessionBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (SessionBusSender { tx }, SessionBusReceiver { rx })
}

impl SessionBusSender {
    pub fn send_action(&self, action: Action) -> Result<(), mpsc::SendError<Action>> {
        self.tx.send(action)
    }
}

impl SessionBusReceiver {
    pub fn try_recv(&mut self) -> Result<Action, TryRecvError> {
        self.rx.try_recv()
    }
}
