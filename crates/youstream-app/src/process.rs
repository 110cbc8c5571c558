//! Message processing
//!
//! Runs a message through the TEA update function, follows up on any chained
//! messages, and hands every resulting action to the action dispatcher.

use tokio::sync::{mpsc, watch};
use youstream_api::Backend;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::timers::TimerRegistry;

/// Process a message through the TEA update function
pub fn process_message<B: Backend>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &B,
    timers: &mut TimerRegistry,
    shutdown_rx: &watch::Receiver<bool>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        for action in result.actions {
            handle_action(action, msg_tx, backend, timers, shutdown_rx);
        }

        msg = result.message;
    }
}
