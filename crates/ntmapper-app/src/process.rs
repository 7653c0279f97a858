//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! hands any resulting actions to the action dispatcher.

use tokio::sync::{mpsc, watch};

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    shutdown_rx: &watch::Receiver<bool>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), shutdown_rx.clone());
        }

        msg = result.message;
    }
}
