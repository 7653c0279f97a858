//! Action handlers: UpdateAction dispatch and background task spawning

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    shutdown_rx: watch::Receiver<bool>,
) {
    match action {
        UpdateAction::ScheduleScanCompletion { scan_id, delay } => {
            tokio::spawn(async move {
                complete_scan_after(scan_id, delay, msg_tx, shutdown_rx).await;
            });
        }
    }
}

/// Sleep for `delay` and report the scan as completed, unless shutdown wins
async fn complete_scan_after(
    scan_id: u64,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::select! {
        biased;
        _ = shutdown_rx.changed() => {
            debug!("Scan {} abandoned on shutdown", scan_id);
        }
        _ = tokio::time::sleep(delay) => {
            if msg_tx.send(Message::ScanCompleted { scan_id }).await.is_err() {
                warn!("Message channel closed before scan {} completed", scan_id);
            }
        }
    }
}
