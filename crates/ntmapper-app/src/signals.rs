//! Quit on SIGINT/SIGTERM (Ctrl+C on Windows)

use std::fmt;

use ntmapper_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Which OS signal ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Listen for a shutdown signal and feed `Message::Quit` into the engine.
///
/// The task ends after the first signal; the engine owns cleanup, including
/// abandoning any scan timer still running.
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match next_shutdown_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Signal handler unavailable: {}", e);
                return;
            }
        };

        info!("{} received, quitting", signal);
        if msg_tx.send(Message::Quit).await.is_err() {
            debug!("Engine already gone when {} arrived", signal);
        }
    });
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    let received = tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    };
    Ok(received)
}

#[cfg(windows)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
