//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the shutdown signal
//! and the event broadcaster. Both frontends drive it the same way: feed
//! messages in, render or serialize what comes out.

use tokio::sync::{broadcast, mpsc, watch};
use tracing::info;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::scan::ScanState;
use crate::signals;
use crate::state::{ActiveView, AppState};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StateSnapshot {
    active_view: ActiveView,
    selected_device_id: Option<String>,
    scan_state: ScanState,
    scan_rejections: u64,
    toggle_count: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            active_view: state.active_view,
            selected_device_id: state.selected_device_id.clone(),
            scan_state: state.scanner.state(),
            scan_rejections: state.scanner.rejected_count(),
            toggle_count: state.toggle_count,
        }
    }
}

/// Orchestration engine for NTMapper.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader, timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to cancel pending timers.
    shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    shutdown_rx: watch::Receiver<bool>,

    /// Subscribers receive EngineEvents after each message processing cycle.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine over the seed topology.
    ///
    /// Must be called inside a tokio runtime: spawns the signal handler.
    pub fn new(settings: Settings) -> Self {
        Self::with_state(AppState::with_settings(settings))
    }

    /// Create an Engine around an existing state
    pub fn with_state(state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone());

        info!(
            "Engine ready: {} devices, {} cables, scan delay {:?}",
            state.topology().devices.len(),
            state.topology().cables.len(),
            state.scanner.delay()
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.shutdown_rx);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Cancel pending scan timers and notify subscribers
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        let _ = self.shutdown_tx.send(true);
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.active_view != post.active_view {
            self.emit(EngineEvent::ViewChanged {
                view: post.active_view,
            });
        }

        if let (ScanState::Idle, ScanState::Scanning { scan_id }) = (pre.scan_state, post.scan_state)
        {
            self.emit(EngineEvent::ScanStarted { scan_id });
        }

        if post.scan_rejections > pre.scan_rejections {
            self.emit(EngineEvent::ScanRejected);
        }

        if let (ScanState::Scanning { .. }, ScanState::Idle) = (pre.scan_state, post.scan_state) {
            self.emit(EngineEvent::ScanCompleted {
                device_id: post.selected_device_id.clone(),
            });
        }

        if pre.selected_device_id != post.selected_device_id {
            if let Some(device_id) = &post.selected_device_id {
                self.emit(EngineEvent::DeviceSelected {
                    device_id: device_id.clone(),
                });
            }
        }

        if post.toggle_count > pre.toggle_count {
            if let Some(outcome) = &self.state.last_toggle {
                self.emit(EngineEvent::PortToggled {
                    outcome: outcome.clone(),
                });
            }
        }
    }

    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
