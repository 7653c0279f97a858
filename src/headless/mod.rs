//! Headless mode - JSON event output instead of the TUI
//!
//! Commands arrive on stdin, one per line. Events are written to stdout as
//! NDJSON (newline-delimited JSON), one event per line. Each event has an
//! "event" field indicating its type and a millisecond "timestamp".
//!
//! # Example Output
//!
//! ```json
//! {"event":"scan_started","scan_id":1,"timestamp":1704700001000}
//! {"event":"scan_completed","device_id":"SW001","timestamp":1704700002500}
//! {"event":"port_toggled","outcome":"connected","device_id":"SW001","port_id":"P3","cable_id":"CAB417","fabricated":true,"released":null,"message":"SW001/P3 connected via CAB417 (no free cable, id generated)","timestamp":1704700003000}
//! ```

pub mod command;
pub mod runner;

use chrono::Utc;
use ntmapper_app::{ActiveView, EngineEvent};
use ntmapper_core::{Device, Result, ToggleOutcome, Topology};
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

pub use command::{parse_command, HeadlessCommand};
pub use runner::{headless_event_loop, run_headless, CommandResult};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine started; carries the full initial topology
    Ready {
        view: String,
        topology: Topology,
        timestamp: i64,
    },

    ViewChanged { view: String, timestamp: i64 },

    DeviceSelected {
        device_id: String,
        device: Option<Device>,
        timestamp: i64,
    },

    ScanStarted { scan_id: u64, timestamp: i64 },

    /// A scan was requested while one was running
    ScanRejected { reason: String, timestamp: i64 },

    ScanCompleted {
        device_id: Option<String>,
        timestamp: i64,
    },

    PortToggled {
        /// "connected", "disconnected" or "not_found"
        outcome: String,
        device_id: String,
        port_id: String,
        cable_id: Option<String>,
        fabricated: bool,
        released: Option<String>,
        message: String,
        timestamp: i64,
    },

    /// Reply to `dump`
    Snapshot {
        view: String,
        selected_device: Option<String>,
        scanning: bool,
        topology: Topology,
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// One NDJSON line, without the trailing newline
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(view: ActiveView, topology: &Topology) -> Self {
        Self::Ready {
            view: view.as_str().to_string(),
            topology: topology.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn snapshot(
        view: ActiveView,
        selected_device: Option<&str>,
        scanning: bool,
        topology: &Topology,
    ) -> Self {
        Self::Snapshot {
            view: view.as_str().to_string(),
            selected_device: selected_device.map(str::to_string),
            scanning,
            topology: topology.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn port_toggled(outcome: &ToggleOutcome) -> Self {
        let message = outcome.describe();
        let timestamp = Self::now();
        match outcome {
            ToggleOutcome::Connected {
                device_id,
                port_id,
                cable_id,
                fabricated,
            } => Self::PortToggled {
                outcome: "connected".to_string(),
                device_id: device_id.clone(),
                port_id: port_id.clone(),
                cable_id: Some(cable_id.clone()),
                fabricated: *fabricated,
                released: None,
                message,
                timestamp,
            },
            ToggleOutcome::Disconnected {
                device_id,
                port_id,
                released,
            } => Self::PortToggled {
                outcome: "disconnected".to_string(),
                device_id: device_id.clone(),
                port_id: port_id.clone(),
                cable_id: None,
                fabricated: false,
                released: released.clone(),
                message,
                timestamp,
            },
            ToggleOutcome::NotFound { device_id, port_id } => Self::PortToggled {
                outcome: "not_found".to_string(),
                device_id: device_id.clone(),
                port_id: port_id.clone(),
                cable_id: None,
                fabricated: false,
                released: None,
                message,
                timestamp,
            },
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event. `topology` resolves device details for
    /// selection events. Returns `None` for events with no NDJSON form.
    pub fn from_engine_event(event: &EngineEvent, topology: &Topology) -> Option<Self> {
        let timestamp = Self::now();
        let translated = match event {
            EngineEvent::ViewChanged { view } => Self::ViewChanged {
                view: view.as_str().to_string(),
                timestamp,
            },
            EngineEvent::DeviceSelected { device_id } => Self::DeviceSelected {
                device_id: device_id.clone(),
                device: topology.device(device_id).cloned(),
                timestamp,
            },
            EngineEvent::ScanStarted { scan_id } => Self::ScanStarted {
                scan_id: *scan_id,
                timestamp,
            },
            EngineEvent::ScanRejected => Self::ScanRejected {
                reason: "scan already in progress".to_string(),
                timestamp,
            },
            EngineEvent::ScanCompleted { device_id } => Self::ScanCompleted {
                device_id: device_id.clone(),
                timestamp,
            },
            EngineEvent::PortToggled { outcome } => Self::port_toggled(outcome),
            EngineEvent::Shutdown => return None,
        };
        Some(translated)
    }
}
