//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use ntmapper_core::ToggleOutcome;

use crate::state::ActiveView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The visible view changed
    ViewChanged { view: ActiveView },

    /// The selection changed
    DeviceSelected { device_id: String },

    /// A simulated scan began
    ScanStarted { scan_id: u64 },

    /// A scan was requested while another was running
    ScanRejected,

    /// The running scan finished; `device_id` is the resulting selection
    ScanCompleted { device_id: Option<String> },

    /// A toggle request was handled (including unknown ids)
    PortToggled { outcome: ToggleOutcome },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short label for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::ViewChanged { .. } => "view_changed",
            EngineEvent::DeviceSelected { .. } => "device_selected",
            EngineEvent::ScanStarted { .. } => "scan_started",
            EngineEvent::ScanRejected => "scan_rejected",
            EngineEvent::ScanCompleted { .. } => "scan_completed",
            EngineEvent::PortToggled { .. } => "port_toggled",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
