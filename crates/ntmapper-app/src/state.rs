//! Application state (Model in TEA pattern)

use std::str::FromStr;

use ntmapper_core::{Device, Port, ToggleOutcome, Topology, TopologyStore};

use crate::config::Settings;
use crate::register_form::RegisterForm;
use crate::scan::ScanSimulator;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The three mutually exclusive top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Camera panel plus details of the selected device
    #[default]
    Scan,
    /// Register-new-device form
    Collect,
    /// Device list for bulk port status updates
    Update,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::Scan, ActiveView::Collect, ActiveView::Update];

    /// Stable tag used in headless events and commands
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Scan => "scan",
            ActiveView::Collect => "collect",
            ActiveView::Update => "update",
        }
    }

    /// Tab caption
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Scan => "Scan",
            ActiveView::Collect => "Register",
            ActiveView::Update => "Update",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ActiveView::Scan => 0,
            ActiveView::Collect => 1,
            ActiveView::Update => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ActiveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scan" => Ok(ActiveView::Scan),
            "collect" | "register" => Ok(ActiveView::Collect),
            "update" => Ok(ActiveView::Update),
            other => Err(format!("unknown view '{other}' (expected scan, collect or update)")),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Which top-level view is displayed
    pub active_view: ActiveView,

    /// Selected device, by id. Resolved against the current snapshot so the
    /// details panel always shows the latest port states.
    pub selected_device_id: Option<String>,

    pub store: TopologyStore,
    pub scanner: ScanSimulator,
    pub register_form: RegisterForm,

    /// Highlighted port row in the scan view's device details
    pub port_cursor: usize,

    /// Highlighted row in the update view's device list
    pub device_cursor: usize,

    /// Result of the most recent toggle, shown in the status bar
    pub last_toggle: Option<ToggleOutcome>,

    /// Toggle requests handled so far, including ones that matched nothing
    pub toggle_count: u64,

    /// Spinner frame, advanced on each tick while scanning
    pub animation_frame: u64,

    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Seeded store configured from `settings`
    pub fn with_settings(settings: Settings) -> Self {
        let store = TopologyStore::with_seed_data().with_policy(settings.cable_policy());
        Self::with_store(store, settings)
    }

    pub fn with_store(store: TopologyStore, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            active_view: ActiveView::default(),
            selected_device_id: None,
            store,
            scanner: ScanSimulator::new(settings.scan_delay()),
            register_form: RegisterForm::new(),
            port_cursor: 0,
            device_cursor: 0,
            last_toggle: None,
            toggle_count: 0,
            animation_frame: 0,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn topology(&self) -> &Topology {
        self.store.topology()
    }

    /// The selected device as it exists in the current snapshot
    pub fn selected_device(&self) -> Option<&Device> {
        self.selected_device_id
            .as_deref()
            .and_then(|id| self.topology().device(id))
    }

    /// Select a device by id. Unknown ids leave the selection unchanged.
    pub fn select_device(&mut self, device_id: &str) -> bool {
        if self.topology().device(device_id).is_none() {
            return false;
        }
        if self.selected_device_id.as_deref() != Some(device_id) {
            self.port_cursor = 0;
        }
        self.selected_device_id = Some(device_id.to_string());
        true
    }

    /// Port under the cursor in the selected device
    pub fn port_at_cursor(&self) -> Option<&Port> {
        self.selected_device()
            .and_then(|device| device.ports.get(self.port_cursor))
    }

    /// Device under the cursor in the update view's list
    pub fn device_at_cursor(&self) -> Option<&Device> {
        self.topology().devices.get(self.device_cursor)
    }

    pub fn move_port_cursor(&mut self, delta: isize) {
        let len = self.selected_device().map(|d| d.ports.len()).unwrap_or(0);
        self.port_cursor = step_cursor(self.port_cursor, delta, len);
    }

    pub fn move_device_cursor(&mut self, delta: isize) {
        let len = self.topology().devices.len();
        self.device_cursor = step_cursor(self.device_cursor, delta, len);
    }

    /// Advance the scanning spinner
    pub fn tick(&mut self) {
        if self.scanner.is_scanning() {
            self.animation_frame = self.animation_frame.wrapping_add(1);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Move a list cursor by `delta`, clamped to `0..len`
fn step_cursor(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = current.saturating_add_signed(delta);
    moved.min(len - 1)
}
