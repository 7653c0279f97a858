//! Configuration types for NTMapper
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use std::time::Duration;

use ntmapper_core::CablePolicy;
use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub scan: ScanSettings,

    #[serde(default)]
    pub topology: TopologySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan.delay_ms)
    }

    pub fn cable_policy(&self) -> CablePolicy {
        if self.topology.register_fabricated_cables {
            CablePolicy::Register
        } else {
            CablePolicy::LeaveDangling
        }
    }
}

/// Simulated QR scan settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanSettings {
    /// How long a simulated scan takes, in milliseconds
    #[serde(default = "default_scan_delay_ms")]
    pub delay_ms: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_scan_delay_ms(),
        }
    }
}

fn default_scan_delay_ms() -> u64 {
    1500
}

/// Topology mutation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopologySettings {
    /// Add a placeholder cable record when a port is connected while every
    /// known cable is already in use. Off by default: the port then points at
    /// a cable id absent from the cable list.
    #[serde(default)]
    pub register_fabricated_cables: bool,
}

/// Icon rendering mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}
