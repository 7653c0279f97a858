//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use ntmapper_app::config::IconMode;
use ntmapper_core::PortStatus;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn network(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f6ff}", // nf-mdi-lan
            IconMode::Unicode => "\u{2637}",   // ☷
        }
    }

    pub fn scan(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f029}", // nf-fa-qrcode
            IconMode::Unicode => "\u{2316}",   // ⌖
        }
    }

    pub fn connected(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f058}", // nf-fa-check_circle
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn disconnected(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f057}", // nf-fa-times_circle
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn port_status(&self, status: PortStatus) -> &'static str {
        match status {
            PortStatus::Connected => self.connected(),
            PortStatus::Disconnected => self.disconnected(),
        }
    }

    pub fn cable(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1e6}", // nf-fa-plug
            IconMode::Unicode => "\u{2500}",   // ─
        }
    }

    pub fn database(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1c0}", // nf-fa-database
            IconMode::Unicode => "+",
        }
    }

    pub fn pointer(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}
