//! NTMapper Library
//!
//! A terminal mock-up for mapping network topology. Wires the workspace
//! crates together behind the two entry points used by the binary.

pub mod headless;

use ntmapper_app::config::Settings;
use ntmapper_core::prelude::*;

pub use headless::run_headless;

/// Install error reporting and file logging. Call once, before anything
/// else writes to the terminal.
pub fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    ntmapper_core::logging::init()?;
    Ok(())
}

/// Run the interactive TUI
pub async fn run(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("NTMapper starting in TUI mode");
    info!(
        "Scan delay: {:?}, icons: {:?}",
        settings.scan_delay(),
        settings.ui.icons
    );
    info!("═══════════════════════════════════════════════════════");

    let result = ntmapper_tui::run(settings).await;

    match &result {
        Ok(()) => info!("NTMapper exiting"),
        Err(e) => error!("NTMapper exiting with error: {}", e),
    }
    result
}
