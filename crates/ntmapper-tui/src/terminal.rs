//! Terminal setup and restoration

use ntmapper_core::prelude::*;

/// Install a panic hook that restores the terminal before the report is
/// printed, and records the panic in the log file.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        match panic_info.location() {
            Some(location) => error!(
                "Panic at {}:{}: {}",
                location.file(),
                location.line(),
                panic_info
            ),
            None => error!("Panic: {}", panic_info),
        }
        previous(panic_info);
    }));
}
