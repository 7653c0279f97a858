//! Main TUI runner - entry point and event loop

use ntmapper_app::config::Settings;
use ntmapper_app::Engine;
use ntmapper_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut engine = Engine::new(settings);

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Scan timers and signal handler
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;

        if let Some(message) = event::poll().context("Polling terminal events")? {
            engine.process_message(message);
        }
    }

    info!("TUI loop finished");
    Ok(())
}
