//! Headless mode runner - main event loop without TUI
//!
//! Reads commands from stdin on a dedicated thread, feeds them to the
//! engine, and turns engine events into NDJSON on stdout.

use tokio::sync::{broadcast, mpsc};

use ntmapper_app::config::Settings;
use ntmapper_app::{Engine, EngineEvent, Message};
use ntmapper_core::prelude::*;

use super::command::{parse_command, HeadlessCommand};
use super::HeadlessEvent;

/// One parsed stdin line, as sent by the reader thread
pub type CommandResult = Result<Option<HeadlessCommand>>;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("NTMapper starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);

    let (cmd_tx, cmd_rx) = mpsc::channel::<CommandResult>(64);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(cmd_tx);
    });

    HeadlessEvent::ready(engine.state.active_view, engine.state.topology()).emit();

    let result = headless_event_loop(&mut engine, cmd_rx).await;

    engine.shutdown();

    info!("NTMapper headless mode exiting");
    result
}

/// Main headless event loop
///
/// Runs until a `quit` command or a signal. Once `cmd_rx` closes (stdin
/// EOF) the loop keeps going until any running scan has completed, then
/// quits.
pub async fn headless_event_loop(
    engine: &mut Engine,
    mut cmd_rx: mpsc::Receiver<CommandResult>,
) -> Result<()> {
    let mut events = engine.subscribe();
    let mut stdin_open = true;

    loop {
        if !stdin_open && !engine.state.scanner.is_scanning() && !engine.should_quit() {
            debug!("Input finished and no scan pending");
            engine.process_message(Message::Quit);
        }

        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        tokio::select! {
            Some(msg) = engine.msg_rx.recv() => {
                engine.process_message(msg);
            }
            input = cmd_rx.recv(), if stdin_open => match input {
                Some(Ok(Some(command))) => handle_command(engine, command),
                Some(Ok(None)) => {}
                Some(Err(e)) => {
                    warn!("Rejected stdin command: {}", e);
                    HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
                }
                None => {
                    info!("Stdin closed");
                    stdin_open = false;
                }
            },
        }

        emit_engine_events(&mut events, engine);
    }

    Ok(())
}

fn handle_command(engine: &mut Engine, command: HeadlessCommand) {
    debug!("Stdin command: {:?}", command);
    match command.to_message() {
        Some(msg) => engine.process_message(msg),
        None => {
            let state = &engine.state;
            HeadlessEvent::snapshot(
                state.active_view,
                state.selected_device_id.as_deref(),
                state.scanner.is_scanning(),
                state.topology(),
            )
            .emit();
        }
    }
}

/// Drain the broadcast receiver and print every translated event
fn emit_engine_events(events: &mut broadcast::Receiver<EngineEvent>, engine: &Engine) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) =
                    HeadlessEvent::from_engine_event(&event, engine.state.topology())
                {
                    headless.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Forward parsed stdin lines until EOF or `quit` (blocking version)
fn spawn_stdin_reader_blocking(cmd_tx: mpsc::Sender<CommandResult>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let parsed = parse_command(&line);
        let quit = matches!(parsed, Ok(Some(HeadlessCommand::Quit)));
        if cmd_tx.blocking_send(parsed).is_err() {
            break;
        }
        if quit {
            break;
        }
    }

    // Dropping the sender closes the channel; the loop quits once no scan is pending.
    info!("Stdin reader exiting");
}
