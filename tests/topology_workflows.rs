//! End-to-end workflows driven through the Engine
//!
//! Each test feeds keys or messages into a real `Engine` (message channel,
//! scan timers, event broadcast) and checks the resulting state and events.
//!
//! ```bash
//! cargo test --test topology_workflows
//! ```

use std::time::Duration;

use ntmapper::headless::{
    headless_event_loop, parse_command, CommandResult, HeadlessCommand, HeadlessEvent,
};
use ntmapper_app::config::{load_settings, Settings};
use ntmapper_app::{ActiveView, Engine, EngineEvent, InputKey, Message};
use ntmapper_core::{PortStatus, ToggleOutcome};
use regex::Regex;
use tokio::sync::{broadcast, mpsc};

// ─────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────

fn drain(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn press(engine: &mut Engine, keys: &[InputKey]) {
    for key in keys {
        engine.process_message(Message::Key(*key));
    }
}

fn type_text(engine: &mut Engine, text: &str) {
    for c in text.chars() {
        engine.process_message(Message::Key(InputKey::Char(c)));
    }
}

/// Let the spawned timer register its sleep before moving the clock
async fn advance(ms: u64) {
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

fn port_status(engine: &Engine, device_id: &str, port_id: &str) -> PortStatus {
    engine
        .state
        .topology()
        .device(device_id)
        .and_then(|d| d.port(port_id))
        .map(|p| p.status)
        .expect("port exists")
}

// ─────────────────────────────────────────────────────────
// Scan workflow
// ─────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_scan_selects_first_device_after_delay() {
    let mut engine = Engine::new(Settings::default());
    let mut rx = engine.subscribe();

    press(&mut engine, &[InputKey::Char(' ')]);
    assert!(engine.state.scanner.is_scanning());
    assert_eq!(drain(&mut rx), vec![EngineEvent::ScanStarted { scan_id: 1 }]);

    advance(1499).await;
    assert_eq!(engine.drain_pending_messages(), 0);
    assert!(engine.state.scanner.is_scanning());
    assert!(engine.state.selected_device_id.is_none());

    advance(1).await;
    assert_eq!(engine.drain_pending_messages(), 1);
    assert!(!engine.state.scanner.is_scanning());
    assert_eq!(engine.state.selected_device_id.as_deref(), Some("SW001"));
    assert_eq!(
        drain(&mut rx),
        vec![
            EngineEvent::ScanCompleted {
                device_id: Some("SW001".into())
            },
            EngineEvent::DeviceSelected {
                device_id: "SW001".into()
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_second_scan_while_scanning_is_rejected() {
    let mut engine = Engine::new(Settings::default());
    let mut rx = engine.subscribe();

    press(&mut engine, &[InputKey::Char('s')]);
    advance(700).await;
    press(&mut engine, &[InputKey::Char('s')]);

    assert_eq!(
        drain(&mut rx),
        vec![EngineEvent::ScanStarted { scan_id: 1 }, EngineEvent::ScanRejected]
    );

    // The first scan still finishes 1500 ms after it started
    advance(800).await;
    assert_eq!(engine.drain_pending_messages(), 1);
    assert!(!engine.state.scanner.is_scanning());
    assert_eq!(engine.state.scanner.rejected_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_scan_delay_comes_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[scan]\ndelay_ms = 200\n").unwrap();

    let settings = load_settings(Some(&path)).unwrap();
    let mut engine = Engine::new(settings);

    engine.process_message(Message::StartScan);
    advance(200).await;

    assert_eq!(engine.drain_pending_messages(), 1);
    assert_eq!(engine.state.selected_device_id.as_deref(), Some("SW001"));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_abandons_pending_scan() {
    let mut engine = Engine::new(Settings::default());

    engine.process_message(Message::StartScan);
    tokio::task::yield_now().await;
    engine.shutdown();
    advance(2000).await;

    assert_eq!(engine.drain_pending_messages(), 0);
    assert!(engine.state.scanner.is_scanning());
}

// ─────────────────────────────────────────────────────────
// Port toggling
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_toggle_connected_port_disconnects_it() {
    let mut engine = Engine::new(Settings::default());
    let mut rx = engine.subscribe();

    engine.process_message(Message::SelectDevice {
        device_id: "SW001".into(),
    });
    press(&mut engine, &[InputKey::Enter]);

    assert_eq!(port_status(&engine, "SW001", "P1"), PortStatus::Disconnected);
    let port = engine.state.topology().device("SW001").unwrap().port("P1").unwrap();
    assert!(port.connected_to.is_none());

    let events = drain(&mut rx);
    assert!(events.contains(&EngineEvent::PortToggled {
        outcome: ToggleOutcome::Disconnected {
            device_id: "SW001".into(),
            port_id: "P1".into(),
            released: Some("CAB001".into()),
        }
    }));
}

#[tokio::test]
async fn test_reconnect_picks_released_cable() {
    let mut engine = Engine::new(Settings::default());
    engine.state.select_device("SW001");

    // P2 down, cursor to P3, connect
    press(
        &mut engine,
        &[InputKey::Down, InputKey::Enter, InputKey::Down, InputKey::Enter],
    );

    let port = engine.state.topology().device("SW001").unwrap().port("P3").unwrap();
    assert_eq!(port.status, PortStatus::Connected);
    assert_eq!(port.connected_to.as_deref(), Some("CAB002"));
    assert_eq!(port_status(&engine, "SW001", "P2"), PortStatus::Disconnected);
}

#[tokio::test]
async fn test_seed_connect_fabricates_cable_id() {
    let mut engine = Engine::new(Settings::default());

    engine.process_message(Message::TogglePort {
        device_id: "SW001".into(),
        port_id: "P3".into(),
    });

    let port = engine.state.topology().device("SW001").unwrap().port("P3").unwrap();
    let cable_id = port.connected_to.as_deref().expect("cable bound");
    assert!(Regex::new(r"^CAB\d{1,3}$").unwrap().is_match(cable_id));
    assert!(matches!(
        engine.state.last_toggle,
        Some(ToggleOutcome::Connected {
            fabricated: true,
            ..
        })
    ));
    // No record added under the default policy
    assert_eq!(engine.state.topology().cables.len(), 3);
}

#[tokio::test]
async fn test_unknown_ids_leave_snapshot_untouched() {
    let mut engine = Engine::new(Settings::default());
    let before = engine.state.topology().clone();

    for (device_id, port_id) in [("SW999", "P1"), ("SW001", "P9"), ("", "")] {
        engine.process_message(Message::TogglePort {
            device_id: device_id.into(),
            port_id: port_id.into(),
        });
    }

    assert_eq!(engine.state.topology(), &before);
    assert_eq!(engine.state.toggle_count, 3);
}

// ─────────────────────────────────────────────────────────
// Views and registration
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_view_round_trip_keeps_selection_and_data() {
    let mut engine = Engine::new(Settings::default());
    engine.state.select_device("RT002");
    let before = engine.state.topology().clone();

    press(&mut engine, &[InputKey::Char('3'), InputKey::Char('1')]);

    assert_eq!(engine.state.active_view, ActiveView::Scan);
    assert_eq!(engine.state.selected_device_id.as_deref(), Some("RT002"));
    assert_eq!(engine.state.topology(), &before);
}

#[tokio::test]
async fn test_update_view_selects_device_then_toggles() {
    let mut engine = Engine::new(Settings::default());

    press(
        &mut engine,
        &[InputKey::Char('3'), InputKey::Down, InputKey::Enter, InputKey::Char('1')],
    );
    assert_eq!(engine.state.selected_device_id.as_deref(), Some("RT002"));

    // RT002/P1 is the fiber link
    press(&mut engine, &[InputKey::Enter]);
    assert_eq!(port_status(&engine, "RT002", "P1"), PortStatus::Disconnected);
}

#[tokio::test]
async fn test_registration_submit_changes_nothing() {
    let mut engine = Engine::new(Settings::default());
    let before = engine.state.topology().clone();

    press(&mut engine, &[InputKey::Char('2')]);
    type_text(&mut engine, "AP010");
    press(&mut engine, &[InputKey::Tab]);
    type_text(&mut engine, "Lobby AP");
    press(&mut engine, &[InputKey::Tab, InputKey::Tab]);
    type_text(&mut engine, "8x");
    press(&mut engine, &[InputKey::Tab, InputKey::Enter]);

    let form = &engine.state.register_form;
    assert_eq!(form.device_id, "AP010");
    assert_eq!(form.device_name, "Lobby AP");
    assert_eq!(form.port_count, "8");
    assert_eq!(engine.state.topology(), &before);
    assert_eq!(engine.state.active_view, ActiveView::Collect);
    assert!(!engine.should_quit());
}

// ─────────────────────────────────────────────────────────
// Headless commands
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_headless_commands_drive_engine() {
    let mut engine = Engine::new(Settings::default());
    let mut rx = engine.subscribe();

    for line in ["view update", "select RT002", "toggle RT002 P2"] {
        let command = parse_command(line).unwrap().unwrap();
        engine.process_message(command.to_message().unwrap());
    }

    let lines: Vec<serde_json::Value> = drain(&mut rx)
        .iter()
        .filter_map(|e| HeadlessEvent::from_engine_event(e, engine.state.topology()))
        .map(|e| serde_json::to_value(&e).unwrap())
        .collect();

    let kinds: Vec<&str> = lines.iter().map(|v| v["event"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["view_changed", "device_selected", "port_toggled"]);
    assert_eq!(lines[2]["outcome"], "connected");
    assert_eq!(lines[2]["device_id"], "RT002");

    assert_eq!(parse_command("quit").unwrap(), Some(HeadlessCommand::Quit));
}

#[tokio::test(start_paused = true)]
async fn test_headless_input_end_waits_for_running_scan() {
    let mut engine = Engine::new(Settings::default());
    let (cmd_tx, cmd_rx) = mpsc::channel::<CommandResult>(8);

    cmd_tx.send(Ok(Some(HeadlessCommand::Scan))).await.unwrap();
    drop(cmd_tx);

    let started = tokio::time::Instant::now();
    headless_event_loop(&mut engine, cmd_rx).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert!(!engine.state.scanner.is_scanning());
    assert_eq!(engine.state.selected_device_id.as_deref(), Some("SW001"));
    assert!(engine.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_headless_input_end_without_scan_quits_at_once() {
    let mut engine = Engine::new(Settings::default());
    let (cmd_tx, cmd_rx) = mpsc::channel::<CommandResult>(8);

    cmd_tx
        .send(parse_command("toggle SW001 P1"))
        .await
        .unwrap();
    drop(cmd_tx);

    let started = tokio::time::Instant::now();
    headless_event_loop(&mut engine, cmd_rx).await.unwrap();

    assert!(started.elapsed() < Duration::from_millis(1500));
    assert!(engine.should_quit());
    assert_eq!(port_status(&engine, "SW001", "P1"), PortStatus::Disconnected);
}
