//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, scan, topology, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View Messages
        // ─────────────────────────────────────────────────────────
        Message::SwitchView(view) => {
            if state.active_view != view {
                debug!("View: {} -> {}", state.active_view, view);
                state.active_view = view;
            }
            UpdateResult::none()
        }

        Message::NextView => UpdateResult::message(Message::SwitchView(state.active_view.next())),

        Message::PreviousView => {
            UpdateResult::message(Message::SwitchView(state.active_view.previous()))
        }

        // ─────────────────────────────────────────────────────────
        // Topology Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectDevice { device_id } => topology::handle_select_device(state, &device_id),

        Message::TogglePort { device_id, port_id } => {
            topology::handle_toggle_port(state, &device_id, &port_id)
        }

        Message::PortCursorUp => {
            state.move_port_cursor(-1);
            UpdateResult::none()
        }

        Message::PortCursorDown => {
            state.move_port_cursor(1);
            UpdateResult::none()
        }

        Message::ToggleSelectedPort => topology::handle_toggle_selected_port(state),

        Message::DeviceCursorUp => {
            state.move_device_cursor(-1);
            UpdateResult::none()
        }

        Message::DeviceCursorDown => {
            state.move_device_cursor(1);
            UpdateResult::none()
        }

        Message::SelectDeviceAtCursor => topology::handle_select_device_at_cursor(state),

        // ─────────────────────────────────────────────────────────
        // Scan Messages
        // ─────────────────────────────────────────────────────────
        Message::StartScan => scan::handle_start_scan(state),

        Message::ScanCompleted { scan_id } => scan::handle_scan_completed(state, scan_id),

        // ─────────────────────────────────────────────────────────
        // Registration Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FormNextField => {
            state.register_form.focus_next();
            UpdateResult::none()
        }

        Message::FormPreviousField => {
            state.register_form.focus_previous();
            UpdateResult::none()
        }

        Message::FormInput(c) => {
            state.register_form.input(c);
            UpdateResult::none()
        }

        Message::FormBackspace => {
            state.register_form.backspace();
            UpdateResult::none()
        }

        Message::FormSubmit => {
            debug!(
                "Register Device pressed (id={:?}, name={:?}, location={:?}, ports={:?}); not wired",
                state.register_form.device_id,
                state.register_form.device_name,
                state.register_form.location,
                state.register_form.port_count,
            );
            UpdateResult::none()
        }
    }
}
