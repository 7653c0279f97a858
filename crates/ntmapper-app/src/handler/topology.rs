//! Toggle and selection handlers

use tracing::{debug, instrument};

use crate::state::AppState;

use super::UpdateResult;

/// Select a device by id; unknown ids are ignored
pub fn handle_select_device(state: &mut AppState, device_id: &str) -> UpdateResult {
    if !state.select_device(device_id) {
        debug!("Ignoring selection of unknown device {}", device_id);
    }
    UpdateResult::none()
}

/// Toggle a port through the store and record the outcome
#[instrument(level = "debug", skip(state))]
pub fn handle_toggle_port(state: &mut AppState, device_id: &str, port_id: &str) -> UpdateResult {
    let outcome = state.store.toggle_port(device_id, port_id);
    state.toggle_count += 1;
    state.last_toggle = Some(outcome);
    UpdateResult::none()
}

pub fn handle_toggle_selected_port(state: &mut AppState) -> UpdateResult {
    let target = state.selected_device().and_then(|device| {
        device
            .ports
            .get(state.port_cursor)
            .map(|port| (device.id.clone(), port.id.clone()))
    });

    match target {
        Some((device_id, port_id)) => handle_toggle_port(state, &device_id, &port_id),
        None => UpdateResult::none(),
    }
}

pub fn handle_select_device_at_cursor(state: &mut AppState) -> UpdateResult {
    let device_id = state.device_at_cursor().map(|device| device.id.clone());
    match device_id {
        Some(id) => handle_select_device(state, &id),
        None => UpdateResult::none(),
    }
}
