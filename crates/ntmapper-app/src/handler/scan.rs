//! Scan lifecycle handlers

use tracing::{debug, info, warn};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Start a scan, or reject it if one is already running
pub fn handle_start_scan(state: &mut AppState) -> UpdateResult {
    match state.scanner.start() {
        Some(ticket) => {
            info!("Scan {} started ({:?})", ticket.scan_id, ticket.delay);
            state.animation_frame = 0;
            UpdateResult::action(UpdateAction::ScheduleScanCompletion {
                scan_id: ticket.scan_id,
                delay: ticket.delay,
            })
        }
        None => {
            warn!("Scan already in progress, ignoring start request");
            UpdateResult::none()
        }
    }
}

/// Finish the running scan and select the first device
pub fn handle_scan_completed(state: &mut AppState, scan_id: u64) -> UpdateResult {
    if !state.scanner.complete(scan_id) {
        debug!("Ignoring stale completion for scan {}", scan_id);
        return UpdateResult::none();
    }

    let first = state.topology().first_device().map(|d| d.id.clone());
    match first {
        Some(device_id) => {
            info!("Scan {} completed, selected {}", scan_id, device_id);
            state.select_device(&device_id);
        }
        None => info!("Scan {} completed, no devices to select", scan_id),
    }
    UpdateResult::none()
}
