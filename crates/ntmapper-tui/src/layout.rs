//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Camera panel height in the scan view
pub const CAMERA_HEIGHT: u16 = 7;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, shortcuts and view tabs
    pub header: Rect,

    /// Active view content
    pub body: Rect,

    /// One-line status bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the scan view body into camera panel and device details
pub fn split_scan_body(body: Rect) -> (Rect, Rect) {
    let chunks =
        Layout::vertical([Constraint::Length(CAMERA_HEIGHT), Constraint::Min(0)]).split(body);
    (chunks[0], chunks[1])
}
