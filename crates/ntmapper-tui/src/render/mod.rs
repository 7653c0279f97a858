//! Main render/view function (View in TEA pattern)


use ntmapper_app::{ActiveView, AppState};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(state.active_view, icons),
        areas.header,
    );

    match state.active_view {
        ActiveView::Scan => {
            let (camera, details) = layout::split_scan_body(areas.body);
            frame.render_widget(
                widgets::CameraPanel::new(
                    state.scanner.is_scanning(),
                    state.animation_frame,
                    icons,
                ),
                camera,
            );
            if details.height > 0 {
                frame.render_widget(
                    widgets::DeviceDetails::new(state.selected_device(), state.topology(), icons)
                        .port_cursor(state.port_cursor),
                    details,
                );
            }
        }
        ActiveView::Collect => {
            frame.render_widget(
                widgets::RegisterFormView::new(&state.register_form, icons),
                areas.body,
            );
        }
        ActiveView::Update => {
            frame.render_widget(
                widgets::DeviceList::new(state.topology(), icons)
                    .cursor(state.device_cursor)
                    .selected(state.selected_device_id.as_deref())
                    .scanning(state.scanner.is_scanning(), state.animation_frame),
                areas.body,
            );
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
