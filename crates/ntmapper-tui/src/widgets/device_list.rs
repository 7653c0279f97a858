//! Update view: scan button, tip and the device list

use ntmapper_core::Topology;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::camera::spinner_frame;
use crate::theme::{icons::IconSet, palette, styles};

pub const TIP: &str =
    "Tip: Scan a device QR code, then tap on ports to update their connection status.";

/// Each device entry: name/id row, count row, spacer
const ENTRY_ROWS: u16 = 3;

pub struct DeviceList<'a> {
    topology: &'a Topology,
    cursor: usize,
    selected_id: Option<&'a str>,
    scanning: bool,
    animation_frame: u64,
    icons: IconSet,
}

impl<'a> DeviceList<'a> {
    pub fn new(topology: &'a Topology, icons: IconSet) -> Self {
        Self {
            topology,
            cursor: 0,
            selected_id: None,
            scanning: false,
            animation_frame: 0,
            icons,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn selected(mut self, device_id: Option<&'a str>) -> Self {
        self.selected_id = device_id;
        self
    }

    pub fn scanning(mut self, scanning: bool, animation_frame: u64) -> Self {
        self.scanning = scanning;
        self.animation_frame = animation_frame;
        self
    }

    fn button_line(&self) -> Line<'static> {
        if self.scanning {
            Line::from(vec![
                Span::styled(spinner_frame(self.animation_frame), styles::accent()),
                Span::styled(" Scanning QR code...", styles::text_primary()),
            ])
        } else {
            Line::from(Span::styled(
                format!(" {} Scan Device QR ", self.icons.scan()),
                styles::button(false),
            ))
        }
    }

    fn render_entries(&self, area: Rect, buf: &mut Buffer) {
        let visible = (area.height / ENTRY_ROWS).max(1) as usize;
        let offset = self.cursor.saturating_sub(visible - 1);

        for (slot, (index, device)) in self
            .topology
            .devices
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = area.y + slot as u16 * ENTRY_ROWS;
            if y >= area.y + area.height {
                break;
            }
            let focused = index == self.cursor;
            let is_selected = self.selected_id == Some(device.id.as_str());

            let marker = if focused { self.icons.pointer() } else { " " };
            let name_style = if focused {
                styles::focused_selected()
            } else {
                styles::title()
            };
            let mut name_spans = vec![
                Span::styled(marker, styles::accent()),
                Span::raw(" "),
                Span::styled(device.name.clone(), name_style),
            ];
            if is_selected {
                name_spans.push(Span::styled("  (selected)", styles::accent()));
            }
            let name = Line::from(name_spans);
            buf.set_line(area.x, y, &name, area.width);

            let id = Line::from(Span::styled(device.id.clone(), styles::text_muted()));
            let id_width = id.width() as u16;
            if name.width() as u16 + id_width + 1 <= area.width {
                buf.set_line(area.x + area.width - id_width, y, &id, id_width);
            }

            if y + 1 < area.y + area.height {
                let count = Line::from(Span::styled(
                    format!(
                        "  {} of {} ports connected",
                        device.connected_port_count(),
                        device.ports.len()
                    ),
                    styles::text_secondary(),
                ));
                buf.set_line(area.x, y + 1, &count, area.width);
            }
        }
    }
}

impl Widget for DeviceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Update Port Status ", styles::title()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        Paragraph::new(self.button_line())
            .alignment(Alignment::Center)
            .render(Rect { height: 1, ..inner }, buf);

        if inner.height < 3 {
            return;
        }
        let tip_height = if inner.width as usize >= TIP.len() { 1 } else { 2 };
        let tip_area = Rect {
            y: inner.y + 2,
            height: tip_height.min(inner.height - 2),
            ..inner
        };
        Paragraph::new(Span::styled(TIP, styles::tip()))
            .wrap(Wrap { trim: true })
            .render(tip_area, buf);

        let list_top = tip_area.y + tip_area.height + 1;
        if list_top >= inner.y + inner.height {
            return;
        }
        let list_area = Rect {
            y: list_top,
            height: inner.y + inner.height - list_top,
            ..inner
        };
        self.render_entries(list_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ntmapper_core::seed_topology;

    #[test]
    fn test_lists_devices_with_port_counts() {
        let topology = seed_topology();
        let mut term = TestTerminal::with_size(100, 20);
        term.render_widget(DeviceList::new(&topology, IconSet::default()), term.area());

        assert!(term.buffer_contains("Update Port Status"));
        assert!(term.buffer_contains("Scan Device QR"));
        assert!(term.buffer_contains(TIP));
        assert!(term.buffer_contains("Cisco Switch 3750"));
        assert!(term.buffer_contains("2 of 4 ports connected"));
        assert!(term.buffer_contains("Juniper Router EX4300"));
        assert!(term.buffer_contains("1 of 2 ports connected"));
    }

    #[test]
    fn test_selected_device_is_marked() {
        let topology = seed_topology();
        let mut term = TestTerminal::with_size(100, 20);
        term.render_widget(
            DeviceList::new(&topology, IconSet::default())
                .cursor(1)
                .selected(Some("RT002")),
            term.area(),
        );

        let row = term.find_line("Juniper Router EX4300").expect("router row");
        assert!(term.line_contains(row, "(selected)"));
        assert!(term.line_contains(row, "▸"));
    }

    #[test]
    fn test_scanning_replaces_button() {
        let topology = seed_topology();
        let mut term = TestTerminal::with_size(100, 20);
        term.render_widget(
            DeviceList::new(&topology, IconSet::default()).scanning(true, 0),
            term.area(),
        );

        assert!(term.buffer_contains("Scanning QR code..."));
        assert!(!term.buffer_contains("Scan Device QR"));
    }

    #[test]
    fn test_tip_wraps_on_narrow_terminal() {
        let topology = seed_topology();
        let mut term = TestTerminal::with_size(60, 20);
        term.render_widget(DeviceList::new(&topology, IconSet::default()), term.area());

        assert!(term.buffer_contains("Tip: Scan a device QR code"));
        assert!(term.buffer_contains("Cisco Switch 3750"));
    }
}
