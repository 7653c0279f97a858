//! Selected device panel: identity, location and clickable port rows

use ntmapper_core::{Device, Port, Topology};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Rows above the port list: name, location, blank, "Ports:"
const HEADER_ROWS: u16 = 4;

pub struct DeviceDetails<'a> {
    device: Option<&'a Device>,
    topology: &'a Topology,
    port_cursor: usize,
    icons: IconSet,
}

impl<'a> DeviceDetails<'a> {
    pub fn new(device: Option<&'a Device>, topology: &'a Topology, icons: IconSet) -> Self {
        Self {
            device,
            topology,
            port_cursor: 0,
            icons,
        }
    }

    pub fn port_cursor(mut self, cursor: usize) -> Self {
        self.port_cursor = cursor;
        self
    }

    /// Right-hand side of a port row
    fn cable_spans(&self, port: &Port) -> Vec<Span<'static>> {
        let Some(cable_id) = port.connected_to.as_deref().filter(|_| port.is_connected()) else {
            return vec![Span::styled("No cable", styles::text_muted())];
        };

        let mut spans = vec![
            Span::styled(self.icons.cable(), styles::cable()),
            Span::raw(" "),
            Span::styled(cable_id.to_string(), styles::cable()),
        ];
        match self.topology.cable(cable_id) {
            Some(cable) => spans.push(Span::styled(
                format!("  {} {} {}", cable.kind, cable.length, cable.color),
                styles::text_secondary(),
            )),
            None => spans.push(Span::styled(
                "  (unregistered)",
                Style::default().fg(palette::STATUS_YELLOW),
            )),
        }
        spans
    }

    fn render_port_row(&self, port: &Port, selected: bool, area: Rect, buf: &mut Buffer) {
        let marker = if selected { self.icons.pointer() } else { " " };
        let left = Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::raw(" "),
            Span::styled(
                self.icons.port_status(port.status),
                styles::port_status(port.status),
            ),
            Span::raw(" "),
            Span::styled(format!("{} ({})", port.id, port.kind), styles::text_primary()),
        ]);
        let right = Line::from(self.cable_spans(port));

        if selected {
            buf.set_style(area, Style::default().bg(palette::BORDER_DIM));
        }

        buf.set_line(area.x, area.y, &left, area.width);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;
        if left_width + right_width + 2 <= area.width {
            let x = area.x + area.width - right_width - 1;
            buf.set_line(x, area.y, &right, right_width);
        }
    }

    fn render_device(&self, device: &Device, inner: Rect, buf: &mut Buffer) {
        // Name on the left, id badge on the right
        let name = Line::from(Span::styled(device.name.clone(), styles::title()));
        buf.set_line(inner.x, inner.y, &name, inner.width);
        let badge = Line::from(Span::styled(
            format!("[{}]", device.id),
            styles::text_secondary(),
        ));
        let badge_width = badge.width() as u16;
        if name.width() as u16 + badge_width + 1 <= inner.width {
            buf.set_line(
                inner.x + inner.width - badge_width,
                inner.y,
                &badge,
                badge_width,
            );
        }

        if inner.height < 2 {
            return;
        }
        let location = Line::from(Span::styled(
            format!("Location: {}", device.location),
            styles::text_secondary(),
        ));
        buf.set_line(inner.x, inner.y + 1, &location, inner.width);

        if inner.height < HEADER_ROWS {
            return;
        }
        let heading = Line::from(Span::styled("Ports:", styles::title()));
        buf.set_line(inner.x, inner.y + 3, &heading, inner.width);

        let rows = (inner.height - HEADER_ROWS) as usize;
        if rows == 0 {
            return;
        }
        // Keep the cursor row visible
        let offset = self.port_cursor.saturating_sub(rows - 1);
        for (row, (index, port)) in device
            .ports
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let row_area = Rect {
                y: inner.y + HEADER_ROWS + row as u16,
                height: 1,
                ..inner
            };
            self.render_port_row(port, index == self.port_cursor, row_area, buf);
        }
    }
}

impl Widget for DeviceDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.device.is_some())
            .title(" Device ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.device {
            Some(device) => {
                let padded = Rect {
                    x: inner.x + 1,
                    width: inner.width.saturating_sub(2),
                    ..inner
                };
                self.render_device(device, padded, buf);
            }
            None => {
                let lines = vec![
                    Line::from(Span::styled("No device selected", styles::text_secondary())),
                    Line::from(Span::styled(
                        "Scan a device QR code to view its ports",
                        styles::text_muted(),
                    )),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
        }
    }
}
