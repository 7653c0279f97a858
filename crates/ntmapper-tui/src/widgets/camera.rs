//! Simulated camera panel for the scan view

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Braille spinner frames, one per tick
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(animation_frame: u64) -> &'static str {
    SPINNER[(animation_frame as usize) % SPINNER.len()]
}

/// Idle: prompt plus "Start Scanning" button. Scanning: spinner.
pub struct CameraPanel {
    scanning: bool,
    animation_frame: u64,
    icons: IconSet,
}

impl CameraPanel {
    pub fn new(scanning: bool, animation_frame: u64, icons: IconSet) -> Self {
        Self {
            scanning,
            animation_frame,
            icons,
        }
    }

    fn content(&self) -> Vec<Line<'static>> {
        if self.scanning {
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(spinner_frame(self.animation_frame), styles::accent()),
                    Span::raw(" "),
                    Span::styled("Scanning QR code...", styles::text_primary()),
                ]),
            ]
        } else {
            vec![
                Line::from(Span::styled(
                    "Point camera at device or cable QR code",
                    styles::text_secondary(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!(" {} Start Scanning ", self.icons.scan()),
                    styles::button(false),
                )),
                Line::from(Span::styled("Space", styles::keybinding())),
            ]
        }
    }
}

impl Widget for CameraPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.scanning).style(Style::default().bg(palette::CAMERA_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = self.content();
        let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
        let content_area = Rect {
            y: inner.y + top_pad,
            height: inner.height - top_pad,
            ..inner
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content_area, buf);
    }
}
