//! Status bar widget
//!
//! Last toggle outcome on the left, key hints for the active view on the right.

use ntmapper_app::{ActiveView, AppState};
use ntmapper_core::ToggleOutcome;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn outcome_span(&self) -> Span<'static> {
        match &self.state.last_toggle {
            None => Span::styled("Ready", styles::text_muted()),
            Some(outcome @ ToggleOutcome::NotFound { .. }) => {
                Span::styled(outcome.describe(), Style::default().fg(palette::STATUS_RED))
            }
            Some(outcome @ ToggleOutcome::Connected { fabricated: true, .. }) => Span::styled(
                outcome.describe(),
                Style::default().fg(palette::STATUS_YELLOW),
            ),
            Some(outcome) => Span::styled(
                outcome.describe(),
                Style::default().fg(palette::STATUS_GREEN),
            ),
        }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.active_view {
            ActiveView::Scan => vec![("Space", "Scan"), ("↑↓", "Port"), ("Enter", "Toggle")],
            ActiveView::Collect => vec![("Tab", "Field"), ("Esc", "Back")],
            ActiveView::Update => vec![("Space", "Scan"), ("↑↓", "Device"), ("Enter", "Select")],
        }
    }

    fn hints_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label) in self.hints() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let left = Line::from(vec![Span::raw(" "), self.outcome_span()]);
        buf.set_line(area.x, area.y, &left, area.width);

        let hints = self.hints_line();
        let hints_width = hints.width() as u16;
        if left.width() as u16 + hints_width + 2 <= area.width {
            buf.set_line(
                area.x + area.width - hints_width,
                area.y,
                &hints,
                hints_width,
            );
        }
    }
}
