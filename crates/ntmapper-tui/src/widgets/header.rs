//! Header bar widget
//!
//! App title, global shortcuts and one tab per view.

use ntmapper_app::ActiveView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Main header showing the app title, shortcuts and view tabs
pub struct MainHeader {
    active_view: ActiveView,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(active_view: ActiveView, icons: IconSet) -> Self {
        Self { active_view, icons }
    }

    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.network(), styles::accent()),
            Span::raw(" "),
            Span::styled("NTMapper", styles::accent_bold()),
        ]);
        let title_width = title.width() as u16;

        let shortcuts = Line::from(vec![
            Span::styled("[", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("1-3", styles::keybinding()),
            Span::styled("] View  ", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("[", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit ", Style::default().fg(palette::TEXT_MUTED)),
        ]);
        let shortcuts_width = shortcuts.width() as u16;

        buf.set_line(area.x, area.y, &title, area.width);

        // Right-align shortcuts when they fit
        if title_width + shortcuts_width + 2 <= area.width {
            let x = area.x + area.width - shortcuts_width;
            buf.set_line(x, area.y, &shortcuts, shortcuts_width);
        }
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = ActiveView::ALL
            .iter()
            .map(|view| Line::from(format!(" {} {} ", view.index() + 1, view.title())))
            .collect();

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        Tabs::new(titles)
            .select(self.active_view.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(padded_area, buf);
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_title_row(Rect { height: 1, ..inner }, buf);

        if inner.height >= 2 {
            let tabs_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            self.render_tabs(tabs_area, buf);
        }
    }
}
