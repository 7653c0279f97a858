//! "Register New Device" form (view only)

use ntmapper_app::{FormField, RegisterForm};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Label row + bordered input (3 rows)
const FIELD_HEIGHT: u16 = 4;

pub struct RegisterFormView<'a> {
    form: &'a RegisterForm,
    icons: IconSet,
}

impl<'a> RegisterFormView<'a> {
    pub fn new(form: &'a RegisterForm, icons: IconSet) -> Self {
        Self { form, icons }
    }

    fn render_field(&self, field: FormField, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focus == field;

        let label = Line::from(Span::styled(field.label(), styles::text_secondary()));
        buf.set_line(area.x, area.y, &label, area.width);

        let input_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1).min(3),
            ..area
        };
        let block = styles::glass_block(focused);
        let inner = block.inner(input_area);
        block.render(input_area, buf);

        let value = self.form.value(field);
        let content = if value.is_empty() {
            let mut spans = vec![Span::styled(field.placeholder(), styles::text_muted())];
            if focused {
                spans.insert(0, Span::styled("▏", styles::accent()));
            }
            Line::from(spans)
        } else {
            let mut spans = vec![Span::styled(value.to_string(), styles::text_primary())];
            if focused {
                spans.push(Span::styled("▏", styles::accent()));
            }
            Line::from(spans)
        };
        Paragraph::new(content).render(inner, buf);
    }
}

impl Widget for RegisterFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Register New Device ", styles::title()))
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

        let mut constraints: Vec<Constraint> = FormField::INPUTS
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        for (field, row) in FormField::INPUTS.iter().zip(rows.iter()) {
            if row.height > 0 {
                self.render_field(*field, *row, buf);
            }
        }

        let submit_area = rows[FormField::INPUTS.len()];
        if submit_area.height > 0 {
            let focused = self.form.focus == FormField::Submit;
            let button = Line::from(Span::styled(
                format!(" {} {} ", self.icons.database(), FormField::Submit.label()),
                styles::button(focused),
            ));
            Paragraph::new(button)
                .alignment(Alignment::Center)
                .render(submit_area, buf);
        }
    }
}
