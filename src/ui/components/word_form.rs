use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;
use crate::vocab::{FormField, WordForm};

const LABEL_WIDTH: usize = 12;

pub struct WordFormView<'a> {
    pub form: &'a WordForm,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> WordFormView<'a> {
    pub fn new(form: &'a WordForm, focused: bool, theme: &'a Theme) -> Self {
        Self {
            form,
            focused,
            theme,
        }
    }

    fn field_line(&self, field: FormField) -> Line<'a> {
        let colors = &self.theme.colors;
        let input = self.form.field(field);
        let editing = self.focused && self.form.focused == field;

        let label = format!(" {:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH);
        let label_style = if editing {
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg())
        };
        let mut spans = vec![Span::styled(label, label_style)];

        if input.is_empty() && !editing {
            spans.push(Span::styled(
                field.label(),
                Style::default().fg(colors.text_muted()),
            ));
            return Line::from(spans);
        }

        let text_style = Style::default().fg(colors.fg());
        if editing {
            let cursor_style = Style::default().fg(colors.bg()).bg(colors.fg());
            let (before, at, after) = input.render_parts();
            spans.push(Span::styled(before, text_style));
            match at {
                Some(ch) => {
                    spans.push(Span::styled(ch.to_string(), cursor_style));
                    spans.push(Span::styled(after, text_style));
                }
                None => spans.push(Span::styled(" ", cursor_style)),
            }
        } else {
            spans.push(Span::styled(input.value(), text_style));
        }
        Line::from(spans)
    }
}

impl Widget for WordFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Add Custom Word ")
            .border_style(Style::default().fg(if self.focused {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));

        let mut lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|&field| self.field_line(field))
            .collect();

        let button_style = if self.form.is_submittable() {
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text_muted())
        };
        lines.push(Line::from(Span::styled(" [Enter] Add Word", button_style)));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(view: WordFormView<'_>) -> Vec<String> {
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn empty_unfocused_form_shows_placeholders() {
        let theme = Theme::default();
        let form = WordForm::default();
        let rows = rows(WordFormView::new(&form, false, &theme));
        assert!(rows[0].contains("Add Custom Word"));
        assert!(rows[1].contains("Word:"));
        assert!(rows[2].contains("Definition"));
        assert!(rows[3].contains("Example"));
        assert!(rows[4].contains("Add Word"));
    }

    #[test]
    fn typed_values_are_shown() {
        let theme = Theme::default();
        let mut form = WordForm::default();
        form.set(FormField::Word, "resilient");
        form.set(FormField::Example, "She is resilient.");
        let rows = rows(WordFormView::new(&form, true, &theme));
        assert!(rows[1].contains("resilient"));
        assert!(rows[3].contains("She is resilient."));
    }
}
