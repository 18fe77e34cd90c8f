use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::navigation::Section;
use crate::ui::theme::Theme;

pub struct SectionHeading<'a> {
    pub section: Section,
    pub theme: &'a Theme,
}

impl<'a> SectionHeading<'a> {
    pub fn new(section: Section, theme: &'a Theme) -> Self {
        Self { section, theme }
    }
}

impl Widget for SectionHeading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((title, subtitle)) = self.section.heading() else {
            return;
        };
        let colors = &self.theme.colors;

        let lines = vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                subtitle,
                Style::default().fg(colors.text_muted()),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
