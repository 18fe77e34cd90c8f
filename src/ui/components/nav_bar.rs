use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::navigation::{NAV_ITEMS, Section};
use crate::ui::theme::Theme;

pub struct NavBar<'a> {
    pub active: Section,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(active: Section, focused: bool, theme: &'a Theme) -> Self {
        Self {
            active,
            focused,
            theme,
        }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(if self.focused {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.header_bg()));

        let mut spans = Vec::with_capacity(NAV_ITEMS.len() * 2);
        for (i, item) in NAV_ITEMS.iter().enumerate() {
            let text = format!(" {} {} ", i + 1, item.label);
            let style = if item.section == self.active {
                Style::default()
                    .fg(colors.nav_active_fg())
                    .bg(colors.nav_active_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_muted())
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
