use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::flashcard::{CardState, Face};
use crate::ui::theme::Theme;
use crate::vocab::CardFace;

/// One flashcard: the front shows the headline, the back the explanation,
/// and the example panel sits under either side when open.
pub struct FlashcardView<'a> {
    pub face: &'a dyn CardFace,
    pub state: CardState,
    pub selected: bool,
    pub theme: &'a Theme,
}

impl<'a> FlashcardView<'a> {
    pub fn new(face: &'a dyn CardFace, state: CardState, selected: bool, theme: &'a Theme) -> Self {
        Self {
            face,
            state,
            selected,
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        let mut lines = Vec::new();

        match self.state.face() {
            Face::Front => {
                let mut headline = vec![Span::styled(
                    self.face.headline(),
                    Style::default()
                        .fg(colors.card_front())
                        .add_modifier(Modifier::BOLD),
                )];
                if let Some(pronunciation) = self.face.annotation() {
                    headline.push(Span::styled(
                        format!("  {pronunciation}"),
                        Style::default().fg(colors.text_muted()),
                    ));
                }
                lines.push(Line::from(headline));
                if let Some(image) = self.face.image() {
                    lines.push(Line::from(Span::styled(
                        format!("image: {image}"),
                        Style::default().fg(colors.text_muted()),
                    )));
                }
            }
            Face::Back => {
                lines.push(Line::from(Span::styled(
                    self.face.detail(),
                    Style::default().fg(colors.card_back()),
                )));
            }
        }

        if self.state.example_shown() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.face.example(),
                Style::default()
                    .fg(colors.example())
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        lines
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.lines()).wrap(Wrap { trim: false })
    }

    /// Rows needed at `width`, borders included. Counted with the same word
    /// wrapping the card is drawn with, so a long URL that breaks early still
    /// leaves room for the example panel.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        let body = self.paragraph().line_count(inner);
        u16::try_from(body).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for FlashcardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let side = match self.state.face() {
            Face::Front => " front ",
            Face::Back => " back ",
        };
        let border_color = if self.selected {
            colors.border_focused()
        } else {
            colors.border()
        };
        let mut block = Block::bordered()
            .title(Line::from(Span::styled(
                side,
                Style::default().fg(colors.text_muted()),
            )))
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(colors.bg()));
        if self.state.is_flipped() {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", self.face.headline()),
                Style::default().fg(colors.accent_dim()),
            )));
        }

        self.paragraph().block(block).render(area, buf);
    }
}
