use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::flashcard::DeckState;
use crate::ui::components::flashcard::FlashcardView;
use crate::ui::theme::Theme;
use crate::vocab::CardFace;

/// Vertical stack of flashcards, scrolled so the selected card is visible.
pub struct CardList<'a> {
    pub faces: Vec<&'a dyn CardFace>,
    pub deck: &'a DeckState,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> CardList<'a> {
    pub fn new(faces: Vec<&'a dyn CardFace>, deck: &'a DeckState, focused: bool, theme: &'a Theme) -> Self {
        Self {
            faces,
            deck,
            focused,
            theme,
        }
    }

    fn views(&self) -> Vec<FlashcardView<'a>> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, &face)| {
                let state = self.deck.get(i).copied().unwrap_or_default();
                let selected = self.focused && i == self.deck.selected;
                FlashcardView::new(face, state, selected, self.theme)
            })
            .collect()
    }
}

/// First card to draw so that `selected` fits in `available` rows.
pub fn scroll_offset(heights: &[u16], selected: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut used: u16 = 0;
    let mut first = selected;
    for i in (0..=selected).rev() {
        used = used.saturating_add(heights[i]);
        if used > available {
            break;
        }
        first = i;
    }
    first
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let views = self.views();
        let heights: Vec<u16> = views.iter().map(|v| v.height(area.width)).collect();
        let first = scroll_offset(&heights, self.deck.selected, area.height);

        let bottom = area.y + area.height;
        let mut y = area.y;
        for (view, height) in views.into_iter().zip(heights).skip(first) {
            if y >= bottom {
                break;
            }
            let height = height.min(bottom - y);
            view.render(Rect::new(area.x, y, area.width, height), buf);
            y += height;
        }
    }
}
