/// Which side of a flashcard is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// Where on a card a click landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Anywhere on the card body: flips it.
    Body,
    /// The "show example" control. Handled here and never forwarded to the
    /// body, so it cannot flip the card.
    ExampleControl,
}

/// View state of one mounted card. Starts on the front with the example hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    flipped: bool,
    example_shown: bool,
}

impl CardState {
    pub fn face(&self) -> Face {
        if self.flipped { Face::Back } else { Face::Front }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn example_shown(&self) -> bool {
        self.example_shown
    }

    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::ExampleControl => {
                self.example_shown = !self.example_shown;
            }
            // An open example panel swallows body clicks.
            ClickTarget::Body if self.example_shown => {}
            ClickTarget::Body => {
                self.flipped = !self.flipped;
            }
        }
    }
}

/// Card states for the list currently on screen, plus the keyboard cursor.
#[derive(Clone, Debug, Default)]
pub struct DeckState {
    cards: Vec<CardState>,
    pub selected: usize,
}

impl DeckState {
    pub fn mounted(len: usize) -> Self {
        Self {
            cards: vec![CardState::default(); len],
            selected: 0,
        }
    }

    /// Unmount everything and mount `len` fresh cards.
    pub fn remount(&mut self, len: usize) {
        *self = Self::mounted(len);
    }

    /// Mount cards appended to the list without touching existing ones.
    pub fn sync_len(&mut self, len: usize) {
        self.cards.resize(len, CardState::default());
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardState> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardState> {
        self.cards.iter()
    }

    pub fn click(&mut self, index: usize, target: ClickTarget) -> Option<CardState> {
        let card = self.cards.get_mut(index)?;
        card.click(target);
        Some(*card)
    }

    pub fn click_selected(&mut self, target: ClickTarget) -> Option<CardState> {
        self.click(self.selected, target)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
