use crossterm::event::KeyEvent;

use crate::ui::line_input::{InputResult, LineInput};
use crate::vocab::model::VocabularyCard;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8?auto=format&fit=crop&q=80&w=400";

/// User-added words, in insertion order. Only grows.
#[derive(Clone, Debug, Default)]
pub struct CustomVocabulary {
    cards: Vec<VocabularyCard>,
}

impl CustomVocabulary {
    pub fn cards(&self) -> &[VocabularyCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card. Its id is the list length after insertion, so ids are
    /// only unique while nothing is ever removed.
    pub fn push(&mut self, word: &str, definition: &str, example: &str, image: &str) -> &VocabularyCard {
        let id = self.cards.len() as u32 + 1;
        self.cards.push(VocabularyCard {
            id,
            word: word.to_string(),
            definition: definition.to_string(),
            example: example.to_string(),
            image: image.to_string(),
            pronunciation: None,
        });
        &self.cards[self.cards.len() - 1]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Word,
    Definition,
    Example,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Word, FormField::Definition, FormField::Example];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Word => "Word",
            FormField::Definition => "Definition",
            FormField::Example => "Example",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Word => FormField::Definition,
            FormField::Definition => FormField::Example,
            FormField::Example => FormField::Word,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Word => FormField::Example,
            FormField::Definition => FormField::Word,
            FormField::Example => FormField::Definition,
        }
    }
}

/// What the app should do after the form consumed a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Editing,
    Submitted,
    Rejected,
    Closed,
}

/// The "Add Custom Word" form.
#[derive(Clone, Debug)]
pub struct WordForm {
    word: LineInput,
    definition: LineInput,
    example: LineInput,
    pub focused: FormField,
}

impl Default for WordForm {
    fn default() -> Self {
        Self {
            word: LineInput::default(),
            definition: LineInput::default(),
            example: LineInput::default(),
            focused: FormField::Word,
        }
    }
}

impl WordForm {
    pub fn field(&self, field: FormField) -> &LineInput {
        match field {
            FormField::Word => &self.word,
            FormField::Definition => &self.definition,
            FormField::Example => &self.example,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut LineInput {
        match field {
            FormField::Word => &mut self.word,
            FormField::Definition => &mut self.definition,
            FormField::Example => &mut self.example,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        self.field(field).value()
    }

    pub fn set(&mut self, field: FormField, text: &str) {
        *self.field_mut(field) = LineInput::new(text);
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// All three fields non-empty. Whitespace counts as content.
    pub fn is_submittable(&self) -> bool {
        FormField::ALL.iter().all(|&f| !self.field(f).is_empty())
    }

    pub fn clear(&mut self) {
        for field in FormField::ALL {
            self.field_mut(field).clear();
        }
    }

    /// Append the typed word to `custom` and clear the form. A form with any
    /// empty field is left untouched and nothing is appended.
    pub fn submit<'a>(
        &mut self,
        custom: &'a mut CustomVocabulary,
        placeholder_image: &str,
    ) -> Option<&'a VocabularyCard> {
        if !self.is_submittable() {
            return None;
        }
        let card = custom.push(
            self.word.value(),
            self.definition.value(),
            self.example.value(),
            placeholder_image,
        );
        self.clear();
        self.focused = FormField::Word;
        Some(card)
    }

    /// Route a key to the focused field. Submission itself is left to the
    /// caller, which owns the custom list.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        let focused = self.focused;
        match self.field_mut(focused).handle(key) {
            InputResult::Continue => FormOutcome::Editing,
            InputResult::NextField => {
                self.focus_next();
                FormOutcome::Editing
            }
            InputResult::PrevField => {
                self.focus_prev();
                FormOutcome::Editing
            }
            InputResult::Cancel => FormOutcome::Closed,
            InputResult::Submit => {
                if self.is_submittable() {
                    FormOutcome::Submitted
                } else {
                    FormOutcome::Rejected
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn filled_form() -> WordForm {
        let mut form = WordForm::default();
        form.set(FormField::Word, "resilient");
        form.set(FormField::Definition, "able to recover quickly");
        form.set(FormField::Example, "She is resilient.");
        form
    }

    #[test]
    fn submit_appends_card_with_placeholder_and_clears_fields() {
        let mut form = filled_form();
        let mut custom = CustomVocabulary::default();

        let card = form.submit(&mut custom, DEFAULT_PLACEHOLDER_IMAGE).cloned().unwrap();
        assert_eq!(card.id, 1);
        assert_eq!(card.word, "resilient");
        assert_eq!(card.definition, "able to recover quickly");
        assert_eq!(card.example, "She is resilient.");
        assert_eq!(card.image, DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(card.pronunciation, None);

        assert_eq!(custom.len(), 1);
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn submit_with_any_empty_field_has_no_effect() {
        for missing in FormField::ALL {
            let mut form = filled_form();
            form.set(missing, "");
            let before: Vec<String> = FormField::ALL
                .iter()
                .map(|&f| form.value(f).to_string())
                .collect();
            let mut custom = CustomVocabulary::default();

            assert!(form.submit(&mut custom, DEFAULT_PLACEHOLDER_IMAGE).is_none());
            assert!(custom.is_empty());
            let after: Vec<String> = FormField::ALL
                .iter()
                .map(|&f| form.value(f).to_string())
                .collect();
            assert_eq!(before, after, "fields changed when {missing:?} was empty");
        }
    }

    #[test]
    fn ids_follow_list_length() {
        let mut custom = CustomVocabulary::default();
        for n in 1..=3 {
            let mut form = filled_form();
            let card = form.submit(&mut custom, "img").unwrap();
            assert_eq!(card.id, n);
        }
        let ids: Vec<u32> = custom.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn duplicates_and_whitespace_are_accepted_verbatim() {
        let mut custom = CustomVocabulary::default();
        let mut form = filled_form();
        form.submit(&mut custom, "img");
        let mut form = filled_form();
        form.set(FormField::Example, "  ");
        let card = form.submit(&mut custom, "img").unwrap();
        assert_eq!(card.word, "resilient");
        assert_eq!(card.example, "  ");
        assert_eq!(custom.len(), 2);
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut form = WordForm::default();
        assert_eq!(form.focused, FormField::Word);
        form.focus_next();
        assert_eq!(form.focused, FormField::Definition);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused, FormField::Word);
        form.focus_prev();
        assert_eq!(form.focused, FormField::Example);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = WordForm::default();
        form.handle_key(key(KeyCode::Char('a')));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('b')));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('c')));
        assert_eq!(form.value(FormField::Word), "a");
        assert_eq!(form.value(FormField::Definition), "b");
        assert_eq!(form.value(FormField::Example), "c");
    }

    #[test]
    fn enter_reports_submittability() {
        let mut form = WordForm::default();
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormOutcome::Rejected);
        let mut form = filled_form();
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormOutcome::Submitted);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormOutcome::Closed);
    }
}
