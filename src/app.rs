use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::flashcard::{ClickTarget, DeckState};
use crate::navigation::{Navigator, Section, SectionContent, section_content};
use crate::ui::theme::Theme;
use crate::vocab::intake::FormOutcome;
use crate::vocab::{Catalog, CustomVocabulary, WordForm};

/// Which part of the screen receives keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Nav,
    Cards,
    Form,
}

pub struct App {
    pub navigator: Navigator,
    pub catalog: Catalog,
    pub custom: CustomVocabulary,
    pub form: WordForm,
    pub deck: DeckState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    /// Where theme changes are persisted. `None` keeps config in memory only.
    pub config_path: Option<PathBuf>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let theme = Theme::load(&config.theme).unwrap_or_default();
        let navigator = Navigator::new(config.start_section());

        let mut app = Self {
            navigator,
            catalog,
            custom: CustomVocabulary::default(),
            form: WordForm::default(),
            deck: DeckState::default(),
            focus: Focus::Nav,
            theme,
            config,
            config_path: None,
            should_quit: false,
        };
        let len = app.content().len();
        app.deck.remount(len);
        app
    }

    pub fn section(&self) -> Section {
        self.navigator.active()
    }

    pub fn content(&self) -> SectionContent<'_> {
        section_content(self.navigator.active(), &self.catalog, &self.custom)
    }

    pub fn set_section(&mut self, section: Section) {
        if self.navigator.set_active(section) {
            self.on_section_changed();
        }
    }

    fn on_section_changed(&mut self) {
        let len = self.content().len();
        self.deck.remount(len);
        info!(section = %self.section(), cards = len, "section changed");

        if self.focus == Focus::Form && self.section() != Section::Vocabulary {
            self.focus = Focus::Nav;
        }
        if self.focus == Focus::Cards && self.deck.is_empty() {
            self.focus = Focus::Nav;
        }
    }

    pub fn click_card(&mut self, target: ClickTarget) {
        let index = self.deck.selected;
        if let Some(state) = self.deck.click_selected(target) {
            debug!(
                index,
                ?target,
                flipped = state.is_flipped(),
                example_shown = state.example_shown(),
                "card clicked"
            );
        }
    }

    /// Append the form's word to the custom list. Returns false (and changes
    /// nothing) when a field is empty.
    pub fn submit_form(&mut self) -> bool {
        let Some(card) = self
            .form
            .submit(&mut self.custom, &self.config.placeholder_image)
        else {
            debug!("add word ignored: empty field");
            return false;
        };
        info!(id = card.id, word = %card.word, "custom word added");

        if self.section() == Section::Vocabulary {
            let len = self.content().len();
            self.deck.sync_len(len);
        }
        true
    }

    pub fn focus_form(&mut self) {
        if self.section() == Section::Vocabulary {
            self.focus = Focus::Form;
        }
    }

    pub fn focus_cards(&mut self) {
        if !self.deck.is_empty() {
            self.focus = Focus::Cards;
        }
    }

    pub fn cycle_theme(&mut self) {
        let next = Theme::next_name(&self.config.theme);
        match Theme::load(&next) {
            Some(theme) => {
                self.theme = theme;
                self.config.theme = next;
                info!(theme = %self.config.theme, "theme changed");
            }
            None => {
                warn!(theme = %next, "theme failed to load");
                return;
            }
        }

        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save_to(path) {
                warn!(error = %err, "could not save config");
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Nav => self.handle_nav_key(key),
            Focus::Cards => self.handle_cards_key(key),
            Focus::Form => self.handle_form_key(key),
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => {
                if self.navigator.select_prev() {
                    self.on_section_changed();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.navigator.select_next() {
                    self.on_section_changed();
                }
            }
            KeyCode::Char(ch @ '1'..='9') => self.activate_digit(ch),
            KeyCode::Down | KeyCode::Enter | KeyCode::Tab | KeyCode::Char('j') => {
                self.focus_cards();
            }
            KeyCode::Char('a') => self.focus_form(),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
    }

    fn handle_cards_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => self.focus = Focus::Nav,
            KeyCode::Up | KeyCode::Char('k') => self.deck.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.deck.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.click_card(ClickTarget::Body),
            KeyCode::Char('e') => self.click_card(ClickTarget::ExampleControl),
            KeyCode::Char(ch @ '1'..='9') => self.activate_digit(ch),
            KeyCode::Char('a') => self.focus_form(),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match self.form.handle_key(key) {
            FormOutcome::Editing => {}
            FormOutcome::Submitted => {
                self.submit_form();
            }
            FormOutcome::Rejected => debug!("add word ignored: empty field"),
            FormOutcome::Closed => {
                self.focus = if self.deck.is_empty() {
                    Focus::Nav
                } else {
                    Focus::Cards
                };
            }
        }
    }

    fn activate_digit(&mut self, ch: char) {
        let Some(digit) = ch.to_digit(10) else {
            return;
        };
        if self.navigator.activate_index(digit as usize - 1) {
            self.on_section_changed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcard::Face;
    use crate::vocab::FormField;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default(), Catalog::load().unwrap())
    }

    fn type_str(app: &mut App, s: &str) {
        for ch in s.chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn starts_on_home_with_nav_focus() {
        let app = app();
        assert_eq!(app.section(), Section::Home);
        assert_eq!(app.focus, Focus::Nav);
        assert!(app.deck.is_empty());
    }

    #[test]
    fn unknown_theme_falls_back_to_bundled_default() {
        let config = Config {
            theme: "no-such-theme".to_string(),
            ..Config::default()
        };
        let app = App::new(config, Catalog::load().unwrap());
        assert_eq!(app.theme.name, crate::ui::theme::DEFAULT_THEME);
        assert_eq!(app.config.theme, "no-such-theme");
    }

    #[test]
    fn start_section_comes_from_config() {
        let config = Config {
            start_section: "idioms".to_string(),
            ..Config::default()
        };
        let app = App::new(config, Catalog::load().unwrap());
        assert_eq!(app.section(), Section::Idioms);
        assert_eq!(app.deck.len(), 3);
    }

    #[test]
    fn digit_keys_switch_section_and_remount() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.section(), Section::Vocabulary);
        assert_eq!(app.deck.len(), 5);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Cards);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.deck.get(0).unwrap().face(), Face::Back);

        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.section(), Section::PhrasalVerbs);
        assert_eq!(app.deck.len(), 3);
        assert!(app.deck.iter().all(|c| c.face() == Face::Front));

        // Coming back remounts the vocabulary cards fresh.
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.deck.get(0).unwrap().face(), Face::Front);
    }

    #[test]
    fn reselecting_the_same_section_keeps_card_state() {
        let mut app = app();
        app.set_section(Section::Idioms);
        app.click_card(ClickTarget::Body);
        app.set_section(Section::Idioms);
        assert!(app.deck.get(0).unwrap().is_flipped());
    }

    #[test]
    fn example_key_does_not_flip() {
        let mut app = app();
        app.set_section(Section::Idioms);
        app.focus_cards();
        app.handle_key(key(KeyCode::Char('e')));
        let card = app.deck.get(0).unwrap();
        assert!(card.example_shown());
        assert_eq!(card.face(), Face::Front);

        // Body click is swallowed while the example is open.
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.deck.get(0).unwrap().face(), Face::Front);
    }

    #[test]
    fn empty_section_cannot_take_card_focus() {
        let mut app = app();
        app.set_section(Section::Speaking);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.focus, Focus::Nav);
    }

    #[test]
    fn form_only_opens_on_vocabulary() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.focus, Focus::Nav);

        app.set_section(Section::Vocabulary);
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.focus, Focus::Form);

        app.set_section(Section::Idioms);
        assert_eq!(app.focus, Focus::Nav);
    }

    #[test]
    fn typing_in_form_does_not_trigger_shortcuts() {
        let mut app = app();
        app.set_section(Section::Vocabulary);
        app.focus_form();
        type_str(&mut app, "quit 2 at");
        assert!(!app.should_quit);
        assert_eq!(app.section(), Section::Vocabulary);
        assert_eq!(app.form.value(FormField::Word), "quit 2 at");
    }

    #[test]
    fn submitting_through_keys_appends_and_mounts_card() {
        let mut app = app();
        app.set_section(Section::Vocabulary);
        app.focus_cards();
        app.click_card(ClickTarget::Body);
        app.focus_form();

        type_str(&mut app, "resilient");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "able to recover quickly");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "She is resilient.");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.custom.len(), 1);
        assert_eq!(app.deck.len(), 6);
        // Existing card state survives the append.
        assert!(app.deck.get(0).unwrap().is_flipped());
        for field in FormField::ALL {
            assert_eq!(app.form.value(field), "");
        }
        assert_eq!(app.focus, Focus::Form);
    }

    #[test]
    fn incomplete_form_submission_changes_nothing() {
        let mut app = app();
        app.set_section(Section::Vocabulary);
        app.focus_form();
        type_str(&mut app, "lonely");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.custom.is_empty());
        assert_eq!(app.deck.len(), 5);
        assert_eq!(app.form.value(FormField::Word), "lonely");
    }

    #[test]
    fn esc_leaves_form_for_cards() {
        let mut app = app();
        app.set_section(Section::Vocabulary);
        app.focus_form();
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Cards);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Nav);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn arrows_walk_the_nav_bar() {
        let mut app = app();
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.section(), Section::Vocabulary);
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.section(), Section::Reading);
    }

    #[test]
    fn ctrl_c_quits_from_form() {
        let mut app = app();
        app.set_section(Section::Vocabulary);
        app.focus_form();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Char('2'));
        release.kind = KeyEventKind::Release;
        app.handle_key(release);
        assert_eq!(app.section(), Section::Home);
    }

    #[test]
    fn theme_cycle_persists_when_path_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = app();
        app.config_path = Some(path.clone());

        let before = app.config.theme.clone();
        app.handle_key(key(KeyCode::Char('t')));
        assert_ne!(app.config.theme, before);
        assert_eq!(app.theme.name, app.config.theme);

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.theme, app.config.theme);
    }
}
