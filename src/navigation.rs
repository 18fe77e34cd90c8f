use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vocab::{CardFace, Catalog, CustomVocabulary, Idiom, PhrasalVerb, VocabularyCard};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Home,
    Vocabulary,
    PhrasalVerbs,
    Idioms,
    Speaking,
    Reading,
    Sentence,
    Feedback,
    MoreVocabulary,
    Pronunciation,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Home,
        Section::Vocabulary,
        Section::PhrasalVerbs,
        Section::Idioms,
        Section::Speaking,
        Section::Reading,
        Section::Sentence,
        Section::Feedback,
        Section::MoreVocabulary,
        Section::Pronunciation,
    ];

    pub fn as_tag(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Vocabulary => "vocabulary",
            Section::PhrasalVerbs => "phrasal-verbs",
            Section::Idioms => "idioms",
            Section::Speaking => "speaking",
            Section::Reading => "reading",
            Section::Sentence => "sentence",
            Section::Feedback => "feedback",
            Section::MoreVocabulary => "more-vocabulary",
            Section::Pronunciation => "pronunciation",
        }
    }

    /// Title and subtitle for sections that have content.
    pub fn heading(self) -> Option<(&'static str, &'static str)> {
        match self {
            Section::Vocabulary => Some((
                "Advanced Vocabulary",
                "Master these essential words for professional success",
            )),
            Section::PhrasalVerbs => Some((
                "Phrasal Verbs",
                "Essential expressions for natural conversation",
            )),
            Section::Idioms => Some((
                "Idioms and Expressions",
                "Master these common English expressions",
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_tag() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        section: Section::Home,
        label: "Home",
    },
    NavItem {
        section: Section::Vocabulary,
        label: "Vocabulary",
    },
    NavItem {
        section: Section::PhrasalVerbs,
        label: "Phrasal Verbs",
    },
    NavItem {
        section: Section::Idioms,
        label: "Idioms",
    },
    NavItem {
        section: Section::Speaking,
        label: "Speaking",
    },
    NavItem {
        section: Section::Reading,
        label: "Reading",
    },
];

/// Holds the active section. Any section is accepted.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    active: Section,
}

impl Navigator {
    pub fn new(initial: Section) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Returns true when the section actually changed.
    pub fn set_active(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }

    /// Position of the active section in the nav bar, if it has one.
    pub fn active_index(&self) -> Option<usize> {
        NAV_ITEMS.iter().position(|item| item.section == self.active)
    }

    pub fn activate_index(&mut self, index: usize) -> bool {
        match NAV_ITEMS.get(index) {
            Some(item) => self.set_active(item.section),
            None => false,
        }
    }

    pub fn select_next(&mut self) -> bool {
        let next = match self.active_index() {
            Some(idx) => (idx + 1) % NAV_ITEMS.len(),
            None => 0,
        };
        self.activate_index(next)
    }

    pub fn select_prev(&mut self) -> bool {
        let prev = match self.active_index() {
            Some(0) | None => NAV_ITEMS.len() - 1,
            Some(idx) => idx - 1,
        };
        self.activate_index(prev)
    }
}

/// What the main area shows for a section.
pub enum SectionContent<'a> {
    Vocabulary(Vec<&'a VocabularyCard>),
    PhrasalVerbs(&'a [PhrasalVerb]),
    Idioms(&'a [Idiom]),
    Empty,
}

impl<'a> SectionContent<'a> {
    pub fn len(&self) -> usize {
        match self {
            SectionContent::Vocabulary(cards) => cards.len(),
            SectionContent::PhrasalVerbs(verbs) => verbs.len(),
            SectionContent::Idioms(idioms) => idioms.len(),
            SectionContent::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn faces(&self) -> Vec<&'a dyn CardFace> {
        match self {
            SectionContent::Vocabulary(cards) => {
                cards.iter().map(|&c| c as &dyn CardFace).collect()
            }
            SectionContent::PhrasalVerbs(verbs) => {
                let verbs: &'a [PhrasalVerb] = *verbs;
                verbs.iter().map(|v| v as &dyn CardFace).collect()
            }
            SectionContent::Idioms(idioms) => {
                let idioms: &'a [Idiom] = *idioms;
                idioms.iter().map(|i| i as &dyn CardFace).collect()
            }
            SectionContent::Empty => Vec::new(),
        }
    }
}

/// Pure mapping from the active section to the cards on screen. Vocabulary
/// lists built-in words first, then custom ones in insertion order.
pub fn section_content<'a>(
    section: Section,
    catalog: &'a Catalog,
    custom: &'a CustomVocabulary,
) -> SectionContent<'a> {
    match section {
        Section::Vocabulary => SectionContent::Vocabulary(
            catalog.vocabulary.iter().chain(custom.cards()).collect(),
        ),
        Section::PhrasalVerbs => SectionContent::PhrasalVerbs(&catalog.phrasal_verbs),
        Section::Idioms => SectionContent::Idioms(&catalog.idioms),
        _ => SectionContent::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headlines(content: &SectionContent<'_>) -> Vec<String> {
        content.faces().iter().map(|f| f.headline().to_string()).collect()
    }

    #[test]
    fn starts_on_home_with_nothing_shown() {
        let nav = Navigator::default();
        let catalog = Catalog::load().unwrap();
        let custom = CustomVocabulary::default();
        assert_eq!(nav.active(), Section::Home);
        assert!(section_content(nav.active(), &catalog, &custom).is_empty());
    }

    #[test]
    fn each_section_shows_only_its_own_cards() {
        let catalog = Catalog::load().unwrap();
        let custom = CustomVocabulary::default();

        let vocab = section_content(Section::Vocabulary, &catalog, &custom);
        assert!(matches!(vocab, SectionContent::Vocabulary(_)));
        assert_eq!(headlines(&vocab)[0], "perseverance");
        assert_eq!(vocab.len(), 5);

        let verbs = section_content(Section::PhrasalVerbs, &catalog, &custom);
        assert_eq!(headlines(&verbs), vec!["push through", "keep up with", "work on"]);

        let idioms = section_content(Section::Idioms, &catalog, &custom);
        assert_eq!(idioms.len(), 3);
        assert!(headlines(&idioms).iter().all(|h| !h.contains("push")));
    }

    #[test]
    fn unimplemented_sections_are_empty() {
        let catalog = Catalog::load().unwrap();
        let custom = CustomVocabulary::default();
        for section in [
            Section::Home,
            Section::Speaking,
            Section::Reading,
            Section::Sentence,
            Section::Feedback,
            Section::MoreVocabulary,
            Section::Pronunciation,
        ] {
            assert!(section_content(section, &catalog, &custom).is_empty(), "{section}");
            assert!(section.heading().is_none());
        }
    }

    #[test]
    fn custom_words_follow_builtin_vocabulary() {
        let catalog = Catalog::load().unwrap();
        let mut custom = CustomVocabulary::default();
        custom.push("resilient", "able to recover quickly", "She is resilient.", "img");

        let vocab = section_content(Section::Vocabulary, &catalog, &custom);
        let names = headlines(&vocab);
        assert_eq!(names.len(), 6);
        assert_eq!(names.last().map(String::as_str), Some("resilient"));

        // Custom words never leak into other sections.
        assert_eq!(section_content(Section::Idioms, &catalog, &custom).len(), 3);
    }

    #[test]
    fn set_active_accepts_any_section() {
        let mut nav = Navigator::default();
        for section in Section::ALL {
            nav.set_active(section);
            assert_eq!(nav.active(), section);
        }
        assert!(!nav.set_active(Section::Pronunciation));
        assert!(nav.set_active(Section::Home));
    }

    #[test]
    fn nav_bar_selection_wraps() {
        let mut nav = Navigator::default();
        nav.select_prev();
        assert_eq!(nav.active(), Section::Reading);
        nav.select_next();
        assert_eq!(nav.active(), Section::Home);

        // Sections outside the bar restart from the first item.
        nav.set_active(Section::Feedback);
        assert_eq!(nav.active_index(), None);
        nav.select_next();
        assert_eq!(nav.active(), Section::Home);
    }

    #[test]
    fn activate_index_out_of_range_is_ignored() {
        let mut nav = Navigator::new(Section::Idioms);
        assert!(!nav.activate_index(42));
        assert_eq!(nav.active(), Section::Idioms);
        assert!(nav.activate_index(1));
        assert_eq!(nav.active(), Section::Vocabulary);
    }

    #[test]
    fn tags_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.as_tag().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "grammar".parse::<Section>(),
            Err(UnknownSection("grammar".to_string()))
        );
    }

    #[test]
    fn serde_uses_kebab_case_tags() {
        let json = serde_json::to_string(&Section::MoreVocabulary).unwrap();
        assert_eq!(json, "\"more-vocabulary\"");
        let parsed: Section = serde_json::from_str("\"phrasal-verbs\"").unwrap();
        assert_eq!(parsed, Section::PhrasalVerbs);
    }
}
