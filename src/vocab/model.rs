use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyCard {
    pub id: u32,
    pub word: String,
    pub definition: String,
    pub example: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasalVerb {
    pub verb: String,
    pub definition: String,
    pub example: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idiom {
    pub phrase: String,
    pub meaning: String,
    pub example: String,
}

/// What a flashcard shows, independent of which list it came from.
///
/// Front: `headline`, `annotation`, `image`. Back: `detail`.
/// The example panel shows `example`.
pub trait CardFace {
    fn headline(&self) -> &str;
    fn detail(&self) -> &str;
    fn example(&self) -> &str;

    fn annotation(&self) -> Option<&str> {
        None
    }

    fn image(&self) -> Option<&str> {
        None
    }
}

impl CardFace for VocabularyCard {
    fn headline(&self) -> &str {
        &self.word
    }

    fn detail(&self) -> &str {
        &self.definition
    }

    fn example(&self) -> &str {
        &self.example
    }

    fn annotation(&self) -> Option<&str> {
        self.pronunciation.as_deref()
    }

    fn image(&self) -> Option<&str> {
        Some(&self.image)
    }
}

impl CardFace for PhrasalVerb {
    fn headline(&self) -> &str {
        &self.verb
    }

    fn detail(&self) -> &str {
        &self.definition
    }

    fn example(&self) -> &str {
        &self.example
    }
}

impl CardFace for Idiom {
    fn headline(&self) -> &str {
        &self.phrase
    }

    fn detail(&self) -> &str {
        &self.meaning
    }

    fn example(&self) -> &str {
        &self.example
    }
}
