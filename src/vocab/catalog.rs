use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::vocab::model::{Idiom, PhrasalVerb, VocabularyCard};

const VOCABULARY_JSON: &str = include_str!("../../assets/catalog/vocabulary.json");
const PHRASAL_VERBS_JSON: &str = include_str!("../../assets/catalog/phrasal_verbs.json");
const IDIOMS_JSON: &str = include_str!("../../assets/catalog/idioms.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {list} list: {source}")]
    Parse {
        list: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate vocabulary id {0}")]
    DuplicateId(u32),
}

/// Built-in, read-only card lists.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub vocabulary: Vec<VocabularyCard>,
    pub phrasal_verbs: Vec<PhrasalVerb>,
    pub idioms: Vec<Idiom>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(VOCABULARY_JSON, PHRASAL_VERBS_JSON, IDIOMS_JSON)
    }

    pub fn from_json(vocabulary: &str, phrasal_verbs: &str, idioms: &str) -> Result<Self, CatalogError> {
        let vocabulary: Vec<VocabularyCard> = parse_list("vocabulary", vocabulary)?;

        let mut seen = Vec::with_capacity(vocabulary.len());
        for card in &vocabulary {
            if seen.contains(&card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
            seen.push(card.id);
        }

        Ok(Self {
            vocabulary,
            phrasal_verbs: parse_list("phrasal verb", phrasal_verbs)?,
            idioms: parse_list("idiom", idioms)?,
        })
    }
}

fn parse_list<T: DeserializeOwned>(list: &'static str, json: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { list, source })
}
