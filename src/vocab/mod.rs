pub mod catalog;
pub mod intake;
pub mod model;

pub use catalog::{Catalog, CatalogError};
pub use intake::{CustomVocabulary, FormField, WordForm};
pub use model::{CardFace, Idiom, PhrasalVerb, VocabularyCard};
