pub mod index;
pub mod normalize;
pub mod persist;
pub mod score;

pub use index::{DocId, DocMeta, DocumentFrequencies, InvertedIndex};
pub use score::{score_document, ScoreRow};
