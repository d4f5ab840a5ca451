/*! Content processing

Contains structures and functions to turn paragraphs into a deduplicated mini-document corpus,
and to derive a restricted vocabulary from it:

paragraphs -> [group_documents] -> [Segmenter] -> [Encoder] -> [dedup] -> [VocabularyFilter]
!*/
pub mod dedup;
pub mod document;
pub mod encode;
pub mod segment;
pub mod vocab;

pub use dedup::{dedup, Deduplicator};
pub use document::{group_documents, Document, DocumentKey, ParagraphRecord};
pub use encode::{EncodedUnit, Encoder};
pub use segment::Segmenter;
pub use vocab::{Vocabulary, VocabularyFilter};
