//! Pipelines.
//!
//! - [Paragraphs] extracts paragraphs from corpus files into a paragraph dump.
//! - [MiniDocs] turns a paragraph dump into a deduplicated mini-document corpus.
//! - [VocabularyBuilder] derives a restricted vocabulary from such a corpus.
//!
//! All of them implement the light [pipeline::Pipeline] trait.
pub mod minidocs;
pub mod paragraphs;
pub mod pipeline;
pub mod vocabulary;

pub use minidocs::MiniDocs;
pub use paragraphs::Paragraphs;
pub use pipeline::Pipeline;
pub use vocabulary::VocabularyBuilder;
