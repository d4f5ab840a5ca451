//! Corpus sources.
//!
//! Corpus file discovery and paragraph extraction.
pub mod bnc;

pub use bnc::{parse_paragraphs, read_paragraphs, CorpusFiles, TextKind};
