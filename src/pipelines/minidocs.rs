//! Mini-document corpus generation pipeline
//!
//! # Processing
//! 1. Paragraphs are loaded from a record dump and grouped into documents.
//! 1. Each document is segmented into mini documents and encoded, concurrently.
//! 1. Results are gathered back in document order and deduplicated (first occurrence wins).
//! 1. The corpus is written as a record dump of strings.
use std::path::PathBuf;

use log::{debug, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::Bounds;
use crate::io::{dump, load};
use crate::processing::{dedup, group_documents, EncodedUnit, Encoder, ParagraphRecord, Segmenter};

use super::Pipeline;

pub struct MiniDocs {
    src: PathBuf,
    dst: PathBuf,
    segmenter: Segmenter,
    encoder: Encoder,
}

impl MiniDocs {
    pub fn new(src: PathBuf, dst: PathBuf, bounds: Bounds, sep: char) -> Self {
        debug!("mini documents bounds: {:?}, separator: {:?}", bounds, sep);
        Self {
            src,
            dst,
            segmenter: Segmenter::new(bounds),
            encoder: Encoder::new(sep),
        }
    }

    /// Build the deduplicated corpus from in-memory paragraphs.
    ///
    /// Corpus order is document order (first appearance of a document in `paragraphs`),
    /// then mini document order inside each document.
    pub fn build(&self, paragraphs: Vec<ParagraphRecord>) -> Vec<EncodedUnit> {
        let nb_paragraphs = paragraphs.len();
        let documents = group_documents(paragraphs);
        info!(
            "grouped {} paragraphs into {} documents",
            nb_paragraphs,
            documents.len()
        );

        // collect keeps the order of documents
        let units: Vec<Vec<EncodedUnit>> = documents
            .par_iter()
            .map(|document| {
                self.segmenter
                    .segment_document(document)
                    .iter()
                    .map(|mini_doc| self.encoder.encode(mini_doc))
                    .collect()
            })
            .collect();

        let nb_units: usize = units.iter().map(Vec::len).sum();
        info!("segmented into {} mini documents", nb_units);

        dedup(units.into_iter().flatten())
    }
}

impl Pipeline<usize> for MiniDocs {
    /// Returns the number of mini documents written.
    fn run(&self) -> Result<usize, Error> {
        info!("loading paragraphs from {:?}", self.src);
        let paragraphs: Vec<ParagraphRecord> = load(&self.src)?;

        let corpus = self.build(paragraphs);

        info!("writing {} mini documents to {:?}", corpus.len(), self.dst);
        dump(&corpus, &self.dst)?;
        Ok(corpus.len())
    }
}
