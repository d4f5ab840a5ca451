//! Restricted vocabulary pipeline
//!
//! Loads reference and stopword lists, counts reference words over a mini-document corpus dump,
//! and writes the resulting [Vocabulary] as a JSON object.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::{load, read_wordlists};
use crate::processing::{EncodedUnit, Vocabulary, VocabularyFilter};

use super::Pipeline;

pub struct VocabularyBuilder {
    src: PathBuf,
    dst: PathBuf,
    vocabulary_files: Vec<PathBuf>,
    stopwords_files: Vec<PathBuf>,
    min_count: u64,
    sep: char,
}

impl VocabularyBuilder {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        vocabulary_files: Vec<PathBuf>,
        stopwords_files: Vec<PathBuf>,
        min_count: u64,
        sep: char,
    ) -> Self {
        Self {
            src,
            dst,
            vocabulary_files,
            stopwords_files,
            min_count,
            sep,
        }
    }

    /// Load word lists and build the filter.
    ///
    /// Fails on the first unreadable or malformed list.
    fn filter(&self) -> Result<VocabularyFilter, Error> {
        let reference = read_wordlists(&self.vocabulary_files)?;
        let stopwords = read_wordlists(&self.stopwords_files)?;
        info!(
            "{} reference words, {} stopwords",
            reference.len(),
            stopwords.len()
        );

        Ok(VocabularyFilter::new(reference, stopwords)
            .with_min_count(self.min_count)
            .with_sep(self.sep))
    }
}

impl Pipeline<Vocabulary> for VocabularyBuilder {
    fn run(&self) -> Result<Vocabulary, Error> {
        let filter = self.filter()?;

        info!("loading corpus from {:?}", self.src);
        let corpus: Vec<EncodedUnit> = load(&self.src)?;
        let vocabulary = filter.count(&corpus);

        info!("writing vocabulary to {:?}", self.dst);
        let mut writer = BufWriter::new(File::create(&self.dst)?);
        serde_json::to_writer_pretty(&mut writer, &vocabulary)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(vocabulary)
    }
}
