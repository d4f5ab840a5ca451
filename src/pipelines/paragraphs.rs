//! Paragraph extraction pipeline
//!
//! # Processing
//! 1. Corpus files are listed (and optionally restricted to written or spoken material).
//! 1. Files are parsed concurrently, results are gathered back in sorted file order.
//! 1. Paragraphs are written as a record dump, ready for [super::MiniDocs].
use std::path::PathBuf;

use log::info;
use rayon::prelude::*;

use crate::error::Error;
use crate::io::dump;
use crate::processing::ParagraphRecord;
use crate::sources::{read_paragraphs, CorpusFiles, TextKind};

use super::Pipeline;

pub struct Paragraphs {
    root: PathBuf,
    dst: PathBuf,
    kind: Option<TextKind>,
}

impl Paragraphs {
    pub fn new(root: PathBuf, dst: PathBuf, kind: Option<TextKind>) -> Self {
        Self { root, dst, kind }
    }

    /// Extract the paragraphs of every selected corpus file, in file order.
    ///
    /// Fails on the first unreadable or malformed file.
    pub fn extract(&self) -> Result<Vec<ParagraphRecord>, Error> {
        let files = CorpusFiles::new(&self.root)?.select(self.kind)?;
        info!("extracting paragraphs from {} files", files.len());

        let per_file: Vec<Vec<ParagraphRecord>> = files
            .par_iter()
            .map(|path| read_paragraphs(path))
            .collect::<Result<_, Error>>()?;

        Ok(per_file.into_iter().flatten().collect())
    }
}

impl Pipeline<usize> for Paragraphs {
    /// Returns the number of paragraphs written.
    fn run(&self) -> Result<usize, Error> {
        let paragraphs = self.extract()?;

        info!("writing {} paragraphs to {:?}", paragraphs.len(), self.dst);
        dump(&paragraphs, &self.dst)?;
        Ok(paragraphs.len())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::io::load;

    use super::*;

    fn write_file(root: &Path, name: &str, body: &str) {
        let path = root.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    fn corpus() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "B/B0/B00.xml",
            concat!(
                r#"<bncDoc><wtext><div level="1">"#,
                "<p><w>Second </w><w>File</w></p>",
                "</div></wtext></bncDoc>"
            ),
        );
        write_file(
            dir.path(),
            "A/A0/A00.xml",
            concat!(
                r#"<bncDoc><wtext><div level="1">"#,
                "<p><w>First </w></p><p><w>File</w></p>",
                "</div></wtext></bncDoc>"
            ),
        );
        write_file(
            dir.path(),
            "K/K0/K00.xml",
            r#"<bncDoc><stext><div level="1"><p><w>Spoken</w></p></div></stext></bncDoc>"#,
        );
        dir
    }

    #[test]
    fn extract_in_file_order() {
        let dir = corpus();
        let p = Paragraphs::new(dir.path().to_path_buf(), PathBuf::new(), None);
        let records = p.extract().unwrap();

        let words: Vec<Vec<String>> = records.iter().map(|r| r.words.clone()).collect();
        assert_eq!(
            words,
            vec![
                vec!["first".to_string()],
                vec!["file".to_string()],
                vec!["second".to_string(), "file".to_string()],
                vec!["spoken".to_string()],
            ]
        );
        assert!(records[0].document_id.ends_with("A00.xml"));
        assert_eq!(records[1].paragraph_count, Some(2));
    }

    #[test]
    fn run_written_only() {
        let dir = corpus();
        let dst = dir.path().join("paragraphs.jsonl.gz");
        let p = Paragraphs::new(dir.path().to_path_buf(), dst.clone(), Some(TextKind::Written));
        assert_eq!(p.run().unwrap(), 3);

        let loaded: Vec<ParagraphRecord> = load(&dst).unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.iter().all(|r| !r.document_id.ends_with("K00.xml")));
        assert_eq!(loaded[2].word_count, Some(2));
    }

    #[test]
    fn malformed_file_fails() {
        let dir = corpus();
        write_file(dir.path(), "C/C0/C00.xml", "<bncDoc><wtext>");
        let p = Paragraphs::new(dir.path().to_path_buf(), PathBuf::new(), None);
        assert!(matches!(p.extract(), Err(Error::Xml { .. })));
    }
}
