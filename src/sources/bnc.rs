/*! BNC-style corpus files

A corpus is a directory tree of `.xml` files.
Each file holds either written (`<wtext`) or spoken (`<stext`) material.

Paragraphs are read from the markup in the following way:
```text
<div level="1">           -> one document per top-level division, numbered in file order
  <p>                     -> one paragraph per <p>, numbered inside its division
    <w>Hello </w>         -> one word per <w>, whitespace-trimmed and lower-cased
    <w>World</w>
  </p>
</div>
```
!*/
use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use log::{debug, info};
use rayon::prelude::*;
use roxmltree::{Node, ParsingOptions};

use crate::error::Error;
use crate::processing::ParagraphRecord;

/// Kind of material a corpus file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Written,
    Spoken,
}

impl TextKind {
    /// Tag that marks a file as containing this kind of material.
    pub fn signature(&self) -> &'static str {
        match self {
            TextKind::Written => "<wtext",
            TextKind::Spoken => "<stext",
        }
    }
}

/// Sorted list of the `.xml` files of a corpus.
#[derive(Debug, Clone)]
pub struct CorpusFiles {
    files: Vec<PathBuf>,
}

impl CorpusFiles {
    /// List every `.xml` file under `root`, recursively.
    pub fn new(root: &Path) -> Result<Self, Error> {
        let root_str = root
            .to_str()
            .ok_or_else(|| Error::Custom(format!("non UTF-8 corpus path: {:?}", root)))?;
        let pattern = Path::new(&Pattern::escape(root_str))
            .join("**")
            .join("*.xml");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("non UTF-8 corpus path: {:?}", root)))?;

        let mut files = Vec::new();
        for entry in glob(pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        info!("found {} corpus files in {:?}", files.len(), root);
        Ok(Self { files })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Keep only files that contain `kind`'s signature.
    ///
    /// Files are read concurrently, as raw bytes. Order is kept.
    pub fn of_kind(&self, kind: TextKind) -> Result<Vec<PathBuf>, Error> {
        let signature = kind.signature().as_bytes();
        let matches: Vec<Option<PathBuf>> = self
            .files
            .par_iter()
            .map(|path| -> Result<Option<PathBuf>, Error> {
                let content = std::fs::read(path)?;
                let found = content.windows(signature.len()).any(|w| w == signature);
                Ok(found.then(|| path.clone()))
            })
            .collect::<Result<_, Error>>()?;

        let files: Vec<PathBuf> = matches.into_iter().flatten().collect();
        debug!("{} files of kind {:?}", files.len(), kind);
        Ok(files)
    }

    pub fn written(&self) -> Result<Vec<PathBuf>, Error> {
        self.of_kind(TextKind::Written)
    }

    pub fn spoken(&self) -> Result<Vec<PathBuf>, Error> {
        self.of_kind(TextKind::Spoken)
    }

    /// Every file, or only the files of `kind` if there is one.
    pub fn select(&self, kind: Option<TextKind>) -> Result<Vec<PathBuf>, Error> {
        match kind {
            Some(kind) => self.of_kind(kind),
            None => Ok(self.files.clone()),
        }
    }
}

fn is_element(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Concatenated text of `node` and its descendants.
fn text_content(node: &Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Extract the paragraphs of a corpus file's content.
///
/// `document_id` is copied into every record.
pub fn parse_paragraphs(
    document_id: &str,
    xml: &str,
) -> Result<Vec<ParagraphRecord>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)?;

    let divs = doc
        .descendants()
        .filter(|n| is_element(n, "div") && n.attribute("level") == Some("1"));

    let mut records = Vec::new();
    for (document_index, div) in divs.enumerate() {
        let paragraphs: Vec<Node> = div.descendants().filter(|n| is_element(n, "p")).collect();
        let paragraph_count = paragraphs.len();

        for (paragraph_index, paragraph) in paragraphs.iter().enumerate() {
            let words: Vec<String> = paragraph
                .descendants()
                .filter(|n| is_element(n, "w"))
                .map(|w| text_content(&w).trim().to_lowercase())
                .collect();

            records.push(ParagraphRecord {
                document_id: document_id.to_string(),
                document_index,
                paragraph_index,
                paragraph_count: Some(paragraph_count),
                word_count: Some(words.len()),
                words,
            });
        }
    }

    Ok(records)
}

/// Read and extract the paragraphs of a corpus file.
///
/// The file path is used as document identifier.
pub fn read_paragraphs(path: &Path) -> Result<Vec<ParagraphRecord>, Error> {
    let xml = std::fs::read_to_string(path)?;
    let records = parse_paragraphs(&path.to_string_lossy(), &xml).map_err(|e| Error::Xml {
        path: path.to_path_buf(),
        err: e,
    })?;
    debug!("{:?}: {} paragraphs", path, records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRITTEN: &str = r#"<?xml version="1.0"?>
<bncDoc xml:id="A00">
  <teiHeader><fileDesc><titleStmt><title>Sample</title></titleStmt></fileDesc></teiHeader>
  <wtext type="FICTION">
    <div level="1" n="1">
      <head><s n="1"><w c5="NN1">Title </w></s></head>
      <p>
        <s n="2"><w c5="AT0">The </w><w c5="NN1">Cat </w><w c5="VVD">sat</w><c c5="PUN">.</c></s>
      </p>
      <p>
        <s n="3"><w c5="PNP">It </w><w c5="VVD">SLEPT</w></s>
      </p>
    </div>
    <div level="1" n="2">
      <div level="2"><p><s n="4"><w>Nested </w><hi><w>deep</w></hi></s></p></div>
    </div>
  </wtext>
</bncDoc>
"#;

    fn corpus() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("A/A0")).unwrap();
        std::fs::create_dir_all(root.join("K/K1")).unwrap();
        std::fs::write(
            root.join("A/A0/A00.xml"),
            "<bncDoc><wtext type=\"FICTION\"></wtext></bncDoc>",
        )
        .unwrap();
        std::fs::write(root.join("A/A0/A01.xml"), "<bncDoc><wtext></wtext></bncDoc>").unwrap();
        std::fs::write(root.join("K/K1/K10.xml"), "<bncDoc><stext></stext></bncDoc>").unwrap();
        std::fs::write(root.join("K/K1/notes.txt"), "<wtext").unwrap();
        dir
    }

    #[test]
    fn lists_xml_files() {
        let dir = corpus();
        let files = CorpusFiles::new(dir.path()).unwrap();
        let names: Vec<_> = files
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A00.xml", "A01.xml", "K10.xml"]);
    }

    #[test]
    fn root_with_glob_metacharacters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("bnc[2007]*?");
        std::fs::create_dir_all(root.join("A")).unwrap();
        std::fs::write(root.join("A/A00.xml"), "<bncDoc/>").unwrap();

        let files = CorpusFiles::new(&root).unwrap();
        assert_eq!(files.files(), &[root.join("A/A00.xml")]);
    }

    #[test]
    fn written_and_spoken() {
        let dir = corpus();
        let files = CorpusFiles::new(dir.path()).unwrap();
        assert_eq!(files.written().unwrap().len(), 2);
        let spoken = files.spoken().unwrap();
        assert_eq!(spoken, vec![dir.path().join("K/K1/K10.xml")]);
        assert_eq!(files.select(None).unwrap().len(), 3);
        assert_eq!(files.select(Some(TextKind::Spoken)).unwrap(), spoken);
    }

    #[test]
    fn kind_of_non_utf8_file() {
        let dir = corpus();
        let mut content = b"<bncDoc><stext>".to_vec();
        content.extend_from_slice(&[0xff, 0xfe, 0x00]);
        std::fs::write(dir.path().join("K/K1/K11.xml"), content).unwrap();

        let files = CorpusFiles::new(dir.path()).unwrap();
        assert_eq!(files.spoken().unwrap().len(), 2);
        assert_eq!(files.written().unwrap().len(), 2);
    }

    #[test]
    fn empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let files = CorpusFiles::new(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn parse_divisions_and_paragraphs() {
        let records = parse_paragraphs("A00.xml", WRITTEN).unwrap();
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first.document_id, "A00.xml");
        assert_eq!(first.document_index, 0);
        assert_eq!(first.paragraph_index, 0);
        assert_eq!(first.paragraph_count, Some(2));
        // head words and punctuation are not part of paragraphs
        assert_eq!(first.words, vec!["the", "cat", "sat"]);
        assert_eq!(first.word_count, Some(3));

        assert_eq!(records[1].paragraph_index, 1);
        assert_eq!(records[1].words, vec!["it", "slept"]);

        // paragraphs of nested divisions belong to their top-level division
        let nested = &records[2];
        assert_eq!(nested.document_index, 1);
        assert_eq!(nested.paragraph_index, 0);
        assert_eq!(nested.paragraph_count, Some(1));
        assert_eq!(nested.words, vec!["nested", "deep"]);
    }

    #[test]
    fn parse_without_divisions() {
        let records = parse_paragraphs("x", "<bncDoc><stext><u><s/></u></stext></bncDoc>");
        assert!(records.unwrap().is_empty());
    }

    #[test]
    fn read_invalid_xml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        std::fs::write(&path, "<bncDoc><wtext></bncDoc>").unwrap();
        assert!(matches!(read_paragraphs(&path), Err(Error::Xml { .. })));
    }

    #[test]
    fn read_uses_path_as_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("A00.xml");
        std::fs::write(&path, WRITTEN).unwrap();
        let records = read_paragraphs(&path).unwrap();
        assert!(records.iter().all(|r| r.document_id == path.to_string_lossy()));
    }
}
