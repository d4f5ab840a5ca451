//! Paragraph records and their grouping into documents.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single paragraph, as produced by a corpus reader.
///
/// `words` are lower-cased tokens, in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    pub document_id: String,
    pub document_index: usize,
    pub paragraph_index: usize,
    pub words: Vec<String>,
    /// Number of paragraphs in the enclosing document, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
}

impl ParagraphRecord {
    pub fn new(
        document_id: impl Into<String>,
        document_index: usize,
        paragraph_index: usize,
        words: Vec<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            document_index,
            paragraph_index,
            words,
            paragraph_count: None,
            word_count: None,
        }
    }

    /// Get the key of the document this paragraph belongs to.
    pub fn key(&self) -> DocumentKey {
        DocumentKey {
            document_id: self.document_id.clone(),
            document_index: self.document_index,
        }
    }
}

/// Identity of a document: the source it comes from and its position in that source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentKey {
    pub document_id: String,
    pub document_index: usize,
}

/// Ordered paragraphs of a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    key: DocumentKey,
    paragraphs: Vec<Vec<String>>,
}

impl Document {
    pub fn new(key: DocumentKey, paragraphs: Vec<Vec<String>>) -> Self {
        Self { key, paragraphs }
    }

    pub fn key(&self) -> &DocumentKey {
        &self.key
    }

    pub fn paragraphs(&self) -> &[Vec<String>] {
        &self.paragraphs
    }

    /// Total number of words over all paragraphs.
    pub fn nb_words(&self) -> usize {
        self.paragraphs.iter().map(Vec::len).sum()
    }
}

/// Group paragraphs by `(document_id, document_index)`.
///
/// Documents are returned in the order their first paragraph appears in `paragraphs`,
/// and each document's paragraphs are ordered by `paragraph_index` (ties keep input order).
pub fn group_documents<I>(paragraphs: I) -> Vec<Document>
where
    I: IntoIterator<Item = ParagraphRecord>,
{
    let mut positions: HashMap<DocumentKey, usize> = HashMap::new();
    let mut groups: Vec<(DocumentKey, Vec<(usize, Vec<String>)>)> = Vec::new();

    for paragraph in paragraphs {
        let key = paragraph.key();
        let idx = match positions.get(&key) {
            Some(idx) => *idx,
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        groups[idx].1.push((paragraph.paragraph_index, paragraph.words));
    }

    groups
        .into_iter()
        .map(|(key, mut paragraphs)| {
            paragraphs.sort_by_key(|(paragraph_index, _)| *paragraph_index);
            let paragraphs = paragraphs.into_iter().map(|(_, words)| words).collect();
            Document::new(key, paragraphs)
        })
        .collect()
}
