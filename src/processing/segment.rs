/*! Mini-document segmentation.

Packs the paragraphs of a document into *mini documents*, spans of consecutive paragraphs
whose word count lies strictly between [Bounds::min] and [Bounds::max].

Packing is greedy. Paragraphs are read in order:
1. Empty paragraphs and paragraphs too long to ever fit (`>= max`) are skipped until one can seed a mini document.
1. Following paragraphs are appended as long as the total stays `< max`.
   The first one that does not fit is left for the next mini document.
1. Once every paragraph has been read, mini documents that are not longer than `min` are discarded.

Example, with bounds `(4, 10)` and paragraph lengths `[3, 12, 5, 4, 6, 2]`:
```text
[3]           seed, then 3+12 >= 10  -> candidate of 3 words (discarded, too short)
[12]          too long, skipped
[5, 4]        5+4 = 9 < 10, then 9+6 >= 10 -> candidate of 9 words (kept)
[6, 2]        6+2 = 8, no paragraphs left  -> candidate of 8 words (kept)
```
!*/
use log::debug;

use crate::filtering::{Bounds, Filter};

use super::document::Document;

/// Greedy paragraph packer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Segmenter {
    bounds: Bounds,
}

impl Segmenter {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Segment a [Document], see [Segmenter::segment].
    pub fn segment_document(&self, document: &Document) -> Vec<Vec<String>> {
        let mini_docs = self.segment(document.paragraphs());
        if mini_docs.is_empty() {
            debug!(
                "{:?}: no mini documents kept out of {} paragraphs",
                document.key(),
                document.paragraphs().len()
            );
        }
        mini_docs
    }

    /// Segment `paragraphs` into mini documents.
    ///
    /// Every returned mini document `m` satisfies `min < m.len() < max`,
    /// and its words appear in the same order as in `paragraphs`.
    pub fn segment(&self, paragraphs: &[Vec<String>]) -> Vec<Vec<String>> {
        self.candidates(paragraphs)
            .into_iter()
            .filter(|candidate| self.bounds.detect(candidate.as_slice()))
            .collect()
    }

    /// Build candidates, before length filtering.
    ///
    /// The last candidate can be empty (if no paragraph could seed it) or too short.
    fn candidates(&self, paragraphs: &[Vec<String>]) -> Vec<Vec<String>> {
        let mut candidates = Vec::new();
        let mut cursor = 0;

        while cursor < paragraphs.len() {
            let mut words: Vec<String> = Vec::new();

            // seek a paragraph that can start a mini document
            while cursor < paragraphs.len() {
                let paragraph = &paragraphs[cursor];
                cursor += 1;
                if self.bounds.can_seed(paragraph.len()) {
                    words.extend_from_slice(paragraph);
                    break;
                }
            }

            if words.is_empty() {
                // paragraphs exhausted while seeking
                candidates.push(words);
                break;
            }

            // grow while it fits
            while cursor < paragraphs.len() {
                let paragraph = &paragraphs[cursor];
                if !self.bounds.fits(words.len() + paragraph.len()) {
                    break;
                }
                words.extend_from_slice(paragraph);
                cursor += 1;
            }

            candidates.push(words);
        }

        candidates
    }
}
