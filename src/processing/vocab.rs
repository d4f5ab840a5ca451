/*! Restricted vocabulary

Counts the words of a mini-document corpus, restricted to a reference word list.
Stopwords and words occurring less than a minimum number of times are then removed.

Words that are not in the reference list are never counted.
!*/
use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::encode::EncodedUnit;

/// Word frequencies, sorted by word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary(BTreeMap<String, u64>);

impl Vocabulary {
    pub fn get(&self, word: &str) -> Option<u64> {
        self.0.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, u64> {
        self.0
    }
}

impl FromIterator<(String, u64)> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Builds a [Vocabulary] from encoded units.
#[derive(Debug)]
pub struct VocabularyFilter {
    reference: HashSet<String>,
    stopwords: HashSet<String>,
    min_count: u64,
    sep: char,
}

impl VocabularyFilter {
    pub fn new(reference: HashSet<String>, stopwords: HashSet<String>) -> Self {
        Self {
            reference,
            stopwords,
            min_count: 5,
            sep: '|',
        }
    }

    /// Set the minimum number of occurrences for a word to be kept (default 5).
    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }

    /// Set the separator used when the units were encoded (default `|`).
    pub fn with_sep(mut self, sep: char) -> Self {
        self.sep = sep;
        self
    }

    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    /// Count reference words over `units`, then drop stopwords and rare words.
    pub fn count<'a, I>(&self, units: I) -> Vocabulary
    where
        I: IntoIterator<Item = &'a EncodedUnit>,
    {
        let mut counter: HashMap<&str, u64> = self
            .reference
            .iter()
            .map(|word| (word.as_str(), 0))
            .collect();

        let mut nb_tokens = 0u64;
        for unit in units {
            for token in unit.words(self.sep) {
                nb_tokens += 1;
                if let Some(count) = counter.get_mut(token) {
                    *count += 1;
                }
            }
        }
        debug!(
            "counted {} tokens against {} reference words",
            nb_tokens,
            counter.len()
        );

        let vocabulary: Vocabulary = counter
            .into_iter()
            .filter(|(word, count)| !self.stopwords.contains(*word) && *count >= self.min_count)
            .map(|(word, count)| (word.to_string(), count))
            .collect();

        info!(
            "vocabulary: {} words kept out of {} reference words",
            vocabulary.len(),
            self.reference.len()
        );
        vocabulary
    }
}
