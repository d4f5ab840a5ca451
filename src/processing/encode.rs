//! Mini-document encoding into separator-delimited units.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Replacement for separator occurrences inside words.
const ESCAPE: &str = "_";

/// A mini document rendered as a single string, words being delimited by a separator.
///
/// Serialized as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedUnit(String);

impl EncodedUnit {
    /// UTF-8 bytes of the unit, as hashed and stored.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split back into (escaped) words.
    pub fn words(&self, sep: char) -> impl Iterator<Item = &str> {
        self.0.split(sep)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for EncodedUnit {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for EncodedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Joins words with a separator, escaping the separator inside words.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    sep: char,
}

impl Encoder {
    pub fn new(sep: char) -> Self {
        Self { sep }
    }

    pub fn sep(&self) -> char {
        self.sep
    }

    pub fn encode<S: AsRef<str>>(&self, words: &[S]) -> EncodedUnit {
        let mut buf = [0; 4];
        let sep: &str = self.sep.encode_utf8(&mut buf);
        let joined = words
            .iter()
            .map(|word| word.as_ref().replace(sep, ESCAPE))
            .join(sep);
        EncodedUnit(joined)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self { sep: '|' }
    }
}
