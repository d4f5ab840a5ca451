//! Content-hash based duplicate detection.
use std::collections::HashSet;

use sha2::{Digest, Sha256};

use super::FilterMut;

/// Lowercase hexadecimal SHA-256 digest of `content`.
pub fn checksum(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

/// Remembers the SHA-256 digest of every item it is shown.
///
/// [FilterMut::detect_mut] returns `true` the first time some content is seen,
/// and `false` for every later item with the same digest.
#[derive(Debug, Default)]
pub struct DigestFilter {
    seen: HashSet<[u8; 32]>,
}

impl DigestFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct digests seen so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl FilterMut<&[u8]> for DigestFilter {
    fn detect_mut(&mut self, content: &[u8]) -> bool {
        let digest: [u8; 32] = Sha256::digest(content).into();
        self.seen.insert(digest)
    }
}
