//! Mini-document length bounds.
use crate::error::Error;

use super::Filter;

/// Open interval of accepted mini-document lengths, in words.
///
/// A mini-document of length `n` is kept iff `min < n < max`.
/// Default is `(250, 500)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: usize,
    max: usize,
}

impl Bounds {
    /// Create new bounds, failing if `min >= max`.
    pub fn new(min: usize, max: usize) -> Result<Self, Error> {
        if min >= max {
            return Err(Error::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Exclusive lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Exclusive upper bound.
    pub fn max(&self) -> usize {
        self.max
    }

    /// `true` if a paragraph of `len` words can seed a mini-document.
    #[inline]
    pub fn can_seed(&self, len: usize) -> bool {
        len > 0 && len < self.max
    }

    /// `true` if `len` words still fit strictly under the upper bound.
    #[inline]
    pub fn fits(&self, len: usize) -> bool {
        len < self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds { min: 250, max: 500 }
    }
}

impl<T> Filter<&[T]> for Bounds {
    fn detect(&self, words: &[T]) -> bool {
        self.min < words.len() && words.len() < self.max
    }
}
