/*! Deduplication

Mini documents are deduplicated by their SHA-256 digest (see [DigestFilter]).
The first occurrence of a given content is kept, and the corpus keeps first-seen order.
!*/
use log::info;

use crate::filtering::{DigestFilter, FilterMut};

use super::encode::EncodedUnit;

/// Order-preserving, digest based deduplicator.
///
/// Units are kept in the order they were first pushed.
#[derive(Debug, Default)]
pub struct Deduplicator {
    filter: DigestFilter,
    units: Vec<EncodedUnit>,
    nb_duplicates: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit. Returns `false` if an identical unit has already been pushed.
    pub fn push(&mut self, unit: EncodedUnit) -> bool {
        if self.filter.detect_mut(unit.as_bytes()) {
            self.units.push(unit);
            true
        } else {
            self.nb_duplicates += 1;
            false
        }
    }

    /// Number of unique units kept so far.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of rejected duplicates.
    pub fn nb_duplicates(&self) -> usize {
        self.nb_duplicates
    }

    pub fn into_units(self) -> Vec<EncodedUnit> {
        self.units
    }
}

impl Extend<EncodedUnit> for Deduplicator {
    fn extend<T: IntoIterator<Item = EncodedUnit>>(&mut self, iter: T) {
        for unit in iter {
            self.push(unit);
        }
    }
}

/// Deduplicate `units`, keeping first occurrences in their original order.
pub fn dedup<I>(units: I) -> Vec<EncodedUnit>
where
    I: IntoIterator<Item = EncodedUnit>,
{
    let mut dedup = Deduplicator::new();
    dedup.extend(units);
    info!(
        "deduplication: kept {} units, removed {} duplicates",
        dedup.len(),
        dedup.nb_duplicates()
    );
    dedup.into_units()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(contents: &[&str]) -> Vec<EncodedUnit> {
        contents
            .iter()
            .map(|c| EncodedUnit::from(c.to_string()))
            .collect()
    }

    #[test]
    fn keeps_first_seen_order() {
        let input = units(&["b|b", "a|a", "b|b", "c|c", "a|a", "b|b"]);
        let expected = units(&["b|b", "a|a", "c|c"]);
        assert_eq!(dedup(input), expected);
    }

    #[test]
    fn counts_duplicates() {
        let mut d = Deduplicator::new();
        assert!(d.push("x".to_string().into()));
        assert!(!d.push("x".to_string().into()));
        assert!(d.push("y".to_string().into()));
        assert_eq!(d.len(), 2);
        assert_eq!(d.nb_duplicates(), 1);
    }

    #[test]
    fn idempotent() {
        let input = units(&["one", "two", "one", "three", "two"]);
        let once = dedup(input);
        let twice = dedup(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty() {
        assert!(dedup(Vec::new()).is_empty());
    }
}
