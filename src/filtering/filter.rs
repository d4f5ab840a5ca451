//! Filtering traits.
//!
//! `detect` returns `true` when the item should be *kept*.

/// Stateless filter: the same input always yields the same answer.
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}

/// Stateful filter, whose answer may depend on previously seen items.
///
/// The method name differs from [Filter::detect] so that a type can
/// implement both without ambiguity at call sites.
pub trait FilterMut<T>: Default {
    fn detect_mut(&mut self, item: T) -> bool;
}
