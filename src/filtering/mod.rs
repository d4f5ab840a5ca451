/*! Filtering utilities

Filters operate on mini-documents (word sequences) or on encoded units (raw bytes).

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [Bounds] for example)
- [filter::FilterMut] is implemented for filters that do have state (see [DigestFilter], which remembers what it has seen).
! */
mod digest;
mod filter;
mod length;

pub use digest::{checksum, DigestFilter};
pub use filter::Filter;
pub use filter::FilterMut;
pub use length::Bounds;
