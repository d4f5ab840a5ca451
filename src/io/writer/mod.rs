/*!
# Record writing

[RecordWriter] writes a known number of records, one JSON value per line, into a gzipped file.
Records are serialized one at a time, so that large sequences never need to be rendered in memory at once.
!*/
mod records;
mod writertrait;
pub use records::{dump, RecordWriter};
pub use writertrait::WriterTrait;
