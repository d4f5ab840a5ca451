/*! Record reading

Counterpart of [crate::io::writer]: [RecordReader] iterates over the records of a dump.
!*/
mod records;

pub use records::{load, RecordReader};
