use crate::error::Error;

/// Incremental record sink.
pub trait WriterTrait {
    type Item;

    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    /// Flush and close the underlying file.
    fn finish(self) -> Result<(), Error>;
}
