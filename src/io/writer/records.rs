//! Gzipped, count-prefixed JSON lines writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use flate2::{write::GzEncoder, Compression};
use log::debug;
use serde::Serialize;

use crate::error::Error;

use super::WriterTrait;

/// Writes exactly `nb_records` records of type `T` into a gzipped file.
///
/// The record count is written first, so it has to be known at creation.
/// [WriterTrait::finish] fails if less records than announced have been written.
pub struct RecordWriter<T> {
    handle: GzEncoder<BufWriter<File>>,
    path: PathBuf,
    expected: usize,
    written: usize,
    _marker: PhantomData<T>,
}

impl<T> RecordWriter<T>
where
    T: Serialize,
{
    /// Create (or truncate) `dst` and write the record count.
    pub fn create(dst: &Path, nb_records: usize) -> Result<Self, Error> {
        debug!("creating record dump {:?} ({} records)", dst, nb_records);
        let file = File::create(dst)?;
        let mut handle = GzEncoder::new(BufWriter::new(file), Compression::default());
        writeln!(handle, "{}", nb_records)?;

        Ok(Self {
            handle,
            path: dst.to_path_buf(),
            expected: nb_records,
            written: 0,
            _marker: PhantomData,
        })
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<T> WriterTrait for RecordWriter<T>
where
    T: Serialize,
{
    type Item = T;

    fn write(&mut self, vals: Vec<T>) -> Result<(), Error> {
        for val in &vals {
            self.write_single(val)?;
        }
        Ok(())
    }

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        if self.written == self.expected {
            return Err(Error::Custom(format!(
                "{:?}: trying to write more than the {} announced records",
                self.path, self.expected
            )));
        }
        serde_json::to_writer(&mut self.handle, val)?;
        self.handle.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn finish(self) -> Result<(), Error> {
        if self.written != self.expected {
            return Err(Error::TruncatedRecords {
                expected: self.expected,
                found: self.written,
            });
        }
        let mut inner = self.handle.finish()?;
        inner.flush()?;
        Ok(())
    }
}

/// Write all `records` into `dst`.
pub fn dump<T: Serialize>(records: &[T], dst: &Path) -> Result<(), Error> {
    let mut writer = RecordWriter::create(dst, records.len())?;
    for record in records {
        writer.write_single(record)?;
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::MultiGzDecoder;

    use super::*;

    #[test]
    fn dump_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.jsonl.gz");
        dump(&["a|b".to_string(), "c".to_string()], &path).unwrap();

        let mut content = String::new();
        MultiGzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "2\n\"a|b\"\n\"c\"\n");
    }

    #[test]
    fn too_many_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = RecordWriter::create(&dir.path().join("x.gz"), 1).unwrap();
        w.write_single(&1u32).unwrap();
        assert!(w.write_single(&2u32).is_err());
    }

    #[test]
    fn too_few_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = RecordWriter::create(&dir.path().join("x.gz"), 3).unwrap();
        w.write(vec![1u32, 2]).unwrap();
        assert_eq!(w.written(), 2);
        assert!(matches!(
            w.finish(),
            Err(Error::TruncatedRecords {
                expected: 3,
                found: 2
            })
        ));
    }
}
