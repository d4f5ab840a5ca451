//! Gzipped, count-prefixed JSON lines reader.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Iterates over the records of a dump created by [crate::io::writer::RecordWriter].
///
/// Yields a [Error::TruncatedRecords] (then stops) if the dump holds less records than announced.
/// Lines after the announced count are ignored.
pub struct RecordReader<T> {
    lines: Lines<BufReader<MultiGzDecoder<File>>>,
    expected: usize,
    read: usize,
    _marker: PhantomData<T>,
}

impl<T> RecordReader<T>
where
    T: DeserializeOwned,
{
    /// Open a dump and read its record count.
    pub fn open(src: &Path) -> Result<Self, Error> {
        let file = File::open(src)?;
        let mut lines = BufReader::new(MultiGzDecoder::new(file)).lines();

        let expected = match lines.next() {
            Some(Ok(count)) => count.trim().parse::<usize>().map_err(|e| {
                Error::Custom(format!("{:?}: invalid record count {:?}: {}", src, count, e))
            })?,
            Some(Err(e)) => return Err(Error::Io(e)),
            None => return Err(Error::Custom(format!("{:?}: empty record dump", src))),
        };
        debug!("opened record dump {:?} ({} records)", src, expected);

        Ok(Self {
            lines,
            expected,
            read: 0,
            _marker: PhantomData,
        })
    }

    /// Number of records announced by the dump.
    pub fn expected(&self) -> usize {
        self.expected
    }
}

impl<T> Iterator for RecordReader<T>
where
    T: DeserializeOwned,
{
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.read >= self.expected {
            return None;
        }

        match self.lines.next() {
            Some(Ok(line)) => {
                self.read += 1;
                Some(serde_json::from_str::<T>(&line).map_err(Error::Serde))
            }
            Some(Err(e)) => {
                // give up after an io error
                self.read = self.expected;
                Some(Err(Error::Io(e)))
            }
            None => {
                let found = self.read;
                self.read = self.expected;
                Some(Err(Error::TruncatedRecords {
                    expected: self.expected,
                    found,
                }))
            }
        }
    }
}

/// Load every record of `src` in memory.
pub fn load<T: DeserializeOwned>(src: &Path) -> Result<Vec<T>, Error> {
    let reader = RecordReader::open(src)?;
    let mut records = Vec::with_capacity(reader.expected());
    for record in reader {
        records.push(record?);
    }
    Ok(records)
}
