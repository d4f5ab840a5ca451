/*! Word lists

Reference vocabularies and stopword lists are newline-delimited files.
Lines beginning with `#` are comments.

An empty line is an error: word lists are expected to be strictly one word per line.
Leading/trailing blank content of the whole file is ignored.
!*/
use std::collections::HashSet;
use std::path::Path;

use log::{debug, warn};

use crate::error::Error;

/// Default reference vocabulary file names.
pub const VOCABULARY_FILENAMES: [&str; 1] = ["2of4brif.txt"];

/// Default stopword list file names.
pub const STOPWORDS_FILENAMES: [&str; 2] = ["FoxStoplist.txt", "SmartStoplist.txt"];

/// Read the words of a single word list, in file order.
pub fn read_wordlist(path: &Path) -> Result<Vec<String>, Error> {
    let content = std::fs::read_to_string(path)?;
    let mut words = Vec::new();

    for (idx, line) in content.trim().split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return Err(Error::EmptyWordListLine {
                path: path.to_path_buf(),
                line: idx + 1,
            });
        }
        if line.starts_with('#') {
            continue;
        }
        words.push(line.to_string());
    }

    if words.is_empty() {
        warn!("{:?}: word list has no words", path);
    }
    debug!("{:?}: read {} words", path, words.len());
    Ok(words)
}

/// Read several word lists and return their union.
pub fn read_wordlists<P: AsRef<Path>>(paths: &[P]) -> Result<HashSet<String>, Error> {
    let mut words = HashSet::new();
    for path in paths {
        words.extend(read_wordlist(path.as_ref())?);
    }
    Ok(words)
}
