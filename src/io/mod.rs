/*!
# IO utilities

Record dumps and word lists loading/saving.

Large sequences (paragraphs, mini-document corpora) are stored as gzipped JSON lines,
prefixed by the number of records:
```text
3
"first|record"
"second|record"
"third|record"
```
See [writer::RecordWriter] and [reader::RecordReader].
!*/
pub mod reader;
pub mod wordlist;
pub mod writer;

pub use reader::{load, RecordReader};
pub use wordlist::{read_wordlist, read_wordlists};
pub use writer::{dump, RecordWriter, WriterTrait};
