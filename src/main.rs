//! # minidocs
//!
//! Turns a paragraph-segmented corpus into a deduplicated corpus of length-bounded
//! *mini documents*, and derives a restricted vocabulary from it.
//!
//! ## Getting started
//!
//! ```sh
//! minidocs 0.1.0
//! mini-document corpus generation tool.
//!
//! USAGE:
//!     minidocs <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     build         Build a deduplicated mini-document corpus from paragraphs
//!     help          Prints this message or the help of the given subcommand(s)
//!     list          List corpus files
//!     paragraphs    Extract paragraphs from corpus files
//!     vocab         Compute a restricted vocabulary over a mini-document corpus
//! ```
//!
use std::path::{Path, PathBuf};

use structopt::StructOpt;

use minidocs::error::Error;
use minidocs::filtering::Bounds;
use minidocs::io::wordlist::{STOPWORDS_FILENAMES, VOCABULARY_FILENAMES};
use minidocs::pipelines::{MiniDocs, Paragraphs, Pipeline, VocabularyBuilder};
use minidocs::sources::{CorpusFiles, TextKind};

#[macro_use]
extern crate log;

mod cli;

/// resolve word list paths against `dir`, falling back on `defaults` if none are given.
fn wordlist_paths(dir: &Path, paths: Vec<PathBuf>, defaults: &[&str]) -> Vec<PathBuf> {
    if paths.is_empty() {
        defaults.iter().map(|name| dir.join(name)).collect()
    } else {
        paths.into_iter().map(|p| dir.join(p)).collect()
    }
}

/// material selected by `--written`/`--spoken` flags.
fn text_kind(written: bool, spoken: bool) -> Option<TextKind> {
    if written {
        Some(TextKind::Written)
    } else if spoken {
        Some(TextKind::Spoken)
    } else {
        None
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::MiniDocs::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::MiniDocs::List(l) => {
            let files = CorpusFiles::new(&l.root)?.select(text_kind(l.written, l.spoken))?;
            for file in files {
                println!("{}", file.display());
            }
        }

        cli::MiniDocs::Paragraphs(p) => {
            let kind = text_kind(p.written, p.spoken);
            let p = Paragraphs::new(p.root, p.dst, kind);
            let nb = p.run()?;
            info!("done: {} paragraphs", nb);
        }

        cli::MiniDocs::Build(b) => {
            let bounds = Bounds::new(b.min_length, b.max_length)?;
            let p = MiniDocs::new(b.src, b.dst, bounds, b.sep);
            let nb = p.run()?;
            info!("done: {} mini documents", nb);
        }

        cli::MiniDocs::Vocab(v) => {
            let vocabulary_files =
                wordlist_paths(&v.wordlist_dir, v.vocab_files, &VOCABULARY_FILENAMES);
            let stopwords_files =
                wordlist_paths(&v.wordlist_dir, v.stopwords_files, &STOPWORDS_FILENAMES);
            let p = VocabularyBuilder::new(
                v.src,
                v.dst,
                vocabulary_files,
                stopwords_files,
                v.min_count,
                v.sep,
            );
            let vocabulary = p.run()?;
            info!("done: {} words", vocabulary.len());
        }
    };
    Ok(())
}
