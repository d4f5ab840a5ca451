//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "minidocs", about = "mini-document corpus generation tool.")]
/// Holds every command that is callable by the `minidocs` command.
pub enum MiniDocs {
    #[structopt(about = "List corpus files")]
    List(List),
    #[structopt(about = "Extract paragraphs from corpus files")]
    Paragraphs(Paragraphs),
    #[structopt(about = "Build a deduplicated mini-document corpus from paragraphs")]
    Build(Build),
    #[structopt(about = "Compute a restricted vocabulary over a mini-document corpus")]
    Vocab(Vocab),
}

#[derive(Debug, StructOpt)]
/// List command and parameters.
///
/// Without flags, every `.xml` file under `root` is listed.
pub struct List {
    #[structopt(parse(from_os_str), help = "corpus root directory")]
    pub root: PathBuf,
    #[structopt(short = "w", long = "written", help = "only list written material")]
    pub written: bool,
    #[structopt(
        short = "s",
        long = "spoken",
        help = "only list spoken material",
        conflicts_with = "written"
    )]
    pub spoken: bool,
}

#[derive(Debug, StructOpt)]
/// Paragraphs command and parameters.
///
/// ```sh
/// USAGE:
///     minidocs paragraphs [FLAGS] <root> <dst>
///
/// FLAGS:
///     -s, --spoken     only extract spoken material
///     -w, --written    only extract written material
///
/// ARGS:
///     <root>    corpus root directory
///     <dst>     paragraphs dump destination (.jsonl.gz)
/// ```
pub struct Paragraphs {
    #[structopt(parse(from_os_str), help = "corpus root directory")]
    pub root: PathBuf,
    #[structopt(parse(from_os_str), help = "paragraphs dump destination (.jsonl.gz)")]
    pub dst: PathBuf,
    #[structopt(short = "w", long = "written", help = "only extract written material")]
    pub written: bool,
    #[structopt(
        short = "s",
        long = "spoken",
        help = "only extract spoken material",
        conflicts_with = "written"
    )]
    pub spoken: bool,
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
///
/// ```sh
/// USAGE:
///     minidocs build [OPTIONS] <src> <dst>
///
/// OPTIONS:
///         --max-length <max-length>    exclusive maximum mini document length (words) [default: 500]
///         --min-length <min-length>    exclusive minimum mini document length (words) [default: 250]
///         --sep <sep>                  word separator [default: |]
///
/// ARGS:
///     <src>    paragraphs dump (.jsonl.gz)
///     <dst>    corpus dump destination (.jsonl.gz)
/// ```
pub struct Build {
    #[structopt(parse(from_os_str), help = "paragraphs dump (.jsonl.gz)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus dump destination (.jsonl.gz)")]
    pub dst: PathBuf,
    #[structopt(
        long = "min-length",
        help = "exclusive minimum mini document length (words)",
        default_value = "250"
    )]
    pub min_length: usize,
    #[structopt(
        long = "max-length",
        help = "exclusive maximum mini document length (words)",
        default_value = "500"
    )]
    pub max_length: usize,
    #[structopt(long = "sep", help = "word separator", default_value = "|")]
    pub sep: char,
}

#[derive(Debug, StructOpt)]
/// Vocab command and parameters.
///
/// Word list paths are relative to `--wordlist-dir`.
/// When no list is given, `2of4brif.txt` is used as reference list,
/// and `FoxStoplist.txt` and `SmartStoplist.txt` as stopwords lists.
pub struct Vocab {
    #[structopt(parse(from_os_str), help = "corpus dump (.jsonl.gz)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "vocabulary destination (.json)")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "wordlist-dir",
        help = "word lists location",
        default_value = "."
    )]
    pub wordlist_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "vocab-file",
        help = "reference word list (can be repeated)"
    )]
    pub vocab_files: Vec<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "stopwords-file",
        help = "stopwords list (can be repeated)"
    )]
    pub stopwords_files: Vec<PathBuf>,
    #[structopt(
        long = "min-count",
        help = "minimum number of occurrences",
        default_value = "5"
    )]
    pub min_count: u64,
    #[structopt(long = "sep", help = "word separator", default_value = "|")]
    pub sep: char,
}
