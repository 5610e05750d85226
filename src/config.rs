// src/config.rs
use std::path::PathBuf;

use crate::cli::Args;
use crate::freq::DEFAULT_LIMIT;

/// Which single counter an invocation asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Lines,
    Words,
    Chars,
}

/// Primary operating mode. Exactly one runs per invocation; when several
/// flags are combined, precedence is LOC, then language detection, then
/// frequency analysis, then an explicit counter, then the triple count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Loc,
    Language,
    Frequency,
    Count(Counter),
    Triple,
}

/// Immutable-after-parse request description.
#[derive(Debug)]
pub struct Config {
    pub mode: Mode,
    pub show_language_name: bool,
    pub sort_by_count: bool,
    pub limit: usize,
    /// Counter requested alongside `--lang`, run over the sampled stream.
    pub counter: Option<Counter>,
    /// Empty means read standard input (`--loc` defaults to `.` instead).
    pub paths: Vec<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let counter = if args.lines {
            Some(Counter::Lines)
        } else if args.chars {
            Some(Counter::Chars)
        } else if args.words {
            Some(Counter::Words)
        } else {
            None
        };

        let mode = if args.loc {
            Mode::Loc
        } else if args.lang || args.lang_name {
            Mode::Language
        } else if args.freq {
            Mode::Frequency
        } else if let Some(c) = counter {
            Mode::Count(c)
        } else {
            Mode::Triple
        };

        let paths = if mode == Mode::Loc && args.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            args.paths
        };

        Self {
            mode,
            show_language_name: args.lang_name,
            sort_by_count: args.sort_count,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            counter,
            paths,
        }
    }
}
