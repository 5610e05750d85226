// src/app.rs
use std::fs::File;
use std::io::{self, Cursor, Read, Write};
use std::path::Path;

use crate::config::{Config, Counter, Mode};
use crate::error::{Result, WcError};
use crate::stats::TripleCounts;
use crate::{cli, freq, lang, loc, output, scan};

/// Parse the command line and run against real stdin/stdout.
pub fn run_cli() -> Result<()> {
    let config = Config::from(cli::parse());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut io::stdin().lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run one configured invocation. `stdin` is only consumed when no paths
/// were given; `out` receives the complete report. Inputs are processed
/// one at a time, and an error on one file aborts the remaining files.
pub fn run(config: &Config, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    match config.mode {
        Mode::Loc => run_loc(config, out),
        Mode::Language => run_language(config, stdin, out),
        Mode::Frequency => run_frequency(config, stdin, out),
        Mode::Count(counter) => run_single_count(config, counter, stdin, out),
        Mode::Triple => run_triple(config, stdin, out),
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| WcError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

fn run_counter<R: Read>(counter: Counter, reader: R) -> Result<usize> {
    match counter {
        Counter::Lines => scan::count_lines(reader),
        Counter::Words => scan::count_words(reader),
        Counter::Chars => scan::count_chars(reader),
    }
}

fn run_loc(config: &Config, out: &mut dyn Write) -> Result<()> {
    let summary = loc::count_lines_of_code(&config.paths)?;
    writeln!(out, "{}", summary.total_code_lines)?;
    Ok(())
}

fn run_language(config: &Config, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    if config.paths.is_empty() {
        return language_block(config, stdin, out);
    }
    let multiple = config.paths.len() > 1;
    for path in &config.paths {
        if multiple {
            writeln!(out, "{}:", path.display())?;
        }
        language_block(config, &mut open(path)?, out)?;
    }
    Ok(())
}

/// Detect the language of one input and, when a counter modifier was also
/// given, count over the sampled bytes plus the unread remainder.
fn language_block(config: &Config, reader: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let sample = lang::Sample::build(reader)?;
    let result = lang::detect(&sample.text);
    log::debug!("detected {} ({})", result.tag, result.name);

    let shown = if config.show_language_name {
        &result.name
    } else {
        &result.tag
    };
    writeln!(out, "Language: {shown}")?;

    if let Some(counter) = config.counter {
        let count = run_counter(counter, sample.into_reader())?;
        writeln!(out, "Count: {count}")?;
    }
    Ok(())
}

fn run_frequency(config: &Config, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    if config.paths.is_empty() {
        let report = freq::analyze(stdin, config.sort_by_count, config.limit)?;
        output::write_frequency_report(out, &report, config.sort_by_count)?;
        return Ok(());
    }
    let multiple = config.paths.len() > 1;
    for path in &config.paths {
        if multiple {
            writeln!(out, "{}:", path.display())?;
        }
        let report = freq::analyze(open(path)?, config.sort_by_count, config.limit)?;
        output::write_frequency_report(out, &report, config.sort_by_count)?;
    }
    Ok(())
}

fn run_single_count(
    config: &Config,
    counter: Counter,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    if config.paths.is_empty() {
        let count = run_counter(counter, stdin)?;
        writeln!(out, "{count}")?;
        return Ok(());
    }
    let multiple = config.paths.len() > 1;
    for path in &config.paths {
        let count = run_counter(counter, open(path)?)?;
        if multiple {
            writeln!(out, "{count} {}", path.display())?;
        } else {
            writeln!(out, "{count}")?;
        }
    }
    Ok(())
}

fn run_triple(config: &Config, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    if config.paths.is_empty() {
        let counts = triple_counts(stdin)?;
        output::write_triple_row(out, counts, None)?;
        return Ok(());
    }
    let mut totals = TripleCounts::default();
    for path in &config.paths {
        let counts = triple_counts(&mut open(path)?)?;
        totals.add(counts);
        output::write_triple_row(out, counts, Some(path))?;
    }
    if config.paths.len() > 1 {
        output::write_triple_total(out, totals)?;
    }
    Ok(())
}

/// Three independent passes over a source that may not be seekable:
/// materialize the bytes once and give each counter a fresh reader.
fn triple_counts(reader: &mut dyn Read) -> Result<TripleCounts> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| WcError::Scan {
            operation: "input buffering",
            source,
        })?;

    Ok(TripleCounts {
        lines: scan::count_lines(Cursor::new(&bytes))?,
        words: scan::count_words(Cursor::new(&bytes))?,
        chars: scan::count_chars(Cursor::new(&bytes))?,
    })
}
