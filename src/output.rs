// src/output.rs
use std::io::{self, Write};
use std::path::Path;

use crate::freq::FrequencyEntry;
use crate::stats::TripleCounts;

const COUNT_WIDTH: usize = 8;

/// One fixed-width `lines words chars` row, with the source path appended
/// when the input was a named file.
pub fn write_triple_row(
    out: &mut dyn Write,
    counts: TripleCounts,
    path: Option<&Path>,
) -> io::Result<()> {
    match path {
        Some(path) => writeln!(
            out,
            "{:>w$} {:>w$} {:>w$} {}",
            counts.lines,
            counts.words,
            counts.chars,
            path.display(),
            w = COUNT_WIDTH,
        ),
        None => writeln!(
            out,
            "{:>w$} {:>w$} {:>w$}",
            counts.lines,
            counts.words,
            counts.chars,
            w = COUNT_WIDTH,
        ),
    }
}

/// Summary row printed after a multi-file triple count.
pub fn write_triple_total(out: &mut dyn Write, totals: TripleCounts) -> io::Result<()> {
    writeln!(
        out,
        "{:>w$} {:>w$} {:>w$} total",
        totals.lines,
        totals.words,
        totals.chars,
        w = COUNT_WIDTH,
    )
}

/// Aligned two-column frequency table. The word column is as wide as the
/// longest word in this report.
pub fn write_frequency_report(
    out: &mut dyn Write,
    report: &[FrequencyEntry],
    sort_by_count: bool,
) -> io::Result<()> {
    let heading = if sort_by_count {
        "sorted by count"
    } else {
        "alphabetical"
    };
    writeln!(out, "Word frequency ({heading}):")?;

    let width = report
        .iter()
        .map(|entry| entry.word.chars().count())
        .max()
        .unwrap_or(0);
    for entry in report {
        writeln!(out, "{:<width$}  {}", entry.word, entry.count)?;
    }
    Ok(())
}
