// src/freq.rs
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

use crate::error::{Result, WcError};
use crate::scan::is_separator_char;

/// Entries shown when no (or a non-positive) limit is requested.
pub const DEFAULT_LIMIT: usize = 10;

/// Punctuation stripped from both ends of a token before counting.
const TRIM_SET: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// One word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

/// Lowercase a token and trim the fixed punctuation set. Tokens that end
/// up empty (for example `"..."`) are not counted.
pub fn normalize(token: &str) -> Option<String> {
    let trimmed = token.trim_matches(|c| TRIM_SET.contains(&c));
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Build a word-frequency report in one pass over `reader`.
///
/// The report is a deterministic total order in both modes: alphabetical
/// ascending, or count descending with the word itself breaking ties.
/// Truncation to `limit` happens after the full sort, so ties at the
/// boundary never produce extra entries. A `limit` of 0 means
/// [`DEFAULT_LIMIT`].
pub fn analyze<R: Read>(reader: R, sort_by_count: bool, limit: usize) -> Result<Vec<FrequencyEntry>> {
    let mut reader = BufReader::new(reader);
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| WcError::Scan {
                operation: "frequency analysis",
                source,
            })?;
        if n == 0 {
            break;
        }

        for token in String::from_utf8_lossy(&line)
            .split(is_separator_char)
            .filter(|t| !t.is_empty())
        {
            if let Some(word) = normalize(token) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(word, count)| FrequencyEntry { word, count })
        .collect();

    if sort_by_count {
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    } else {
        entries.sort_by(|a, b| a.word.cmp(&b.word));
    }

    let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
    entries.truncate(limit);
    Ok(entries)
}
