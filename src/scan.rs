// src/scan.rs
use std::io::{BufRead, BufReader, Read};

use crate::error::{Result, WcError};

/// Token separators: space, tab, newline, carriage return, vertical tab,
/// form feed. The same set drives word counting, frequency analysis, and
/// language sampling.
pub(crate) fn is_separator_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Character-level twin of [`is_separator_byte`] for decoded text.
pub(crate) fn is_separator_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0B}' | '\u{0C}')
}

/// Count whitespace-delimited tokens in one full pass over `reader`.
pub fn count_words<R: Read>(reader: R) -> Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut words = 0;
    let mut in_word = false;

    loop {
        let buf = reader.fill_buf().map_err(|source| WcError::Scan {
            operation: "word count",
            source,
        })?;
        if buf.is_empty() {
            break;
        }

        for &b in buf {
            if is_separator_byte(b) {
                in_word = false;
            } else if !in_word {
                in_word = true;
                words += 1;
            }
        }

        let len = buf.len();
        reader.consume(len);
    }

    Ok(words)
}

/// Count lines in one full pass. A trailing segment without a final
/// newline still counts, so `"a\nb"` has two lines and `"a\nb\n"` also has
/// two.
pub fn count_lines<R: Read>(reader: R) -> Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut lines = 0;
    let mut last_byte = None;

    loop {
        let buf = reader.fill_buf().map_err(|source| WcError::Scan {
            operation: "line count",
            source,
        })?;
        if buf.is_empty() {
            break;
        }

        lines += bytecount::count(buf, b'\n');
        last_byte = buf.last().copied();

        let len = buf.len();
        reader.consume(len);
    }

    if let Some(b) = last_byte
        && b != b'\n'
    {
        lines += 1;
    }

    Ok(lines)
}

/// Count Unicode code points (not bytes) in one full pass.
pub fn count_chars<R: Read>(reader: R) -> Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut chars = 0;

    loop {
        let buf = reader.fill_buf().map_err(|source| WcError::Scan {
            operation: "character count",
            source,
        })?;
        if buf.is_empty() {
            break;
        }

        // num_chars counts non-continuation bytes, so splitting a UTF-8
        // sequence across chunks cannot double-count it.
        chars += bytecount::num_chars(buf);

        let len = buf.len();
        reader.consume(len);
    }

    Ok(chars)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn counts_whitespace_delimited_words() {
        let words = count_words(Cursor::new("word1 word2 word3 word4\n")).unwrap();
        assert_eq!(words, 4);
    }

    #[test]
    fn words_split_on_every_separator_kind() {
        let words = count_words(Cursor::new("a\tb\nc\rd\x0Be\x0Cf")).unwrap();
        assert_eq!(words, 6);
    }

    #[test]
    fn word_state_survives_chunk_boundaries() {
        // Longer than the BufReader chunk so a word straddles a refill.
        let mut text = "x".repeat(10_000);
        text.push_str(" tail");
        assert_eq!(count_words(Cursor::new(text)).unwrap(), 2);
    }

    #[test]
    fn counts_terminated_lines() {
        let lines = count_lines(Cursor::new("line1\nline2\nline3\nline4\n")).unwrap();
        assert_eq!(lines, 4);
    }

    #[test]
    fn trailing_unterminated_line_counts_once() {
        let lines = count_lines(Cursor::new("line1\nline2\nline3")).unwrap();
        assert_eq!(lines, 3);
    }

    #[test]
    fn counts_code_points_not_bytes() {
        assert_eq!(count_chars(Cursor::new("hello")).unwrap(), 5);
        assert_eq!(count_chars(Cursor::new("héllo wörld")).unwrap(), 11);
        assert_eq!(count_chars(Cursor::new("日本語")).unwrap(), 3);
    }

    #[test]
    fn empty_input_counts_zero_everywhere() {
        assert_eq!(count_words(Cursor::new("")).unwrap(), 0);
        assert_eq!(count_lines(Cursor::new("")).unwrap(), 0);
        assert_eq!(count_chars(Cursor::new("")).unwrap(), 0);
    }

    #[test]
    fn read_error_names_the_operation() {
        struct FailingReader;
        impl std::io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("simulated read error"))
            }
        }

        let err = count_words(FailingReader).unwrap_err();
        assert!(err.to_string().contains("word count"));
        assert!(err.to_string().contains("simulated read error"));
    }
}
