// src/stats.rs

/// Line/word/character counts for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripleCounts {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl TripleCounts {
    pub fn add(&mut self, other: Self) {
        self.lines += other.lines;
        self.words += other.words;
        self.chars += other.chars;
    }
}
