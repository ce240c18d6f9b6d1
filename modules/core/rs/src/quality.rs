use ahash::AHashMap;
use eyre::{ensure, Result};

/// Offset of the Sanger/Illumina 1.8+ quality encoding.
pub const PHRED33: u8 = 33;
/// Offset of the legacy Illumina 1.3-1.7 quality encoding.
pub const PHRED64: u8 = 64;

/// Lookup table from a quality character to its Phred score.
///
/// Characters missing from the table score `0`, i.e. they never pass a quality cutoff.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct QualityTable {
    scores: AHashMap<u8, i32>,
}

impl QualityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for printable ASCII qualities encoded with the given offset: every character
    /// from `offset` to `~` maps to `char - offset`.
    pub fn with_offset(offset: u8) -> Result<Self> {
        ensure!(
            (b'!'..=b'~').contains(&offset),
            "Quality offset must be a printable ASCII character, got {offset}"
        );
        Ok((offset..=b'~')
            .map(|ch| (ch, (ch - offset) as i32))
            .collect())
    }

    /// Standard Phred+33 table.
    pub fn phred33() -> Self {
        (PHRED33..=b'~')
            .map(|ch| (ch, (ch - PHRED33) as i32))
            .collect()
    }

    pub fn insert(&mut self, symbol: u8, score: i32) -> &mut Self {
        self.scores.insert(symbol, score);
        self
    }

    /// Score of the quality character, `0` if the character is unknown.
    #[inline]
    pub fn score(&self, symbol: u8) -> i32 {
        self.scores.get(&symbol).copied().unwrap_or(0)
    }

    pub fn get(&self, symbol: u8) -> Option<i32> {
        self.scores.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, i32)> + '_ {
        self.scores.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(u8, i32)> for QualityTable {
    fn from_iter<T: IntoIterator<Item = (u8, i32)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

impl Extend<(u8, i32)> for QualityTable {
    fn extend<T: IntoIterator<Item = (u8, i32)>>(&mut self, iter: T) {
        self.scores.extend(iter);
    }
}
