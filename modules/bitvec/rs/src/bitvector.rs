use std::collections::BTreeMap;
use std::ops::RangeBounds;

use derive_more::{From, Into};

use super::merge;
use super::symbol::Symbol;

/// Placeholder used by [`BitVector::render`] for positions without a symbol.
pub const NO_DATA: char = '.';

/// Sparse mapping from 1-based reference coordinates to [`Symbol`]s.
///
/// A position is present only if the read(s) carry information about it. Absence means
/// "not covered" and is never encoded with a sentinel symbol.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, From, Into)]
pub struct BitVector {
    pub(crate) data: BTreeMap<i64, Symbol>,
}

impl BitVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: i64) -> Option<Symbol> {
        self.data.get(&pos).copied()
    }

    pub fn contains(&self, pos: i64) -> bool {
        self.data.contains_key(&pos)
    }

    /// Sets the symbol at the given position, returning the previous one.
    pub fn insert(&mut self, pos: i64, symbol: Symbol) -> Option<Symbol> {
        self.data.insert(pos, symbol)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over (position, symbol) pairs in the ascending order of positions.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (i64, Symbol)> + '_ {
        self.data.iter().map(|(pos, symbol)| (*pos, *symbol))
    }

    /// Iterate over the positions inside the range, in ascending order.
    pub fn range(
        &self,
        range: impl RangeBounds<i64>,
    ) -> impl DoubleEndedIterator<Item = (i64, Symbol)> + '_ {
        self.data.range(range).map(|(pos, symbol)| (*pos, *symbol))
    }

    /// Number of positions holding a mismatching base.
    pub fn mutations(&self) -> usize {
        self.data.values().filter(|x| x.is_mismatch()).count()
    }

    /// Fixed-width representation of the inclusive `[start, end]` coordinate range, one
    /// character per position and [`NO_DATA`] for absent positions.
    pub fn render(&self, start: i64, end: i64) -> String {
        if start > end {
            return String::new();
        }

        let mut result = String::with_capacity((end - start + 1) as usize);
        let mut cursor = start;
        for (pos, symbol) in self.range(start..=end) {
            result.extend(std::iter::repeat_n(NO_DATA, (pos - cursor) as usize));
            result.push(symbol.symbol());
            cursor = pos + 1;
        }
        result.extend(std::iter::repeat_n(NO_DATA, (end + 1 - cursor) as usize));
        result
    }

    /// Combine evidence of two mates, see [`merge::merge`].
    pub fn merge(self, other: &BitVector) -> BitVector {
        merge::merge(self, other)
    }
}

impl FromIterator<(i64, Symbol)> for BitVector {
    fn from_iter<T: IntoIterator<Item = (i64, Symbol)>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BitVector {
    type Item = (i64, Symbol);
    type IntoIter = std::collections::btree_map::IntoIter<i64, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
