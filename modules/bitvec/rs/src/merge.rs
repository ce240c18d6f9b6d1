use std::collections::btree_map::Entry;

use super::bitvector::BitVector;
use super::symbol::Symbol;

/// Pick a single symbol for a position where the two mates disagree.
///
/// Rules are applied in order:
/// 1. a confident match from either mate wins;
/// 2. an ambiguous call yields to the other call;
/// 3. missing information yields to the other call;
/// 4. a deletion against a mismatch, or two different mismatches, is ambiguous;
/// 5. otherwise the first symbol is kept.
pub fn resolve_conflict(first: Symbol, second: Symbol) -> Symbol {
    use Symbol::*;

    match (first, second) {
        (NoMutation, _) | (_, NoMutation) => NoMutation,
        (Ambiguous, other) | (other, Ambiguous) => other,
        (Missing, other) | (other, Missing) => other,
        (Deletion, Mismatch(_)) | (Mismatch(_), Deletion) => Ambiguous,
        (Mismatch(a), Mismatch(b)) if a != b => Ambiguous,
        _ => first,
    }
}

/// Merge bit vectors of two mates. Positions seen by a single mate are copied as is,
/// disagreements are settled with [`resolve_conflict`].
pub fn merge(first: BitVector, second: &BitVector) -> BitVector {
    let mut merged = first;
    for (pos, symbol) in second.iter() {
        match merged.data.entry(pos) {
            Entry::Vacant(entry) => {
                entry.insert(symbol);
            }
            Entry::Occupied(mut entry) => {
                if *entry.get() != symbol {
                    let resolved = resolve_conflict(*entry.get(), symbol);
                    entry.insert(resolved);
                }
            }
        }
    }
    merged
}
