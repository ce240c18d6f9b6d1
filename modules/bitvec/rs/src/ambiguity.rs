/// `seq[start..end]` with both ends clamped to `[0, seq.len()]`. Inverted ranges are empty.
pub fn clamped(seq: &[u8], start: i64, end: i64) -> &[u8] {
    let len = seq.len() as i64;
    let (start, end) = (start.clamp(0, len), end.clamp(0, len));
    if start >= end {
        &[]
    } else {
        &seq[start as usize..end as usize]
    }
}

/// Reference context of a deletion spanning `[start, end]` (1-based, inclusive) inside the
/// window `[wstart, wend]`: bases of the window before the deletion followed by bases after it.
fn context(reference: &[u8], window: (i64, i64), start: i64, end: i64) -> (&[u8], &[u8]) {
    (
        clamped(reference, window.0.saturating_sub(1), start - 1),
        clamped(reference, end, window.1),
    )
}

/// Check whether a deletion ending at `pos` (1-based, inclusive) with the given length could
/// be shifted to another end position without changing the surrounding reference context.
///
/// The context is made of `surbases` bases before the deletion start and `surbases` bases
/// after its end. Every alternative end in `[pos - length, pos + length]` whose deletion
/// stays inside the reference is tested against the same outer window; a single identical
/// context makes the deletion ambiguous. Positions outside the reference are never ambiguous.
pub fn is_deletion_ambiguous(reference: &[u8], pos: i64, length: i64, surbases: usize) -> bool {
    let reflen = reference.len() as i64;
    if reflen == 0 || pos < 1 || pos > reflen || length < 1 || length > reflen {
        return false;
    }

    let surbases = i64::try_from(surbases).unwrap_or(i64::MAX);
    let start = pos - length + 1;
    let window = (start.saturating_sub(surbases), pos.saturating_add(surbases));
    let (left, right) = context(reference, window, start, pos);

    // Candidates must start at or after the first base and end inside the reference
    let candidates = (pos - length).max(length)..=(pos + length).min(reflen);
    for end in candidates {
        if end == pos {
            continue;
        }
        let start = end - length + 1;

        let (altleft, altright) = context(reference, window, start, end);
        if altleft.iter().chain(altright).eq(left.iter().chain(right)) {
            log::trace!(
                "Deletion [{}, {}] is indistinguishable from [{}, {}]",
                pos - length + 1,
                pos,
                start,
                end
            );
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        let seq = b"ACGTACGT";
        assert_eq!(clamped(seq, 0, 4), b"ACGT");
        assert_eq!(clamped(seq, -5, 2), b"AC");
        assert_eq!(clamped(seq, 6, 100), b"GT");
        assert_eq!(clamped(seq, -10, -2), b"");
        assert_eq!(clamped(seq, 10, 12), b"");
        assert_eq!(clamped(seq, 5, 3), b"");
        assert_eq!(clamped(seq, 3, 3), b"");
        assert_eq!(clamped(b"", -1, 1), b"");
    }

    #[test]
    fn test_unique_single_base_deletion() {
        // The deleted G has distinct neighbours
        assert!(!is_deletion_ambiguous(b"ACGTACGT", 3, 1, 10));
        assert!(!is_deletion_ambiguous(b"ACGTACGT", 3, 1, 2));
    }

    #[test]
    fn test_homopolymer_deletion() {
        assert!(is_deletion_ambiguous(b"AAAAA", 3, 1, 10));
        assert!(is_deletion_ambiguous(b"ACGGTACG", 3, 1, 10));
        assert!(is_deletion_ambiguous(b"ACGGTACG", 4, 1, 10));
        assert!(is_deletion_ambiguous(b"ACGGTACG", 4, 1, 1));
    }

    #[test]
    fn test_repeat_deletion() {
        // Deleting either copy of the CA dinucleotide gives the same context
        let reference = b"GTCACATG";
        assert!(is_deletion_ambiguous(reference, 4, 2, 10));
        assert!(is_deletion_ambiguous(reference, 6, 2, 10));
        // A deletion of TC is unique
        assert!(!is_deletion_ambiguous(reference, 3, 2, 10));
    }

    #[test]
    fn test_huge_arguments() {
        assert!(!is_deletion_ambiguous(b"ACGT", 2, i64::MAX, 10));
        assert!(!is_deletion_ambiguous(b"ACGT", 2, 1 << 30, 10));
        assert!(!is_deletion_ambiguous(b"ACGT", 4, i64::MAX, usize::MAX));
        assert!(!is_deletion_ambiguous(b"ACGT", i64::MAX, i64::MAX, 10));
        assert!(!is_deletion_ambiguous(b"ACGT", 2, i64::MIN, 10));

        // A deletion spanning the whole reference has no alternative placement
        assert!(!is_deletion_ambiguous(b"AAAA", 4, 4, 10));
        assert!(is_deletion_ambiguous(b"AAAA", 4, 3, usize::MAX));
        assert!(is_deletion_ambiguous(b"AAAAA", 3, 1, usize::MAX));
    }

    #[test]
    fn test_reference_edges() {
        assert!(!is_deletion_ambiguous(b"", 1, 1, 10));
        assert!(!is_deletion_ambiguous(b"ACGT", 0, 1, 10));
        assert!(!is_deletion_ambiguous(b"ACGT", 5, 1, 10));
        assert!(!is_deletion_ambiguous(b"ACGT", 2, 0, 10));
        // First and last bases with distinct neighbours
        assert!(!is_deletion_ambiguous(b"ACGT", 1, 1, 10));
        assert!(!is_deletion_ambiguous(b"ACGT", 4, 1, 10));
        // The same bases next to a copy of themselves
        assert!(is_deletion_ambiguous(b"AACGT", 1, 1, 10));
        assert!(is_deletion_ambiguous(b"ACGTT", 5, 1, 10));
    }
}
