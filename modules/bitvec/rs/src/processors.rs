use rnamap_core_rs::cigar::{Op, Step};
use rnamap_core_rs::{AlignedRead, QualityTable};

use super::ambiguity;
use super::bitvector::BitVector;
use super::config::Config;
use super::symbol::Symbol;

/// Current position in the read (0-based) and in the reference (1-based).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Cursor {
    pub read: usize,
    pub reference: i64,
}

/// Walks CIGAR steps of one read, moving the cursor and recording symbols.
pub struct Processor<'a> {
    config: &'a Config,
    qualities: &'a QualityTable,
    reference: &'a [u8],
    seq: &'a [u8],
    qual: &'a [u8],
    cursor: Cursor,
    // Aligned positions that fell outside the read or the reference
    skipped: usize,
    bitvector: BitVector,
}

impl<'a> Processor<'a> {
    pub fn new(
        config: &'a Config,
        read: &'a AlignedRead,
        reference: &'a [u8],
        qualities: &'a QualityTable,
    ) -> Self {
        Self {
            config,
            qualities,
            reference,
            seq: read.seq().as_bytes(),
            qual: read.qual().as_bytes(),
            cursor: Cursor {
                read: 0,
                reference: *read.pos(),
            },
            skipped: 0,
            bitvector: BitVector::new(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn apply(&mut self, step: Step, is_last: bool) {
        match step.op {
            Op::Match | Op::SeqMatch | Op::SeqMismatch => self.aligned(step.len),
            Op::Deletion | Op::Skip => self.deletion(step.len),
            Op::Insertion => self.cursor.read = self.cursor.read.saturating_add(step.len),
            Op::SoftClip => self.soft_clip(step.len, is_last),
            Op::HardClip | Op::Padding => {}
        }
    }

    pub fn finish(self) -> BitVector {
        self.bitvector
    }

    /// Positions consuming both the read and the reference. Positions outside either
    /// sequence produce no symbol, but the cursor still advances over them.
    fn aligned(&mut self, len: usize) {
        let Cursor { read, reference } = self.cursor;
        let steps = i64::try_from(len).unwrap_or(i64::MAX);
        let readlen = self.seq.len().min(self.qual.len());
        let reflen = self.reference.len() as i64;

        // Offsets of the run where both cursors stay inside their sequences
        let first = 1i64.saturating_sub(reference).clamp(0, steps);
        let last = steps
            .min(reflen.saturating_sub(reference).saturating_add(1))
            .min(readlen.saturating_sub(read) as i64)
            .max(first);

        for offset in first..last {
            let (read, reference) = (read + offset as usize, reference + offset);
            let score = self.qualities.score(self.qual[read]);
            let symbol = if score > *self.config.qscore_cutoff() {
                let base = self.seq[read];
                if base == self.reference[(reference - 1) as usize] {
                    Symbol::NoMutation
                } else {
                    Symbol::Mismatch(base)
                }
            } else {
                Symbol::Ambiguous
            };
            self.bitvector.insert(reference, symbol);
        }

        self.skipped = self.skipped.saturating_add(len - (last - first) as usize);
        self.cursor.read = read.saturating_add(len);
        self.cursor.reference = reference.saturating_add(steps);
    }

    /// Positions deleted from the read. Only the last position of the deletion can be
    /// called as a deletion, the rest are always ambiguous.
    fn deletion(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        for _ in 0..len - 1 {
            self.bitvector.insert(self.cursor.reference, Symbol::Ambiguous);
            self.cursor.reference = self.cursor.reference.saturating_add(1);
        }

        let pos = self.cursor.reference;
        let symbol = if ambiguity::is_deletion_ambiguous(
            self.reference,
            pos,
            i64::try_from(len).unwrap_or(i64::MAX),
            *self.config.num_of_surbases(),
        ) {
            Symbol::Ambiguous
        } else {
            Symbol::Deletion
        };
        self.bitvector.insert(pos, symbol);
        self.cursor.reference = self.cursor.reference.saturating_add(1);
    }

    /// Soft clipped bases are never aligned. Only a trailing clip is reported, as missing
    /// information over the reference positions it would have covered.
    fn soft_clip(&mut self, len: usize, is_last: bool) {
        self.cursor.read = self.cursor.read.saturating_add(len);
        if is_last {
            for _ in 0..len {
                self.bitvector.insert(self.cursor.reference, Symbol::Missing);
                self.cursor.reference = self.cursor.reference.saturating_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(read: &AlignedRead, reference: &str, config: &Config) -> (BitVector, Cursor, usize) {
        let qualities = QualityTable::phred33();
        let steps = read.steps();
        let mut processor = Processor::new(config, read, reference.as_bytes(), &qualities);
        for (ind, step) in steps.iter().enumerate() {
            processor.apply(*step, ind + 1 == steps.len());
        }
        let (cursor, skipped) = (processor.cursor(), processor.skipped());
        (processor.finish(), cursor, skipped)
    }

    #[test]
    fn test_cursor_movement() {
        let read = AlignedRead::new(
            "r",
            5,
            "2H3S4M2I1D3N2=1X1P2S",
            "ACGTACGTACGTACG",
            "IIIIIIIIIIIIIII",
        );
        let (_, cursor, _) = run(&read, "ACGTACGTACGTACGTACGTACGT", &Config::default());
        // Read: 3S + 4M + 2I + 2= + 1X + 2S
        assert_eq!(cursor.read, 14);
        // Reference: 4M + 1D + 3N + 2= + 1X + trailing 2S
        assert_eq!(cursor.reference, 5 + 13);
    }

    #[test]
    fn test_quality_gating() {
        // '5' scores 20, '?' scores 30
        let read = AlignedRead::new("r", 1, "4M", "ACGA", "5?5?");
        let (bv, _, _) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(1, 4), "?0?A");

        // The cutoff is strict
        let read = AlignedRead::new("r", 1, "2M", "AC", ":;");
        let (bv, _, _) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(1, 2), "?0");
    }

    #[test]
    fn test_unknown_quality_characters() {
        let read = AlignedRead::new("r", 1, "3M", "ACG", "I I");
        let (bv, _, _) = run(&read, "ACGT", &Config::new(-1, 10).unwrap());
        // ' ' is absent from the table, scores 0 and still passes a negative cutoff
        assert_eq!(bv.render(1, 3), "000");

        let (bv, _, _) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(1, 3), "0?0");
    }

    #[test]
    fn test_match_overrun_leaves_gaps() {
        // The read runs past the reference end
        let read = AlignedRead::new("r", 3, "4M2S", "GTAAGG", "IIIIII");
        let (bv, cursor, skipped) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(1, 8), "..00..**");
        assert_eq!(skipped, 2);
        assert_eq!(cursor.reference, 9);

        // The CIGAR claims more bases than the read has
        let read = AlignedRead::new("r", 1, "4M1D", "AC", "II");
        let (bv, cursor, skipped) = run(&read, "ACGTACGT", &Config::default());
        assert_eq!(bv.render(1, 6), "00..1.");
        assert_eq!(skipped, 2);
        assert_eq!(cursor, Cursor { read: 4, reference: 6 });

        // Quality string shorter than the sequence
        let read = AlignedRead::new("r", 1, "3M", "ACG", "II");
        let (bv, _, skipped) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(1, 3), "00.");
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_match_before_reference_start() {
        let read = AlignedRead::new("r", -1, "4M", "TTAC", "IIII");
        let (bv, _, skipped) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(-1, 4), "..00..");
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_deletion_interior_is_ambiguous() {
        let read = AlignedRead::new("r", 1, "2M3D2M", "ACAC", "IIII");
        let (bv, _, _) = run(&read, "ACGTTACGT", &Config::default());
        // GTT removed; its last position is unique, the rest is ambiguous by definition
        assert_eq!(bv.render(1, 7), "00??100");
    }

    #[test]
    fn test_skip_is_a_deletion() {
        let read = AlignedRead::new("r", 1, "1M2N1M", "AT", "II");
        let (bv, _, _) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(1, 4), "0?10");
    }

    #[test]
    fn test_deletion_past_reference_end() {
        let read = AlignedRead::new("r", 3, "2M3D", "GT", "II");
        let (bv, cursor, _) = run(&read, "ACGT", &Config::default());
        // Deletions write symbols even outside of the reference, the last one is never ambiguous
        assert_eq!(bv.render(1, 7), "..00??1");
        assert_eq!(cursor.reference, 8);
    }

    #[test]
    fn test_leading_soft_clip_writes_nothing() {
        let read = AlignedRead::new("r", 2, "2S3M", "TTCGT", "IIIII");
        let (bv, cursor, _) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(1, 4), ".000");
        assert_eq!(cursor, Cursor { read: 5, reference: 5 });
    }

    #[test]
    fn test_trailing_soft_clip() {
        let read = AlignedRead::new("r", 1, "2M3S", "ACAAA", "IIIII");
        let (bv, cursor, _) = run(&read, "ACGTACGT", &Config::default());
        assert_eq!(bv.render(1, 6), "00***.");
        assert_eq!(cursor, Cursor { read: 5, reference: 6 });
    }

    #[test]
    fn test_cursors_saturate() {
        let config = Config::default();
        let qualities = QualityTable::phred33();
        let read = AlignedRead::new("r", i64::MAX - 1, "2M", "AC", "II");
        let mut processor = Processor::new(&config, &read, b"ACGT", &qualities);

        processor.apply(Step::new(Op::Insertion, usize::MAX), false);
        processor.apply(Step::new(Op::Insertion, 1), false);
        processor.apply(Step::new(Op::Match, usize::MAX), false);
        processor.apply(Step::new(Op::Deletion, 1), true);

        assert_eq!(processor.cursor().read, usize::MAX);
        assert_eq!(processor.cursor().reference, i64::MAX);
        assert_eq!(processor.skipped(), usize::MAX);
        assert_eq!(processor.finish().get(i64::MAX), Some(Symbol::Deletion));
    }

    #[test]
    fn test_huge_cigar_is_bounded() {
        let cigar = "18446744073709551615I1I2M2147483647M";
        let read = AlignedRead::new("r", 1, cigar, "AAC", "III");
        let (bv, cursor, skipped) = run(&read, "ACGT", &Config::default());
        assert_eq!(bv.render(1, 4), "00..");
        assert_eq!(skipped, 2147483647);
        assert_eq!(cursor.reference, 3 + 2147483647);
    }

    #[test]
    fn test_soft_clip_before_hard_clip_is_not_last() {
        let read = AlignedRead::new("r", 1, "2M3S4H", "ACAAA", "IIIII");
        let (bv, _, _) = run(&read, "ACGTACGT", &Config::default());
        assert_eq!(bv.render(1, 6), "00....");
    }
}
