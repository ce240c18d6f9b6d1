use derive_getters::{Dissolve, Getters};

use crate::cigar::{self, Step};

/// A sequenced read aligned to a reference, as described by one SAM record.
///
/// Coordinates follow the SAM convention: `pos` and `pnext` are 1-based leftmost positions,
/// `0` meaning "unavailable". The sequence and the quality string share the same indexing.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Dissolve, Getters)]
pub struct AlignedRead {
    qname: String,
    flag: u16,
    rname: String,
    pos: i64,
    mapq: u8,
    cigar: String,
    rnext: String,
    pnext: i64,
    tlen: i64,
    seq: String,
    qual: String,
    md_string: String,
}

impl AlignedRead {
    /// Creates a read with the fields required to build a bit vector. Remaining SAM fields
    /// are empty/zero and can be filled with the `with_*` methods.
    pub fn new(
        qname: impl Into<String>,
        pos: i64,
        cigar: impl Into<String>,
        seq: impl Into<String>,
        qual: impl Into<String>,
    ) -> Self {
        Self {
            qname: qname.into(),
            pos,
            cigar: cigar.into(),
            seq: seq.into(),
            qual: qual.into(),
            ..Default::default()
        }
    }

    pub fn with_flag(mut self, flag: u16) -> Self {
        self.flag = flag;
        self
    }

    pub fn with_rname(mut self, rname: impl Into<String>) -> Self {
        self.rname = rname.into();
        self
    }

    pub fn with_mapq(mut self, mapq: u8) -> Self {
        self.mapq = mapq;
        self
    }

    pub fn with_mate(mut self, rnext: impl Into<String>, pnext: i64, tlen: i64) -> Self {
        self.rnext = rnext.into();
        self.pnext = pnext;
        self.tlen = tlen;
        self
    }

    pub fn with_md_string(mut self, md_string: impl Into<String>) -> Self {
        self.md_string = md_string.into();
        self
    }

    /// Decoded CIGAR steps, see [`cigar::tokenize`].
    pub fn steps(&self) -> Vec<Step> {
        cigar::tokenize(&self.cigar)
    }

    /// Length of the read sequence.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// `true` if the read is flagged as part of a multi-segment template (0x1).
    pub fn is_paired(&self) -> bool {
        self.flag & 0x1 != 0
    }

    /// `true` if the read is the first segment of the template (0x40).
    pub fn is_first(&self) -> bool {
        self.flag & 0x40 != 0
    }
}

#[cfg(test)]
impl AlignedRead {
    pub fn dummy() -> Self {
        AlignedRead::new("read/1", 3, "2S4M1D2M", "TTACGTAC", "IIIIIIII")
            .with_flag(0x1 | 0x40)
            .with_rname("ref")
            .with_mapq(42)
            .with_mate("=", 12, 20)
            .with_md_string("4^G2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cigar::Op;

    #[test]
    fn test_fields() {
        let read = AlignedRead::dummy();
        assert_eq!(read.qname(), "read/1");
        assert_eq!(*read.pos(), 3);
        assert_eq!(*read.mapq(), 42);
        assert_eq!(read.rnext(), "=");
        assert_eq!((*read.pnext(), *read.tlen()), (12, 20));
        assert_eq!(read.len(), 8);
        assert!(read.is_paired());
        assert!(read.is_first());
    }

    #[test]
    fn test_steps() {
        let read = AlignedRead::dummy();
        assert_eq!(
            read.steps(),
            vec![
                Step::new(Op::SoftClip, 2),
                Step::new(Op::Match, 4),
                Step::new(Op::Deletion, 1),
                Step::new(Op::Match, 2),
            ]
        );
    }

    #[test]
    fn test_default_flags() {
        let read = AlignedRead::new("r", 1, "4M", "ACGT", "IIII");
        assert!(!read.is_paired());
        assert!(!read.is_first());
        assert_eq!(read.md_string(), "");
    }
}
