use std::fmt::{Display, Formatter};

use derive_more::Constructor;

use super::op::Op;

/// A single CIGAR step, e.g. `12M` or `3D`
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Step {
    /// The CIGAR operation
    pub op: Op,
    /// The length of the operation, always positive
    pub len: usize,
}

impl Step {
    /// Number of read bases consumed by the step.
    pub fn read_len(&self) -> usize {
        if self.op.consumes_read() {
            self.len
        } else {
            0
        }
    }

    /// Number of reference coordinates consumed by the step.
    pub fn reference_len(&self) -> usize {
        if self.op.consumes_reference() {
            self.len
        } else {
            0
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.len, self.op.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumed_lengths() {
        let step = Step::new(Op::Match, 7);
        assert_eq!((step.read_len(), step.reference_len()), (7, 7));

        let step = Step::new(Op::Deletion, 3);
        assert_eq!((step.read_len(), step.reference_len()), (0, 3));

        let step = Step::new(Op::SoftClip, 4);
        assert_eq!((step.read_len(), step.reference_len()), (4, 0));

        let step = Step::new(Op::HardClip, 5);
        assert_eq!((step.read_len(), step.reference_len()), (0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::new(Op::SeqMatch, 12).to_string(), "12=");
        assert_eq!(Step::new(Op::Skip, 1).to_string(), "1N");
    }
}
