/// `Op` represents a single SAM CIGAR operation.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Alignment match, either a sequence match or mismatch (M)
    Match,
    /// Insertion to the reference (I)
    Insertion,
    /// Deletion from the reference (D)
    Deletion,
    /// Skipped region of the reference, e.g. an intron (N)
    Skip,
    /// Bases present in the read but excluded from the alignment (S)
    SoftClip,
    /// Bases absent from the stored read sequence (H)
    HardClip,
    /// Silent deletion from a padded reference (P)
    Padding,
    /// Sequence match (=)
    SeqMatch,
    /// Sequence mismatch (X)
    SeqMismatch,
}

impl Op {
    /// Returns `true` if the operation consumes bases of the read sequence.
    pub fn consumes_read(&self) -> bool {
        matches!(
            self,
            Op::Match | Op::Insertion | Op::SoftClip | Op::SeqMatch | Op::SeqMismatch
        )
    }

    /// Returns `true` if the operation consumes reference coordinates.
    pub fn consumes_reference(&self) -> bool {
        matches!(
            self,
            Op::Match | Op::Deletion | Op::Skip | Op::SeqMatch | Op::SeqMismatch
        )
    }

    /// Returns the SAM symbol of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::Match => 'M',
            Op::Insertion => 'I',
            Op::Deletion => 'D',
            Op::Skip => 'N',
            Op::SoftClip => 'S',
            Op::HardClip => 'H',
            Op::Padding => 'P',
            Op::SeqMatch => '=',
            Op::SeqMismatch => 'X',
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a SAM symbol into an `Op`.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'M' => Ok(Op::Match),
            'I' => Ok(Op::Insertion),
            'D' => Ok(Op::Deletion),
            'N' => Ok(Op::Skip),
            'S' => Ok(Op::SoftClip),
            'H' => Ok(Op::HardClip),
            'P' => Ok(Op::Padding),
            '=' => Ok(Op::SeqMatch),
            'X' => Ok(Op::SeqMismatch),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Op; 9] = [
        Op::Match,
        Op::Insertion,
        Op::Deletion,
        Op::Skip,
        Op::SoftClip,
        Op::HardClip,
        Op::Padding,
        Op::SeqMatch,
        Op::SeqMismatch,
    ];

    #[test]
    fn test_try_from_char() {
        for op in ALL {
            assert_eq!(Op::try_from(op.symbol()), Ok(op));
        }
        assert_eq!(Op::try_from('m'), Err(()));
        assert_eq!(Op::try_from('*'), Err(()));
        assert_eq!(Op::try_from('1'), Err(()));
    }

    #[test]
    fn test_consumption() {
        let consumed: Vec<_> = ALL
            .iter()
            .map(|op| (op.symbol(), op.consumes_read(), op.consumes_reference()))
            .collect();
        assert_eq!(
            consumed,
            vec![
                ('M', true, true),
                ('I', true, false),
                ('D', false, true),
                ('N', false, true),
                ('S', true, false),
                ('H', false, false),
                ('P', false, false),
                ('=', true, true),
                ('X', true, true),
            ]
        );
    }
}
