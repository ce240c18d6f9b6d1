use std::fmt::{Display, Formatter};

/// Classification of a single reference position by the evidence of one read (or a pair).
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Symbol {
    /// Confident base call identical to the reference ('0')
    NoMutation,
    /// Confident base call that differs from the reference, stores the read base as is.
    /// Read sequences are ASCII (the SAM SEQ alphabet), so the byte is always a valid char.
    Mismatch(u8),
    /// Reference position deleted in the read ('1')
    Deletion,
    /// Low-quality base call or a deletion with an indeterminate boundary ('?')
    Ambiguous,
    /// Reference position covered by a trailing soft clip ('*')
    Missing,
}

impl Symbol {
    pub const NOMUT: char = '0';
    pub const DELETION: char = '1';
    pub const AMBIGUOUS: char = '?';
    pub const MISSING: char = '*';

    /// Returns the character representation of the symbol.
    pub fn symbol(&self) -> char {
        match self {
            Symbol::NoMutation => Self::NOMUT,
            Symbol::Mismatch(base) => *base as char,
            Symbol::Deletion => Self::DELETION,
            Symbol::Ambiguous => Self::AMBIGUOUS,
            Symbol::Missing => Self::MISSING,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Symbol::Mismatch(_))
    }

    /// `true` for a mismatch to one of the four canonical bases (upper case `A`, `C`, `G`, `T`).
    pub fn is_base(&self) -> bool {
        matches!(self, Symbol::Mismatch(b'A' | b'C' | b'G' | b'T'))
    }
}

impl TryFrom<char> for Symbol {
    type Error = ();

    /// Any ASCII character outside of `0 1 ? *` is a mismatching read base.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            Self::NOMUT => Ok(Symbol::NoMutation),
            Self::DELETION => Ok(Symbol::Deletion),
            Self::AMBIGUOUS => Ok(Symbol::Ambiguous),
            Self::MISSING => Ok(Symbol::Missing),
            x if x.is_ascii() => Ok(Symbol::Mismatch(x as u8)),
            _ => Err(()),
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
