use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

pub const DEFAULT_QSCORE_CUTOFF: i32 = 25;
pub const DEFAULT_NUM_OF_SURBASES: usize = 10;

/// Parameters of the bit vector generator, fixed for the generator's lifetime.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Dissolve, Getters)]
pub struct Config {
    /// Base calls are trusted only if their Phred score is strictly greater than the cutoff
    qscore_cutoff: i32,
    /// Number of reference bases on each side of a deletion used to detect ambiguity
    num_of_surbases: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            qscore_cutoff: DEFAULT_QSCORE_CUTOFF,
            num_of_surbases: DEFAULT_NUM_OF_SURBASES,
        }
    }
}

impl Config {
    pub fn new(qscore_cutoff: i32, num_of_surbases: usize) -> Result<Self> {
        ensure!(
            num_of_surbases > 0,
            "Number of surrounding bases must be positive"
        );
        Ok(Self {
            qscore_cutoff,
            num_of_surbases,
        })
    }
}
