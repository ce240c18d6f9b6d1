use derive_more::{Constructor, From, Into};

use rnamap_core_rs::{AlignedRead, QualityTable};

use super::ambiguity;
use super::bitvector::BitVector;
use super::config::Config;
use super::merge;
use super::processors::Processor;

/// Builds per-read bit vectors. The generator holds no state besides its configuration,
/// so a single instance can be shared between threads.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Constructor, From, Into)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bit vector of a single read aligned to the reference.
    pub fn generate_single(
        &self,
        read: &AlignedRead,
        reference: &str,
        qualities: &QualityTable,
    ) -> BitVector {
        let steps = read.steps();
        let mut processor = Processor::new(&self.config, read, reference.as_bytes(), qualities);
        for (ind, step) in steps.iter().enumerate() {
            processor.apply(*step, ind + 1 == steps.len());
        }

        if processor.skipped() > 0 {
            log::debug!(
                "Read {}: {} aligned position(s) fall outside the read or the reference",
                read.qname(),
                processor.skipped()
            );
        }
        processor.finish()
    }

    /// Bit vector of a read pair. Each mate is processed independently and the results are
    /// merged position by position.
    pub fn generate_paired(
        &self,
        first: &AlignedRead,
        second: &AlignedRead,
        reference: &str,
        qualities: &QualityTable,
    ) -> BitVector {
        let first = self.generate_single(first, reference, qualities);
        let second = self.generate_single(second, reference, qualities);
        merge::merge(first, &second)
    }

    /// Whether a deletion ending at `pos` (1-based) could be placed elsewhere without changing
    /// the surrounding reference context.
    pub fn is_deletion_ambiguous(&self, reference: &str, pos: i64, length: i64) -> bool {
        ambiguity::is_deletion_ambiguous(
            reference.as_bytes(),
            pos,
            length,
            *self.config.num_of_surbases(),
        )
    }
}
