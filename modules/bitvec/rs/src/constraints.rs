use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use rnamap_core_rs::AlignedRead;

use super::bitvector::BitVector;

pub const DEFAULT_MAP_SCORE_CUTOFF: u8 = 15;
pub const DEFAULT_MIN_MUT_DISTANCE: usize = 5;
pub const DEFAULT_PERCENT_LENGTH_CUTOFF: f64 = 0.10;
pub const DEFAULT_MUTATION_COUNT_CUTOFF: usize = 5;

/// Reason a bit vector was rejected by [`Constraints`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Rejection {
    LowMapq,
    ShortRead,
    TooManyMutations,
    MutationsTooClose,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::LowMapq => "low_mapq",
            Rejection::ShortRead => "short_read",
            Rejection::TooManyMutations => "too_many_muts",
            Rejection::MutationsTooClose => "muts_too_close",
        }
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Additional filters for reads that are too short or carry suspicious mutation patterns.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Copy, Clone, PartialEq, Debug, Dissolve, Getters)]
pub struct Stricter {
    /// A/C/G/T mismatches closer than this distance to each other reject the read
    min_mut_distance: usize,
    /// Minimal read length as a fraction of the reference length
    percent_length_cutoff: f64,
    /// Maximal number of A/C/G/T mismatches over the reference
    mutation_count_cutoff: usize,
}

impl Default for Stricter {
    fn default() -> Self {
        Self {
            min_mut_distance: DEFAULT_MIN_MUT_DISTANCE,
            percent_length_cutoff: DEFAULT_PERCENT_LENGTH_CUTOFF,
            mutation_count_cutoff: DEFAULT_MUTATION_COUNT_CUTOFF,
        }
    }
}

impl Stricter {
    pub fn new(
        min_mut_distance: usize,
        percent_length_cutoff: f64,
        mutation_count_cutoff: usize,
    ) -> Result<Self> {
        ensure!(
            percent_length_cutoff.is_finite() && percent_length_cutoff >= 0.0,
            "Length cutoff must be a finite non-negative fraction, got {percent_length_cutoff}"
        );
        Ok(Self {
            min_mut_distance,
            percent_length_cutoff,
            mutation_count_cutoff,
        })
    }
}

/// Read-level acceptance criteria applied to a finished bit vector.
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Copy, Clone, PartialEq, Debug, Dissolve, Getters)]
pub struct Constraints {
    /// Reads with a lower mapping quality are rejected
    map_score_cutoff: u8,
    stricter: Option<Stricter>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            map_score_cutoff: DEFAULT_MAP_SCORE_CUTOFF,
            stricter: None,
        }
    }
}

impl Constraints {
    pub fn new(map_score_cutoff: u8, stricter: Option<Stricter>) -> Self {
        Self {
            map_score_cutoff,
            stricter,
        }
    }

    /// Returns the first violated constraint, if any. `reads` are the read(s) the bit vector
    /// was generated from.
    pub fn check(
        &self,
        reads: &[&AlignedRead],
        reference: &str,
        bitvector: &BitVector,
    ) -> Option<Rejection> {
        if reads.iter().any(|x| *x.mapq() < self.map_score_cutoff) {
            return Some(Rejection::LowMapq);
        }

        let stricter = self.stricter.as_ref()?;
        let reflen = reference.len() as i64;

        if reflen > 0
            && reads.iter().any(|x| {
                (x.len() as f64 / reflen as f64) < stricter.percent_length_cutoff
            })
        {
            return Some(Rejection::ShortRead);
        }

        let mutations = bitvector
            .range(1..=reflen)
            .filter(|(_, symbol)| symbol.is_base())
            .count();
        if mutations > stricter.mutation_count_cutoff {
            return Some(Rejection::TooManyMutations);
        }

        let distance = i64::try_from(stricter.min_mut_distance).unwrap_or(i64::MAX);
        for (pos, _) in bitvector
            .range(1..=reflen)
            .filter(|(_, symbol)| symbol.is_base())
        {
            let neighbour = bitvector
                .range(pos.saturating_sub(distance)..pos.saturating_add(distance))
                .any(|(other, symbol)| other != pos && symbol.is_base());
            if neighbour {
                return Some(Rejection::MutationsTooClose);
            }
        }

        None
    }
}
