use derive_more::{Constructor, From, Into};
use eyre::Result;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use rnamap_bitvec_rs::constraints::{
    DEFAULT_MAP_SCORE_CUTOFF, DEFAULT_MIN_MUT_DISTANCE, DEFAULT_MUTATION_COUNT_CUTOFF,
    DEFAULT_PERCENT_LENGTH_CUTOFF,
};
use rnamap_bitvec_rs::{Constraints, Stricter};
use rnamap_core_py::pickle;
use rnamap_core_rs::AlignedRead;

use crate::result::{self, PyBitVectorResult};

#[pyclass(eq, name = "Stricter")]
#[derive(Clone, PartialEq, Debug, Default, Constructor, From, Into)]
pub struct PyStricter {
    rs: Stricter,
}

#[pymethods]
impl PyStricter {
    #[new]
    #[pyo3(signature = (
        min_mut_distance = DEFAULT_MIN_MUT_DISTANCE,
        percent_length_cutoff = DEFAULT_PERCENT_LENGTH_CUTOFF,
        mutation_count_cutoff = DEFAULT_MUTATION_COUNT_CUTOFF
    ))]
    fn __new__(
        min_mut_distance: usize,
        percent_length_cutoff: f64,
        mutation_count_cutoff: usize,
    ) -> Result<Self> {
        Ok(Self::new(Stricter::new(
            min_mut_distance,
            percent_length_cutoff,
            mutation_count_cutoff,
        )?))
    }

    #[getter]
    fn min_mut_distance(&self) -> usize {
        *self.rs.min_mut_distance()
    }

    #[getter]
    fn percent_length_cutoff(&self) -> f64 {
        *self.rs.percent_length_cutoff()
    }

    #[getter]
    fn mutation_count_cutoff(&self) -> usize {
        *self.rs.mutation_count_cutoff()
    }

    fn __getstate__(&self) -> Vec<u8> {
        pickle::to_bytes(&self.rs)
    }

    fn __setstate__(&mut self, state: Bound<PyBytes>) -> PyResult<()> {
        pickle::from_bytes(state.as_bytes()).map(|rs| self.rs = rs)
    }
}

#[pyclass(eq, name = "Constraints")]
#[derive(Clone, PartialEq, Debug, Default, Constructor, From, Into)]
pub struct PyConstraints {
    rs: Constraints,
}

#[pymethods]
impl PyConstraints {
    #[new]
    #[pyo3(signature = (map_score_cutoff = DEFAULT_MAP_SCORE_CUTOFF, stricter = None))]
    fn __new__(map_score_cutoff: u8, stricter: Option<PyStricter>) -> Self {
        Self::new(Constraints::new(map_score_cutoff, stricter.map(|x| x.rs)))
    }

    #[getter]
    fn map_score_cutoff(&self) -> u8 {
        *self.rs.map_score_cutoff()
    }

    #[getter]
    fn stricter(&self) -> Option<PyStricter> {
        (*self.rs.stricter()).map(PyStricter::new)
    }

    /// Name of the first violated constraint or `None` if the bit vector is accepted.
    fn check(
        &self,
        py: Python,
        result: PyRef<PyBitVectorResult>,
        ref_seq: &str,
    ) -> Result<Option<&'static str>> {
        let bitvector = result::from_py(&result.data)?;
        let reads = result
            .reads
            .iter()
            .map(|x| AlignedRead::try_from(&*x.borrow(py)))
            .collect::<Result<Vec<_>>>()?;
        let reads: Vec<&AlignedRead> = reads.iter().collect();

        Ok(self
            .rs
            .check(&reads, ref_seq, &bitvector)
            .map(|x| x.as_str()))
    }

    fn __getstate__(&self) -> Vec<u8> {
        pickle::to_bytes(&self.rs)
    }

    fn __setstate__(&mut self, state: Bound<PyBytes>) -> PyResult<()> {
        pickle::from_bytes(state.as_bytes()).map(|rs| self.rs = rs)
    }
}
