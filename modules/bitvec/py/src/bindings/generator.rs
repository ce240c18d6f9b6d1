use derive_more::{Constructor, From, Into};
use eyre::{eyre, Result};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use rnamap_bitvec_rs::config::{DEFAULT_NUM_OF_SURBASES, DEFAULT_QSCORE_CUTOFF};
use rnamap_bitvec_rs::{Config, Generator};
use rnamap_core_py::{pickle, IntoPyQualityTable, PyAlignedRead};
use rnamap_core_rs::AlignedRead;

use crate::result::{self, PyBitVector, PyBitVectorResult};

#[pyclass(eq, name = "BitVectorGenerator")]
#[derive(Clone, PartialEq, Debug, Default, Constructor, From, Into)]
pub struct PyBitVectorGenerator {
    rs: Generator,
}

#[pymethods]
impl PyBitVectorGenerator {
    #[new]
    #[pyo3(signature = (
        qscore_cutoff = DEFAULT_QSCORE_CUTOFF,
        num_of_surbases = DEFAULT_NUM_OF_SURBASES as i64
    ))]
    fn __new__(qscore_cutoff: i32, num_of_surbases: i64) -> Result<Self> {
        let num_of_surbases = usize::try_from(num_of_surbases).map_err(|_| {
            eyre!("Number of surrounding bases must be positive, got {num_of_surbases}")
        })?;
        let config = Config::new(qscore_cutoff, num_of_surbases)?;
        Ok(Self::new(Generator::new(config)))
    }

    #[getter]
    fn qscore_cutoff(&self) -> i32 {
        *self.rs.config().qscore_cutoff()
    }

    #[getter]
    fn num_of_surbases(&self) -> usize {
        *self.rs.config().num_of_surbases()
    }

    /// Bit vector of a single read as a `{position: symbol}` dictionary.
    #[pyo3(signature = (read, ref_seq, phred_qscores))]
    fn generate_single(
        &self,
        read: PyRef<PyAlignedRead>,
        ref_seq: &str,
        phred_qscores: IntoPyQualityTable,
    ) -> Result<PyBitVector> {
        let read = AlignedRead::try_from(&*read)?;
        let qualities = phred_qscores.rs();
        Ok(result::to_py(self.rs.generate_single(&read, ref_seq, qualities)))
    }

    /// Merged bit vector of a read pair as a `{position: symbol}` dictionary.
    #[pyo3(signature = (read1, read2, ref_seq, phred_qscores))]
    fn generate_paired(
        &self,
        read1: PyRef<PyAlignedRead>,
        read2: PyRef<PyAlignedRead>,
        ref_seq: &str,
        phred_qscores: IntoPyQualityTable,
    ) -> Result<PyBitVector> {
        let read1 = AlignedRead::try_from(&*read1)?;
        let read2 = AlignedRead::try_from(&*read2)?;
        let qualities = phred_qscores.rs();
        Ok(result::to_py(self.rs.generate_paired(&read1, &read2, ref_seq, qualities)))
    }

    /// Single or paired bit vector together with the reads it was built from.
    #[pyo3(signature = (read1, ref_seq, phred_qscores, read2 = None))]
    fn generate(
        &self,
        read1: Bound<PyAlignedRead>,
        ref_seq: &str,
        phred_qscores: IntoPyQualityTable,
        read2: Option<Bound<PyAlignedRead>>,
    ) -> Result<PyBitVectorResult> {
        let qualities = phred_qscores.rs();
        let first = AlignedRead::try_from(&*read1.borrow())?;

        let (data, reads) = match read2 {
            None => (
                self.rs.generate_single(&first, ref_seq, qualities),
                vec![read1.unbind()],
            ),
            Some(read2) => {
                let second = AlignedRead::try_from(&*read2.borrow())?;
                (
                    self.rs.generate_paired(&first, &second, ref_seq, qualities),
                    vec![read1.unbind(), read2.unbind()],
                )
            }
        };
        Ok(PyBitVectorResult::new(result::to_py(data), reads))
    }

    #[pyo3(signature = (ref_seq, pos, length))]
    fn test_is_deletion_ambiguous(&self, ref_seq: &str, pos: i64, length: i64) -> bool {
        self.rs.is_deletion_ambiguous(ref_seq, pos, length)
    }

    fn __repr__(&self) -> String {
        format!(
            "BitVectorGenerator(qscore_cutoff={}, num_of_surbases={})",
            self.qscore_cutoff(),
            self.num_of_surbases()
        )
    }

    fn __getstate__(&self) -> Vec<u8> {
        pickle::to_bytes(&self.rs)
    }

    fn __setstate__(&mut self, state: Bound<PyBytes>) -> PyResult<()> {
        pickle::from_bytes(state.as_bytes()).map(|rs| self.rs = rs)
    }
}
