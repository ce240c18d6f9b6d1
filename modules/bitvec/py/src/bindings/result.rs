use std::collections::BTreeMap;

use derive_more::Constructor;
use eyre::{eyre, Result};
use pyo3::prelude::*;

use rnamap_bitvec_rs::{BitVector, Symbol};
use rnamap_core_py::PyAlignedRead;

/// Python view of a bit vector: 1-based position -> single character symbol.
pub type PyBitVector = BTreeMap<i64, char>;

pub fn to_py(bitvector: BitVector) -> PyBitVector {
    bitvector
        .into_iter()
        .map(|(pos, symbol)| (pos, symbol.symbol()))
        .collect()
}

pub fn from_py(data: &PyBitVector) -> Result<BitVector> {
    data.iter()
        .map(|(pos, symbol)| {
            Symbol::try_from(*symbol)
                .map(|x| (*pos, x))
                .map_err(|_| eyre!("Unknown bit vector symbol {symbol:?} at position {pos}"))
        })
        .collect()
}

#[pyclass(get_all, set_all, name = "BitVectorResult")]
#[derive(Debug, Constructor)]
pub struct PyBitVectorResult {
    pub data: PyBitVector,
    pub reads: Vec<Py<PyAlignedRead>>,
}

#[pymethods]
impl PyBitVectorResult {
    #[new]
    #[pyo3(signature = (data = PyBitVector::new(), reads = Vec::new()))]
    fn __new__(data: PyBitVector, reads: Vec<Py<PyAlignedRead>>) -> Self {
        Self::new(data, reads)
    }

    fn __len__(&self) -> usize {
        self.data.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "BitVectorResult(positions={}, reads={})",
            self.data.len(),
            self.reads.len()
        )
    }
}
