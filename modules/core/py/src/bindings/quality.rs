use std::collections::HashMap;

use derive_more::{From, Into};
use eyre::{eyre, Result};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use rnamap_core_rs::quality::PHRED33;
use rnamap_core_rs::QualityTable;

fn ascii(symbol: char) -> Result<u8> {
    u8::try_from(symbol)
        .ok()
        .filter(|x| x.is_ascii())
        .ok_or_else(|| eyre!("Quality characters must be ASCII, got {symbol:?}"))
}

#[pyclass(eq, name = "QualityTable")]
#[derive(Clone, PartialEq, Eq, Debug, Default, From, Into)]
pub struct PyQualityTable {
    pub rs: QualityTable,
}

#[pymethods]
impl PyQualityTable {
    #[new]
    #[pyo3(signature = (offset = PHRED33))]
    pub fn new(offset: u8) -> Result<Self> {
        Ok(Self {
            rs: QualityTable::with_offset(offset)?,
        })
    }

    #[staticmethod]
    pub fn from_dict(scores: HashMap<char, i32>) -> Result<Self> {
        let rs = scores
            .into_iter()
            .map(|(symbol, score)| Ok((ascii(symbol)?, score)))
            .collect::<Result<QualityTable>>()?;
        Ok(Self { rs })
    }

    pub fn score(&self, symbol: char) -> Result<i32> {
        Ok(self.rs.score(ascii(symbol)?))
    }

    pub fn to_dict(&self) -> HashMap<char, i32> {
        self.rs.iter().map(|(k, v)| (k as char, v)).collect()
    }

    pub fn __getitem__(&self, symbol: char) -> PyResult<i32> {
        ascii(symbol)
            .ok()
            .and_then(|x| self.rs.get(x))
            .ok_or_else(|| PyKeyError::new_err(symbol.to_string()))
    }

    pub fn __setitem__(&mut self, symbol: char, score: i32) -> Result<()> {
        self.rs.insert(ascii(symbol)?, score);
        Ok(())
    }

    pub fn __len__(&self) -> usize {
        self.rs.len()
    }

    pub fn __repr__(&self) -> String {
        format!("QualityTable(len={})", self.rs.len())
    }

    fn __getstate__(&self) -> Vec<(u8, i32)> {
        let mut state: Vec<_> = self.rs.iter().collect();
        state.sort();
        state
    }

    fn __setstate__(&mut self, state: Vec<(u8, i32)>) {
        self.rs = state.into_iter().collect();
    }
}

/// Anything that can be used as a quality table: a `QualityTable` or a `dict[str, int]`.
#[derive(Debug, Into, From)]
pub struct IntoPyQualityTable(PyQualityTable);

impl IntoPyQualityTable {
    pub fn rs(&self) -> &QualityTable {
        &self.0.rs
    }
}

impl<'py> FromPyObject<'py> for IntoPyQualityTable {
    fn extract_bound(obj: &Bound<'py, PyAny>) -> PyResult<Self> {
        let table = if obj.is_instance_of::<PyQualityTable>() {
            obj.downcast::<PyQualityTable>()?.borrow().clone()
        } else if obj.is_instance_of::<PyDict>() {
            PyQualityTable::from_dict(obj.extract()?)?
        } else {
            return Err(PyValueError::new_err(format!(
                "Unknown quality table: {}",
                obj
            )));
        };
        Ok(table.into())
    }
}
