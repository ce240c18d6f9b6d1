use std::hash::{DefaultHasher, Hash, Hasher};

use eyre::{ensure, Report, Result};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use rnamap_core_rs::AlignedRead;

use crate::pickle;

/// Python-facing aligned read. Fields are plain attributes that can be modified at any time,
/// the Rust read is assembled when the object crosses the boundary.
#[pyclass(eq, get_all, set_all, name = "AlignedRead")]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct PyAlignedRead {
    pub qname: String,
    pub flag: u16,
    pub rname: String,
    pub pos: i64,
    pub mapq: u8,
    pub cigar: String,
    pub rnext: String,
    pub pnext: i64,
    pub tlen: i64,
    pub seq: String,
    pub qual: String,
    pub md_string: String,
}

#[pymethods]
impl PyAlignedRead {
    #[new]
    #[pyo3(signature = (
        qname = String::new(), flag = 0, rname = String::new(), pos = 0, mapq = 0,
        cigar = String::new(), rnext = String::new(), pnext = 0, tlen = 0,
        seq = String::new(), qual = String::new(), md_string = String::new()
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        qname: String,
        flag: u16,
        rname: String,
        pos: i64,
        mapq: u8,
        cigar: String,
        rnext: String,
        pnext: i64,
        tlen: i64,
        seq: String,
        qual: String,
        md_string: String,
    ) -> Self {
        Self {
            qname,
            flag,
            rname,
            pos,
            mapq,
            cigar,
            rnext,
            pnext,
            tlen,
            seq,
            qual,
            md_string,
        }
    }

    pub fn __len__(&self) -> usize {
        self.seq.len()
    }

    pub fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "AlignedRead({:?}, pos={}, cigar={:?}, seq={:?})",
            self.qname, self.pos, self.cigar, self.seq
        )
    }

    fn __getstate__(&self) -> Vec<u8> {
        pickle::to_bytes(&self.to_rs())
    }

    fn __setstate__(&mut self, state: Bound<PyBytes>) -> PyResult<()> {
        let rs: AlignedRead = pickle::from_bytes(state.as_bytes())?;
        *self = rs.into();
        Ok(())
    }
}

impl PyAlignedRead {
    pub fn to_rs(&self) -> AlignedRead {
        AlignedRead::new(
            self.qname.clone(),
            self.pos,
            self.cigar.clone(),
            self.seq.clone(),
            self.qual.clone(),
        )
        .with_flag(self.flag)
        .with_rname(self.rname.clone())
        .with_mapq(self.mapq)
        .with_mate(self.rnext.clone(), self.pnext, self.tlen)
        .with_md_string(self.md_string.clone())
    }
}

impl From<AlignedRead> for PyAlignedRead {
    fn from(read: AlignedRead) -> Self {
        let (qname, flag, rname, pos, mapq, cigar, rnext, pnext, tlen, seq, qual, md_string) =
            read.dissolve();
        Self {
            qname,
            flag,
            rname,
            pos,
            mapq,
            cigar,
            rnext,
            pnext,
            tlen,
            seq,
            qual,
            md_string,
        }
    }
}

impl TryFrom<&PyAlignedRead> for AlignedRead {
    type Error = Report;

    /// Bit vectors store read bases as single bytes, so only ASCII reads are accepted.
    fn try_from(read: &PyAlignedRead) -> Result<Self> {
        ensure!(
            read.seq.is_ascii() && read.qual.is_ascii(),
            "Read {:?} has non-ASCII characters in its sequence or quality string",
            read.qname
        );
        Ok(read.to_rs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() -> Result<()> {
        let read = PyAlignedRead {
            qname: "read".into(),
            pos: 3,
            mapq: 42,
            cigar: "2M".into(),
            seq: "A=".into(),
            qual: "II".into(),
            ..Default::default()
        };
        let rs = AlignedRead::try_from(&read)?;
        assert_eq!(rs.seq(), "A=");
        assert_eq!(PyAlignedRead::from(rs), read);
        Ok(())
    }

    #[test]
    fn test_non_ascii_reads_are_rejected() {
        let read = PyAlignedRead {
            seq: "AÇ".into(),
            qual: "II".into(),
            ..Default::default()
        };
        assert!(AlignedRead::try_from(&read).is_err());

        let read = PyAlignedRead {
            seq: "AC".into(),
            qual: "I€".into(),
            ..Default::default()
        };
        assert!(AlignedRead::try_from(&read).is_err());
    }
}
