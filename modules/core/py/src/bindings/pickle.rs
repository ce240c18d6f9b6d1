use std::any::type_name;

use bitcode::{Decode, Encode};
use pyo3::prelude::*;

/// Pickled state of Rust-backed objects.
pub fn to_bytes<T: Encode + ?Sized>(obj: &T) -> Vec<u8> {
    bitcode::encode(obj)
}

pub fn from_bytes<'a, T: Decode<'a>>(state: &'a [u8]) -> PyResult<T> {
    bitcode::decode(state).map_err(|err| {
        let report = eyre::Report::from(err)
            .wrap_err(format!("Failed to restore {} from pickled state", type_name::<T>()));
        PyErr::from(report)
    })
}
