use pyo3::prelude::*;
use pyo3::PyTypeInfo;

pub use quality::{IntoPyQualityTable, PyQualityTable};
pub use read::PyAlignedRead;

pub mod pickle;
mod quality;
mod read;

pub fn register<'b>(
    path: &str,
    parent: &Bound<'b, PyModule>,
    sysmod: &Bound<PyAny>,
) -> PyResult<Bound<'b, PyModule>> {
    let name = "core";
    let path = format!("{}.{}", path, name);
    let module = PyModule::new(parent.py(), name)?;

    module.add_class::<PyAlignedRead>()?;
    module.add_class::<PyQualityTable>()?;

    for typbj in [
        PyAlignedRead::type_object(parent.py()),
        PyQualityTable::type_object(parent.py()),
    ] {
        typbj.setattr("__module__", &path)?
    }

    parent.add_submodule(&module)?;
    sysmod.set_item(path, &module)?;

    Ok(module)
}
