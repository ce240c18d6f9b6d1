use pyo3::prelude::*;
use pyo3::PyTypeInfo;

pub use constraints::{PyConstraints, PyStricter};
pub use generator::PyBitVectorGenerator;
pub use result::PyBitVectorResult;

mod constraints;
mod generator;
mod result;

pub fn register<'b>(
    path: &str,
    parent: &Bound<'b, PyModule>,
    sysmod: &Bound<PyAny>,
) -> PyResult<Bound<'b, PyModule>> {
    let name = "bitvec";
    let path = format!("{}.{}", path, name);
    let module = PyModule::new(parent.py(), name)?;

    module.add_class::<PyBitVectorGenerator>()?;
    module.add_class::<PyBitVectorResult>()?;
    module.add_class::<PyConstraints>()?;
    module.add_class::<PyStricter>()?;

    for typbj in [
        PyBitVectorGenerator::type_object(parent.py()),
        PyBitVectorResult::type_object(parent.py()),
        PyConstraints::type_object(parent.py()),
        PyStricter::type_object(parent.py()),
    ] {
        typbj.setattr("__module__", &path)?
    }

    parent.add_submodule(&module)?;
    sysmod.set_item(path, &module)?;

    Ok(module)
}
