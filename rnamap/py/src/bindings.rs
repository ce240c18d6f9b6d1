use pyo3::prelude::*;

pub const __VERSION__: &str = env!("CARGO_PKG_VERSION");

#[pymodule]
pub fn rs(py: Python, module: &Bound<'_, PyModule>) -> PyResult<()> {
    let sysmod = py.import("sys")?.getattr("modules")?;
    let name = module.name()?.extract::<String>()?;

    // Core modules
    rnamap_core_py::register(&name, module, &sysmod)?;

    // Toolkit
    rnamap_bitvec_py::register(&name, module, &sysmod)?;

    // Constants
    module.add("__version__", __VERSION__)?;

    // Add the module to sys.modules cache
    sysmod.set_item(&name, module)?;

    Ok(())
}
