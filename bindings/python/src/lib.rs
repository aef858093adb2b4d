//! Python bindings for numerix.
//!
//! Builds the `libnumerixpy._core` extension module. Its submodules mirror
//! the package layout Python callers import from:
//!
//! - `libnumerixpy.base`: `lnpy_exec_system`
//! - `libnumerixpy.math`: `calculate_discriminant`, `cfactorial_sum`,
//!   `ifactorial_sum`, `calculate_discriminant_array`
//! - `libnumerixpy.cmath`: `calculate_discriminant`

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyOSError, PyOverflowError, PyValueError};
use pyo3::prelude::*;

use ::numerix::api::NumerixError;
use ::numerix::prelude::{
    calculate_discriminant as native_discriminant, cfactorial_sum as native_cfactorial_sum,
    discriminants, exec_system, ifactorial_sum as native_ifactorial_sum,
};

/// Name of the Python package the submodules are registered under.
const PACKAGE: &str = "libnumerixpy";

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a NumerixError to a PyErr
fn to_py_error(e: NumerixError) -> PyErr {
    match e {
        NumerixError::Overflow => PyOverflowError::new_err(e.to_string()),
        NumerixError::Spawn(_) => PyOSError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Create `name`, populate it with `init`, and make it importable as
/// `libnumerixpy.<name>`.
fn add_submodule(
    parent: &Bound<'_, PyModule>,
    name: &str,
    init: impl FnOnce(&Bound<'_, PyModule>) -> PyResult<()>,
) -> PyResult<()> {
    let py = parent.py();
    let child = PyModule::new(py, name)?;
    init(&child)?;
    parent.add_submodule(&child)?;
    py.import("sys")?
        .getattr("modules")?
        .set_item(format!("{PACKAGE}.{name}"), &child)?;
    Ok(())
}

// ============================================================================
// base
// ============================================================================

/// Execute a shell command.
///
/// The string is passed verbatim to ``sh -c`` (``cmd /C`` on Windows) with
/// no sanitization. Never call this with untrusted input.
///
/// Parameters
/// ----------
/// command : str
///     Command line handed to the interpreter.
///
/// Returns
/// -------
/// int
///     Exit status of the interpreter (127 for a missing command under
///     ``sh``; ``128 + n`` if killed by signal ``n``).
#[pyfunction]
fn lnpy_exec_system(py: Python<'_>, command: &str) -> PyResult<i32> {
    py.allow_threads(|| exec_system(command))
        .map_err(to_py_error)
}

// ============================================================================
// math / cmath
// ============================================================================

/// Calculate the discriminant by formula: D = b^2 - 4ac
///
/// Parameters
/// ----------
/// a, b, c : float
///     Quadratic coefficients.
#[pyfunction]
fn calculate_discriminant(a: f64, b: f64, c: f64) -> f64 {
    native_discriminant(a, b, c)
}

/// Calculate the discriminant elementwise over three arrays.
///
/// Parameters
/// ----------
/// a, b, c : array_like
///     Coefficient arrays of equal length (float64).
#[pyfunction]
fn calculate_discriminant_array<'py>(
    py: Python<'py>,
    a: PyReadonlyArray1<'py, f64>,
    b: PyReadonlyArray1<'py, f64>,
    c: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let a = a.as_slice().map_err(|e| PyValueError::new_err(e.to_string()))?;
    let b = b.as_slice().map_err(|e| PyValueError::new_err(e.to_string()))?;
    let c = c.as_slice().map_err(|e| PyValueError::new_err(e.to_string()))?;

    let d = discriminants(a, b, c).map_err(to_py_error)?;
    Ok(PyArray1::from_vec(py, d))
}

/// Calculate the cFactorial sum (from digits in string of numbers)
///
/// Parameters
/// ----------
/// digits : str
///     Decimal digits, e.g. ``"12345"``.
///
/// Raises
/// ------
/// ValueError
///     If a character is not an ASCII digit.
#[pyfunction]
fn cfactorial_sum(digits: &str) -> PyResult<u64> {
    native_cfactorial_sum(digits).map_err(to_py_error)
}

/// Calculate the iFactorial sum (from list of ints)
///
/// Parameters
/// ----------
/// values : sequence of int
///     Factorial arguments in ``0..=20``.
///
/// Raises
/// ------
/// ValueError
///     If a value is negative or larger than 20.
/// OverflowError
///     If the sum exceeds 2**64 - 1.
#[pyfunction]
fn ifactorial_sum(values: Vec<i64>) -> PyResult<u64> {
    native_ifactorial_sum(&values).map_err(to_py_error)
}

// ============================================================================
// Module Registration
// ============================================================================

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    add_submodule(m, "base", |base| {
        base.add_function(wrap_pyfunction!(lnpy_exec_system, base)?)
    })?;

    add_submodule(m, "math", |math| {
        math.add("__doc__", "Libnumerixpy - BaseMath")?;
        math.add_function(wrap_pyfunction!(calculate_discriminant, math)?)?;
        math.add_function(wrap_pyfunction!(calculate_discriminant_array, math)?)?;
        math.add_function(wrap_pyfunction!(cfactorial_sum, math)?)?;
        math.add_function(wrap_pyfunction!(ifactorial_sum, math)?)?;
        Ok(())
    })?;

    add_submodule(m, "cmath", |cmath| {
        cmath.add_function(wrap_pyfunction!(calculate_discriminant, cmath)?)
    })?;

    Ok(())
}
