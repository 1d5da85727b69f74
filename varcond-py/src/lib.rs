//! Python bindings for the varcond texture descriptor.
//!
//! This module exposes the conditional-variance computation to Python via
//! PyO3. Fields arrive as 2D numpy arrays (height x width).

use numpy::{PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use varcond::{Displacement, FieldView, VarCondError};

/// Convert a VarCondError to a Python exception.
fn to_py_err(err: VarCondError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn view_f64<'a>(field: &'a PyReadonlyArray2<'_, f64>) -> PyResult<FieldView<'a, f64>> {
    let shape = field.shape();
    let height = shape[0];
    let width = shape[1];
    let data = field.as_slice()?;
    FieldView::from_slice(data, width, height).map_err(to_py_err)
}

fn view_u8<'a>(field: &'a PyReadonlyArray2<'_, u8>) -> PyResult<FieldView<'a, u8>> {
    let shape = field.shape();
    let height = shape[0];
    let width = shape[1];
    let data = field.as_slice()?;
    FieldView::from_slice(data, width, height).map_err(to_py_err)
}

/// Compute the displacement-conditioned variance of a field.
///
/// Args:
///     field: 2D float64 numpy array (height x width)
///     dx: column offset of the paired neighbor
///     dy: row offset of the paired neighbor
///
/// Returns:
///     The scalar descriptor (non-negative float).
///
/// Raises:
///     ValueError: empty field, non-finite sample, or a displacement that
///         leaves no valid pixel pair.
#[pyfunction]
fn var_cond(field: PyReadonlyArray2<'_, f64>, dx: isize, dy: isize) -> PyResult<f64> {
    let view = view_f64(&field)?;
    varcond::var_cond(view, Displacement::new(dx, dy)).map_err(to_py_err)
}

/// Compute the descriptor over an 8-bit grayscale image array.
///
/// Args:
///     field: 2D uint8 numpy array (height x width)
///     dx: column offset of the paired neighbor
///     dy: row offset of the paired neighbor
#[pyfunction]
fn var_cond_u8(field: PyReadonlyArray2<'_, u8>, dx: isize, dy: isize) -> PyResult<f64> {
    let view = view_u8(&field)?;
    varcond::var_cond(view, Displacement::new(dx, dy)).map_err(to_py_err)
}

/// Compute the descriptor for a bank of displacements.
///
/// Queries are evaluated on the rayon pool; results keep the input order.
///
/// Args:
///     field: 2D float64 numpy array (height x width)
///     displacements: sequence of (dx, dy) integer pairs
///
/// Returns:
///     List of scalar descriptors, one per displacement.
#[pyfunction]
fn var_cond_sweep(
    field: PyReadonlyArray2<'_, f64>,
    displacements: Vec<(isize, isize)>,
) -> PyResult<Vec<f64>> {
    let view = view_f64(&field)?;
    let bank: Vec<Displacement> = displacements
        .into_iter()
        .map(|(dx, dy)| Displacement::new(dx, dy))
        .collect();
    varcond::var_cond_sweep_par(view, &bank).map_err(to_py_err)
}

/// Python module for the varcond texture descriptor.
#[pymodule]
fn _varcond(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(var_cond, m)?)?;
    m.add_function(wrap_pyfunction!(var_cond_u8, m)?)?;
    m.add_function(wrap_pyfunction!(var_cond_sweep, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
