//! utils — FFI input adapters for the Python bindings.
//!
//! Purpose
//! -------
//! Convert loosely typed Python inputs (numpy arrays, pandas Series,
//! plain sequences) into contiguous `f64` views for the sweep entry
//! point. Everything here is feature-gated glue; the numerical core
//! never depends on it.

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Extract a contiguous 1-D f64 view from a numpy array, Series, or sequence.
///
/// Tries, in order: a direct `numpy.ndarray` extraction, a `.to_numpy()`
/// call (pandas), and finally a plain `Vec<f64>` extraction copied into a
/// fresh array. Raises `TypeError` when none applies.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}
