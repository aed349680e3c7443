//! entropy-window — windowed entropy-gap equilibrium solver with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the equilibrium engine to Python via the `_entropy_window`
//! extension module. The engine evaluates the entropy gap
//! Δ(p) = H₂(2p − p²) − H₂(p) on [0, 1/2], locates its argmax, computes
//! windowed minima m(γ, β), and solves θ·m + (1−θ)·Δ(α) = 0 for the
//! equilibrium parameter α_max on [α*, 1/2), with α* = (3 − √5)/2.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`entropy`] and [`solver`]) as the
//!   public crate surface.
//! - Define `#[pyclass]`/`#[pyfunction]` wrappers and the `#[pymodule]`
//!   initializer for the `_entropy_window` Python extension when the
//!   `python-bindings` feature is enabled.
//! - Create and register Python submodules (`entropy`, `solver`) under
//!   `entropy_window` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - The core is stateless and synchronous: every operation is a pure
//!   function of its explicit inputs, with per-call grid buffers and no
//!   shared mutable state, so concurrent callers need no locking.
//! - The only failure that propagates out of the core is an invalid
//!   (γ, β) window (plus configuration validation); the no-root case of
//!   the bisection is recovered internally via the documented α*
//!   fallback and is never an error.
//!
//! Conventions
//! -----------
//! - Entropy is measured in bits throughout; windows live in [0, 1/2]
//!   with γ clamped up to 0 and β clamped down to 1/2 before use.
//! - Python-exposed items live under `entropy_window.<submodule>`;
//!   errors cross the boundary as `ValueError` with the Rust `Display`
//!   message preserved verbatim.
//! - CSV export and plotting are external collaborators: the sweep
//!   yields (β, α_max) rows and the caller serializes them.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on the inner modules directly:
//!
//!   ```rust
//!   use entropy_window::solver::{EquilibriumOutcome, SolverConfig};
//!
//!   let outcome = EquilibriumOutcome::solve(&SolverConfig::new(0.33, 0.16, 0.34))?;
//!   println!("alpha_max = {:.6}", outcome.alpha_max());
//!   # Ok::<(), entropy_window::solver::SolverError>(())
//!   ```
//! - Python users import the compiled extension through the
//!   `entropy_window` package and interact with `Equilibrium`,
//!   `alpha_max`, and `sweep_beta`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules; the end-to-end regression baseline at resolution 20001
//!   lives in `tests/integration_equilibrium.rs`.
//! - The PyO3 layer is thin by design and is exercised by Python-level
//!   smoke tests in downstream packaging, not here.

pub mod entropy;
pub mod solver;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    solver::{EquilibriumOutcome, SolverConfig},
    utils::extract_f64_array,
};

/// Equilibrium — Python-facing wrapper for a full equilibrium solve.
///
/// Purpose
/// -------
/// Represent the outcome of a single equilibrium solve when called from
/// Python and forward all computation to [`EquilibriumOutcome`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs into a [`SolverConfig`].
/// - Run the solve via [`EquilibriumOutcome::solve`] and store the
///   outcome internally.
/// - Expose scalar accessors (`p_max`, `delta_max`, `m_window`,
///   `alpha_max`, `alpha_star`) as Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Equilibrium(theta, gamma, beta, resolution=None, tol=None, max_iter=None)`:
/// - `theta`: `float` — weight on the windowed minimum; finite real.
/// - `gamma`: `float` — window floor; clamped up to 0.
/// - `beta`: `float` — window ceiling; clamped down to 1/2.
/// - `resolution`: `Optional[int]` — grid points; defaults to 20001.
/// - `tol`: `Optional[float]` — bisection tolerance; defaults to 1e-12.
/// - `max_iter`: `Optional[int]` — bisection cap; defaults to 200.
///
/// Fields
/// ------
/// - `inner`: [`EquilibriumOutcome`]
///   Rust-side value object holding the solved scalars.
///
/// Invariants
/// ----------
/// - `inner` satisfies all invariants documented on
///   [`EquilibriumOutcome`], including α_max ∈ [α*, 0.499999].
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should use
///   [`EquilibriumOutcome`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "entropy_window.solver")]
pub struct Equilibrium {
    /// Underlying Rust outcome.
    pub inner: EquilibriumOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Equilibrium {
    #[new]
    #[pyo3(signature = (theta, gamma, beta, resolution=None, tol=None, max_iter=None))]
    pub fn new(
        theta: f64, gamma: f64, beta: f64, resolution: Option<usize>, tol: Option<f64>,
        max_iter: Option<usize>,
    ) -> PyResult<Self> {
        let mut config = SolverConfig::new(theta, gamma, beta);
        if let Some(resolution) = resolution {
            config.resolution = resolution;
        }
        if let Some(tol) = tol {
            config.tol = tol;
        }
        if let Some(max_iter) = max_iter {
            config.max_iter = max_iter;
        }
        let inner = EquilibriumOutcome::solve(&config)?;
        Ok(Equilibrium { inner })
    }

    #[getter]
    pub fn p_max(&self) -> f64 {
        self.inner.p_max()
    }

    #[getter]
    pub fn delta_max(&self) -> f64 {
        self.inner.delta_max()
    }

    #[getter]
    pub fn m_window(&self) -> f64 {
        self.inner.m_window()
    }

    #[getter]
    pub fn alpha_max(&self) -> f64 {
        self.inner.alpha_max()
    }

    #[getter]
    pub fn alpha_star(&self) -> f64 {
        self.inner.alpha_star()
    }
}

#[cfg(feature = "python-bindings")]
#[pyfunction(name = "h2")]
fn py_h2(p: f64) -> f64 {
    crate::entropy::h2(p)
}

#[cfg(feature = "python-bindings")]
#[pyfunction(name = "union_map")]
fn py_union_map(p: f64) -> f64 {
    crate::entropy::union_map(p)
}

#[cfg(feature = "python-bindings")]
#[pyfunction(name = "delta")]
fn py_delta(p: f64) -> f64 {
    crate::entropy::delta(p)
}

#[cfg(feature = "python-bindings")]
#[pyfunction(name = "alpha_max")]
fn py_alpha_max(theta: f64, gamma: f64, beta: f64) -> PyResult<f64> {
    Ok(crate::solver::alpha_max(theta, gamma, beta)?)
}

/// Sweep α_max over a 1-D array (or sequence) of β values.
///
/// Accepts a `numpy.ndarray`, `pandas.Series`, or plain sequence of
/// float64 ceilings and returns a list of `(beta, alpha_max)` tuples in
/// input order. Raises `ValueError` for any window that inverts after
/// clamping.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "sweep_beta")]
fn py_sweep_beta<'py>(
    py: Python<'py>, theta: f64, gamma: f64, betas: &Bound<'py, PyAny>,
) -> PyResult<Vec<(f64, f64)>> {
    let betas_ro = extract_f64_array(py, betas)?;
    let betas_slice = betas_ro.as_slice()?;
    let rows: Result<Vec<(f64, f64)>, _> =
        crate::solver::sweep_beta(theta, gamma, betas_slice).collect();
    Ok(rows?)
}

/// _entropy_window — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_entropy_window` Python module and register the
/// submodules used by the public `entropy_window` package.
///
/// Key behaviors
/// -------------
/// - Create `entropy` and `solver` submodules.
/// - Attach them to the parent `_entropy_window` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_entropy_window`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Notes
/// -----
/// - Invoked automatically by Python when importing the compiled
///   extension; not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _entropy_window<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let entropy_mod = PyModule::new(_py, "entropy")?;
    let solver_mod = PyModule::new(_py, "solver")?;
    entropy_submodule(_py, m, &entropy_mod)?;
    solver_submodule(_py, m, &solver_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("entropy_window.entropy", entropy_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("entropy_window.solver", solver_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn entropy_submodule<'py>(
    _py: Python, entropy_window: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_h2, m)?)?;
    m.add_function(wrap_pyfunction!(py_union_map, m)?)?;
    m.add_function(wrap_pyfunction!(py_delta, m)?)?;
    entropy_window.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn solver_submodule<'py>(
    _py: Python, entropy_window: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Equilibrium>()?;
    m.add_function(wrap_pyfunction!(py_alpha_max, m)?)?;
    m.add_function(wrap_pyfunction!(py_sweep_beta, m)?)?;
    entropy_window.add_submodule(m)?;
    Ok(())
}
