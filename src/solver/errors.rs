//! solver::errors — unified error surface for the equilibrium solver.
//!
//! Purpose
//! -------
//! Normalize configuration failures and propagated window errors into a
//! single enum with a common result alias, so callers of the solver see
//! one error type regardless of which layer rejected the input.
//!
//! Key behaviors
//! -------------
//! - Define [`SolverResult`] and [`SolverError`] as the canonical result
//!   and error types for `solver::equilibrium` and `solver::sweep`.
//! - Wrap [`EntropyError`] via `From`, so `?` propagates windowed-minimum
//!   failures without manual mapping.
//! - Implement `From<SolverError> for PyErr` (behind `python-bindings`)
//!   mapping to `PyValueError` with the Rust `Display` message preserved
//!   verbatim.
//!
//! Invariants & assumptions
//! ------------------------
//! - A missing sign change on the bisection bracket is *not* represented
//!   here: it is recovered locally by the solver (α* fallback) and never
//!   surfaces as an error.
//! - Variants are small and `Copy`, cheap to use in tests and matching.
//!
//! Conventions
//! -----------
//! - Messages are phrased as domain constraints ("theta must be finite",
//!   "resolution must be at least 2") rather than low-level details.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload and that `EntropyError` converts through `From`.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::entropy::errors::EntropyError;

pub type SolverResult<T> = Result<T, SolverError>;

/// SolverError — failure conditions for equilibrium solves.
///
/// Variants
/// --------
/// - `Window(EntropyError)`
///   The windowed minimum rejected the (γ, β) window; carries the
///   underlying [`EntropyError`].
/// - `NonFiniteWeight(theta)`
///   θ is NaN or ±∞.
/// - `NonFiniteBound(value)`
///   γ or β is NaN or ±∞ (clamping handles out-of-range finite values,
///   but not non-finite ones).
/// - `InvalidResolution(resolution)`
///   The grid resolution is below 2, so an inclusive two-endpoint grid
///   cannot be formed.
/// - `InvalidTol(tol)`
///   The bisection tolerance is non-positive or non-finite.
/// - `ZeroMaxIter`
///   The bisection iteration cap is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverError {
    Window(EntropyError),
    NonFiniteWeight(f64),
    NonFiniteBound(f64),
    InvalidResolution(usize),
    InvalidTol(f64),
    ZeroMaxIter,
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Window(inner) => Some(inner),
            _ => None,
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::Window(inner) => write!(f, "{inner}"),
            SolverError::NonFiniteWeight(theta) => {
                write!(f, "theta must be a finite real, got {theta}")
            }
            SolverError::NonFiniteBound(value) => {
                write!(f, "window bounds must be finite reals, got {value}")
            }
            SolverError::InvalidResolution(resolution) => {
                write!(f, "resolution must be at least 2, got {resolution}")
            }
            SolverError::InvalidTol(tol) => {
                write!(f, "tolerance must be positive and finite, got {tol}")
            }
            SolverError::ZeroMaxIter => {
                write!(f, "max_iter must be at least 1")
            }
        }
    }
}

impl From<EntropyError> for SolverError {
    fn from(err: EntropyError) -> Self {
        SolverError::Window(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<SolverError> for PyErr {
    fn from(err: SolverError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure each variant's Display message embeds its payload so that
    // logs identify the offending value without extra context.
    //
    // Given
    // -----
    // - One instance of each payload-carrying variant.
    //
    // Expect
    // ------
    // - The rendered message contains the payload's textual form.
    fn display_messages_embed_payloads() {
        assert!(SolverError::NonFiniteWeight(f64::NAN).to_string().contains("NaN"));
        assert!(SolverError::NonFiniteBound(f64::INFINITY).to_string().contains("inf"));
        assert!(SolverError::InvalidResolution(1).to_string().contains('1'));
        assert!(SolverError::InvalidTol(-1e-12).to_string().contains("-0.000000000001"));
    }

    #[test]
    // Purpose
    // -------
    // Verify that EntropyError propagates through From and keeps its
    // message verbatim.
    //
    // Given
    // -----
    // - An InvalidWindow error converted into SolverError.
    //
    // Expect
    // ------
    // - A Window variant whose Display equals the inner Display.
    fn entropy_error_converts_and_preserves_message() {
        let inner = EntropyError::InvalidWindow { lo: 0.4, hi: 0.3 };
        let outer: SolverError = inner.into();
        assert_eq!(outer, SolverError::Window(inner));
        assert_eq!(outer.to_string(), inner.to_string());
    }
}
