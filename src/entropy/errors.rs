//! entropy::errors — error surface for windowed entropy-gap computations.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the grid-sampling layer,
//! together with a conversion to Python exceptions for PyO3-based
//! bindings. Window validity is the only failure the entropy layer can
//! report; all other degenerate numerical conditions have defined
//! fallback values in the functions themselves.
//!
//! Key behaviors
//! -------------
//! - Define [`EntropyResult`] and [`EntropyError`] as the canonical result
//!   and error types for `entropy::grid`.
//! - Attach a human-readable `Display` message phrased in terms of the
//!   domain constraint (0 ≤ γ ≤ β ≤ 1/2) rather than implementation
//!   details.
//! - Implement `From<EntropyError> for PyErr` (behind `python-bindings`)
//!   mapping to `PyValueError` with the Rust message preserved verbatim.
//!
//! Conventions
//! -----------
//! - The solver layer has its own error enum (`solver::errors::SolverError`)
//!   which wraps this one; code above the entropy layer should match on
//!   that type instead.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that the `Display` message embeds the offending
//!   clamped bounds.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type EntropyResult<T> = Result<T, EntropyError>;

/// EntropyError — failure conditions for windowed gap computations.
///
/// Variants
/// --------
/// - `InvalidWindow { lo, hi }`
///   After clamping γ up to 0 and β down to 1/2, the window bounds
///   inverted (`hi < lo`), so min over [lo, hi] of Δ is undefined. The payload
///   carries the *clamped* bounds actually compared.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation; convertible to `PyValueError` at
///   the Python boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntropyError {
    InvalidWindow { lo: f64, hi: f64 },
}

impl std::error::Error for EntropyError {}

impl std::fmt::Display for EntropyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntropyError::InvalidWindow { lo, hi } => {
                write!(f, "invalid window: need 0 <= gamma <= beta <= 1/2, got [{lo}, {hi}] after clamping")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<EntropyError> for PyErr {
    fn from(err: EntropyError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure the Display message carries the clamped bounds so logs are
    // actionable without extra context.
    //
    // Given
    // -----
    // - An InvalidWindow error with lo = 0.4, hi = 0.3.
    //
    // Expect
    // ------
    // - The rendered message contains both bound values.
    fn invalid_window_display_embeds_bounds() {
        let err = EntropyError::InvalidWindow { lo: 0.4, hi: 0.3 };
        let msg = err.to_string();
        assert!(msg.contains("0.4") && msg.contains("0.3"), "message was: {msg}");
    }
}
