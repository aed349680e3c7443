//! solver::validation — precondition guards for equilibrium solves.
//!
//! Purpose
//! -------
//! Centralize the basic checks on a [`SolverConfig`] before any numeric
//! work is performed, so the grid and bisection layers can assume finite
//! inputs and usable knobs. This avoids duplicating the checks across
//! the single-point and sweep entry points.
//!
//! Key behaviors
//! -------------
//! - Enforce finiteness of θ, γ, and β; reject NaN and ±∞ with
//!   structured [`SolverError`] values.
//! - Enforce usable numeric knobs: resolution ≥ 2, positive finite
//!   tolerance, at least one bisection iteration.
//!
//! Invariants & assumptions
//! ------------------------
//! - Out-of-range *finite* γ and β are NOT rejected here: clamping inside
//!   `entropy::grid::windowed_min` is the documented behavior for those.
//! - A successful return guarantees only the constraints listed above;
//!   window inversion (γ > β after clamping) is still detected later by
//!   the windowed minimum.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_config`] at the top of
//!   [`EquilibriumOutcome::solve`](crate::solver::equilibrium::EquilibriumOutcome::solve);
//!   the sweep inherits the check through the single-point solve.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and a success path, including
//!   the deliberate acceptance of out-of-range finite bounds.

use crate::solver::equilibrium::SolverConfig;
use crate::solver::errors::{SolverError, SolverResult};

/// Validate the basic constraints on a [`SolverConfig`].
///
/// Parameters
/// ----------
/// - `config`: `&SolverConfig`
///   Candidate configuration for a single equilibrium solve.
///
/// Returns
/// -------
/// `SolverResult<()>`
///   - `Ok(())` if θ, γ, β are finite and the numeric knobs are usable.
///   - `Err(SolverError)` naming the violated constraint otherwise.
///
/// Errors
/// ------
/// - `SolverError::NonFiniteWeight(theta)` when θ is NaN or ±∞.
/// - `SolverError::NonFiniteBound(value)` when γ or β is NaN or ±∞.
/// - `SolverError::InvalidResolution(resolution)` when resolution < 2.
/// - `SolverError::InvalidTol(tol)` when tol ≤ 0 or tol is not finite.
/// - `SolverError::ZeroMaxIter` when max_iter == 0.
///
/// Notes
/// -----
/// - Finite γ and β outside [0, 1/2] pass validation on purpose; the
///   windowed minimum clamps them, matching the documented clamping law.
pub fn validate_config(config: &SolverConfig) -> SolverResult<()> {
    if !config.theta.is_finite() {
        return Err(SolverError::NonFiniteWeight(config.theta));
    }
    if !config.gamma.is_finite() {
        return Err(SolverError::NonFiniteBound(config.gamma));
    }
    if !config.beta.is_finite() {
        return Err(SolverError::NonFiniteBound(config.beta));
    }
    if config.resolution < 2 {
        return Err(SolverError::InvalidResolution(config.resolution));
    }
    if !(config.tol.is_finite() && config.tol > 0.0) {
        return Err(SolverError::InvalidTol(config.tol));
    }
    if config.max_iter == 0 {
        return Err(SolverError::ZeroMaxIter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SolverConfig {
        SolverConfig::new(0.33, 0.16, 0.34)
    }

    #[test]
    // Purpose
    // -------
    // Confirm the baseline configuration and out-of-range finite bounds
    // both pass validation (clamping, not rejection, handles the latter).
    //
    // Given
    // -----
    // - The reference config and a variant with γ = −1, β = 2.
    //
    // Expect
    // ------
    // - Ok(()) for both.
    fn accepts_baseline_and_clampable_bounds() {
        assert!(validate_config(&base()).is_ok());

        let clampable = SolverConfig { gamma: -1.0, beta: 2.0, ..base() };
        assert!(validate_config(&clampable).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Exercise every rejection branch with a single offending field each.
    //
    // Given
    // -----
    // - Variants of the baseline config with one invalid field at a time.
    //
    // Expect
    // ------
    // - The matching SolverError variant for each.
    fn rejects_each_invalid_field() {
        let nan_theta = SolverConfig { theta: f64::NAN, ..base() };
        assert!(matches!(validate_config(&nan_theta), Err(SolverError::NonFiniteWeight(t)) if t.is_nan()));

        let inf_gamma = SolverConfig { gamma: f64::INFINITY, ..base() };
        assert_eq!(validate_config(&inf_gamma), Err(SolverError::NonFiniteBound(f64::INFINITY)));

        let nan_beta = SolverConfig { beta: f64::NAN, ..base() };
        assert!(matches!(validate_config(&nan_beta), Err(SolverError::NonFiniteBound(_))));

        let tiny_grid = SolverConfig { resolution: 1, ..base() };
        assert_eq!(validate_config(&tiny_grid), Err(SolverError::InvalidResolution(1)));

        let bad_tol = SolverConfig { tol: 0.0, ..base() };
        assert_eq!(validate_config(&bad_tol), Err(SolverError::InvalidTol(0.0)));

        let no_iters = SolverConfig { max_iter: 0, ..base() };
        assert_eq!(validate_config(&no_iters), Err(SolverError::ZeroMaxIter));
    }
}
