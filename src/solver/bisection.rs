//! solver::bisection — bracketing bisection with an absence-not-error contract.
//!
//! Purpose
//! -------
//! Locate a root of a continuous scalar function on a bracket [a, b] by
//! bisection. Failure to bracket (same sign at both endpoints, or NaN at
//! an endpoint) is reported as *absence* (`None`), never as an error:
//! the equilibrium solver interprets a missing sign change as "the
//! equilibrium is at the floor" and recovers locally.
//!
//! Key behaviors
//! -------------
//! - Exact zeros at an endpoint short-circuit to that endpoint.
//! - The retained endpoint's sign classification is carried from the
//!   original f(a) across iterations instead of being reclassified from
//!   scratch, avoiding misclassification from floating-point noise near
//!   the root.
//! - Exhausting `max_iter` returns the final midpoint as a best-effort
//!   estimate (`Some`), not a failure.
//!
//! Invariants & assumptions
//! ------------------------
//! - f is assumed continuous on [a, b]; bisection offers no protection
//!   against sign changes caused by discontinuities.
//! - Termination is bounded by `max_iter` regardless of `tol`, so a call
//!   always performs at most `max_iter + 2` function evaluations.
//!
//! Conventions
//! -----------
//! - Options travel in a plain [`BisectOptions`] carrier with crate-wide
//!   defaults (tol = 1e-12, max_iter = 200); entry points that accept
//!   user-supplied values validate them before constructing one.
//!
//! Downstream usage
//! ----------------
//! - `solver::equilibrium` bisects F(α) = θ·m + (1−θ)·Δ(α) on
//!   [α*, 0.499999] and maps `None` to the α* fallback.
//!
//! Testing notes
//! -------------
//! - Unit tests cover a simple linear root, the no-sign-change and NaN
//!   absence paths, endpoint exact zeros, and tolerance behavior.

/// BisectOptions — stopping criteria for [`bisect`].
///
/// Fields
/// ------
/// - `tol`: `f64`
///   Bracket-width convergence threshold. Iteration stops once
///   `hi − lo < tol`.
/// - `max_iter`: `usize`
///   Hard iteration cap; the final midpoint is returned if it is reached
///   before `tol`.
///
/// Notes
/// -----
/// - `Default` yields the reference configuration (1e-12, 200); with a
///   unit-length bracket that cap is far beyond what 1e-12 needs
///   (2⁻²⁰⁰ ≪ 1e-12), so defaults always terminate on tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectOptions {
    pub tol: f64,
    pub max_iter: usize,
}

impl Default for BisectOptions {
    fn default() -> Self {
        BisectOptions { tol: 1e-12, max_iter: 200 }
    }
}

/// Bisection root finder on a bracket [a, b].
///
/// Parameters
/// ----------
/// - `f`: `Fn(f64) -> f64`
///   Continuous scalar function to solve.
/// - `a`, `b`: `f64`
///   Bracket endpoints, a < b.
/// - `opts`: `&BisectOptions`
///   Stopping criteria.
///
/// Returns
/// -------
/// `Option<f64>`
///   - `Some(root)` when a root estimate exists: an exact endpoint zero,
///     a midpoint meeting the stopping criteria, or the final midpoint
///     after `max_iter` iterations.
///   - `None` when no root can be bracketed: f(a) or f(b) is NaN (an
///     undefined function value, not a solver failure), or f(a) and f(b)
///     share a sign.
///
/// Notes
/// -----
/// - The bracket update compares f(mid) against the *original* sign of
///   f(a): `fa * fm <= 0` keeps the left half, otherwise the left
///   endpoint (and its carried sign value) advances to the midpoint.
pub fn bisect<F>(f: F, a: f64, b: f64, opts: &BisectOptions) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let mut fa = f(a);
    let fb = f(b);

    if fa.is_nan() || fb.is_nan() {
        return None;
    }
    if fa == 0.0 {
        return Some(a);
    }
    if fb == 0.0 {
        return Some(b);
    }
    if fa * fb > 0.0 {
        return None;
    }

    let mut lo = a;
    let mut hi = b;
    for _ in 0..opts.max_iter {
        let mid = 0.5 * (lo + hi);
        let fm = f(mid);
        if fm == 0.0 || (hi - lo) < opts.tol {
            return Some(mid);
        }
        if fa * fm <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
            fa = fm;
        }
    }
    Some(0.5 * (lo + hi))
}
