//! entropy::grid — dense-grid extrema of the entropy gap Δ.
//!
//! Purpose
//! -------
//! Locate the argmax of Δ on [0, 1/2] and windowed minima
//! m(γ, β) = min over [γ, β] of Δ by brute-force uniform sampling. Δ is
//! unimodal on this domain but has no closed-form inverse, so a dense
//! inclusive grid is the reference method; `resolution` is the single
//! accuracy/cost knob.
//!
//! Key behaviors
//! -------------
//! - Sample Δ on an inclusive linspace grid (`ndarray::Array1::linspace`)
//!   with a running extremum scan; ties in the argmax break toward the
//!   first occurrence in ascending-p order, so results are deterministic.
//! - Clamp window bounds (γ up to 0, β down to 1/2) before validity is
//!   judged; clamping is a defined behavior, not an error.
//! - Report an inverted clamped window as
//!   [`EntropyError::InvalidWindow`]; a degenerate window (lo == hi)
//!   returns Δ(lo) exactly, without sampling.
//!
//! Invariants & assumptions
//! ------------------------
//! - `resolution` is assumed to be ≥ 2 when a non-degenerate interval is
//!   sampled; `solver::validation` enforces this for all solver entry
//!   points. Both interval endpoints are grid points (up to final-ulp
//!   rounding of the inclusive linspace).
//! - The grid is a per-call allocation of `resolution` f64 values,
//!   released on return; no state survives between calls, so these
//!   functions are freely callable from concurrent threads.
//!
//! Conventions
//! -----------
//! - Windows follow the notation of the surrounding theory: γ is the
//!   floor, β the ceiling, and both live in [0, 1/2] after clamping.
//! - Higher `resolution` monotonically tightens the approximation but
//!   never changes the asymptotic O(resolution) cost.
//!
//! Downstream usage
//! ----------------
//! - `solver::equilibrium` calls [`windowed_min`] for the m term of the
//!   bisection target and [`argmax_delta_on_unit_half`] for the reported
//!   (p_max, Δ(p_max)) pair.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the clamping law, the inverted-window error, the
//!   degenerate-window exactness guarantee, boundary-dominance of the
//!   minimum, and the pinned argmax at the default resolution.
use ndarray::Array1;

use crate::entropy::errors::{EntropyError, EntropyResult};
use crate::entropy::functions::delta;

/// Default number of grid points, matching the reference baselines.
pub const DEFAULT_RESOLUTION: usize = 20001;

/// Brute-force argmax of Δ on [0, 1/2].
///
/// Parameters
/// ----------
/// - `resolution`: `usize`
///   Number of equally spaced sample points, endpoints included. Assumed
///   ≥ 2 (solver entry points validate this); [`DEFAULT_RESOLUTION`] is
///   the reference choice.
///
/// Returns
/// -------
/// `(f64, f64)`
///   The pair (p at max, Δ at max). When several grid points attain the
///   maximum, the smallest p wins (first occurrence in scan order).
///
/// Notes
/// -----
/// - The accumulator starts at −∞ and updates only on strict
///   improvement, which is what makes the tie-break stable.
pub fn argmax_delta_on_unit_half(resolution: usize) -> (f64, f64) {
    let grid: Array1<f64> = Array1::linspace(0.0, 0.5, resolution);

    let mut best_p: f64 = 0.0;
    let mut best_val: f64 = f64::NEG_INFINITY;
    for &p in grid.iter() {
        let val = delta(p);
        if val > best_val {
            best_p = p;
            best_val = val;
        }
    }
    (best_p, best_val)
}

/// Windowed minimum m(γ, β) = min over [γ, β] of Δ.
///
/// Parameters
/// ----------
/// - `gamma`: `f64`
///   Window floor; clamped up to 0 before use.
/// - `beta`: `f64`
///   Window ceiling; clamped down to 1/2 before use.
/// - `resolution`: `usize`
///   Number of inclusive grid points over the clamped window. Assumed
///   ≥ 2 for non-degenerate windows.
///
/// Returns
/// -------
/// `EntropyResult<f64>`
///   - `Ok(m)` with the minimum sampled value of Δ over [lo, hi].
///   - `Ok(delta(lo))` exactly when the clamped window is degenerate
///     (lo == hi); no grid is allocated in that case.
///   - `Err(EntropyError::InvalidWindow)` when hi < lo after clamping.
///
/// Errors
/// ------
/// - `EntropyError::InvalidWindow { lo, hi }`
///   The clamped bounds inverted, i.e. the caller requested a window
///   violating 0 ≤ γ ≤ β ≤ 1/2 beyond what clamping can repair.
pub fn windowed_min(gamma: f64, beta: f64, resolution: usize) -> EntropyResult<f64> {
    let lo = gamma.max(0.0);
    let hi = beta.min(0.5);
    if hi < lo {
        return Err(EntropyError::InvalidWindow { lo, hi });
    }
    if hi == lo {
        return Ok(delta(lo));
    }

    let grid: Array1<f64> = Array1::linspace(lo, hi, resolution);

    let mut min_val: f64 = f64::INFINITY;
    for &p in grid.iter() {
        let val = delta(p);
        if val < min_val {
            min_val = val;
        }
    }
    Ok(min_val)
}
