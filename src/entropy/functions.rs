//! entropy::functions — binary entropy, the union map, and the gap Δ.
//!
//! Purpose
//! -------
//! Provide the pure scalar primitives that everything else in this crate is
//! built from: the binary entropy H₂(p) in bits, the union map
//! T(p) = 2p − p², and the entropy gap Δ(p) = H₂(T(p)) − H₂(p).
//!
//! Key behaviors
//! -------------
//! - H₂ is total on ℝ: it returns exactly 0.0 for p ≤ 0 and p ≥ 1 instead
//!   of producing NaN or −∞ from log(0).
//! - T is total on ℝ and maps [0, 1/2] into [0, 3/4].
//! - Δ is a composition of total functions and therefore never errors on
//!   the working domain [0, 1/2].
//!
//! Invariants & assumptions
//! ------------------------
//! - All three functions are deterministic, allocation-free, and hold no
//!   state; they are safe to call concurrently from any number of threads.
//! - H₂ applies no stabilization beyond the boundary check: for p strictly
//!   inside (0, 1), `p.log2()` and `(1 − p).log2()` are finite, so the
//!   expression is evaluated directly even for p within a few ulps of the
//!   endpoints.
//!
//! Conventions
//! -----------
//! - Entropy is measured in bits (`f64::log2`), matching the windowed-gap
//!   quantities consumed by the equilibrium solver.
//! - p denotes a probability-like coordinate; callers in this crate only
//!   ever pass p ∈ [0, 1/2], but nothing here assumes it.
//!
//! Downstream usage
//! ----------------
//! - `entropy::grid` samples [`delta`] densely to locate extrema.
//! - `solver::equilibrium` evaluates [`delta`] pointwise inside the
//!   bisection target F(α) = θ·m + (1−θ)·Δ(α).
//!
//! Testing notes
//! -------------
//! - Unit tests pin the exact endpoint contract (H₂(0) = H₂(1) = 0), the
//!   symmetric maximum H₂(1/2) = 1, safety of H₂ arbitrarily close to the
//!   endpoints, the range of T on [0, 1/2], and the identity
//!   Δ(1/2) = H₂(3/4) − 1.

/// Binary entropy H₂(p) in bits.
///
/// Parameters
/// ----------
/// - `p`: `f64`
///   Probability-like coordinate. Any finite real is accepted.
///
/// Returns
/// -------
/// `f64`
///   Exactly `0.0` when `p <= 0.0` or `p >= 1.0`; otherwise
///   −p·log₂(p) − (1−p)·log₂(1−p).
///
/// Notes
/// -----
/// - The boundary check is the only special case. For p strictly inside
///   (0, 1) the logarithms are finite, so no further guarding is needed
///   even at p = 1e-300 or p = 1 − 1e-16.
/// - NaN input propagates through the comparisons as "not ≤ 0 and not
///   ≥ 1" and yields NaN; validated entry points never pass NaN here.
#[inline]
pub fn h2(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// Union map T(p) = 2p − p² for a single coordinate.
///
/// Equals the probability that at least one of two independent events,
/// each of probability p, occurs. Total on ℝ; on [0, 1/2] its range is
/// [0, 3/4].
#[inline]
pub fn union_map(p: f64) -> f64 {
    2.0 * p - p * p
}

/// Entropy gap Δ(p) = H₂(T(p)) − H₂(p).
///
/// Composition of [`h2`] and [`union_map`]; total on the working domain,
/// with Δ(0) = 0 and Δ(1/2) = H₂(3/4) − 1 < 0.
#[inline]
pub fn delta(p: f64) -> f64 {
    h2(union_map(p)) - h2(p)
}
