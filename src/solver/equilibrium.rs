//! solver::equilibrium — the windowed-gap equilibrium parameter α_max.
//!
//! Purpose
//! -------
//! Compose the grid extrema of Δ with the bisection root finder to solve
//! θ·m(γ, β) + (1−θ)·Δ(α) = 0 for α ∈ [α*, 1/2), where
//! m(γ, β) = min over [γ, β] of Δ and α* = (3 − √5)/2 is the fixed floor of the
//! search bracket. A single solve also reports the argmax pair
//! (p_max, Δ(p_max)) over [0, 1/2].
//!
//! Key behaviors
//! -------------
//! - Validate the configuration once at the entry point
//!   ([`EquilibriumOutcome::solve`]) and let the lower layers assume
//!   finite, usable inputs.
//! - Propagate [`SolverError::Window`](crate::solver::errors::SolverError)
//!   when the (γ, β) window inverts after clamping; this is the only
//!   failure a valid configuration can produce.
//! - Recover a missing sign change on [α*, 0.499999] locally by
//!   returning α* itself: absence of a root means "the equilibrium is at
//!   the floor". This convention is relied on downstream and is kept
//!   verbatim; do not substitute a different default.
//!
//! Invariants & assumptions
//! ------------------------
//! - α* is the unique point of (0, 1/2) where Δ vanishes: the union map
//!   sends α* to 1 − α* (α² − 3α + 1 = 0), so both entropies coincide.
//!   Δ > 0 below α* and Δ < 0 above it on this interval, which is what
//!   makes the bracket [α*, 0.499999] canonical.
//! - Every solve is a pure function of its configuration: no caching, no
//!   shared state, safe for concurrent callers.
//!
//! Conventions
//! -----------
//! - θ weighs the windowed worst-case gap against the pointwise gap;
//!   θ = 1 degenerates F to the constant m and always takes the α*
//!   fallback, θ = 0 reduces to root-finding Δ alone.
//! - The upper bracket end is the literal 0.499999 from the reference
//!   method, kept as [`ALPHA_BRACKET_HI`] so regression baselines stay
//!   aligned; any value strictly below 1/2 would do since Δ(1/2) < 0.
//!
//! Downstream usage
//! ----------------
//! - Single point:
//!
//!   ```rust
//!   use entropy_window::solver::{EquilibriumOutcome, SolverConfig};
//!
//!   let outcome = EquilibriumOutcome::solve(&SolverConfig::new(0.33, 0.16, 0.34))?;
//!   assert!(outcome.alpha_max() >= outcome.alpha_star());
//!   # Ok::<(), entropy_window::solver::SolverError>(())
//!   ```
//! - Parameter sweeps over β go through `solver::sweep`, one solve per
//!   sweep point.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the θ = 1 fallback, the θ = 0 reduction, the
//!   InvalidWindow propagation path, and the bitwise identity of
//!   [`ALPHA_STAR`] with (3 − √5)/2.
//! - The regression baseline (θ = 0.33, γ = 0.16, β = 0.34 at resolution
//!   20001) lives in the integration tests.

use crate::entropy::functions::delta;
use crate::entropy::grid::{argmax_delta_on_unit_half, windowed_min, DEFAULT_RESOLUTION};
use crate::solver::bisection::{bisect, BisectOptions};
use crate::solver::errors::SolverResult;
use crate::solver::validation::validate_config;

/// Reference floor of the root-search bracket, (3 − √5)/2.
///
/// The unique zero of Δ in (0, 1/2); see the module docs for why. Stored
/// as the shortest round-trip literal of the IEEE-754 double; a unit test
/// pins it bitwise against the computed expression.
pub const ALPHA_STAR: f64 = 0.3819660112501051;

/// Upper end of the default root-search bracket, strictly below 1/2.
pub const ALPHA_BRACKET_HI: f64 = 0.499999;

/// SolverConfig — flat parameter carrier for a single equilibrium solve.
///
/// Purpose
/// -------
/// Bundle the weighting and window parameters with the numeric knobs of
/// the grid and bisection layers, making a solve reproducible from one
/// value.
///
/// Fields
/// ------
/// - `theta`: `f64`
///   Weight on the windowed minimum m(γ, β) in the target
///   F(α) = θ·m + (1−θ)·Δ(α). Any finite real.
/// - `gamma`: `f64`
///   Window floor; clamped up to 0 by the windowed minimum.
/// - `beta`: `f64`
///   Window ceiling; clamped down to 1/2 by the windowed minimum.
/// - `resolution`: `usize`
///   Inclusive grid size for both the argmax scan and the windowed
///   minimum; ≥ 2. Defaults to [`DEFAULT_RESOLUTION`] (20001).
/// - `tol`: `f64`
///   Bisection bracket-width tolerance; defaults to 1e-12.
/// - `max_iter`: `usize`
///   Bisection iteration cap; defaults to 200.
///
/// Invariants
/// ----------
/// - Checked by `solver::validation::validate_config` at the solve entry
///   point, not at construction; the struct itself is a plain carrier.
///
/// Notes
/// -----
/// - `Default` reproduces the reference method's baseline
///   (θ = 0.33, γ = 0.16, β = 0.34) with the default knobs, which is
///   also the configuration of the recorded regression values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub theta: f64,
    pub gamma: f64,
    pub beta: f64,
    pub resolution: usize,
    pub tol: f64,
    pub max_iter: usize,
}

impl SolverConfig {
    /// Build a config with the given (θ, γ, β) and default numeric knobs.
    pub fn new(theta: f64, gamma: f64, beta: f64) -> Self {
        SolverConfig {
            theta,
            gamma,
            beta,
            resolution: DEFAULT_RESOLUTION,
            tol: 1e-12,
            max_iter: 200,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig::new(0.33, 0.16, 0.34)
    }
}

/// EquilibriumOutcome — result of a single equilibrium solve.
///
/// Purpose
/// -------
/// Carry the four derived scalars of a solve — the argmax pair of Δ, the
/// windowed minimum, and the equilibrium parameter — behind accessors so
/// downstream code (including the Python bindings) does not depend on
/// the internal layout.
///
/// Fields
/// ------
/// - `p_max`: `f64`
///   Grid argmax of Δ on [0, 1/2] at the configured resolution.
/// - `delta_max`: `f64`
///   Δ(p_max).
/// - `m_window`: `f64`
///   Windowed minimum m(γ, β) at the configured resolution.
/// - `alpha_max`: `f64`
///   Root of F(α) = θ·m + (1−θ)·Δ(α) on [α*, 0.499999], or α* itself
///   when no sign change exists on the bracket.
///
/// Invariants
/// ----------
/// - `alpha_max` ∈ [α*, 0.499999] always.
/// - All fields are finite whenever `solve` returns `Ok`.
///
/// Performance
/// -----------
/// - Four scalars, `Copy`; cheap to return by value and to pass across
///   the FFI boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumOutcome {
    p_max: f64,
    delta_max: f64,
    m_window: f64,
    alpha_max: f64,
}

impl EquilibriumOutcome {
    /// Run a full equilibrium solve for the given configuration.
    ///
    /// Parameters
    /// ----------
    /// - `config`: `&SolverConfig`
    ///   Weight θ, window (γ, β), and numeric knobs. See [`SolverConfig`].
    ///
    /// Returns
    /// -------
    /// `SolverResult<EquilibriumOutcome>`
    ///   - `Ok(outcome)` with the argmax pair, windowed minimum, and
    ///     α_max. A missing sign change on the bracket is *not* an
    ///     error: `alpha_max` is then [`ALPHA_STAR`] by convention.
    ///   - `Err(SolverError)` when validation rejects the configuration
    ///     or the clamped window inverts.
    ///
    /// Errors
    /// ------
    /// - `SolverError::Window(EntropyError::InvalidWindow { .. })`
    ///   γ > β after clamping.
    /// - Validation variants (`NonFiniteWeight`, `NonFiniteBound`,
    ///   `InvalidResolution`, `InvalidTol`, `ZeroMaxIter`) from
    ///   `validate_config`.
    ///
    /// Panics
    /// ------
    /// - Never panics; all user-facing invalid inputs surface as
    ///   `SolverError` values.
    pub fn solve(config: &SolverConfig) -> SolverResult<Self> {
        validate_config(config)?;

        let (p_max, delta_max) = argmax_delta_on_unit_half(config.resolution);
        let m_window = windowed_min(config.gamma, config.beta, config.resolution)?;

        let theta = config.theta;
        let target = |alpha: f64| theta * m_window + (1.0 - theta) * delta(alpha);
        let opts = BisectOptions { tol: config.tol, max_iter: config.max_iter };

        // No sign change on the bracket means the equilibrium sits at the floor.
        let alpha_max =
            bisect(target, ALPHA_STAR, ALPHA_BRACKET_HI, &opts).unwrap_or(ALPHA_STAR);

        Ok(EquilibriumOutcome { p_max, delta_max, m_window, alpha_max })
    }

    /// Grid argmax of Δ on [0, 1/2].
    pub fn p_max(&self) -> f64 {
        self.p_max
    }

    /// Δ evaluated at [`p_max`](Self::p_max).
    pub fn delta_max(&self) -> f64 {
        self.delta_max
    }

    /// Windowed minimum m(γ, β).
    pub fn m_window(&self) -> f64 {
        self.m_window
    }

    /// Equilibrium parameter α_max, or α* when no root was bracketed.
    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }

    /// The reference constant [`ALPHA_STAR`].
    pub fn alpha_star(&self) -> f64 {
        ALPHA_STAR
    }
}

/// Solve for α_max with default numeric knobs.
///
/// Convenience wrapper matching the reference method's single-value
/// entry: builds a [`SolverConfig`] from (θ, γ, β) and returns only the
/// equilibrium parameter.
pub fn alpha_max(theta: f64, gamma: f64, beta: f64) -> SolverResult<f64> {
    EquilibriumOutcome::solve(&SolverConfig::new(theta, gamma, beta))
        .map(|outcome| outcome.alpha_max())
}
