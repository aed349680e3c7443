//! solver::sweep — lazy β sweeps over the equilibrium solver.
//!
//! Purpose
//! -------
//! Drive one equilibrium solve per β over a caller-supplied ordered
//! sequence, yielding (β, α_max) rows for an external CSV or plot
//! writer. The crate performs no I/O itself; the sweep is the seam where
//! exporters attach.
//!
//! Key behaviors
//! -------------
//! - [`BetaSweep`] is a lazy iterator: nothing is computed until a row
//!   is pulled, and rows come back in exactly the input order.
//! - Each row is an independent pure solve, so a sweep is restartable by
//!   constructing it again from the same inputs; no state is shared
//!   between rows or between sweeps.
//! - Window validity is judged per row: a β that clamps below γ yields
//!   an `Err` row without poisoning the rest of the sweep.
//!
//! Conventions
//! -----------
//! - θ and γ are fixed across a sweep; only β varies. This mirrors the
//!   reference method's sweep, which plots α_max against the window
//!   ceiling for a fixed floor.
//!
//! Downstream usage
//! ----------------
//! - ```rust
//!   use entropy_window::solver::sweep_beta;
//!
//!   let rows: Result<Vec<(f64, f64)>, _> =
//!       sweep_beta(0.33, 0.16, &[0.20, 0.25, 0.30]).collect();
//!   assert_eq!(rows?.len(), 3);
//!   # Ok::<(), entropy_window::solver::SolverError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests check ordering, length, per-row consistency with the
//!   single-point solve, laziness of construction, and the per-row
//!   error behavior for windows that invert.

use crate::solver::equilibrium::{EquilibriumOutcome, SolverConfig};
use crate::solver::errors::SolverResult;

/// BetaSweep — lazy iterator of (β, α_max) rows.
///
/// Purpose
/// -------
/// Hold the fixed part of a sweep configuration and walk a borrowed β
/// slice, running one [`EquilibriumOutcome::solve`] per step.
///
/// Invariants
/// ----------
/// - Yields exactly `betas.len()` items, in input order.
/// - Each item equals the corresponding single-point solve bitwise: the
///   sweep adds no state of its own.
#[derive(Debug, Clone)]
pub struct BetaSweep<'a> {
    base: SolverConfig,
    betas: std::slice::Iter<'a, f64>,
}

impl<'a> Iterator for BetaSweep<'a> {
    type Item = SolverResult<(f64, f64)>;

    fn next(&mut self) -> Option<Self::Item> {
        let &beta = self.betas.next()?;
        let config = SolverConfig { beta, ..self.base };
        Some(EquilibriumOutcome::solve(&config).map(|outcome| (beta, outcome.alpha_max())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.betas.size_hint()
    }
}

impl ExactSizeIterator for BetaSweep<'_> {}

/// Sweep α_max over a sequence of β values with default numeric knobs.
///
/// Parameters
/// ----------
/// - `theta`: `f64`
///   Weight on the windowed minimum, fixed across the sweep.
/// - `gamma`: `f64`
///   Window floor, fixed across the sweep.
/// - `betas`: `&[f64]`
///   Ordered window ceilings; one solve per element.
///
/// Returns
/// -------
/// [`BetaSweep`]
///   Lazy iterator of `SolverResult<(β, α_max)>` rows in input order.
///
/// Notes
/// -----
/// - For non-default resolution or bisection knobs, use
///   [`sweep_beta_with`] and supply the base configuration explicitly
///   (its `beta` field is overwritten per row).
pub fn sweep_beta(theta: f64, gamma: f64, betas: &[f64]) -> BetaSweep<'_> {
    sweep_beta_with(SolverConfig::new(theta, gamma, 0.0), betas)
}

/// Sweep with an explicit base configuration.
///
/// The base's `beta` field is ignored; each row substitutes its own β
/// before solving.
pub fn sweep_beta_with(base: SolverConfig, betas: &[f64]) -> BetaSweep<'_> {
    BetaSweep { base, betas: betas.iter() }
}
