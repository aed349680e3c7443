//! solver — bisection root finding and the equilibrium parameter α_max.
//!
//! Purpose
//! -------
//! Compose the entropy-gap primitives into the crate's headline
//! computation: solving θ·m(γ, β) + (1−θ)·Δ(α) = 0 for α on the bracket
//! [α*, 0.499999], plus β sweeps of that solve for external exporters.
//!
//! Key behaviors
//! -------------
//! - Provide a generic bracketing bisection routine ([`bisection`]) whose
//!   "cannot bracket" outcome is absence, not an error.
//! - Provide the equilibrium solve ([`equilibrium`]) with the documented
//!   α* fallback when no sign change exists on the bracket.
//! - Provide lazy β sweeps ([`sweep`]) yielding (β, α_max) rows in input
//!   order, one independent solve per row.
//! - Centralize configuration validation ([`validation`]) and the unified
//!   error surface ([`errors`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything in this subtree is a pure function of its explicit
//!   inputs; no state survives a call and no I/O is performed, so all
//!   entry points are safe to call from concurrent threads.
//! - Only window and configuration errors propagate to callers; the
//!   no-root condition is recovered locally and never surfaces.
//!
//! Conventions
//! -----------
//! - α* = (3 − √5)/2 is the fixed floor of the search bracket and the
//!   fallback value; it is exposed as the [`ALPHA_STAR`] constant and via
//!   [`EquilibriumOutcome::alpha_star`].
//!
//! Downstream usage
//! ----------------
//! - Typical Rust usage imports the curated surface:
//!
//!   ```rust
//!   use entropy_window::solver::{EquilibriumOutcome, SolverConfig, sweep_beta};
//!
//!   let outcome = EquilibriumOutcome::solve(&SolverConfig::default())?;
//!   let rows: Vec<_> = sweep_beta(0.33, 0.16, &[0.25, 0.30]).collect();
//!   assert_eq!(rows.len(), 2);
//!   # let _ = outcome;
//!   # Ok::<(), entropy_window::solver::SolverError>(())
//!   ```
//! - Python bindings expose only [`EquilibriumOutcome`], the scalar
//!   entry points, and the sweep; helpers stay private to the crate.
//!
//! Testing notes
//! -------------
//! - Unit tests are colocated with each submodule; the end-to-end
//!   regression baseline at the reference resolution lives in
//!   `tests/integration_equilibrium.rs`.

pub mod bisection;
pub mod equilibrium;
pub mod errors;
pub mod sweep;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bisection::{bisect, BisectOptions};
pub use self::equilibrium::{
    alpha_max, EquilibriumOutcome, SolverConfig, ALPHA_BRACKET_HI, ALPHA_STAR,
};
pub use self::errors::{SolverError, SolverResult};
pub use self::sweep::{sweep_beta, sweep_beta_with, BetaSweep};
pub use self::validation::validate_config;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::bisection::{bisect, BisectOptions};
    pub use super::equilibrium::{alpha_max, EquilibriumOutcome, SolverConfig, ALPHA_STAR};
    pub use super::errors::{SolverError, SolverResult};
    pub use super::sweep::{sweep_beta, BetaSweep};
}
