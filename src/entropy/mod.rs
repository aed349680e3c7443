//! entropy — gap-function primitives and grid extrema.
//!
//! Purpose
//! -------
//! Collect the mathematical bottom layer of the crate: the binary-entropy
//! primitives H₂, T, and Δ ([`functions`]) and their brute-force grid
//! extrema over sub-intervals of [0, 1/2] ([`grid`]), together with the
//! window error surface ([`errors`]).
//!
//! Key behaviors
//! -------------
//! - Expose the entropy gap Δ(p) = H₂(2p − p²) − H₂(p) and its building
//!   blocks as pure, stateless scalar functions.
//! - Expose the argmax of Δ on [0, 1/2] and the windowed minimum
//!   m(γ, β) via inclusive linspace sampling with a tunable resolution.
//! - Report inverted windows via [`EntropyError::InvalidWindow`]; every
//!   other numerical edge (p at 0 or 1, degenerate windows, bounds
//!   outside the domain) has defined, deterministic behavior.
//!
//! Invariants & assumptions
//! ------------------------
//! - Nothing in this subtree holds state or performs I/O; all grid
//!   buffers are per-call allocations, so every function is safe to call
//!   from concurrent threads without locking.
//! - Callers that forward a user-supplied `resolution` are expected to
//!   validate it (≥ 2) first; `solver::validation` does this for the
//!   equilibrium entry points.
//!
//! Downstream usage
//! ----------------
//! - The typical import is the curated surface:
//!
//!   ```rust
//!   use entropy_window::entropy::{delta, windowed_min, DEFAULT_RESOLUTION};
//!
//!   let m = windowed_min(0.16, 0.34, DEFAULT_RESOLUTION)?;
//!   let gap = delta(0.25);
//!   # assert!(m < gap);
//!   # Ok::<(), entropy_window::entropy::EntropyError>(())
//!   ```
//! - `solver::equilibrium` composes these with the bisection root finder
//!   to produce the equilibrium parameter α_max.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to the code: pinned endpoint values in
//!   [`functions`], clamping/degeneracy/argmax baselines in [`grid`],
//!   and `Display` checks in [`errors`].

pub mod errors;
pub mod functions;
pub mod grid;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{EntropyError, EntropyResult};
pub use self::functions::{delta, h2, union_map};
pub use self::grid::{argmax_delta_on_unit_half, windowed_min, DEFAULT_RESOLUTION};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{EntropyError, EntropyResult};
    pub use super::functions::{delta, h2, union_map};
    pub use super::grid::{argmax_delta_on_unit_half, windowed_min, DEFAULT_RESOLUTION};
}
