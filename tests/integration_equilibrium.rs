//! Integration tests for the windowed entropy-gap equilibrium pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from the entropy primitives,
//!   through grid extrema and the windowed minimum, to the bisection
//!   solve for α_max and β sweeps.
//! - Exercise the reference parameter regime (θ = 0.33, γ = 0.16,
//!   β = 0.34 at resolution 20001) against baselines computed
//!   independently with the same inclusive-grid formula.
//!
//! Coverage
//! --------
//! - `entropy::grid`:
//!   - argmax pair (p_max, Δ(p_max)) at the reference resolution.
//!   - windowed minimum at the reference window and under clamping.
//! - `solver::equilibrium`:
//!   - the regression baseline for α_max,
//!   - the θ = 1 fallback and the negative-m fallback,
//!   - internal consistency of `EquilibriumOutcome`.
//! - `solver::sweep`:
//!   - row count, ordering, and agreement with single-point solves.
//!
//! Exclusions
//! ----------
//! - Fine-grained behavior of the low-level building blocks (bisection
//!   stopping rules, validation branches, error `Display`) — covered by
//!   unit tests next to the code.
//! - Python bindings — exercised at the packaging level, not here.
use entropy_window::entropy::{delta, windowed_min, DEFAULT_RESOLUTION};
use entropy_window::solver::{
    sweep_beta, EquilibriumOutcome, SolverConfig, ALPHA_BRACKET_HI, ALPHA_STAR,
};

/// Purpose
/// -------
/// Build the reference configuration of the surrounding theory's
/// baseline run: θ = 0.33, γ = 0.16, β = 0.34 with default knobs
/// (resolution 20001, tol 1e-12, max_iter 200).
///
/// Usage
/// -----
/// - Shared by the regression tests so the baseline appears in exactly
///   one place.
fn reference_config() -> SolverConfig {
    SolverConfig::new(0.33, 0.16, 0.34)
}

#[test]
// Purpose
// -------
// Pin the full regression baseline at the reference configuration. The
// expected values were computed independently with the same inclusive
// linspace grid (lo + i·(hi − lo)/(n − 1)) and bisection rules.
//
// Given
// -----
// - θ = 0.33, γ = 0.16, β = 0.34, resolution 20001.
//
// Expect
// ------
// - p_max = 0.13785 (a grid point) within 1e-12.
// - Δ(p_max) ≈ 0.243141321840279 within 1e-9.
// - m(γ, β) ≈ 0.063181235137439 within 1e-12 (the minimum sits at the
//   window's right edge, where Δ is decreasing).
// - α_max ≈ 0.401802313089033 within 1e-9.
// - alpha_star() reports the constant floor.
fn reference_run_matches_recorded_baseline() {
    let outcome = EquilibriumOutcome::solve(&reference_config()).expect("valid config");

    assert!((outcome.p_max() - 0.13785).abs() < 1e-12, "p_max = {}", outcome.p_max());
    assert!(
        (outcome.delta_max() - 0.243141321840279).abs() < 1e-9,
        "delta_max = {}",
        outcome.delta_max()
    );
    assert!(
        (outcome.m_window() - 0.063181235137439).abs() < 1e-12,
        "m_window = {}",
        outcome.m_window()
    );
    assert!(
        (outcome.alpha_max() - 0.401802313089033).abs() < 1e-9,
        "alpha_max = {}",
        outcome.alpha_max()
    );
    assert_eq!(outcome.alpha_star(), ALPHA_STAR);
}

#[test]
// Purpose
// -------
// Cross-check the outcome's windowed minimum against a direct call to
// the grid layer, and confirm it is dominated by Δ at both window
// boundaries.
//
// Given
// -----
// - The reference configuration.
//
// Expect
// ------
// - outcome.m_window() equals windowed_min(0.16, 0.34, 20001) bitwise.
// - m ≤ Δ(0.16) and m ≤ Δ(0.34) (up to final-ulp grid rounding).
fn outcome_m_window_is_consistent_with_grid_layer() {
    let outcome = EquilibriumOutcome::solve(&reference_config()).expect("valid config");
    let direct = windowed_min(0.16, 0.34, DEFAULT_RESOLUTION).expect("valid window");

    assert_eq!(outcome.m_window(), direct);
    assert!(outcome.m_window() <= delta(0.16) + 1e-12);
    assert!(outcome.m_window() <= delta(0.34) + 1e-12);
}

#[test]
// Purpose
// -------
// Verify the literal example of the fallback convention: with θ = 1 the
// bisection target is the constant m(γ, β) > 0, no sign change exists,
// and the equilibrium is reported at the floor.
//
// Given
// -----
// - θ = 1.0, γ = 0.16, β = 0.34 at the reference resolution.
//
// Expect
// ------
// - alpha_max == ALPHA_STAR exactly (≈ 0.381966011).
fn theta_one_reference_window_falls_back_to_alpha_star() {
    let outcome =
        EquilibriumOutcome::solve(&SolverConfig::new(1.0, 0.16, 0.34)).expect("valid config");
    assert_eq!(outcome.alpha_max(), ALPHA_STAR);
    assert!((outcome.alpha_max() - 0.381966011).abs() < 1e-9);
}

#[test]
// Purpose
// -------
// Exercise the fallback through the clamping path: the full window
// (γ = −1 clamps to 0, β = 2 clamps to 1/2) has a negative minimum
// (Δ(1/2) < 0), so the target is negative across the whole bracket and
// no root exists.
//
// Given
// -----
// - θ = 0.33 with the wild window (−1, 2).
//
// Expect
// ------
// - m_window equals the clamped full-window minimum, ≈ Δ(1/2).
// - alpha_max == ALPHA_STAR exactly.
fn negative_windowed_min_takes_the_floor() {
    let outcome =
        EquilibriumOutcome::solve(&SolverConfig::new(0.33, -1.0, 2.0)).expect("valid config");
    let clamped = windowed_min(0.0, 0.5, DEFAULT_RESOLUTION).expect("valid window");

    assert_eq!(outcome.m_window(), clamped);
    assert!((outcome.m_window() - (-0.188721875540867)).abs() < 1e-12);
    assert_eq!(outcome.alpha_max(), ALPHA_STAR);
}

#[test]
// Purpose
// -------
// Validate the sweep contract end to end: exactly one row per β, in
// ascending input order, each internally consistent with a direct
// single-point solve at the same knobs.
//
// Given
// -----
// - β ∈ {0.20, 0.25, 0.30} with θ = 0.33, γ = 0.16 at the reference
//   resolution.
//
// Expect
// ------
// - 3 Ok rows with the input β values in order.
// - Row α values bitwise equal to direct solves.
// - Every α within [α*, 0.499999].
fn beta_sweep_agrees_with_single_point_solves() {
    let betas = [0.20, 0.25, 0.30];

    let rows: Vec<(f64, f64)> = sweep_beta(0.33, 0.16, &betas)
        .collect::<Result<_, _>>()
        .expect("all windows valid");
    assert_eq!(rows.len(), 3);

    for (row, &beta) in rows.iter().zip(&betas) {
        let direct = EquilibriumOutcome::solve(&SolverConfig::new(0.33, 0.16, beta))
            .expect("valid config");
        assert_eq!(*row, (beta, direct.alpha_max()));
        assert!((ALPHA_STAR..=ALPHA_BRACKET_HI).contains(&row.1));
    }
}

#[test]
// Purpose
// -------
// Confirm that widening the window ceiling never raises the windowed
// minimum (the min is over a superset), and that α_max responds
// monotonically through the solve for this regime.
//
// Given
// -----
// - Ascending β values over a fixed floor γ = 0.16, θ = 0.33.
//
// Expect
// ------
// - m(γ, β) non-increasing in β.
// - α_max non-increasing in β (a smaller worst-case gap drags the
//   equilibrium toward the floor).
fn widening_the_window_never_raises_minimum_or_equilibrium() {
    let betas = [0.20, 0.25, 0.30, 0.34];

    let mut prev_m = f64::INFINITY;
    let mut prev_alpha = f64::INFINITY;
    for &beta in &betas {
        let outcome = EquilibriumOutcome::solve(&SolverConfig::new(0.33, 0.16, beta))
            .expect("valid config");
        assert!(
            outcome.m_window() <= prev_m + 1e-12,
            "m rose at beta = {beta}: {} > {prev_m}",
            outcome.m_window()
        );
        assert!(
            outcome.alpha_max() <= prev_alpha + 1e-9,
            "alpha_max rose at beta = {beta}: {} > {prev_alpha}",
            outcome.alpha_max()
        );
        prev_m = outcome.m_window();
        prev_alpha = outcome.alpha_max();
    }
}
