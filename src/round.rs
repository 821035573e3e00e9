// ===== meisterscore/src/round.rs =====

/// Rounds to 3 decimals, ties away from zero.
///
/// Every published component score uses this convention, and the final
/// total is the rounded sum of already-rounded components. The resulting
/// ±0.001 drift against an unrounded sum is part of the published rules.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
