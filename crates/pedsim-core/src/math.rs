//! Numeric conventions shared by the scalar and SIMD tick backends.
//!
//! Kept in `pedsim-core` (rather than duplicated in `pedsim-agent` and
//! `pedsim-tick`) so both paths can never drift apart — every backend must
//! agree on a position bit-for-bit, which only works if there is exactly
//! one implementation of the rounding rule (see DESIGN.md's Open Question
//! decisions).

/// Added to every direction-vector length before dividing, guarding against
/// division by zero when an agent is already exactly at its destination.
pub const EPSILON: f32 = 1e-6;

/// The single rounding rule used by every backend: round half to even.
///
/// Scalar `round()` (round-half-away-from-zero) and a vectorized
/// `floor(x + 0.5)` disagree on ties; using one ties-to-even rule everywhere
/// removes that discrepancy.
#[inline]
pub fn round_half_to_even(v: f32) -> f32 {
    v.round_ties_even()
}
