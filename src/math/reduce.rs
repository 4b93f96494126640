//! Modular reduction for the Kyber field (q = 3329).
//!
//! All three primitives are branchless; none indexes memory or branches on
//! its argument.

use crate::params::Q;

/// q⁻¹ mod 2¹⁶ (Montgomery inverse of the modulus).
pub(crate) const QINV: i32 = 62209;

/// Montgomery reduction: computes `a · R⁻¹ mod q` where R = 2¹⁶.
///
/// Input:  `a` with `|a| < q·2¹⁵`.
/// Output: `r ∈ {−q+1, …, q−1}` with `r ≡ a·R⁻¹ (mod q)`.
#[inline]
pub fn montgomery_reduce(a: i32) -> i16 {
    let u = a.wrapping_mul(QINV) as i16;
    ((a - (u as i32) * (Q as i32)) >> 16) as i16
}

/// Barrett reduction: given a 16-bit `a`, returns `r ≡ a (mod q)` with
/// `r ∈ [0, q]`.
///
/// Uses the precomputed factor `v = ⌊(2²⁶ + q/2)/q⌋`; the quotient estimate
/// is `(v·a) >> 26` with an arithmetic shift, so negative inputs land in
/// the same non-negative range as positive ones.
#[inline]
pub fn barrett_reduce(a: i16) -> i16 {
    const V: i32 = ((1i32 << 26) + (Q as i32) / 2) / (Q as i32); // 20159
    let t = ((V * (a as i32)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(Q))
}

/// Conditional subtraction of q: returns `a` if `a < q`, else `a − q`,
/// without branching. Input must lie in `[0, 2q)`.
#[inline]
pub fn csubq(a: i16) -> i16 {
    let t = a.wrapping_sub(Q);
    t.wrapping_add((t >> 15) & Q)
}

/// Field multiplication with Montgomery reduction: `a·b·R⁻¹ mod q`.
#[inline]
pub fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce((a as i32) * (b as i32))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
