//! Fixed-point formats and arithmetic primitives.
//!
//! Two formats flow through the evaluation engine:
//!
//! * `Q0.60`: arguments and polynomial intermediates, 60 fractional bits in
//!   an `i64`.
//! * `Q1.63`: integral results, 63 fractional bits. Magnitudes of 1.0 and
//!   above occupy the top bit, so such values are read in the unsigned
//!   (two's-complement) view of the same `i64` bit pattern.
//!
//! The multiplier never materialises a 128-bit product: operands are split
//! into 32-bit halves and the four partial products are shifted back into
//! place individually, which is what keeps the schedule portable to targets
//! without a wide multiplier.

#![deny(unsafe_code)]

/// A Q0.60 fixed-point value: 60 fractional bits in an `i64`.
pub type Q60 = i64;

/// A Q1.63 fixed-point value: 63 fractional bits in an `i64` bit pattern.
///
/// Values at or above 1.0 are read in the unsigned view.
pub type Q63 = i64;

/// Number of fractional bits in a [`Q60`] value.
pub const Q60_FRAC_BITS: u32 = 60;

/// Number of fractional bits in a [`Q63`] value.
pub const Q63_FRAC_BITS: u32 = 63;

/// 1.0 in Q0.60.
pub const Q60_ONE: Q60 = 1 << Q60_FRAC_BITS;

/// Mask selecting the low 32 bits of an operand.
pub const MASK_LO32: i64 = 0xFFFF_FFFF;

/// The low 32-bit half of a split operand.
///
/// # Example
/// ```
/// assert_eq!(qgauss_fixp::lo32(0x1234_5678_9ABC_DEF0), 0x9ABC_DEF0);
/// assert_eq!(qgauss_fixp::lo32(-1), 0xFFFF_FFFF);
/// ```
#[must_use]
#[inline]
pub const fn lo32(v: i64) -> i64 {
    v & MASK_LO32
}

/// The high 32-bit half of a split operand, sign preserved.
///
/// Subtracting the low half first keeps the arithmetic shift exact for
/// negative operands.
///
/// # Example
/// ```
/// assert_eq!(qgauss_fixp::hi32(0x1234_5678_9ABC_DEF0), 0x1234_5678);
/// assert_eq!(qgauss_fixp::hi32(-1), -1);
/// ```
#[must_use]
#[inline]
pub const fn hi32(v: i64) -> i64 {
    (v - lo32(v)) >> 32
}

/// Multiplies two Q0.60 values, returning a Q0.60 result.
///
/// Both operands are split into 32-bit halves and the product is reassembled
/// from four partial products:
///
/// ```text
/// (a_hi * b_hi) << 4  +  (a_hi * b_lo) >> 28  +  (a_lo * b_hi) >> 28  +  (a_lo * b_lo) >> 60
/// ```
///
/// The low-by-low partial is a product of two non-negative halves and can
/// occupy all 64 bits, so it runs as an unsigned multiply; the mixed
/// partials and the final sum stay inside `i64` for every operand pair the
/// coefficient tables can produce. That bound is established offline when
/// the tables are generated and is a precondition here, not a runtime
/// check. The three right-shifted partials truncate toward negative
/// infinity, so the result sits at most 3 ulp below the exact rounded-down
/// product.
///
/// # Example
/// ```
/// use qgauss_fixp::{Q60_ONE, mul_q60};
///
/// assert_eq!(mul_q60(Q60_ONE, Q60_ONE), Q60_ONE);
/// assert_eq!(mul_q60(Q60_ONE / 2, Q60_ONE / 2), Q60_ONE / 4);
/// assert_eq!(mul_q60(-Q60_ONE, Q60_ONE / 4), -Q60_ONE / 4);
/// ```
#[must_use]
#[inline]
#[allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    reason = "the low halves are non-negative by construction and their shifted product is tiny"
)]
pub const fn mul_q60(a: Q60, b: Q60) -> Q60 {
    let (a_hi, a_lo) = (hi32(a), lo32(a));
    let (b_hi, b_lo) = (hi32(b), lo32(b));
    let low = ((a_lo as u64 * b_lo as u64) >> 60) as i64;

    ((a_hi * b_hi) << 4) + ((a_hi * b_lo) >> 28) + ((a_lo * b_hi) >> 28) + low
}

/// Promotes a Q0.60 value to Q1.63 by padding three zero bits.
///
/// # Example
/// ```
/// assert_eq!(qgauss_fixp::q60_to_q63(3), 24);
/// assert_eq!(qgauss_fixp::q60_to_q63(-3), -24);
/// ```
#[must_use]
#[inline]
pub const fn q60_to_q63(v: Q60) -> Q63 {
    v << 3
}
