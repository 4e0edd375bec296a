//! Double-double arithmetic.
//!
//! The quintic fit solves a near-singular system: perturbing its right-hand
//! side at the 1e-16 level throws coefficients of the order of hundreds into
//! the monomial expansion, which neither fits the Q0.60 tables nor keeps
//! the Horner schedule inside 64 bits. Carrying the fit in an unevaluated
//! sum of two doubles (roughly 32 significant digits, Dekker/Knuth error-free
//! transformations) pushes that noise twelve orders of magnitude below the
//! coefficient quantum, without reaching for a full arbitrary-precision
//! dependency.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// ln 2 to double-double precision, high part.
const LN2_HI: f64 = 0.693_147_180_559_945_3;

/// ln 2 to double-double precision, low part.
const LN2_LO: f64 = 2.319_046_813_846_299_6e-17;

/// An unevaluated sum of two doubles, `hi + lo` with `|lo| <= ulp(hi) / 2`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dd {
    /// Leading component.
    hi: f64,
    /// Trailing error term.
    lo: f64,
}

/// Error-free sum: `a + b` as a rounded result and its exact error.
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    (s, (a - (s - bb)) + (b - bb))
}

/// Error-free sum for `|a| >= |b|`.
fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    (s, b - (s - a))
}

/// Error-free product via fused multiply-add.
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    (p, a.mul_add(b, -p))
}

impl Dd {
    /// Zero.
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    /// One.
    pub const ONE: Self = Self { hi: 1.0, lo: 0.0 };

    /// An exact double promoted to double-double.
    #[must_use]
    pub const fn from_f64(v: f64) -> Self {
        Self { hi: v, lo: 0.0 }
    }

    /// Renormalises a dominant/trailing pair.
    #[must_use]
    fn renorm(hi: f64, lo: f64) -> Self {
        let (h, l) = quick_two_sum(hi, lo);
        Self { hi: h, lo: l }
    }

    /// The nearest double.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Multiplies by an exact power of two.
    #[must_use]
    fn scale2(self, exponent: i32) -> Self {
        let factor = 2f64.powi(exponent);
        Self { hi: self.hi * factor, lo: self.lo * factor }
    }

    /// `e^self` for arguments in the density's working range `[-24, 1]`.
    ///
    /// Argument reduction against the two-part ln 2, a truncated Taylor sum
    /// for the reduced argument, then an exact power-of-two scale.
    #[must_use]
    pub fn exp(self) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the reduced exponent is a small integer by the argument range"
        )]
        let m = (self.hi / LN2_HI).round() as i32;
        let r = self - Self { hi: LN2_HI, lo: LN2_LO } * f64::from(m);

        // |r| <= (ln 2) / 2; thirty terms land below the double-double ulp.
        let mut term = Self::ONE;
        let mut total = Self::ONE;
        for k in 1..30 {
            term = term * r / f64::from(k);
            total = total + term;
        }
        total.scale2(m)
    }

    /// Rounds `self * 2^frac_bits` to the nearest integer.
    ///
    /// Two-stage: a coarse f64 rounding, then a rounding of the exactly
    /// reconstructed remainder, so the result is correct to the last bit for
    /// every magnitude the tables hold.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "table magnitudes keep the scaled value well inside i128, \
                  and fractional-bit counts are two-digit"
    )]
    pub fn round_fixed(self, frac_bits: u32) -> i128 {
        let coarse = (self.hi * 2f64.powi(frac_bits as i32)).round() as i128;
        let remainder = self - Self::from_i128(coarse).scale2(-(frac_bits as i32));
        let fine = (remainder.hi * 2f64.powi(frac_bits as i32)).round() as i128;
        coarse + fine
    }

    /// An integer of at most 64 significant bits, exactly.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "the trailing part captures exactly what the leading cast drops"
    )]
    fn from_i128(n: i128) -> Self {
        let hi = n as f64;
        let lo = (n - hi as i128) as f64;
        Self::renorm(hi, lo)
    }
}

impl Add for Dd {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (s1, s2) = two_sum(self.hi, rhs.hi);
        let (t1, t2) = two_sum(self.lo, rhs.lo);
        let (s1, s2) = quick_two_sum(s1, s2 + t1);
        Self::renorm(s1, s2 + t2)
    }
}

impl Neg for Dd {
    type Output = Self;

    fn neg(self) -> Self {
        Self { hi: -self.hi, lo: -self.lo }
    }
}

impl Sub for Dd {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for Dd {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (p1, p2) = two_prod(self.hi, rhs.hi);
        Self::renorm(p1, p2 + self.hi * rhs.lo + self.lo * rhs.hi)
    }
}

impl Mul<f64> for Dd {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self * Self::from_f64(rhs)
    }
}

impl Div for Dd {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        let r = self - rhs * q1;
        let q2 = r.hi / rhs.hi;
        let r = r - rhs * q2;
        let q3 = r.hi / rhs.hi;
        let (s, e) = quick_two_sum(q1, q2);
        Self::renorm(s, e + q3)
    }
}

impl Div<f64> for Dd {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self / Self::from_f64(rhs)
    }
}

impl Mul<Dd> for f64 {
    type Output = Dd;

    fn mul(self, rhs: Dd) -> Dd {
        Dd::from_f64(self) * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_carry_their_error_term() {
        // (2^27 + 1)^2 is not representable in f64; the error term is.
        let v = 134_217_729.0;
        let (p, e) = two_prod(v, v);
        assert_eq!(p + e, v * v);
        assert_eq!(e, 1.0);
    }

    #[test]
    fn sums_are_error_free() {
        let (s, e) = two_sum(1.0e16, 1.0);
        assert_eq!(s, 1.0e16);
        assert_eq!(e, 1.0);
    }

    #[test]
    fn division_inverts_multiplication() {
        let a = Dd::from_f64(1.0) / 3.0;
        let back = a * 3.0 - Dd::ONE;
        assert!(back.to_f64().abs() < 1e-31);
    }

    #[test]
    fn exp_matches_f64_at_low_precision() {
        for z in [0.0, -0.5, -1.0, -8.25, -20.5] {
            let got = Dd::from_f64(z).exp().to_f64();
            let want = z.exp();
            assert!(((got - want) / want).abs() < 1e-15, "z={z}");
        }
    }

    #[test]
    fn exp_is_multiplicative_at_full_precision() {
        // exp(a) * exp(b) agrees with exp(a + b) at the double-double level,
        // which only holds if the extended precision is real.
        let a = Dd::from_f64(-0.375);
        let b = Dd::from_f64(-5.625);
        let lhs = a.exp() * b.exp();
        let rhs = (a + b).exp();
        let rel = (lhs - rhs).to_f64() / rhs.to_f64();
        assert!(rel.abs() < 1e-30, "rel={rel:e}");
    }

    #[test]
    fn exp_of_ln2_is_two() {
        let ln2 = Dd { hi: LN2_HI, lo: LN2_LO };
        let rel = (ln2.exp() - Dd::from_f64(2.0)).to_f64() / 2.0;
        assert!(rel.abs() < 1e-31, "rel={rel:e}");
    }

    #[test]
    fn fixed_point_rounding_is_exact_at_the_edges() {
        assert_eq!(Dd::from_f64(1.0).round_fixed(60), 1 << 60);
        assert_eq!(Dd::from_f64(-0.5).round_fixed(60), -(1 << 59));
        assert_eq!(Dd::ZERO.round_fixed(63), 0);
        // A value above i64: the whole-support mass territory.
        let v = Dd::from_f64(1.25);
        assert_eq!(v.round_fixed(63), 5i128 << 61);
        // The trailing part moves the rounding decision.
        let half_ulp = Dd::renorm(1.0, 2f64.powi(-61));
        assert_eq!(half_ulp.round_fixed(60), (1i128 << 60) + 1);
    }
}
