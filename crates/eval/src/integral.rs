//! Antiderivative evaluation and sub-segment integrals.

use crate::engine::Engine;
use crate::steps::{AREA_STEPS, StepValues};
use fixp::{Q60, Q63, mul_q60, q60_to_q63};
use tables::AreaTable;
use tables::defs::X_AREA_LAST;

impl Engine<'_> {
    /// The antiderivative of the local quintic at a Q0.60 point, with the
    /// eleven Horner intermediates.
    ///
    /// Evaluates `c1·x⁶/6 + c2·x⁵/5 + c3·x⁴/4 + c4·x³/3 + c5·x²/2 + c6·x`
    /// division-free: the stored coefficients are already divided. With no
    /// forced `segment` the containing segment of x is used; a forced index
    /// lets an integral evaluate both endpoints against one polynomial.
    ///
    /// Out-of-range arguments (x = 0, or beyond the last tabled segment
    /// edge in the unsigned view) return an all-zero schedule.
    ///
    /// # Panics
    /// Panics when a forced segment index lies outside the table.
    #[must_use]
    pub fn area_poly_value(&self, x: Q60, segment: Option<u32>) -> StepValues {
        if x == 0 || (x as u64) > (X_AREA_LAST as u64) {
            return StepValues::zeroed(AREA_STEPS);
        }

        let index = segment.map_or_else(|| AreaTable::index_of(x), |forced| forced as usize);
        let coefs = self.tables().areas.get(index);
        let mut sv = StepValues::default();

        let s = sv.record(mul_q60(coefs.c1, x));
        let s = sv.record(s + coefs.c2);
        let s = sv.record(mul_q60(s, x));
        let s = sv.record(s + coefs.c3);
        let s = sv.record(mul_q60(s, x));
        let s = sv.record(s + coefs.c4);
        let s = sv.record(mul_q60(s, x));
        let s = sv.record(s + coefs.c5);
        let s = sv.record(mul_q60(s, x));
        let s = sv.record(s + coefs.c6);
        sv.record(mul_q60(s, x));
        sv
    }

    /// The integral over `[left, right]`, both inside the finest-scale
    /// segment containing `left`, as Q1.63.
    ///
    /// Both endpoints are evaluated against `left`'s segment polynomial and
    /// the Q0.60 difference is promoted to Q1.63. Equal endpoints return
    /// zero.
    ///
    /// The caller keeps the interval inside one finest-scale segment; the
    /// range aggregator's residual gaps satisfy that by construction, except
    /// that a right endpoint may land marginally past the segment edge, where
    /// the quintic still extrapolates smoothly.
    ///
    /// # Panics
    /// Panics when `left` lies outside the tabled domain.
    #[must_use]
    pub fn subscale_integral(&self, left: Q60, right: Q60) -> Q63 {
        if left == right {
            return 0;
        }

        let segment = AreaTable::index_of(left) as u32;
        let upper = self.area_poly_value(right, Some(segment)).result();
        let lower = self.area_poly_value(left, Some(segment)).result();
        q60_to_q63(upper - lower)
    }
}
