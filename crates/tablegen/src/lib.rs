//! Offline table generation.
//!
//! The runtime engine consumes integer tables as data; this crate is the
//! one-shot toolchain that derives them. The spline fits are carried in
//! double-double arithmetic ([`dd`]) because the quintic's moment-matched
//! system amplifies right-hand-side noise by many orders of magnitude:
//! plain f64 data noise lands as whole units in the monomial coefficients,
//! which would burst both the Q0.60 tables and the 64-bit Horner bound.
//! Plain f64 remains in use where it is sufficient: the quadrature-based
//! reference integral and the statistics sweeps.
//!
//! Nothing in this crate is needed after the `.data` files are written;
//! tests also use it to build a [`tables::TableSet`] in memory.

#![deny(unsafe_code)]
#![allow(
    clippy::cast_precision_loss,
    reason = "indices and counts cast to f64 stay far below the 2^53 integer range"
)]

pub mod area_fit;
pub mod areas;
mod basis;
mod dd;
pub mod emit;
pub mod gauss;
pub mod quad;
pub mod stats;
pub mod value_fit;

use dd::Dd;
use tables::{AreaTable, DyadicAreaTable, TableSet, ValueTable};

/// Q0.60 scale factor.
pub(crate) const Q60_SCALE: f64 = 1_152_921_504_606_846_976.0;

/// Rounds a fitted coefficient to Q0.60.
#[allow(
    clippy::cast_possible_truncation,
    reason = "coefficients stay well inside the Q0.60 range by construction"
)]
pub(crate) fn to_q60(v: Dd) -> i64 {
    v.round_fixed(60) as i64
}

/// Rounds a non-negative segment area to unsigned Q1.63.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "segment areas lie in [0, sqrt(pi/2)], inside the unsigned Q1.63 range"
)]
pub(crate) fn to_q63(v: Dd) -> u64 {
    v.round_fixed(63) as u64
}

/// Builds the complete table set in memory.
///
/// This is the generation path the emitters serialise; tests call it
/// directly instead of going through files.
#[must_use]
pub fn build_table_set() -> TableSet {
    TableSet {
        values: ValueTable::from(value_fit::value_segments()),
        areas: AreaTable::from(area_fit::area_segments()),
        dyadic: DyadicAreaTable::new(areas::dyadic_scales()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tables::defs::{AREA_SEGMENT_COUNT, VALUE_SEGMENT_COUNT};

    #[test]
    fn builds_full_size_tables() {
        let set = build_table_set();
        assert_eq!(set.values.len(), VALUE_SEGMENT_COUNT);
        assert_eq!(set.areas.len(), AREA_SEGMENT_COUNT);
        assert_eq!(set.dyadic.scale_areas(tables::Scale::S0).len(), 830);
    }

    #[test]
    fn fixed_point_rounding_is_symmetric() {
        assert_eq!(to_q60(Dd::ONE), 1 << 60);
        assert_eq!(to_q60(Dd::from_f64(-0.5)), -(1 << 59));
        assert_eq!(to_q60(Dd::ZERO), 0);
        assert_eq!(to_q63(Dd::from_f64(1.25)), 5 << 61);
    }
}
