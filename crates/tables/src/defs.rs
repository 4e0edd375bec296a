//! Numeric constants of the table layout.
//!
//! All cutoffs are Q0.60. They are fixed at table-generation time together
//! with sigma = 1; the runtime only reads them.

use fixp::Q60;

/// Value splines per unit of x; one segment spans 2^54 in Q0.60.
pub const VALUE_SPLINES_PER_UNIT: i64 = 64;

/// Right-shift that maps a Q0.60 argument to its value-segment index.
pub const VALUE_SEGMENT_SHIFT: u32 = 54;

/// Area splines per unit of x at the finest scale; one segment spans 2^53.
pub const AREA_SPLINES_PER_UNIT: i64 = 128;

/// Right-shift that maps a Q0.60 argument to its area-segment index.
pub const AREA_SEGMENT_SHIFT: u32 = 53;

/// Largest x with a representable density: beyond this point the density
/// rounds below 2^-60 and the value evaluator returns zero.
pub const X_CUTOFF_VAL: Q60 = 7_798_021_677_424_194_372;

/// Largest x contributing representable area mass.
pub const X_CUTOFF_AREA: Q60 = 7_468_738_554_291_142_405;

/// Right edge of the last finest-scale area segment; the area evaluator
/// clamps to this point.
pub const X_AREA_LAST: Q60 = 7_475_975_381_435_023_360;

/// Number of cubic value segments covering `[0, X_CUTOFF_VAL)`.
#[allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    reason = "the cutoff is a positive constant and the count stays tiny"
)]
pub const VALUE_SEGMENT_COUNT: usize =
    (X_CUTOFF_VAL as u64).div_ceil(1 << VALUE_SEGMENT_SHIFT) as usize;

/// Number of quintic area segments.
///
/// Derived from the *value* cutoff, so the table extends a few segments past
/// [`X_AREA_LAST`] and forced-index evaluation at the clamp point stays in
/// range.
#[allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    reason = "the cutoff is a positive constant and the count stays tiny"
)]
pub const AREA_SEGMENT_COUNT: usize =
    (X_CUTOFF_VAL as u64).div_ceil(1 << AREA_SEGMENT_SHIFT) as usize;
