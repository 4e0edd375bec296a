//! Dyadic segment scales.

use crate::defs::X_CUTOFF_AREA;
use strum::{EnumCount, EnumIter};

/// One of the eleven dyadic scales of the precomputed area table.
///
/// A scale-`s` segment spans `2^(53 + s)` in Q0.60, i.e. `2^(s - 7)` real
/// units: [`Scale::S0`] segments are 1/128 wide and [`Scale::S10`] covers
/// the whole supported axis in a single segment.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, EnumCount, EnumIter)]
pub enum Scale {
    /// Segment width 1/128.
    S0 = 0,
    /// Segment width 1/64.
    S1 = 1,
    /// Segment width 1/32.
    S2 = 2,
    /// Segment width 1/16.
    S3 = 3,
    /// Segment width 1/8.
    S4 = 4,
    /// Segment width 1/4.
    S5 = 5,
    /// Segment width 1/2.
    S6 = 6,
    /// Segment width 1.
    S7 = 7,
    /// Segment width 2.
    S8 = 8,
    /// Segment width 4.
    S9 = 9,
    /// Segment width 8, covering the whole supported axis.
    S10 = 10,
}

impl Scale {
    /// All scales, finest first. The array index equals [`Scale::index`].
    pub const ALL: [Self; Self::COUNT] = [
        Self::S0,
        Self::S1,
        Self::S2,
        Self::S3,
        Self::S4,
        Self::S5,
        Self::S6,
        Self::S7,
        Self::S8,
        Self::S9,
        Self::S10,
    ];

    /// The scale as an array index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Right-shift that maps a Q0.60 argument to a segment index at this
    /// scale.
    ///
    /// # Example
    /// ```
    /// use qgauss_tables::Scale;
    ///
    /// assert_eq!(Scale::S0.shift(), 53);
    /// assert_eq!(Scale::S9.shift(), 62);
    /// ```
    #[must_use]
    #[inline]
    pub const fn shift(self) -> u32 {
        53 + self as u32
    }

    /// Segment width in Q0.60 units.
    ///
    /// Returned as `u64`: the [`Scale::S10`] width occupies the top bit.
    #[must_use]
    #[inline]
    pub const fn width(self) -> u64 {
        1 << self.shift()
    }

    /// Number of precomputed segments at this scale.
    ///
    /// # Example
    /// ```
    /// use qgauss_tables::Scale;
    ///
    /// assert_eq!(Scale::S0.segment_count(), 830);
    /// assert_eq!(Scale::S10.segment_count(), 1);
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        reason = "the area cutoff is a positive constant and counts stay tiny"
    )]
    pub const fn segment_count(self) -> usize {
        (X_CUTOFF_AREA as u64).div_ceil(self.width()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn all_matches_iteration_order() {
        assert!(Scale::iter().eq(Scale::ALL));
        for scale in Scale::iter() {
            assert_eq!(Scale::ALL[scale.index()], scale);
        }
    }

    #[test]
    fn widths_double_per_scale() {
        for pair in Scale::ALL.windows(2) {
            assert_eq!(pair[0].width() * 2, pair[1].width());
        }
    }

    #[test]
    fn segment_counts_cover_the_cutoff() {
        let expected = [830, 415, 208, 104, 52, 26, 13, 7, 4, 2, 1];
        for (scale, count) in Scale::iter().zip(expected) {
            assert_eq!(scale.segment_count(), count, "{scale:?}");
        }
    }
}
