//! Precomputed dyadic segment areas.

use crate::scale::Scale;
use strum::EnumCount;

/// Precomputed integrals of the density over dyadic segments, Q1.63.
///
/// One array per [`Scale`]; entry `(s, i)` holds the integral over
/// `[i·W_s, (i + 1)·W_s]` where `W_s` is the scale width. Entries are stored
/// as `u64` because the widest segments carry more than 1.0 of mass, which
/// needs the full 64-bit unsigned Q1.63 range.
#[derive(Debug)]
pub struct DyadicAreaTable {
    /// Segment areas per scale, indexed by [`Scale::index`].
    scales: Vec<Vec<u64>>,
}

impl DyadicAreaTable {
    /// Builds the table from one area array per scale, finest first.
    ///
    /// # Panics
    /// Panics when not given exactly one array per scale.
    #[must_use]
    pub fn new(scales: Vec<Vec<u64>>) -> Self {
        assert_eq!(scales.len(), Scale::COUNT, "one area array per scale");
        Self { scales }
    }

    /// The tabled area of one segment.
    ///
    /// # Panics
    /// Panics when the index is out of range for the scale.
    #[must_use]
    #[inline]
    pub fn area(&self, scale: Scale, index: usize) -> u64 {
        self.scales[scale.index()][index]
    }

    /// The single whole-support entry: the mass of the entire tabled axis.
    ///
    /// # Panics
    /// Panics when the coarsest scale was loaded empty.
    #[must_use]
    pub fn whole_support(&self) -> u64 {
        self.scales[Scale::S10.index()][0]
    }

    /// The area array of one scale.
    #[must_use]
    pub fn scale_areas(&self, scale: Scale) -> &[u64] {
        &self.scales[scale.index()]
    }
}
