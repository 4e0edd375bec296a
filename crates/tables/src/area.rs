//! Quintic area-spline table.

use crate::defs::AREA_SEGMENT_SHIFT;
use derive_more::Display;
use fixp::Q60;

/// Antiderivative coefficients of one area segment, Q0.60.
///
/// The stored values are the antiderivative coefficients already divided by
/// their power factor: `c1` holds the sextic coefficient divided by 6, `c2`
/// the quintic divided by 5, and so on down to `c6`, which is stored as is.
/// The evaluator therefore runs without a single division.
///
/// The display form is the table-file record format.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
#[display("{{ {c1}, {c2}, {c3}, {c4}, {c5}, {c6} }}")]
pub struct AreaSegment {
    /// Sextic antiderivative coefficient, pre-divided by 6.
    pub c1: Q60,
    /// Quintic antiderivative coefficient, pre-divided by 5.
    pub c2: Q60,
    /// Quartic antiderivative coefficient, pre-divided by 4.
    pub c3: Q60,
    /// Cubic antiderivative coefficient, pre-divided by 3.
    pub c4: Q60,
    /// Quadratic antiderivative coefficient, pre-divided by 2.
    pub c5: Q60,
    /// Linear antiderivative coefficient.
    pub c6: Q60,
}

/// The table of quintic area segments, indexed by `x >> 53`.
#[derive(Debug)]
pub struct AreaTable(Vec<AreaSegment>);

impl AreaTable {
    /// Segment index containing a Q0.60 argument.
    ///
    /// # Example
    /// ```
    /// use qgauss_tables::AreaTable;
    ///
    /// assert_eq!(AreaTable::index_of(1 << 60), 128);
    /// ```
    #[must_use]
    #[inline]
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        reason = "callers guard the argument into the non-negative domain"
    )]
    pub const fn index_of(x: Q60) -> usize {
        (x >> AREA_SEGMENT_SHIFT) as usize
    }

    /// The segment at an index.
    ///
    /// # Panics
    /// Panics when the index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> &AreaSegment {
        &self.0[index]
    }

    /// All segments in index order.
    #[must_use]
    pub fn segments(&self) -> &[AreaSegment] {
        &self.0
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<AreaSegment>> for AreaTable {
    fn from(segments: Vec<AreaSegment>) -> Self {
        Self(segments)
    }
}
