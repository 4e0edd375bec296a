//! The range-area aggregator.

use crate::engine::Engine;
use fixp::{Q60, Q63};
use tables::Scale;
use tables::defs::{X_AREA_LAST, X_CUTOFF_AREA};

impl Engine<'_> {
    /// The integral of the density over `[left, right]`, as Q1.63.
    ///
    /// The result is a Q1.63 bit pattern: intervals carrying 1.0 or more of
    /// mass land in the top bit and are read in the unsigned view, like the
    /// tabled whole-support mass they are built from.
    ///
    /// Degenerate inputs map to zero: empty intervals, reversed intervals,
    /// and intervals starting beyond the area cutoff. A right endpoint at or
    /// past the last tabled segment edge either returns the whole-support
    /// entry directly (when `left` is zero) or is clamped to that edge.
    ///
    /// The interval is covered greedily: one or two seed segments at the
    /// coarsest scale that fits inside the range, at most one segment per
    /// side at each finer scale, and two sub-segment residual integrals.
    /// That is at most 22 table lookups and two polynomial evaluations, and
    /// the visit order is fixed, so equal inputs give bit-equal outputs.
    #[must_use]
    pub fn area(&self, left: Q60, right: Q60) -> Q63 {
        let (l, r) = (left as u64, right as u64);
        if r <= l {
            return 0;
        }
        if l > (X_CUTOFF_AREA as u64) {
            return 0;
        }

        let mut right = right;
        if r > (X_CUTOFF_AREA as u64) && r >= (X_AREA_LAST as u64) {
            if left == 0 {
                return self.tables().dyadic.whole_support() as i64;
            }
            right = X_AREA_LAST;
        }

        self.cover(left, right)
    }

    /// Covers an in-domain interval with dyadic segments plus residuals.
    fn cover(&self, left: Q60, right: Q60) -> Q63 {
        let dyadic = &self.tables().dyadic;
        let mut area: u64 = 0;
        let mut left_edge = right;
        let mut right_edge = right;

        // Stage 1: seed with the coarsest segment that fits inside the
        // range. The coarsest scale itself is the whole-support fast path,
        // so the scan starts one below it.
        let mut scale_index = Scale::ALL.len() - 1;
        while scale_index > 0 {
            scale_index -= 1;
            let scale = Scale::ALL[scale_index];
            let shift = scale.shift();
            let width = 1i64 << shift;

            let next_index = right >> shift;
            if next_index == 0 {
                continue;
            }
            let segment_right = next_index << shift;
            if left >= segment_right {
                continue;
            }
            let segment_left = segment_right - width;
            if segment_left < left {
                continue;
            }

            let segment_index = (next_index - 1) as usize;
            area = area.wrapping_add(dyadic.area(scale, segment_index));
            right_edge = segment_right;
            left_edge = segment_left;

            // At most one adjacent segment of the seed scale also fits.
            if segment_index > 0 && left <= segment_left - width {
                area = area.wrapping_add(dyadic.area(scale, segment_index - 1));
                left_edge -= width;
            }
            break;
        }

        // Stage 2: extend with at most one segment per side per remaining
        // scale. Both edges stay aligned to the current scale, so the
        // residual gaps halve as the scales do.
        while scale_index > 0 {
            scale_index -= 1;
            let scale = Scale::ALL[scale_index];
            let shift = scale.shift();
            let width = 1i64 << shift;

            let segment_right = right_edge + width;
            if segment_right <= right {
                area = area.wrapping_add(dyadic.area(scale, (right_edge >> shift) as usize));
                right_edge = segment_right;
            }

            let next_index = left_edge >> shift;
            if next_index > 0 {
                let segment_left = left_edge - width;
                if segment_left >= left {
                    area = area.wrapping_add(dyadic.area(scale, (next_index - 1) as usize));
                    left_edge = segment_left;
                }
            }
        }

        // Stage 3: the residual gaps, each smaller than a finest-scale
        // segment.
        area = area.wrapping_add(self.subscale_integral(right_edge, right) as u64);
        area = area.wrapping_add(self.subscale_integral(left, left_edge) as u64);

        area as i64
    }
}
