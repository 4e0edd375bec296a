//! Quintic area-spline fitting.
//!
//! Each segment gets the quintic with six matched quantities: the density
//! and its derivative at both edges, the mass over the segment, and the
//! first moment about the left edge. The moment has a closed form because
//! `x * exp(-x^2 / 2)` integrates to `-exp(-x^2 / 2)`; the generator still
//! takes it from the same offset series as the mass, which keeps the two
//! consistent to the working precision.

use crate::basis;
use crate::dd::Dd;
use crate::gauss::{density_dd, segment_integrals, slope_dd};
use crate::to_q60;
use tables::AreaSegment;
use tables::defs::{AREA_SEGMENT_COUNT, AREA_SPLINES_PER_UNIT};

/// Left edge of an area segment in real units.
pub(crate) fn segment_left(index: usize) -> f64 {
    index as f64 / AREA_SPLINES_PER_UNIT as f64
}

/// Fits, pre-divides, and rounds the area segment at an index.
///
/// The stored values are the antiderivative coefficients divided by their
/// power factor, the convention the evaluator assumes.
#[must_use]
pub fn area_segment(index: usize) -> AreaSegment {
    let left = segment_left(index);
    let right = segment_left(index + 1);
    let width = right - left;

    let g0 = density_dd(left);
    let g1 = density_dd(right);
    let m0 = slope_dd(left) * width;
    let m1 = slope_dd(right) * width;
    let (mass, moment) = segment_integrals(left, width);

    // In the local coordinate t = (x - left) / width the edge conditions at
    // t = 0 pin the first two coefficients directly.
    let d0 = g0;
    let d1 = m0;

    // The remaining four: value and derivative at t = 1, mass, moment.
    let one = Dd::ONE;
    let rows = [
        [one, one, one, one, g1 - d0 - d1],
        [Dd::from_f64(2.0), Dd::from_f64(3.0), Dd::from_f64(4.0), Dd::from_f64(5.0), m1 - d1],
        [one / 3.0, one / 4.0, one / 5.0, one / 6.0, mass / width - d0 - d1 / 2.0],
        [
            one / 4.0,
            one / 5.0,
            one / 6.0,
            one / 7.0,
            moment / (width * width) - d0 / 2.0 - d1 / 3.0,
        ],
    ];
    let [d2, d3, d4, d5] = solve4(rows);

    let mono = basis::expand(&[d0, d1, d2, d3, d4, d5], left, width);
    AreaSegment {
        c1: to_q60(mono[5] / 6.0),
        c2: to_q60(mono[4] / 5.0),
        c3: to_q60(mono[3] / 4.0),
        c4: to_q60(mono[2] / 3.0),
        c5: to_q60(mono[1] / 2.0),
        c6: to_q60(mono[0]),
    }
}

/// Fits the full area table.
#[must_use]
pub fn area_segments() -> Vec<AreaSegment> {
    (0..AREA_SEGMENT_COUNT).map(area_segment).collect()
}

/// Solves a 4x4 system given as augmented rows, with partial pivoting.
fn solve4(mut m: [[Dd; 5]; 4]) -> [Dd; 4] {
    for col in 0..4 {
        let mut pivot = col;
        for row in col + 1..4 {
            if m[row][col].to_f64().abs() > m[pivot][col].to_f64().abs() {
                pivot = row;
            }
        }
        m.swap(col, pivot);
        for row in col + 1..4 {
            let factor = m[row][col] / m[col][col];
            for k in col..5 {
                m[row][k] = m[row][k] - factor * m[col][k];
            }
        }
    }

    let mut out = [Dd::ZERO; 4];
    for row in (0..4).rev() {
        let mut acc = m[row][4];
        for k in row + 1..4 {
            acc = acc - m[row][k] * out[k];
        }
        out[row] = acc / m[row][row];
    }
    out
}
