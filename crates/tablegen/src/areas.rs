//! Dyadic segment-area integration.

use crate::dd::Dd;
use crate::gauss::{FINE_WIDTH, segment_integrals};
use crate::to_q63;
use strum::IntoEnumIterator;
use tables::Scale;

/// Finest-scale cells spanning `[0, 8]`; the coarsest segment covers all of
/// them.
const FINE_CELLS: usize = 1024;

/// Prefix integrals of the density over `[0, i / 128]`, double-double.
fn fine_prefix() -> Vec<Dd> {
    let mut prefix = Vec::with_capacity(FINE_CELLS + 1);
    prefix.push(Dd::ZERO);

    let mut running = Dd::ZERO;
    for cell in 0..FINE_CELLS {
        let (mass, _) = segment_integrals(cell as f64 * FINE_WIDTH, FINE_WIDTH);
        running = running + mass;
        prefix.push(running);
    }
    prefix
}

/// One area array per scale, finest first, in unsigned Q1.63.
///
/// Every entry is a difference of the same prefix table, which keeps each
/// scale consistent with sums over finer scales to within rounding.
#[must_use]
pub fn dyadic_scales() -> Vec<Vec<u64>> {
    let prefix = fine_prefix();
    Scale::iter()
        .map(|scale| {
            let cells_per_segment = 1usize << scale.index();
            (0..scale.segment_count())
                .map(|segment| {
                    let lo = prefix[segment * cells_per_segment];
                    let hi = prefix[(segment + 1) * cells_per_segment];
                    to_q63(hi - lo)
                })
                .collect()
        })
        .collect()
}
