//! The evaluator and the point-value schedule.

use crate::steps::{StepValues, VALUE_STEPS};
use fixp::{Q60, mul_q60};
use tables::TableSet;
use tables::defs::X_CUTOFF_VAL;

/// Fixed-point Gaussian evaluator over a shared table set.
///
/// The engine is a borrow: it is `Copy`, carries no state of its own, and
/// any number of engines may read one published [`TableSet`] concurrently.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use qgauss_eval::Engine;
/// use tables::TableSet;
///
/// let tables = TableSet::load_dir(Path::new("tables"))?;
/// let engine = Engine::new(&tables);
/// assert!(engine.value(1 << 60) > 0);
/// # Ok::<(), tables::TableLoadError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Engine<'t> {
    /// The published tables this engine reads.
    tables: &'t TableSet,
}

impl<'t> Engine<'t> {
    /// Creates an evaluator over a published table set.
    #[must_use]
    pub const fn new(tables: &'t TableSet) -> Self {
        Self { tables }
    }

    /// The tables this engine reads.
    #[must_use]
    pub(crate) const fn tables(&self) -> &'t TableSet {
        self.tables
    }

    /// The density at a Q0.60 point, in Q0.60.
    ///
    /// Out-of-range arguments (unsigned view above the value cutoff) return
    /// zero. So does x = 0, a deliberate convention of this engine;
    /// callers that want the exact g(0) = 1 layer it on themselves.
    #[must_use]
    pub fn value(&self, x: Q60) -> Q60 {
        self.value_with_steps(x).result()
    }

    /// The density at a Q0.60 point, with the six Horner intermediates.
    #[must_use]
    pub fn value_with_steps(&self, x: Q60) -> StepValues {
        if x == 0 || (x as u64) > (X_CUTOFF_VAL as u64) {
            return StepValues::zeroed(VALUE_STEPS);
        }

        let segment = self.tables.values.segment_for(x);
        let mut sv = StepValues::default();

        let s = sv.record(mul_q60(segment.a, x));
        let s = sv.record(s + segment.b);
        let s = sv.record(mul_q60(s, x));
        let s = sv.record(s + segment.c);
        let s = sv.record(mul_q60(s, x));
        sv.record(s + segment.d);
        sv
    }
}
