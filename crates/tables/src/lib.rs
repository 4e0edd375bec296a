//! Coefficient and area tables for the fixed-point Gaussian engine.
//!
//! Three table families cover the non-negative axis up to the cutoffs of
//! [`defs`]:
//!
//! * [`ValueTable`]: cubic spline coefficients for point values, one
//!   segment per 1/64 of a unit.
//! * [`AreaTable`]: pre-divided antiderivative coefficients for
//!   sub-segment integrals, one segment per 1/128 of a unit.
//! * [`DyadicAreaTable`]: precomputed segment integrals at eleven dyadic
//!   [`Scale`]s.
//!
//! Tables are immutable once constructed and safe to share across a fleet
//! of evaluators without synchronisation.

#![deny(unsafe_code)]

pub mod area;
pub mod defs;
pub mod dyadic;
pub mod load;
pub mod scale;
pub mod set;
pub mod value;

pub use area::{AreaSegment, AreaTable};
pub use dyadic::DyadicAreaTable;
pub use load::{LoadErrorReason, TableLoadError};
pub use scale::Scale;
pub use set::TableSet;
pub use value::{ValueSegment, ValueTable};
