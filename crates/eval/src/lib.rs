//! Integer-only evaluation of the Gaussian density and its integral.
//!
//! An [`Engine`] borrows a published [`tables::TableSet`] and answers two
//! questions without a single floating-point operation or division:
//!
//! * the density at a Q0.60 point, through a six-step Horner schedule over
//!   the cubic value splines;
//! * the integral over a Q0.60 interval, by covering it greedily with
//!   precomputed dyadic segment areas and closing the two residual gaps
//!   with quintic antiderivative differences.
//!
//! Every public entry point is total over `i64`: out-of-range bit patterns
//! fall into cutoff guards and map to zero. Identical inputs always produce
//! bit-identical outputs: the schedules are strictly sequential and the
//! cover visits scales in a fixed order.

#![deny(unsafe_code)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    reason = "fixed-point bit patterns move between the signed and unsigned views by design"
)]

mod engine;
mod integral;
mod range;
mod steps;

pub use engine::Engine;
pub use steps::{AREA_STEPS, StepValues, VALUE_STEPS};
