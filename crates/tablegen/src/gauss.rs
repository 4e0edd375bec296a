//! The reference density.
//!
//! Two precision tiers: double-double density and segment integrals feed
//! the spline fits; a plain f64 density plus composite quadrature serve as
//! the independent reference for tests and statistics.

use crate::dd::Dd;
use crate::quad::GaussLegendre;

/// Finest segment width of the area tables, in real units.
pub const FINE_WIDTH: f64 = 1.0 / 128.0;

/// The standard Gaussian density `exp(-x^2 / 2)` (sigma = 1, unnormalised).
#[must_use]
pub fn density(x: f64) -> f64 {
    (-0.5 * x * x).exp()
}

/// Derivative of the density, `-x * exp(-x^2 / 2)`.
#[must_use]
pub fn slope(x: f64) -> f64 {
    -x * density(x)
}

/// Integral of the density over `[left, right]`, f64 reference tier.
///
/// Composite Gauss–Legendre quadrature over steps no wider than one finest
/// segment; the density is entire, so a 20-node rule per step integrates it
/// to f64 roundoff.
#[must_use]
pub fn integral(left: f64, right: f64) -> f64 {
    GaussLegendre::new(20).composite(density, left, right, FINE_WIDTH)
}

/// The density at a table grid point, in double-double.
///
/// Grid points are small dyadic rationals, so `-x^2 / 2` is exact in f64 and
/// all the error budget sits in the extended-precision exponential.
pub(crate) fn density_dd(x: f64) -> Dd {
    Dd::from_f64(-0.5 * x * x).exp()
}

/// Derivative of the density at a grid point, in double-double.
pub(crate) fn slope_dd(x: f64) -> Dd {
    density_dd(x) * -x
}

/// Mass and first moment of the density over one grid segment, in
/// double-double.
///
/// With `F(u) = exp(-left*u - u^2/2)`, the identity `F' = -(left + u) F`
/// gives a coefficient recurrence for the offset power series, and
///
/// ```text
/// mass   = g(left) * sum a_n width^(n+1) / (n+1)
/// moment = g(left) * sum a_n width^(n+2) / (n+2)
/// ```
///
/// The moment is taken about the left edge. At grid widths the series drops
/// below the double-double ulp within two dozen terms.
pub(crate) fn segment_integrals(left: f64, width: f64) -> (Dd, Dd) {
    let g0 = density_dd(left);

    let mut a_prev = Dd::ZERO;
    let mut a_cur = Dd::ONE;
    let mut mass = Dd::ZERO;
    let mut moment = Dd::ZERO;
    let mut power = width;
    for n in 0..26i32 {
        mass = mass + a_cur * power / f64::from(n + 1);
        moment = moment + a_cur * (power * width) / f64::from(n + 2);
        let a_next = (a_cur * -left - a_prev) / f64::from(n + 1);
        a_prev = a_cur;
        a_cur = a_next;
        power *= width;
    }
    (g0 * mass, g0 * moment)
}
