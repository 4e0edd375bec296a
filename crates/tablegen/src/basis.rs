//! Local-basis polynomial expansion.
//!
//! Fits are solved in the local coordinate `t = (x - left) / width`, where
//! the linear systems stay well conditioned, and only then expanded to
//! monomial coefficients in x. Solving directly in the monomial basis would
//! amplify data roundoff by the condition number of a near-collinear power
//! basis on a segment a hundredth of a unit wide.

use crate::dd::Dd;

/// Expands `sum(local[k] * t^k)` with `t = (x - left) / width` into
/// ascending monomial coefficients in x.
///
/// On the table grids both `1 / width` and `-left / width` are small exact
/// integers, so each expansion multiplier is a single rounding away from
/// exact.
pub(crate) fn expand(local: &[Dd], left: f64, width: f64) -> Vec<Dd> {
    let alpha = 1.0 / width;
    let beta = -left / width;
    let mut mono = vec![Dd::ZERO; local.len()];
    for (k, &coef) in local.iter().enumerate() {
        for (j, slot) in mono.iter_mut().enumerate().take(k + 1) {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                reason = "polynomial degrees are single digits"
            )]
            let mult = binomial(k, j) * alpha.powi(j as i32) * beta.powi((k - j) as i32);
            *slot = *slot + coef * mult;
        }
    }
    mono
}

/// Binomial coefficient as f64; exact for the degrees in play.
fn binomial(n: usize, k: usize) -> f64 {
    (1..=k).fold(1.0, |acc, i| acc * ((n - k + i) as f64) / (i as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(mono: &[Dd], x: f64) -> f64 {
        mono.iter().rev().fold(0.0, |acc, c| acc * x + c.to_f64())
    }

    #[test]
    fn binomials() {
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 2), 10.0);
        assert_eq!(binomial(5, 5), 1.0);
    }

    #[test]
    fn expansion_reproduces_the_local_polynomial() {
        let local =
            [Dd::from_f64(1.0), Dd::from_f64(-2.0), Dd::from_f64(0.5), Dd::from_f64(3.0)];
        let (left, width) = (2.5, 1.0 / 64.0);
        let mono = expand(&local, left, width);
        for step in 0..=8 {
            let t = f64::from(step) / 8.0;
            let x = width.mul_add(t, left);
            let direct = local.iter().rev().fold(0.0, |acc, c| acc * t + c.to_f64());
            assert!((eval(&mono, x) - direct).abs() < 1e-9, "t={t}");
        }
    }
}
