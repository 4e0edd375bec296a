//! Gauss–Legendre quadrature.

use std::f64::consts::PI;

/// A fixed-order Gauss–Legendre rule on `[-1, 1]`.
///
/// Nodes and weights are constructed by Newton iteration on the Legendre
/// three-term recurrence rather than hard-coded, so any order is available.
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    /// Abscissas on `[-1, 1]`, ascending.
    nodes: Vec<f64>,
    /// Weight per abscissa.
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Builds the rule of the given order.
    ///
    /// # Panics
    /// Panics for orders below 2.
    #[must_use]
    pub fn new(order: usize) -> Self {
        assert!(order >= 2, "a quadrature rule needs at least two nodes");

        let mut nodes = vec![0.0; order];
        let mut weights = vec![0.0; order];
        let n = order;

        for i in 0..n.div_ceil(2) {
            // Chebyshev initial guess for the i-th positive root.
            let mut z = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
            let mut derivative = 0.0;
            for _ in 0..100 {
                let (p_n, p_prev) = legendre_pair(n, z);
                derivative = n as f64 * (z * p_n - p_prev) / (z * z - 1.0);
                let step = p_n / derivative;
                z -= step;
                if step.abs() < 1e-15 {
                    break;
                }
            }
            let weight = 2.0 / ((1.0 - z * z) * derivative * derivative);
            nodes[i] = -z;
            nodes[n - 1 - i] = z;
            weights[i] = weight;
            weights[n - 1 - i] = weight;
        }

        Self { nodes, weights }
    }

    /// Integrates `f` over `[a, b]` with a single application of the rule.
    #[must_use]
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F, a: f64, b: f64) -> f64 {
        let mid = 0.5 * (a + b);
        let half = 0.5 * (b - a);
        let sum: f64 = self
            .nodes
            .iter()
            .zip(&self.weights)
            .map(|(&node, &weight)| weight * f(mid + half * node))
            .sum();
        sum * half
    }

    /// Integrates `f` over `[a, b]` in steps no wider than `max_step`,
    /// compensating the running sum.
    #[must_use]
    pub fn composite<F: Fn(f64) -> f64>(&self, f: F, a: f64, b: f64, max_step: f64) -> f64 {
        if a == b {
            return 0.0;
        }

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss,
            reason = "piece counts are small positive integers"
        )]
        let pieces = (((b - a) / max_step).ceil()).max(1.0) as usize;
        let step = (b - a) / pieces as f64;

        let mut sum = Compensated::default();
        for piece in 0..pieces {
            let lo = (piece as f64).mul_add(step, a);
            let hi = if piece + 1 == pieces { b } else { ((piece + 1) as f64).mul_add(step, a) };
            sum.add(self.integrate(&f, lo, hi));
        }
        sum.total()
    }
}

/// `P_n(z)` and `P_{n-1}(z)` by the three-term recurrence.
fn legendre_pair(n: usize, z: f64) -> (f64, f64) {
    let mut current = 1.0;
    let mut previous = 0.0;

    for j in 0..n {
        let j = j as f64;
        let next = ((2.0 * j + 1.0) * z * current - j * previous) / (j + 1.0);
        previous = current;
        current = next;
    }
    (current, previous)
}

/// Neumaier-compensated running sum.
#[derive(Debug, Default, Clone, Copy)]
pub struct Compensated {
    /// Running sum.
    sum: f64,
    /// Accumulated low-order error.
    carry: f64,
}

impl Compensated {
    /// Adds one term.
    pub fn add(&mut self, term: f64) {
        let new_sum = self.sum + term;
        if self.sum.abs() >= term.abs() {
            self.carry += (self.sum - new_sum) + term;
        } else {
            self.carry += (term - new_sum) + self.sum;
        }
        self.sum = new_sum;
    }

    /// The compensated total.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.sum + self.carry
    }
}
