//! Truncated eigenfunction expansion of the Dirichlet Green's function on
//! the unit square.
//!
//! $$
//! G_n(x, y; x_0, y_0) = \sum_{i=1}^{n} \sum_{j=1}^{n}
//! \frac{4}{\lambda_{ij}} \sin(i\pi x_0)\sin(i\pi x)\sin(j\pi y_0)\sin(j\pi y),
//! \qquad \lambda_{ij} = -\left((i\pi)^2 + (j\pi)^2\right)
//! $$
//!
//! Every partial sum is finite and smooth. As `n` grows the value near the
//! source follows the logarithmic singularity of the exact Green's function,
//! so large magnitudes at `(x0, y0)` are expected, not an error.

use std::f64::consts::PI;

use ndarray::Zip;

use super::grid::Grid;
use super::types::Field;

/// `sin(pi * t)` with exact zeros at integer `t`.
///
/// Keeps the Dirichlet boundary (`x = 0`, `x = 1`) and boundary sources
/// exactly zero instead of leaving `sin(k * PI)` rounding residue.
#[must_use]
pub fn sin_pi(t: f64) -> f64 {
    let reduced = t.rem_euclid(2.0);
    if reduced == 0.0 || reduced == 1.0 {
        return 0.0;
    }
    (PI * reduced).sin()
}

/// Laplacian eigenvalue of the `(i, j)` sine mode.
#[must_use]
pub fn mode_eigenvalue(i: u32, j: u32) -> f64 {
    let alpha = f64::from(i) * PI;
    let beta = f64::from(j) * PI;
    -(alpha * alpha + beta * beta)
}

/// `sin(k pi a) * sin(k pi b)`.
///
/// Both coordinates are reduced modulo 2 first: the product has period 2 in
/// each, and `k * a` must not overflow for huge but finite inputs.
fn mode_factor(k: u32, a: f64, b: f64) -> f64 {
    let k = f64::from(k);
    sin_pi(k * a.rem_euclid(2.0)) * sin_pi(k * b.rem_euclid(2.0))
}

/// Contribution of the `(i, j)` mode at observation point `(x, y)`.
#[must_use]
pub fn mode_term(i: u32, j: u32, x: f64, y: f64, x0: f64, y0: f64) -> f64 {
    let coefficient = 4.0 / mode_eigenvalue(i, j);
    coefficient * mode_factor(i, x0, x) * mode_factor(j, y0, y)
}

/// Partial sum of order `n` at one observation point.
///
/// `n = 0` is the empty sum.
#[must_use]
pub fn evaluate_point(x: f64, y: f64, x0: f64, y0: f64, n: u32) -> f64 {
    let x_factors: Vec<f64> = (1..=n).map(|i| mode_factor(i, x0, x)).collect();
    let y_factors: Vec<f64> = (1..=n).map(|j| mode_factor(j, y0, y)).collect();

    let mut sum = 0.0;
    for (i, x_factor) in (1..=n).zip(&x_factors) {
        for (j, y_factor) in (1..=n).zip(&y_factors) {
            sum += 4.0 / mode_eigenvalue(i, j) * x_factor * y_factor;
        }
    }
    sum
}

/// Evaluates the order-`n` partial sum at every node of `grid`.
///
/// Pure: each node is summed independently, `O(n^2)` work per node.
#[must_use]
pub fn evaluate(grid: &Grid, x0: f64, y0: f64, n: u32) -> Field {
    Zip::from(grid.x())
        .and(grid.y())
        .map_collect(|&x, &y| evaluate_point(x, y, x0, y0, n))
}

/// Terms gained when the order grows from `n` to `n + 1`.
///
/// These are the modes where at least one index equals `n + 1`, so
/// `evaluate_point(.., n + 1) - evaluate_point(.., n)` equals this sum.
/// Returns `None` when `n + 1` does not fit in `u32`.
#[must_use]
pub fn added_terms(x: f64, y: f64, x0: f64, y0: f64, n: u32) -> Option<f64> {
    let next = n.checked_add(1)?;
    let mut sum = mode_term(next, next, x, y, x0, y0);
    for k in 1..=n {
        sum += mode_term(next, k, x, y, x0, y0);
        sum += mode_term(k, next, x, y, x0, y0);
    }
    Some(sum)
}
