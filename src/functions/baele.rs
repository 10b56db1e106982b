//! Baele test function

use ndarray::{Array1, array};

/// Baele function - 2D
/// Global minimum: f(x) = 0 at x = (3, 0.5)
/// Bounds: x_i in [-4.5, 4.5]
pub fn baele(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (1.5 - x1 + x1 * x2).powi(2)
        + (2.25 - x1 + x1 * x2.powi(2)).powi(2)
        + (2.625 - x1 + x1 * x2.powi(3)).powi(2)
}

/// Analytic gradient of [`baele`]
pub fn baele_gradient(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    let t1 = 1.5 - x1 + x1 * x2;
    let t2 = 2.25 - x1 + x1 * x2.powi(2);
    let t3 = 2.625 - x1 + x1 * x2.powi(3);
    array![
        2.0 * t1 * (x2 - 1.0)
            + 2.0 * t2 * (x2.powi(2) - 1.0)
            + 2.0 * t3 * (x2.powi(3) - 1.0),
        2.0 * t1 * x1 + 2.0 * t2 * (2.0 * x1 * x2) + 2.0 * t3 * (3.0 * x1 * x2.powi(2)),
    ]
}
