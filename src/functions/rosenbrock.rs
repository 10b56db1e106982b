//! Rosenbrock test function

use ndarray::{Array1, array};

/// Rosenbrock function - 2D
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (1.0 - x1).powi(2) + 100.0 * (x2 - x1.powi(2)).powi(2)
}

/// Analytic gradient of [`rosenbrock`]
pub fn rosenbrock_gradient(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    array![
        -2.0 * (1.0 - x1) - 400.0 * x1 * (x2 - x1.powi(2)),
        200.0 * (x2 - x1.powi(2)),
    ]
}
