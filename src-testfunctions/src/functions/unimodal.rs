//! Unimodal test functions
//!
//! A single global minimum; these check that a solver converges precisely.

use ndarray::Array1;

/// Sphere function - N-dimensional
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Quadratic bowl - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-5, 5]
pub fn quadratic(x: &Array1<f64>) -> f64 {
    x[0].powi(2) + x[1].powi(2)
}

/// Rosenbrock function - N-dimensional narrow curved valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xnext)| 100.0 * (xnext - xi * xi).powi(2) + (1.0 - xi).powi(2))
        .sum()
}

/// Booth function - 2D plate shaped
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth(x: &Array1<f64>) -> f64 {
    (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rosenbrock_valley() {
        assert_eq!(rosenbrock(&array![1.0, 1.0, 1.0, 1.0]), 0.0);
        assert_eq!(rosenbrock(&array![0.0, 0.0]), 1.0);
        // a single variable has no valley term
        assert_eq!(rosenbrock(&array![3.0]), 0.0);
    }

    #[test]
    fn test_quadratic_ignores_extra_components() {
        assert_eq!(quadratic(&array![3.0, 4.0]), 25.0);
        assert_eq!(sphere(&array![3.0, 4.0, 1.0]), 26.0);
    }
}
