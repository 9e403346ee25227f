//! Optimization test functions library
//!
//! Benchmark objectives with known global minima, used to validate the
//! differential evolution solver. Functions are organized by category:
//!
//! - **Unimodal**: single global optimum (sphere, quadratic, rosenbrock, booth)
//! - **Multimodal**: many local minima (ackley, rastrigin, mccormick)
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use optde_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let f = get_function("booth").unwrap();
//! assert_eq!(f(&Array1::from_vec(vec![1.0, 3.0])), 0.0);
//! let bounds = get_function_bounds_vec("booth", (-5.0, 5.0));
//! assert_eq!(bounds, vec![(-10.0, 10.0); 2]);
//! ```

use ndarray::Array1;
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Objective signature shared by every benchmark
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata for a test function: bounds, known minima and other properties
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max) at the default dimension
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
    /// Whether the function accepts any dimension
    pub scalable: bool,
}

impl FunctionMetadata {
    /// Bounds repeated for an `n`-dimensional instance of a scalable function
    pub fn bounds_for(&self, n: usize) -> Vec<(f64, f64)> {
        if self.scalable {
            vec![self.bounds[0]; n]
        } else {
            self.bounds.clone()
        }
    }
}

fn entry(
    name: &str,
    bounds: Vec<(f64, f64)>,
    global_minima: Vec<(Vec<f64>, f64)>,
    description: &str,
    multimodal: bool,
    dimensions: Vec<usize>,
    scalable: bool,
) -> (String, FunctionMetadata) {
    (
        name.to_string(),
        FunctionMetadata {
            name: name.to_string(),
            bounds,
            global_minima,
            description: description.to_string(),
            multimodal,
            dimensions,
            scalable,
        },
    )
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    HashMap::from([
        entry(
            "sphere",
            vec![(-5.12, 5.12); 2],
            vec![(vec![0.0, 0.0], 0.0)],
            "N-dimensional unimodal bowl",
            false,
            vec![2, 5, 10],
            true,
        ),
        entry(
            "quadratic",
            vec![(-5.0, 5.0); 2],
            vec![(vec![0.0, 0.0], 0.0)],
            "2D unimodal bowl",
            false,
            vec![2],
            false,
        ),
        entry(
            "rosenbrock",
            vec![(-2.048, 2.048); 2],
            vec![(vec![1.0, 1.0], 0.0)],
            "N-dimensional unimodal curved valley",
            false,
            vec![2, 4, 10],
            true,
        ),
        entry(
            "booth",
            vec![(-10.0, 10.0); 2],
            vec![(vec![1.0, 3.0], 0.0)],
            "2D unimodal plate",
            false,
            vec![2],
            false,
        ),
        entry(
            "ackley",
            vec![(-32.768, 32.768); 2],
            vec![(vec![0.0, 0.0], 0.0)],
            "N-dimensional multimodal function",
            true,
            vec![2, 5, 10],
            true,
        ),
        entry(
            "rastrigin",
            vec![(-5.12, 5.12); 2],
            vec![(vec![0.0, 0.0], 0.0)],
            "N-dimensional highly multimodal function",
            true,
            vec![2, 5, 10],
            true,
        ),
        entry(
            "mccormick",
            vec![(-1.5, 4.0), (-3.0, 4.0)],
            vec![(vec![-0.54719, -1.54719], -1.913222954981037)],
            "2D multimodal function",
            true,
            vec![2],
            false,
        ),
    ])
}

/// Look up a test function by name
pub fn get_function(function_name: &str) -> Option<TestFunction> {
    let f: TestFunction = match function_name {
        "sphere" => sphere,
        "quadratic" => quadratic,
        "rosenbrock" => rosenbrock,
        "booth" => booth,
        "ackley" => ackley,
        "rastrigin" => rastrigin,
        "mccormick" => mccormick,
        _ => return None,
    };
    Some(f)
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}

/// Helper function to get bounds as a Vec for optimization
/// Returns two copies of `default_bounds` if function is not found
pub fn get_function_bounds_vec(function_name: &str, default_bounds: (f64, f64)) -> Vec<(f64, f64)> {
    get_function_bounds(function_name).unwrap_or_else(|| vec![default_bounds; 2])
}
