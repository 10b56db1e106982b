#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]

use ndarray::Array2;
use std::collections::HashMap;

pub mod error;
pub mod functions;
pub mod registry;

pub use error::{Result, TestFunctionError};
pub use functions::*;
pub use registry::{FunctionRegistry, GradientFunction, RegisteredFunction, TestFunction};

/// Metadata for a test function including bounds, minima and other properties
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    let baele_meta = |name: &str| FunctionMetadata {
        name: name.to_string(),
        bounds: vec![(-4.5, 4.5); 2],
        global_minima: vec![(vec![3.0, 0.5], 0.0)],
        description: "Beale function, steep valleys along the axes".to_string(),
        multimodal: false,
        dimensions: vec![2],
    };
    metadata.insert("baele".to_string(), baele_meta("baele"));
    metadata.insert("beale".to_string(), baele_meta("beale"));

    metadata.insert(
        "rosenbrock".to_string(),
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            bounds: vec![(-2.048, 2.048); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            description: "Rosenbrock banana function with a narrow curved valley".to_string(),
            multimodal: false,
            dimensions: vec![2],
        },
    );

    log::debug!("loaded metadata for {} test functions", metadata.len());
    metadata
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}

/// Helper function to get bounds as a 2D array for optimization
/// Returns default bounds if function is not found
pub fn get_function_bounds_2d(function_name: &str, default_bounds: (f64, f64)) -> [(f64, f64); 2] {
    match get_function_bounds(function_name) {
        Some(bounds) if bounds.len() >= 2 => [bounds[0], bounds[1]],
        _ => {
            log::warn!(
                "no bounds for '{}', using default {:?}",
                function_name,
                default_bounds
            );
            [default_bounds; 2]
        }
    }
}

/// Helper function to get bounds as a Vec for optimization
/// Returns default bounds if function is not found
pub fn get_function_bounds_vec(function_name: &str, default_bounds: (f64, f64)) -> Vec<(f64, f64)> {
    match get_function_bounds(function_name) {
        Some(bounds) if bounds.len() >= 2 => bounds,
        _ => {
            log::warn!(
                "no bounds for '{}', using default {:?}",
                function_name,
                default_bounds
            );
            vec![default_bounds; 2]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_all_function_minima() {
        let metadata = get_function_metadata();
        let registry = FunctionRegistry::new();

        for (func_name, meta) in metadata.iter() {
            let func = registry
                .get(func_name)
                .unwrap_or_else(|| panic!("{} has metadata but is not registered", func_name));

            for (minimum_location, expected_value) in &meta.global_minima {
                let x = Array1::from_vec(minimum_location.clone());
                let actual_value = func(&x);
                assert_eq!(
                    actual_value, *expected_value,
                    "Function {} failed: at {:?}, expected {:.10}, got {:.10}",
                    func_name, minimum_location, expected_value, actual_value
                );
            }
        }
    }

    #[test]
    fn test_every_registered_function_has_metadata() {
        let metadata = get_function_metadata();
        for name in FunctionRegistry::new().names() {
            let meta = metadata
                .get(&name)
                .unwrap_or_else(|| panic!("{} is registered without metadata", name));
            assert_eq!(meta.name, name);
        }
    }

    #[test]
    fn test_function_metadata_completeness() {
        let metadata = get_function_metadata();

        for (name, meta) in metadata.iter() {
            assert!(!meta.bounds.is_empty(), "Function {} has no bounds", name);
            assert!(!meta.global_minima.is_empty(), "Function {} has no minima", name);
            assert!(
                !meta.description.is_empty(),
                "Function {} has no description",
                name
            );
            assert_eq!(meta.dimensions, vec![meta.bounds.len()]);

            for (lower, upper) in &meta.bounds {
                assert!(
                    lower < upper,
                    "Function {} has invalid bounds: {} >= {}",
                    name,
                    lower,
                    upper
                );
            }

            for (location, _value) in &meta.global_minima {
                assert_eq!(location.len(), meta.bounds.len());
                for (coord, (lower, upper)) in location.iter().zip(&meta.bounds) {
                    assert!(coord >= lower && coord <= upper);
                }
            }
        }
    }

    #[test]
    fn test_bounds_helpers() {
        assert_eq!(
            get_function_bounds("rosenbrock"),
            Some(vec![(-2.048, 2.048); 2])
        );
        assert_eq!(get_function_bounds("sphere"), None);

        assert_eq!(
            get_function_bounds_2d("baele", (-5.0, 5.0)),
            [(-4.5, 4.5), (-4.5, 4.5)]
        );
        assert_eq!(
            get_function_bounds_2d("sphere", (-5.0, 5.0)),
            [(-5.0, 5.0), (-5.0, 5.0)]
        );
        assert_eq!(
            get_function_bounds_vec("sphere", (-1.0, 1.0)),
            vec![(-1.0, 1.0); 2]
        );
    }

    #[test]
    fn test_create_bounds() {
        let bounds = create_bounds(3, -2.0, 2.0);
        assert_eq!(bounds.shape(), &[2, 3]);
        for i in 0..3 {
            assert_eq!(bounds[[0, i]], -2.0);
            assert_eq!(bounds[[1, i]], 2.0);
        }
    }
}
