//! Function registry mapping names to objective and gradient pointers

use crate::error::{Result, TestFunctionError};
use crate::functions::{baele, baele_gradient, rosenbrock, rosenbrock_gradient};
use ndarray::Array1;
use std::collections::HashMap;

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Analytic gradient type definition
pub type GradientFunction = fn(&Array1<f64>) -> Array1<f64>;

/// A registered function together with its gradient and input dimension.
#[derive(Clone, Copy, Debug)]
pub struct RegisteredFunction {
    /// Objective function.
    pub function: TestFunction,
    /// Analytic gradient of `function`.
    pub gradient: GradientFunction,
    /// Number of coordinates the function reads.
    pub dimension: usize,
}

/// Function registry mapping names to actual function pointers.
pub struct FunctionRegistry {
    functions: HashMap<String, RegisteredFunction>,
}

impl FunctionRegistry {
    /// Creates a new registry with all available test functions.
    pub fn new() -> Self {
        let mut functions = HashMap::new();

        let baele_entry = RegisteredFunction {
            function: baele as TestFunction,
            gradient: baele_gradient as GradientFunction,
            dimension: 2,
        };
        functions.insert("baele".to_string(), baele_entry);
        // conventional spelling
        functions.insert("beale".to_string(), baele_entry);

        functions.insert(
            "rosenbrock".to_string(),
            RegisteredFunction {
                function: rosenbrock as TestFunction,
                gradient: rosenbrock_gradient as GradientFunction,
                dimension: 2,
            },
        );

        log::debug!("registered {} test functions", functions.len());
        Self { functions }
    }

    /// Returns the registered entry for `name`.
    pub fn entry(&self, name: &str) -> Option<&RegisteredFunction> {
        self.functions.get(name)
    }

    /// Returns the objective function registered under `name`.
    pub fn get(&self, name: &str) -> Option<TestFunction> {
        self.functions.get(name).map(|entry| entry.function)
    }

    /// Returns the gradient registered under `name`.
    pub fn gradient(&self, name: &str) -> Option<GradientFunction> {
        self.functions.get(name).map(|entry| entry.gradient)
    }

    /// Whether a function is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Evaluates `name` at `x` after checking that `x` has the right length.
    ///
    /// Non-finite results are returned unchanged.
    pub fn evaluate(&self, name: &str, x: &Array1<f64>) -> Result<f64> {
        let entry = self.checked_entry(name, x)?;
        Ok((entry.function)(x))
    }

    /// Evaluates the gradient of `name` at `x` after the same checks as
    /// [`FunctionRegistry::evaluate`].
    pub fn evaluate_gradient(&self, name: &str, x: &Array1<f64>) -> Result<Array1<f64>> {
        let entry = self.checked_entry(name, x)?;
        Ok((entry.gradient)(x))
    }

    fn checked_entry(&self, name: &str, x: &Array1<f64>) -> Result<&RegisteredFunction> {
        let entry = self
            .functions
            .get(name)
            .ok_or_else(|| TestFunctionError::UnknownFunction {
                name: name.to_string(),
            })?;
        if x.len() != entry.dimension {
            return Err(TestFunctionError::DimensionMismatch {
                name: name.to_string(),
                expected: entry.dimension,
                got: x.len(),
            });
        }
        Ok(entry)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_registry_names() {
        let registry = FunctionRegistry::new();
        assert_eq!(registry.names(), vec!["baele", "beale", "rosenbrock"]);
        assert!(registry.contains("rosenbrock"));
        assert!(!registry.contains("sphere"));

        let entry = registry.entry("baele").expect("baele should be registered");
        assert_eq!(entry.dimension, 2);
    }

    #[test]
    fn test_registry_lookup_matches_direct_call() {
        let registry = FunctionRegistry::default();
        let x = array![0.7, -1.3];

        let f = registry.get("baele").expect("baele should be registered");
        assert_eq!(f(&x).to_bits(), baele(&x).to_bits());

        let g = registry
            .gradient("rosenbrock")
            .expect("rosenbrock gradient should be registered");
        assert_eq!(g(&x), rosenbrock_gradient(&x));
    }

    #[test]
    fn test_beale_alias() {
        let registry = FunctionRegistry::new();
        let x = array![1.0, 2.0];
        assert_eq!(
            registry.evaluate("beale", &x).unwrap(),
            registry.evaluate("baele", &x).unwrap()
        );
    }

    #[test]
    fn test_evaluate_unknown_function() {
        let registry = FunctionRegistry::new();
        let err = registry.evaluate("ackley", &array![0.0, 0.0]).unwrap_err();
        assert!(err.is_lookup_error());
        assert!(registry.gradient("ackley").is_none());
    }

    #[test]
    fn test_evaluate_dimension_mismatch() {
        let registry = FunctionRegistry::new();

        let err = registry
            .evaluate("rosenbrock", &array![1.0, 1.0, 1.0])
            .unwrap_err();
        assert_eq!(
            err,
            TestFunctionError::DimensionMismatch {
                name: "rosenbrock".to_string(),
                expected: 2,
                got: 3,
            }
        );

        let err = registry
            .evaluate_gradient("baele", &array![3.0])
            .unwrap_err();
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_evaluate_passes_through_non_finite() {
        let registry = FunctionRegistry::new();
        let value = registry
            .evaluate("rosenbrock", &array![f64::NAN, 1.0])
            .unwrap();
        assert!(value.is_nan());
    }
}
