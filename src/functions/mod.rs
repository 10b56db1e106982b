//! Benchmark objective functions and their analytic gradients

pub mod baele;
pub mod rosenbrock;

pub use baele::{baele, baele as beale, baele_gradient, baele_gradient as beale_gradient};
pub use rosenbrock::{rosenbrock, rosenbrock_gradient};
