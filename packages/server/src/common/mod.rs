// Common types and utilities shared across the application

pub mod errors;
pub mod validation;

pub use errors::*;
pub use validation::*;
