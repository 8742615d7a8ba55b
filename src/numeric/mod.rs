// ============================================================================
// Numeric Module
// Scalar values carried by operable fields
// ============================================================================
//
// This module provides:
// - Number: integer / float / decimal scalar with native-type promotion
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - All arithmetic returns Result (no panics)
// - Integer stays integer unless combined with a float or decimal
// - Division by zero is an error for every representation

mod errors;
mod number;

pub use errors::{NumericError, NumericResult};
pub use number::Number;
