// ============================================================================
// Numeric Errors
// Error types for scalar field arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while combining or scaling scalar field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the maximum of the operand type
    Overflow,
    /// Result below the minimum of the operand type
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Value cannot be represented in the requested type (NaN, infinity)
    NotRepresentable,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NotRepresentable => {
                write!(f, "value cannot be represented in the target type")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Number;

    #[test]
    fn test_display_names_the_failure() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert!(NumericError::Underflow.to_string().contains("below minimum"));
        assert!(NumericError::NotRepresentable.to_string().contains("target type"));
    }

    #[test]
    fn test_raised_by_number_arithmetic() {
        assert_eq!(
            Number::Integer(i64::MAX).checked_add(Number::Integer(1)),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Number::Float(1.0).checked_div(Number::Integer(0)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(Number::Float(f64::NAN).to_i64(), Err(NumericError::NotRepresentable));
    }

    #[test]
    fn test_usable_as_error_object() {
        let boxed: Box<dyn std::error::Error> = Box::new(NumericError::Overflow);
        assert_eq!(
            boxed.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
    }
}
