// ============================================================================
// Operable Errors
// Configuration and arithmetic failures surfaced to callers
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised by field selection and by model arithmetic.
///
/// Messages are fixed; the offending model type is carried for debugging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperableError {
    /// The model type has never had its operable fields selected
    NotConfigured { model: &'static str },
    /// Auto-selection on a model type without field or column introspection
    Introspection { model: &'static str },
    /// A selection config that cannot be applied
    InvalidSelection(String),
    /// Scalar arithmetic failed (division by zero, overflow)
    Numeric(NumericError),
}

impl OperableError {
    /// Message of [`OperableError::NotConfigured`]
    pub const NOT_CONFIGURED_MESSAGE: &'static str =
        "no operable fields configured: select one or more fields in the model definition";

    /// Message of [`OperableError::Introspection`]
    pub const INTROSPECTION_MESSAGE: &'static str = "Unable to list all fields for this model";

    /// True for failures caused by model setup rather than by values
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            OperableError::NotConfigured { .. }
                | OperableError::Introspection { .. }
                | OperableError::InvalidSelection(_)
        )
    }
}

impl fmt::Display for OperableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperableError::NotConfigured { .. } => f.write_str(Self::NOT_CONFIGURED_MESSAGE),
            OperableError::Introspection { .. } => f.write_str(Self::INTROSPECTION_MESSAGE),
            OperableError::InvalidSelection(reason) => write!(f, "invalid selection: {}", reason),
            OperableError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for OperableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OperableError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for OperableError {
    fn from(err: NumericError) -> Self {
        OperableError::Numeric(err)
    }
}

/// Result type alias for selection and model arithmetic
pub type OperableResult<T> = Result<T, OperableError>;
