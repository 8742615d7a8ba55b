// ============================================================================
// Domain Models Module
// Field metadata, selection configuration, extracted values and errors
// ============================================================================

pub mod errors;
pub mod field;
pub mod selection;
pub mod value;

pub use errors::{OperableError, OperableResult};
pub use field::{is_bookkeeping, Field, FieldKind, FieldSet, Schema, BOOKKEEPING_FIELDS};
pub use selection::{Selection, SelectionConfig};
pub use value::{Attribute, OperableValue, OperableValues};
