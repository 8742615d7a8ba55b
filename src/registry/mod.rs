// ============================================================================
// Registry Module
// Process-wide operable field selection, one entry per model type
// ============================================================================

mod field_registry;

pub(crate) use field_registry::fields_for;
pub use field_registry::{
    registered_types, reset, select, select_all, select_all_except, selected_fields,
};
