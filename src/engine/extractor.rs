// ============================================================================
// Operable Value Extractor
// Snapshot of the selected fields of one instance
// ============================================================================

use crate::domain::{Attribute, OperableResult, OperableValue, OperableValues};
use crate::interfaces::Operable;
use crate::registry;

/// Selected field name → value mapping of `instance`.
///
/// Declared attributes map to `Scalar` or, when unset, `Absent`. A present
/// singular relation maps to `Composite` and takes precedence over an
/// attribute of the same name; empty relations and names the instance does
/// not know are left out.
///
/// # Errors
/// `NotConfigured` if the concrete type of `instance` has no selection.
pub fn operable_values(instance: &dyn Operable) -> OperableResult<OperableValues<'_>> {
    let fields = registry::fields_for(instance)?;
    let mut values = OperableValues::new();

    for name in fields.iter() {
        match instance.attribute(name) {
            Attribute::Undeclared => {},
            Attribute::Null => values.insert(name, OperableValue::Absent),
            Attribute::Value(n) => values.insert(name, OperableValue::Scalar(n)),
        }

        if let Some(related) = instance.relation(name) {
            values.insert(name, OperableValue::Composite(related));
        }
    }

    Ok(values)
}
