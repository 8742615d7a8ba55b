// ============================================================================
// Field Registry
// Which fields of each model type take part in arithmetic and equality
// ============================================================================
//
// Entries are keyed by TypeId and written once, normally while the model
// type is being set up. Reads take a shared lock; concurrent writers are
// last-wins.

use crate::domain::{FieldSet, OperableError, OperableResult};
use crate::interfaces::{type_id_of, Model, Operable};
use parking_lot::RwLock;
use std::any::{type_name, TypeId};
use std::collections::BTreeMap;
use std::sync::Arc;

struct Registration {
    model: &'static str,
    fields: Arc<FieldSet>,
}

static REGISTRY: RwLock<BTreeMap<TypeId, Registration>> =
    parking_lot::const_rwlock(BTreeMap::new());

// ============================================================================
// Selection
// ============================================================================

/// Add `names` to the operable fields of `T`.
///
/// Accumulates across calls: the result is the sorted, deduplicated union of
/// the previous selection (empty if none) and `names`.
pub fn select<T: Model, I>(names: I) -> Arc<FieldSet>
where
    I: IntoIterator,
    I::Item: ToString,
{
    let mut registry = REGISTRY.write();
    let fields = match registry.get(&TypeId::of::<T>()) {
        Some(existing) => existing.fields.union(names),
        None => FieldSet::new().union(names),
    };
    store::<T>(&mut registry, fields)
}

/// Replace the operable fields of `T` with every field its schema exposes,
/// minus bookkeeping fields.
///
/// # Errors
/// `Introspection` when `T::schema()` offers neither declared fields nor columns.
pub fn select_all<T: Model>() -> OperableResult<Arc<FieldSet>> {
    let fields = resolve_all::<T>()?;
    Ok(store::<T>(&mut REGISTRY.write(), fields))
}

/// Replace the operable fields of `T` with [`select_all`] minus `names`.
///
/// # Errors
/// `Introspection` when `T::schema()` offers neither declared fields nor columns.
pub fn select_all_except<T: Model, I>(names: I) -> OperableResult<Arc<FieldSet>>
where
    I: IntoIterator,
    I::Item: ToString,
{
    let fields = resolve_all::<T>()?.without(names);
    Ok(store::<T>(&mut REGISTRY.write(), fields))
}

// ============================================================================
// Lookup
// ============================================================================

/// Operable fields of `T`, `None` if never configured
pub fn selected_fields<T: Model>() -> Option<Arc<FieldSet>> {
    REGISTRY
        .read()
        .get(&TypeId::of::<T>())
        .map(|r| Arc::clone(&r.fields))
}

/// Operable fields of the concrete type behind `instance`.
///
/// # Errors
/// `NotConfigured` if that type was never configured.
pub(crate) fn fields_for(instance: &dyn Operable) -> OperableResult<Arc<FieldSet>> {
    REGISTRY
        .read()
        .get(&type_id_of(instance))
        .map(|r| Arc::clone(&r.fields))
        .ok_or(OperableError::NotConfigured {
            model: instance.model_name(),
        })
}

/// Forget the selection of `T`. Returns true if there was one.
pub fn reset<T: Model>() -> bool {
    let removed = REGISTRY.write().remove(&TypeId::of::<T>());
    if let Some(registration) = &removed {
        tracing::debug!("Operable fields reset for {}", registration.model);
    }
    removed.is_some()
}

/// Number of model types with a selection
pub fn registered_types() -> usize {
    REGISTRY.read().len()
}

// ============================================================================
// Internals
// ============================================================================

fn resolve_all<T: Model>() -> OperableResult<FieldSet> {
    T::schema()
        .selectable_fields()
        .ok_or(OperableError::Introspection {
            model: type_name::<T>(),
        })
}

fn store<T: Model>(
    registry: &mut BTreeMap<TypeId, Registration>,
    fields: FieldSet,
) -> Arc<FieldSet> {
    let model = type_name::<T>();
    let fields = Arc::new(fields);

    if fields.is_empty() {
        tracing::warn!("Operable selection for {} names no fields", model);
    } else {
        tracing::debug!("Operable fields for {}: {}", model, fields);
    }

    registry.insert(
        TypeId::of::<T>(),
        Registration {
            model,
            fields: Arc::clone(&fields),
        },
    );
    fields
}
