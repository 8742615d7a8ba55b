// ============================================================================
// Model Interface
// Capabilities a host model type provides so that it can be operated on
// ============================================================================

use crate::domain::{Attribute, FieldSet, OperableResult, Schema};
use crate::numeric::Number;
use crate::registry;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Instance-level contract of an operable model.
///
/// Object safe, so nested relations of different concrete types can be
/// combined recursively through `&dyn Operable`.
pub trait Operable: Any + fmt::Debug + BlankInstance {
    /// Current value of the scalar attribute `name`.
    ///
    /// Return [`Attribute::Undeclared`] for names the model has no attribute for.
    fn attribute(&self, name: &str) -> Attribute;

    /// The singular relation `name` (embedded-one, has-one, belongs-to),
    /// or `None` if there is no such relation or it is empty.
    ///
    /// Hosts overriding this must also override [`Operable::set_relation`].
    /// Its default discards the value, so combined nested objects would be
    /// silently dropped from results.
    fn relation(&self, _name: &str) -> Option<&dyn Operable> {
        None
    }

    /// Assign a combined scalar to the attribute `name`.
    ///
    /// # Errors
    /// Hosts return the conversion error when `value` does not fit the field.
    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()>;

    /// Assign a combined nested object to the relation `name`.
    ///
    /// The object has the concrete type of the operand it was derived from;
    /// use [`downcast`] to recover it. The default discards `value`.
    fn set_relation(&mut self, _name: &str, _value: Box<dyn Operable>) {}

    /// Type name used in errors and logs
    fn model_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Construction of a blank instance of the same concrete type.
///
/// Implemented for every `Default` operable type.
pub trait BlankInstance {
    fn blank(&self) -> Box<dyn Operable>;
}

impl<T: Operable + Default> BlankInstance for T {
    fn blank(&self) -> Box<dyn Operable> {
        Box::new(T::default())
    }
}

/// Recover the concrete type of a nested result handed to
/// [`Operable::set_relation`].
pub fn downcast<T: Operable>(value: Box<dyn Operable>) -> Option<Box<T>> {
    let any: Box<dyn Any> = value;
    any.downcast::<T>().ok()
}

pub(crate) fn type_id_of(instance: &dyn Operable) -> TypeId {
    let any: &dyn Any = instance;
    any.type_id()
}

/// Type-level contract of an operable model: blank construction, schema
/// introspection and field selection.
///
/// ```ignore
/// impl Model for Business {}
///
/// Business::select(["employees", "revenue"]);
/// ```
pub trait Model: Operable + Default {
    /// Declared fields or columns, used by [`Model::select_all`]
    fn schema() -> Schema {
        Schema::Unavailable
    }

    /// Add `names` to the operable fields of this type.
    fn select<I>(names: I) -> Arc<FieldSet>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        registry::select::<Self, I>(names)
    }

    /// Make every introspectable field operable, bookkeeping fields excluded.
    ///
    /// # Errors
    /// `Introspection` if [`Model::schema`] is unavailable.
    fn select_all() -> OperableResult<Arc<FieldSet>> {
        registry::select_all::<Self>()
    }

    /// [`Model::select_all`] minus `names`.
    ///
    /// # Errors
    /// `Introspection` if [`Model::schema`] is unavailable.
    fn select_all_except<I>(names: I) -> OperableResult<Arc<FieldSet>>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        registry::select_all_except::<Self, I>(names)
    }

    /// Currently selected fields, `None` if never configured
    fn selected_fields() -> Option<Arc<FieldSet>> {
        registry::selected_fields::<Self>()
    }
}
