// ============================================================================
// Interfaces Module
// Contracts host model types implement
// ============================================================================

mod model;

pub(crate) use model::type_id_of;
pub use model::{downcast, BlankInstance, Model, Operable};
