// ============================================================================
// Operable Library
// Field-selected arithmetic and equality for persistence-layer models
// ============================================================================

//! # Operable
//!
//! Lets model types owned by a persistence layer (document store, relational
//! mapper, or plain in-memory records) be added, subtracted, scaled and
//! compared on an explicitly selected subset of their fields.
//!
//! ## Features
//!
//! - **Per-type field registry** populated explicitly or by schema introspection
//! - **Tagged value extraction**: scalar, absent, or nested operable object
//! - **Field-wise arithmetic** with native numeric promotion (integer, float, decimal)
//! - **Recursive composites**: singular relations combine through their own selection
//! - **Structural equality** that ignores representation (`35 == 35.0`)
//!
//! ## Example
//!
//! ```rust
//! use operable::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Business {
//!     employees: Option<i64>,
//!     revenue: Option<f64>,
//!     taxes: Option<f64>,
//! }
//!
//! impl Operable for Business {
//!     fn attribute(&self, name: &str) -> Attribute {
//!         match name {
//!             "employees" => self.employees.map(Number::from).into(),
//!             "revenue" => self.revenue.map(Number::from).into(),
//!             "taxes" => self.taxes.map(Number::from).into(),
//!             _ => Attribute::Undeclared,
//!         }
//!     }
//!
//!     fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
//!         match name {
//!             "employees" => self.employees = Some(value.to_i64()?),
//!             "revenue" => self.revenue = Some(value.to_f64()),
//!             "taxes" => self.taxes = Some(value.to_f64()),
//!             _ => {},
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl Model for Business {}
//!
//! // Only these two fields take part in operations
//! Business::select(["employees", "revenue"]);
//!
//! let a = Business { employees: Some(5), revenue: Some(500_000.0), taxes: Some(150_000.11) };
//! let b = Business { employees: Some(30), revenue: Some(2_000_000.0), taxes: Some(450_000.22) };
//!
//! let total = a.add(&b)?;
//! assert_eq!(total.employees, Some(35));
//! assert_eq!(total.revenue, Some(2_500_000.0));
//! assert_eq!(total.taxes, None);
//!
//! let average = total.divide(2)?;
//! assert_eq!(average.employees, Some(17));
//! assert!(a.matches(&a)?);
//! # Ok::<(), operable::domain::OperableError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod registry;
pub mod utils;

#[cfg(test)]
mod fixtures;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Attribute, Field, FieldKind, FieldSet, OperableError, OperableResult, OperableValue,
        OperableValues, Schema, Selection, SelectionConfig,
    };
    pub use crate::engine::{Arithmetic, CombineOp, Operand, ScaleOp};
    pub use crate::interfaces::{downcast, Model, Operable};
    pub use crate::numeric::Number;
}
