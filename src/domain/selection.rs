// ============================================================================
// Selection Configuration
// Declarative description of how a model type picks its operable fields
// ============================================================================

use super::errors::{OperableError, OperableResult};
use super::field::FieldSet;
use crate::interfaces::Model;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Selection Step
// ============================================================================

/// One field selection step, mirroring the registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Selection {
    /// Add these fields to the current selection
    Fields(Vec<String>),
    /// Every introspectable field, bookkeeping excluded
    All,
    /// Every introspectable field except these
    AllExcept(Vec<String>),
}

// ============================================================================
// Complete Selection Configuration
// ============================================================================

/// Ordered selection steps for one model type.
///
/// Steps replay in order, so `all()` followed by `with_fields(["child"])`
/// selects every declared field plus the `child` relation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionConfig {
    pub steps: Vec<Selection>,
}

impl SelectionConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Builder method: add explicitly named fields
    pub fn with_fields<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.steps
            .push(Selection::Fields(names.into_iter().map(|n| n.to_string()).collect()));
        self
    }

    /// Builder method: select every introspectable field
    pub fn with_all(mut self) -> Self {
        self.steps.push(Selection::All);
        self
    }

    /// Builder method: select every introspectable field except `names`
    pub fn with_all_except<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.steps
            .push(Selection::AllExcept(names.into_iter().map(|n| n.to_string()).collect()));
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.steps.is_empty() {
            return Err("Selection must contain at least one step".to_string());
        }

        for step in &self.steps {
            match step {
                Selection::Fields(names) => {
                    if names.is_empty() {
                        return Err("Explicit field selection cannot be empty".to_string());
                    }
                    if names.iter().any(|n| n.trim().is_empty()) {
                        return Err("Field names cannot be blank".to_string());
                    }
                },
                Selection::AllExcept(names) => {
                    if names.iter().any(|n| n.trim().is_empty()) {
                        return Err("Excluded field names cannot be blank".to_string());
                    }
                },
                Selection::All => {},
            }
        }

        Ok(())
    }

    /// Validate, then replay every step against the registry entry of `T`.
    ///
    /// # Errors
    /// - `InvalidSelection` if validation fails (nothing is registered)
    /// - `Introspection` if an `All`/`AllExcept` step meets a model without schema
    pub fn apply<T: Model>(&self) -> OperableResult<Arc<FieldSet>> {
        self.validate().map_err(OperableError::InvalidSelection)?;

        let mut fields = Arc::new(FieldSet::new());
        for step in &self.steps {
            fields = match step {
                Selection::Fields(names) => T::select(names.iter()),
                Selection::All => T::select_all()?,
                Selection::AllExcept(names) => T::select_all_except(names.iter())?,
            };
        }

        Ok(fields)
    }

    /// Parse a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> OperableResult<Self> {
        serde_json::from_str(json).map_err(|e| OperableError::InvalidSelection(e.to_string()))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SelectionConfig {
    /// Explicit field list
    pub fn fields<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self::new().with_fields(names)
    }

    /// Every introspectable field
    pub fn all() -> Self {
        Self::new().with_all()
    }

    /// Every introspectable field except `names`
    pub fn all_except<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self::new().with_all_except(names)
    }
}
