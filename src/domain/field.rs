// ============================================================================
// Field Metadata
// Declared fields, schema introspection and the operable field set
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structural fields that auto-selection never picks up: identifiers,
/// the type discriminator, timestamps and the version counter.
pub const BOOKKEEPING_FIELDS: [&str; 6] = ["_id", "_type", "created_at", "id", "updated_at", "version"];

/// Returns true if `name` is one of the [`BOOKKEEPING_FIELDS`].
pub fn is_bookkeeping(name: &str) -> bool {
    BOOKKEEPING_FIELDS.contains(&name)
}

// ============================================================================
// Field Kinds
// ============================================================================

/// Declared storage type of a field or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldKind {
    Integer,
    Float,
    Decimal,
    String,
    Boolean,
    Date,
    DateTime,
    /// Anything the host cannot classify (binary, json, arrays, ...)
    Other,
}

impl FieldKind {
    /// Integer, floating-point and decimal kinds
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::Float | FieldKind::Decimal)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Decimal => "decimal",
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A named, typed field as declared by the host model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

// ============================================================================
// Schema Introspection
// ============================================================================

/// What a model type can tell about its own fields.
///
/// Document-style models declare their fields directly and every declared
/// field is eligible for auto-selection. Relational models describe their
/// table columns, of which only numeric ones are eligible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Schema {
    /// Declared document fields (name → kind)
    Declared(Vec<Field>),
    /// Table columns (name → column type)
    Columns(Vec<Field>),
    /// No introspection; auto-selection is impossible
    #[default]
    Unavailable,
}

impl Schema {
    /// Field names eligible for auto-selection, bookkeeping excluded.
    ///
    /// Returns `None` when the schema offers no introspection.
    pub fn selectable_fields(&self) -> Option<FieldSet> {
        let fields = match self {
            Schema::Declared(fields) => fields.iter().collect::<Vec<_>>(),
            Schema::Columns(columns) => columns.iter().filter(|c| c.kind.is_numeric()).collect(),
            Schema::Unavailable => return None,
        };

        Some(
            fields
                .into_iter()
                .map(|f| f.name.as_str())
                .filter(|name| !is_bookkeeping(name))
                .collect(),
        )
    }
}

// ============================================================================
// Field Set
// ============================================================================

/// Ordered, deduplicated set of field names taking part in operations.
///
/// Iteration order is lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSet(BTreeSet<String>);

impl FieldSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Names in order, for assertions and display
    pub fn to_vec(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// This set plus `names`
    pub fn union<I>(&self, names: I) -> FieldSet
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let mut set = self.0.clone();
        set.extend(names.into_iter().map(|n| n.to_string()));
        Self(set)
    }

    /// This set minus `names`
    pub fn without<I>(&self, names: I) -> FieldSet
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let excluded: BTreeSet<String> = names.into_iter().map(|n| n.to_string()).collect();
        Self(self.0.difference(&excluded).cloned().collect())
    }
}

impl<S: ToString> FromIterator<S> for FieldSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(|s| s.to_string()).collect())
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_vec().join(", "))
    }
}
