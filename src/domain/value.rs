// ============================================================================
// Operable Values
// Tagged per-field snapshot taken by the extractor
// ============================================================================

use crate::interfaces::Operable;
use crate::numeric::Number;
use std::fmt;

/// What a model reports when asked for one of its attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attribute {
    /// The model has no such attribute
    Undeclared,
    /// Declared but unset
    Null,
    Value(Number),
}

impl Attribute {
    /// The value, treating undeclared and null attributes as zero
    #[inline]
    pub fn or_zero(self) -> Number {
        match self {
            Attribute::Value(n) => n,
            Attribute::Undeclared | Attribute::Null => Number::ZERO,
        }
    }

    #[inline]
    pub const fn is_declared(self) -> bool {
        !matches!(self, Attribute::Undeclared)
    }
}

impl From<Option<Number>> for Attribute {
    fn from(value: Option<Number>) -> Self {
        value.map_or(Attribute::Null, Attribute::Value)
    }
}

/// One entry of an operable value mapping.
///
/// The tag is decided once by the extractor; the engine never probes the
/// model again to find out what kind of value it holds.
#[derive(Clone, Copy)]
pub enum OperableValue<'a> {
    /// A declared attribute with no value
    Absent,
    Scalar(Number),
    /// A present singular relation
    Composite(&'a dyn Operable),
}

impl OperableValue<'_> {
    /// Scalar value with absence counted as zero; `None` for composites
    pub fn scalar_or_zero(&self) -> Option<Number> {
        match self {
            OperableValue::Absent => Some(Number::ZERO),
            OperableValue::Scalar(n) => Some(*n),
            OperableValue::Composite(_) => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, OperableValue::Composite(_))
    }
}

impl fmt::Debug for OperableValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperableValue::Absent => f.write_str("Absent"),
            OperableValue::Scalar(n) => write!(f, "Scalar({:?})", n),
            OperableValue::Composite(obj) => f.debug_tuple("Composite").field(obj).finish(),
        }
    }
}

/// Ordered field name → value snapshot of one instance.
///
/// Built fresh for every operation; entries follow the registry order.
#[derive(Debug, Clone, Default)]
pub struct OperableValues<'a> {
    entries: Vec<(String, OperableValue<'a>)>,
}

impl<'a> OperableValues<'a> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert or replace the value of `name`, keeping its original position
    pub fn insert(&mut self, name: impl Into<String>, value: OperableValue<'a>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&OperableValue<'a>> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OperableValue<'a>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scalar entry of `name`; `None` when missing, absent or composite
    pub fn scalar(&self, name: &str) -> Option<Number> {
        match self.get(name) {
            Some(OperableValue::Scalar(n)) => Some(*n),
            _ => None,
        }
    }
}
