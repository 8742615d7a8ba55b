// ============================================================================
// Arithmetic / Equality Engine
// Field-wise add, subtract, scale and compare over operable values
// ============================================================================
//
// Every operation builds a new instance and assigns results through the
// host's setters; operands are never mutated. Nested relations recurse
// through `&dyn Operable`, so their concrete types may differ from the
// outer model.

use super::extractor::operable_values;
use crate::domain::{OperableResult, OperableValue, OperableValues};
use crate::interfaces::{Model, Operable};
use crate::numeric::{NumericError, NumericResult, Number};
use crate::registry;
use std::fmt;

// ============================================================================
// Operators and Operands
// ============================================================================

/// Field-wise binary operators between two instances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOp {
    Add,
    Subtract,
}

impl CombineOp {
    #[inline]
    fn apply(self, left: Number, right: Number) -> NumericResult<Number> {
        match self {
            CombineOp::Add => left.checked_add(right),
            CombineOp::Subtract => left.checked_sub(right),
        }
    }
}

/// Operators between an instance and a scalar factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleOp {
    Multiply,
    Divide,
}

impl ScaleOp {
    #[inline]
    fn apply(self, value: Number, factor: Number) -> NumericResult<Number> {
        match self {
            ScaleOp::Multiply => value.checked_mul(factor),
            ScaleOp::Divide => value.checked_div(factor),
        }
    }
}

/// Right-hand side of [`combine`].
///
/// `Zero` stands for a placeholder that has none of the fields (every field
/// reads as zero); `Absent` for a missing partner, which makes the operation
/// a copy of the left operand.
pub enum Operand<'a, T: ?Sized = dyn Operable> {
    Instance(&'a T),
    Zero,
    Absent,
}

impl<T: ?Sized> Clone for Operand<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Operand<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Operand<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Instance(instance) => f.debug_tuple("Instance").field(instance).finish(),
            Operand::Zero => f.write_str("Zero"),
            Operand::Absent => f.write_str("Absent"),
        }
    }
}

impl<'a, T: Operable> Operand<'a, T> {
    fn as_dyn(self) -> Operand<'a> {
        match self {
            Operand::Instance(instance) => Operand::Instance(instance as &dyn Operable),
            Operand::Zero => Operand::Zero,
            Operand::Absent => Operand::Absent,
        }
    }
}

impl<'a, T: ?Sized> From<&'a T> for Operand<'a, T> {
    fn from(instance: &'a T) -> Self {
        Operand::Instance(instance)
    }
}

impl<'a, T: ?Sized> From<Option<&'a T>> for Operand<'a, T> {
    fn from(instance: Option<&'a T>) -> Self {
        instance.map_or(Operand::Absent, Operand::Instance)
    }
}

// ============================================================================
// Typed Entry Points
// ============================================================================

/// `left op right`, field by field, as a new instance.
///
/// # Errors
/// - `NotConfigured` if either instance's type has no selection
/// - `Numeric` on integer or decimal overflow, or a host setter's conversion error
pub fn combine<'a, T: Model>(
    op: CombineOp,
    left: &T,
    right: impl Into<Operand<'a, T>>,
) -> OperableResult<T> {
    let right: Operand<'a, T> = right.into();
    let mut result = T::default();
    combine_onto(op, left, right.as_dyn(), &mut result)?;
    Ok(result)
}

/// `left op factor` on every selected scalar, as a new instance.
///
/// # Errors
/// - `NotConfigured` if the instance's type has no selection
/// - `Numeric(DivisionByZero)` when dividing by a zero factor
pub fn scale<T: Model>(op: ScaleOp, left: &T, factor: Number) -> OperableResult<T> {
    if op == ScaleOp::Divide && factor.is_zero() {
        return Err(NumericError::DivisionByZero.into());
    }
    let mut result = T::default();
    scale_onto(op, left, factor, &mut result)?;
    Ok(result)
}

/// Field-wise equality of the selected fields.
///
/// Scalars compare by value across representations; an absent value only
/// equals another absent value; nested objects compare recursively.
///
/// # Errors
/// `NotConfigured` if either instance's type (or a nested one) has no selection.
pub fn matches(a: &dyn Operable, b: &dyn Operable) -> OperableResult<bool> {
    let left = operable_values(a)?;
    let right = operable_values(b)?;
    values_match(&left, &right)
}

/// Sum of every instance in `terms`; `Zero` and `Absent` placeholders are skipped.
///
/// Returns `None` when `terms` holds no instance.
///
/// # Errors
/// As [`combine`].
pub fn sum<'a, T, I>(terms: I) -> OperableResult<Option<T>>
where
    T: Model,
    I: IntoIterator,
    I::Item: Into<Operand<'a, T>>,
{
    let mut total: Option<T> = None;
    for term in terms {
        let term: Operand<'a, T> = term.into();
        if let Operand::Instance(item) = term {
            total = Some(match total {
                None => combine(CombineOp::Add, item, Operand::Absent)?,
                Some(acc) => combine(CombineOp::Add, &acc, item)?,
            });
        }
    }
    Ok(total)
}

/// Every selected scalar of `value` negated, as a new instance.
///
/// # Errors
/// As [`combine`].
pub fn negate<T: Model>(value: &T) -> OperableResult<T> {
    combine(CombineOp::Subtract, &T::default(), value)
}

// ============================================================================
// Dynamic Core
// ============================================================================

fn combine_onto(
    op: CombineOp,
    left: &dyn Operable,
    right: Operand<'_>,
    out: &mut dyn Operable,
) -> OperableResult<()> {
    let values = operable_values(left)?;
    if let Operand::Instance(partner) = right {
        registry::fields_for(partner)?;
    }

    tracing::trace!(
        "{:?} on {} ({} fields) with {:?}",
        op,
        left.model_name(),
        values.len(),
        right
    );

    for (key, value) in values.iter() {
        match (value, right) {
            (OperableValue::Composite(nested), _) => {
                let partner = match right {
                    Operand::Instance(partner) => partner.relation(key),
                    Operand::Zero | Operand::Absent => None,
                };
                let combined = match partner {
                    Some(partner) => combine_boxed(op, *nested, Operand::Instance(partner))?,
                    None => combine_boxed(op, *nested, Operand::Absent)?,
                };
                out.set_relation(key, combined);
            },
            (OperableValue::Scalar(n), Operand::Absent) => out.set_attribute(key, *n)?,
            (OperableValue::Absent, Operand::Absent) => {},
            (OperableValue::Scalar(_) | OperableValue::Absent, _) => {
                let ours = value.scalar_or_zero().unwrap_or(Number::ZERO);
                let theirs = match right {
                    Operand::Instance(partner) => partner.attribute(key).or_zero(),
                    Operand::Zero | Operand::Absent => Number::ZERO,
                };
                out.set_attribute(key, op.apply(ours, theirs)?)?;
            },
        }
    }

    Ok(())
}

fn combine_boxed(
    op: CombineOp,
    left: &dyn Operable,
    right: Operand<'_>,
) -> OperableResult<Box<dyn Operable>> {
    let mut out = left.blank();
    combine_onto(op, left, right, out.as_mut())?;
    Ok(out)
}

fn scale_onto(
    op: ScaleOp,
    left: &dyn Operable,
    factor: Number,
    out: &mut dyn Operable,
) -> OperableResult<()> {
    let values = operable_values(left)?;

    tracing::trace!(
        "{:?} on {} ({} fields) by {}",
        op,
        left.model_name(),
        values.len(),
        factor
    );

    for (key, value) in values.iter() {
        match value {
            OperableValue::Composite(nested) => {
                let mut scaled = nested.blank();
                scale_onto(op, *nested, factor, scaled.as_mut())?;
                out.set_relation(key, scaled);
            },
            OperableValue::Scalar(n) => out.set_attribute(key, op.apply(*n, factor)?)?,
            OperableValue::Absent => out.set_attribute(key, op.apply(Number::ZERO, factor)?)?,
        }
    }

    Ok(())
}

fn values_match(left: &OperableValues<'_>, right: &OperableValues<'_>) -> OperableResult<bool> {
    if left.len() != right.len() {
        return Ok(false);
    }

    for (key, ours) in left.iter() {
        let Some(theirs) = right.get(key) else {
            return Ok(false);
        };
        let equal = match (ours, theirs) {
            (OperableValue::Absent, OperableValue::Absent) => true,
            (OperableValue::Scalar(a), OperableValue::Scalar(b)) => a == b,
            (OperableValue::Composite(a), OperableValue::Composite(b)) => matches(*a, *b)?,
            _ => false,
        };
        if !equal {
            return Ok(false);
        }
    }

    Ok(true)
}

// ============================================================================
// Named-Method Surface
// ============================================================================

/// Arithmetic and equality methods for every [`Model`].
///
/// ```ignore
/// let total = a.add(&b)?.subtract(&c)?.multiply(2)?;
/// assert!(total.matches(&expected)?);
/// ```
pub trait Arithmetic: Model {
    /// `self + rhs`; see [`combine`]
    fn add<'a>(&self, rhs: impl Into<Operand<'a, Self>>) -> OperableResult<Self> {
        combine(CombineOp::Add, self, rhs)
    }

    /// `self - rhs`; see [`combine`]
    fn subtract<'a>(&self, rhs: impl Into<Operand<'a, Self>>) -> OperableResult<Self> {
        combine(CombineOp::Subtract, self, rhs)
    }

    /// `self * factor`; see [`scale`]
    fn multiply(&self, factor: impl Into<Number>) -> OperableResult<Self> {
        scale(ScaleOp::Multiply, self, factor.into())
    }

    /// `self / factor`; see [`scale`]
    fn divide(&self, factor: impl Into<Number>) -> OperableResult<Self> {
        scale(ScaleOp::Divide, self, factor.into())
    }

    /// `-self`; see [`negate`]
    fn negate(&self) -> OperableResult<Self> {
        negate(self)
    }

    /// Field-wise equality; see [`matches`]
    fn matches(&self, other: &dyn Operable) -> OperableResult<bool> {
        matches(self, other)
    }

    /// Selected field snapshot; see [`operable_values`]
    fn operable_values(&self) -> OperableResult<OperableValues<'_>> {
        operable_values(self)
    }
}

impl<T: Model> Arithmetic for T {}
