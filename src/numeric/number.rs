// ============================================================================
// Number
// Scalar field values with native-type promotion
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar value read from, or assigned to, a model field.
///
/// Arithmetic keeps the operands' native representation where it can:
///
/// | left \ right | Integer | Float | Decimal |
/// |--------------|---------|-------|---------|
/// | Integer      | Integer | Float | Decimal |
/// | Float        | Float   | Float | Float   |
/// | Decimal      | Decimal | Float | Decimal |
///
/// Integer and decimal arithmetic is checked. Float arithmetic follows IEEE 754,
/// except that division by zero is reported for every representation.
///
/// Equality compares by value, so `Integer(35) == Float(35.0)`.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl Number {
    /// Integer zero, the value a null field contributes to arithmetic.
    pub const ZERO: Self = Number::Integer(0);

    /// Check if value is zero, whatever the representation.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(i) => i == 0,
            Number::Float(f) => f == 0.0,
            Number::Decimal(d) => d.is_zero(),
        }
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    #[inline]
    pub const fn is_decimal(self) -> bool {
        matches!(self, Number::Decimal(_))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if an integer or decimal result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.apply(BinaryOp::Add, rhs)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if an integer or decimal result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.apply(BinaryOp::Sub, rhs)
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if an integer or decimal result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.apply(BinaryOp::Mul, rhs)
    }

    /// Checked division. Integer division truncates toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero in any representation,
    /// `Overflow` for `i64::MIN / -1` or an out-of-range decimal quotient.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.apply(BinaryOp::Div, rhs)
    }

    fn apply(self, op: BinaryOp, rhs: Self) -> NumericResult<Self> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => integer_op(op, a, b).map(Number::Integer),
            (Number::Float(_), _) | (_, Number::Float(_)) => {
                Ok(Number::Float(float_op(op, self.to_f64(), rhs.to_f64())))
            },
            (Number::Decimal(a), Number::Decimal(b)) => decimal_op(op, a, b).map(Number::Decimal),
            (Number::Integer(a), Number::Decimal(b)) => {
                decimal_op(op, Decimal::from(a), b).map(Number::Decimal)
            },
            (Number::Decimal(a), Number::Integer(b)) => {
                decimal_op(op, a, Decimal::from(b)).map(Number::Decimal)
            },
        }
    }

    // ========================================================================
    // Conversions (for host field assignment)
    // ========================================================================

    /// Value as `f64`. Decimals outside the `f64` range become NaN.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
            Number::Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Value as `i64`, truncating any fractional part.
    ///
    /// # Errors
    /// - `NotRepresentable` for NaN or infinite floats
    /// - `Overflow` / `Underflow` if the value is outside the `i64` range
    pub fn to_i64(self) -> NumericResult<i64> {
        match self {
            Number::Integer(i) => Ok(i),
            Number::Float(f) => {
                if !f.is_finite() {
                    Err(NumericError::NotRepresentable)
                } else if f >= i64::MAX as f64 {
                    Err(NumericError::Overflow)
                } else if f < i64::MIN as f64 {
                    Err(NumericError::Underflow)
                } else {
                    Ok(f.trunc() as i64)
                }
            },
            Number::Decimal(d) => d.trunc().to_i64().ok_or(if d.is_sign_negative() {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            }),
        }
    }

    /// Value as a `Decimal`.
    ///
    /// # Errors
    /// Returns `NotRepresentable` for NaN, infinite or out-of-range floats.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        match self {
            Number::Integer(i) => Ok(Decimal::from(i)),
            Number::Float(f) => Decimal::from_f64(f).ok_or(NumericError::NotRepresentable),
            Number::Decimal(d) => Ok(d),
        }
    }
}

fn integer_op(op: BinaryOp, a: i64, b: i64) -> NumericResult<i64> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(NumericError::DivisionByZero);
            }
            a.checked_div(b)
        },
    };

    result.ok_or_else(|| {
        // Sign of the exact result decides the direction
        let negative = match op {
            BinaryOp::Add => b < 0,
            BinaryOp::Sub => b > 0,
            BinaryOp::Mul | BinaryOp::Div => (a < 0) != (b < 0),
        };
        if negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        }
    })
}

fn float_op(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
    }
}

fn decimal_op(op: BinaryOp, a: Decimal, b: Decimal) -> NumericResult<Decimal> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b.is_zero() {
                return Err(NumericError::DivisionByZero);
            }
            a.checked_div(b)
        },
    };

    result.ok_or_else(|| {
        let negative = match op {
            BinaryOp::Add => b.is_sign_negative(),
            BinaryOp::Sub => b.is_sign_positive(),
            BinaryOp::Mul | BinaryOp::Div => a.is_sign_negative() != b.is_sign_negative(),
        };
        if negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        }
    })
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Decimal(a), Number::Decimal(b)) => a == b,
            (Number::Integer(a), Number::Decimal(b)) | (Number::Decimal(b), Number::Integer(a)) => {
                Decimal::from(a) == b
            },
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "Integer({})", i),
            Number::Float(x) => write!(f, "Float({:?})", x),
            Number::Decimal(d) => write!(f, "Decimal({})", d),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:?}", x),
            Number::Decimal(d) => write!(f, "{}", d),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
