//! Arithmetic operators.
//!
//! Evaluation returns a tagged result, so a computed `-1` is an ordinary
//! value and never mistaken for a failure.

use crate::error::OperationError;

/// A supported binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, truncating toward zero.
    Divide,
}

impl Operator {
    /// Parses an operator character.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::UnsupportedOperator`] for anything other
    /// than `+ - * /`.
    pub const fn from_char(c: char) -> Result<Self, OperationError> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(OperationError::UnsupportedOperator(other)),
        }
    }

    /// Applies the operator with overflow checking.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::DivisionByZero`] when dividing by 0 and
    /// [`OperationError::Overflow`] when the result does not fit in `i64`.
    pub const fn apply(self, lhs: i64, rhs: i64) -> Result<i64, OperationError> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs == 0 {
                    return Err(OperationError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        match result {
            Some(value) => Ok(value),
            None => Err(OperationError::Overflow),
        }
    }
}

/// Evaluates `lhs op rhs` for an operator given as a raw character.
///
/// # Errors
///
/// See [`Operator::from_char`] and [`Operator::apply`].
///
/// # Examples
///
/// ```
/// use roman_words::core::evaluate;
///
/// assert_eq!(evaluate(4, 5, '-').unwrap(), -1);
/// assert!(evaluate(10, 0, '/').is_err());
/// assert!(evaluate(20, 10, '&').is_err());
/// ```
pub fn evaluate(lhs: i64, rhs: i64, op: char) -> Result<i64, OperationError> {
    Operator::from_char(op)?.apply(lhs, rhs)
}
