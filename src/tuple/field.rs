//! Typed field values.

use std::cmp::Ordering;
use std::fmt;

use crate::execution::Op;

/// Type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    String,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "INT_TYPE"),
            Type::String => write!(f, "STRING_TYPE"),
        }
    }
}

/// A single value in a [`Tuple`](super::Tuple).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Int(i32),
    String(String),
}

impl Field {
    /// The column type this value belongs to.
    pub fn field_type(&self) -> Type {
        match self {
            Field::Int(_) => Type::Int,
            Field::String(_) => Type::String,
        }
    }

    /// Evaluate `self <op> operand`.
    ///
    /// Values of different types never satisfy any operator. `Like` is
    /// substring containment for strings and equality for integers.
    pub fn compare(&self, op: Op, operand: &Field) -> bool {
        match (self, operand) {
            (Field::Int(a), Field::Int(b)) => match op {
                Op::Like => a == b,
                _ => op.matches(a.cmp(b)),
            },
            (Field::String(a), Field::String(b)) => match op {
                Op::Like => a.contains(b.as_str()),
                _ => op.matches(a.as_str().cmp(b.as_str())),
            },
            _ => false,
        }
    }
}

impl Op {
    fn matches(self, ord: Ordering) -> bool {
        match self {
            Op::Equals | Op::Like => ord == Ordering::Equal,
            Op::NotEquals => ord != Ordering::Equal,
            Op::GreaterThan => ord == Ordering::Greater,
            Op::GreaterThanOrEq => ord != Ordering::Less,
            Op::LessThan => ord == Ordering::Less,
            Op::LessThanOrEq => ord != Ordering::Greater,
        }
    }
}

impl From<i32> for Field {
    fn from(v: i32) -> Self {
        Field::Int(v)
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Field::String(v.to_string())
    }
}

impl From<String> for Field {
    fn from(v: String) -> Self {
        Field::String(v)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Int(v) => write!(f, "{}", v),
            Field::String(v) => write!(f, "{}", v),
        }
    }
}
