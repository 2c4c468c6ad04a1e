//! Row predicates.

use std::fmt;

use crate::tuple::{Field, Tuple};

/// Comparison operators usable in a [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Equals,
    GreaterThan,
    LessThan,
    LessThanOrEq,
    GreaterThanOrEq,
    Like,
    NotEquals,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Op::Equals => "=",
            Op::GreaterThan => ">",
            Op::LessThan => "<",
            Op::LessThanOrEq => "<=",
            Op::GreaterThanOrEq => ">=",
            Op::Like => "LIKE",
            Op::NotEquals => "<>",
        };
        write!(f, "{}", s)
    }
}

/// Anything that can accept or reject a row.
///
/// Implementations must be pure: [`Filter`](super::Filter) calls
/// `filter` exactly once per row it pulls from its child.
pub trait TuplePredicate: Send {
    fn filter(&self, tuple: &Tuple) -> bool;
}

impl<F> TuplePredicate for F
where
    F: Fn(&Tuple) -> bool + Send,
{
    fn filter(&self, tuple: &Tuple) -> bool {
        self(tuple)
    }
}

/// Compares one field of a row against a constant: `tuple[field] <op> operand`.
///
/// # Example
/// ```
/// use volcanodb::execution::{Op, Predicate, TuplePredicate};
/// use volcanodb::tuple::{Field, Tuple};
///
/// let p = Predicate::new(0, Op::GreaterThan, Field::Int(2));
/// assert!(p.filter(&Tuple::new(vec![Field::Int(3)])));
/// assert!(!p.filter(&Tuple::new(vec![Field::Int(2)])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    field: usize,
    op: Op,
    operand: Field,
}

impl Predicate {
    pub fn new(field: usize, op: Op, operand: Field) -> Self {
        Self { field, op, operand }
    }

    pub fn field(&self) -> usize {
        self.field
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn operand(&self) -> &Field {
        &self.operand
    }
}

impl TuplePredicate for Predicate {
    /// A row without column `field` never matches.
    fn filter(&self, tuple: &Tuple) -> bool {
        tuple
            .field(self.field)
            .is_some_and(|value| value.compare(self.op, &self.operand))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{} {} {}", self.field, self.op, self.operand)
    }
}
