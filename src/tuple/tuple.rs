//! Rows.

use std::fmt;

use super::Field;

/// A row: an ordered list of field values.
///
/// A tuple does not carry its schema; the operator producing it exposes the
/// matching [`TupleDesc`](super::TupleDesc).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Tuple {
    fields: Vec<Field>,
}

impl Tuple {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// A row of `width` copies of `value`.
    pub fn int_tuple(value: i32, width: usize) -> Self {
        Self {
            fields: vec![Field::Int(value); width],
        }
    }

    #[inline]
    pub fn field(&self, i: usize) -> Option<&Field> {
        self.fields.get(i)
    }

    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<Field>> for Tuple {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.fields.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join("\t"))
    }
}
