//! Row schemas.

use std::fmt;

use super::Type;

/// One column of a [`TupleDesc`]: its type and optional name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TdItem {
    pub field_type: Type,
    pub field_name: Option<String>,
}

/// The schema of a row: an ordered list of typed, optionally named columns.
///
/// Two descriptors are equal when they have the same columns in the same
/// order, names included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TupleDesc {
    items: Vec<TdItem>,
}

impl TupleDesc {
    /// Build a schema from column types and names.
    ///
    /// # Panics
    /// Panics if `types` and `names` differ in length.
    pub fn new(types: &[Type], names: &[&str]) -> Self {
        assert_eq!(types.len(), names.len(), "types and names must align");
        let items = types
            .iter()
            .zip(names)
            .map(|(t, n)| TdItem {
                field_type: *t,
                field_name: Some((*n).to_string()),
            })
            .collect();
        Self { items }
    }

    /// Build a schema of anonymous columns.
    pub fn from_types(types: &[Type]) -> Self {
        let items = types
            .iter()
            .map(|t| TdItem {
                field_type: *t,
                field_name: None,
            })
            .collect();
        Self { items }
    }

    /// `width` integer columns named `f0`, `f1`, ...
    pub fn int_desc(width: usize) -> Self {
        let items = (0..width)
            .map(|i| TdItem {
                field_type: Type::Int,
                field_name: Some(format!("f{}", i)),
            })
            .collect();
        Self { items }
    }

    #[inline]
    pub fn num_fields(&self) -> usize {
        self.items.len()
    }

    pub fn field_type(&self, i: usize) -> Option<Type> {
        self.items.get(i).map(|item| item.field_type)
    }

    pub fn field_name(&self, i: usize) -> Option<&str> {
        self.items.get(i).and_then(|item| item.field_name.as_deref())
    }

    /// Copy of this schema with every named column prefixed by `alias.`.
    ///
    /// An empty alias returns the schema unchanged.
    pub fn with_alias(&self, alias: &str) -> Self {
        if alias.is_empty() {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .map(|item| TdItem {
                field_type: item.field_type,
                field_name: item
                    .field_name
                    .as_ref()
                    .map(|name| format!("{}.{}", alias, name)),
            })
            .collect();
        Self { items }
    }
}

impl fmt::Display for TupleDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .items
            .iter()
            .map(|item| {
                format!(
                    "{}({})",
                    item.field_name.as_deref().unwrap_or("null"),
                    item.field_type
                )
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let td = TupleDesc::new(&[Type::Int, Type::String], &["id", "name"]);
        assert_eq!(td.num_fields(), 2);
        assert_eq!(td.field_type(1), Some(Type::String));
        assert_eq!(td.field_name(0), Some("id"));
        assert_eq!(td.field_name(2), None);
        assert_eq!(td.field_type(2), None);
    }

    #[test]
    fn test_anonymous_columns() {
        let td = TupleDesc::from_types(&[Type::Int]);
        assert_eq!(td.field_name(0), None);
        assert_eq!(format!("{}", td), "null(INT_TYPE)");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(TupleDesc::int_desc(3), TupleDesc::int_desc(3));
        assert_ne!(TupleDesc::int_desc(3), TupleDesc::int_desc(2));
        assert_ne!(
            TupleDesc::new(&[Type::Int], &["a"]),
            TupleDesc::new(&[Type::Int], &["b"])
        );
    }

    #[test]
    fn test_with_alias() {
        let td = TupleDesc::new(&[Type::Int, Type::Int], &["a", "b"]);
        let aliased = td.with_alias("t");
        assert_eq!(aliased.field_name(0), Some("t.a"));
        assert_eq!(aliased.field_name(1), Some("t.b"));
        assert_eq!(td.with_alias(""), td);
    }

    #[test]
    fn test_display() {
        let td = TupleDesc::new(&[Type::Int, Type::String], &["id", "name"]);
        assert_eq!(format!("{}", td), "id(INT_TYPE), name(STRING_TYPE)");
    }
}
