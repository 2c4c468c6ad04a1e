//! Table catalog.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::common::{Error, Result};
use crate::storage::HeapFile;
use crate::tuple::TupleDesc;

struct TableEntry {
    name: String,
    file: Arc<HeapFile>,
}

#[derive(Default)]
struct Tables {
    by_id: HashMap<i32, TableEntry>,
    by_name: HashMap<String, i32>,
    /// Last version handed to a registered file.
    version: u64,
}

/// Registry of the tables in the database, keyed by table id and by name.
///
/// # Thread Safety
/// Both maps sit behind one `RwLock` so a lookup never sees a name without
/// its table.
#[derive(Default)]
pub struct Catalog {
    tables: RwLock<Tables>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `file` under `name`.
    ///
    /// A table already registered under the same name or the same id is
    /// replaced. Every registration gets a new version, so pages cached from
    /// the replaced file are never served for the new one.
    pub fn add_table(&self, mut file: HeapFile, name: &str) -> Arc<HeapFile> {
        let table_id = file.table_id();
        let mut tables = self.tables.write();

        tables.version += 1;
        file.set_version(tables.version);
        let file = Arc::new(file);

        if let Some(old_id) = tables.by_name.remove(name) {
            tables.by_id.remove(&old_id);
        }
        if let Some(old) = tables.by_id.remove(&table_id) {
            tables.by_name.remove(&old.name);
        }

        tables.by_name.insert(name.to_string(), table_id);
        tables.by_id.insert(
            table_id,
            TableEntry {
                name: name.to_string(),
                file: Arc::clone(&file),
            },
        );

        debug!(
            "catalog: added table {} as {} (version {})",
            name,
            table_id,
            file.version()
        );
        file
    }

    /// Id of the table called `name`.
    pub fn table_id(&self, name: &str) -> Option<i32> {
        self.tables.read().by_name.get(name).copied()
    }

    /// # Errors
    /// `Error::TableNotFound` if no table has this id.
    pub fn file(&self, table_id: i32) -> Result<Arc<HeapFile>> {
        self.tables
            .read()
            .by_id
            .get(&table_id)
            .map(|entry| Arc::clone(&entry.file))
            .ok_or(Error::TableNotFound(table_id))
    }

    /// # Errors
    /// `Error::TableNotFound` if no table has this id.
    pub fn tuple_desc(&self, table_id: i32) -> Result<TupleDesc> {
        Ok(self.file(table_id)?.tuple_desc().clone())
    }

    /// # Errors
    /// `Error::TableNotFound` if no table has this id.
    pub fn table_name(&self, table_id: i32) -> Result<String> {
        self.tables
            .read()
            .by_id
            .get(&table_id)
            .map(|entry| entry.name.clone())
            .ok_or(Error::TableNotFound(table_id))
    }

    /// Ids of all registered tables, ascending.
    pub fn table_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.tables.read().by_id.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Drop every table.
    pub fn clear(&self) {
        let mut tables = self.tables.write();
        tables.by_id.clear();
        tables.by_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::{Tuple, Type};

    fn table(id: i32) -> HeapFile {
        HeapFile::new(id, TupleDesc::int_desc(2), vec![Tuple::int_tuple(id, 2)], 4)
    }

    #[test]
    fn test_add_and_lookup() {
        let catalog = Catalog::new();
        catalog.add_table(table(1), "a");
        catalog.add_table(table(2), "b");

        assert_eq!(catalog.table_id("a"), Some(1));
        assert_eq!(catalog.table_id("b"), Some(2));
        assert_eq!(catalog.table_name(2).unwrap(), "b");
        assert_eq!(catalog.tuple_desc(1).unwrap(), TupleDesc::int_desc(2));
        assert_eq!(catalog.file(1).unwrap().table_id(), 1);
        assert_eq!(catalog.table_ids(), vec![1, 2]);
    }

    #[test]
    fn test_unknown_table() {
        let catalog = Catalog::new();
        assert_eq!(catalog.table_id("nope"), None);
        assert!(matches!(catalog.file(5), Err(Error::TableNotFound(5))));
        assert!(catalog.tuple_desc(5).is_err());
        assert!(catalog.table_name(5).is_err());
    }

    #[test]
    fn test_name_conflict_replaces() {
        let catalog = Catalog::new();
        catalog.add_table(table(1), "a");
        catalog.add_table(table(2), "a");

        assert_eq!(catalog.table_id("a"), Some(2));
        assert!(catalog.file(1).is_err());
        assert_eq!(catalog.table_ids(), vec![2]);
    }

    #[test]
    fn test_id_conflict_replaces() {
        let catalog = Catalog::new();
        catalog.add_table(table(1), "a");
        let desc = TupleDesc::new(&[Type::String], &["s"]);
        catalog.add_table(HeapFile::new(1, desc.clone(), vec![], 4), "b");

        assert_eq!(catalog.table_id("a"), None);
        assert_eq!(catalog.table_id("b"), Some(1));
        assert_eq!(catalog.tuple_desc(1).unwrap(), desc);
    }

    #[test]
    fn test_replacement_bumps_version() {
        let catalog = Catalog::new();
        let first = catalog.add_table(table(1), "a");
        let second = catalog.add_table(table(1), "a");

        assert!(first.version() > 0);
        assert!(second.version() > first.version());
        assert_eq!(catalog.file(1).unwrap().version(), second.version());
    }

    #[test]
    fn test_clear() {
        let catalog = Catalog::new();
        catalog.add_table(table(1), "a");
        catalog.clear();
        assert!(catalog.table_ids().is_empty());
        assert_eq!(catalog.table_id("a"), None);
    }
}
