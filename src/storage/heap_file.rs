//! Heap files.

use crate::common::config::DEFAULT_TUPLES_PER_PAGE;
use crate::common::{Error, HeapPageId, PageId, Result};
use crate::storage::HeapPage;
use crate::tuple::{Tuple, TupleDesc};

/// The contents of one table, split into fixed-capacity pages.
///
/// # Layout
/// ```text
/// ┌──────────────┬──────────────┬─────┬──────────────┐
/// │ page 0       │ page 1       │ ... │ page N       │
/// │ rows 0..k    │ rows k..2k   │     │ rest         │
/// └──────────────┴──────────────┴─────┴──────────────┘
/// k = tuples_per_page
/// ```
///
/// Rows live in memory; the file only decides which rows belong to which
/// [`HeapPageId`]. The contents are fixed at construction, so a page read
/// twice always has the same rows.
///
/// The [`Catalog`](crate::storage::Catalog) stamps each registered file with
/// a fresh version. Pages carry the version they were read from, which lets
/// the buffer pool tell a replaced table's pages from the current ones.
#[derive(Debug)]
pub struct HeapFile {
    table_id: i32,
    desc: TupleDesc,
    pages: Vec<Vec<Tuple>>,
    version: u64,
}

impl HeapFile {
    /// Build a table from `tuples`, `tuples_per_page` rows per page.
    ///
    /// # Panics
    /// Panics if `tuples_per_page` is 0.
    pub fn new(table_id: i32, desc: TupleDesc, tuples: Vec<Tuple>, tuples_per_page: usize) -> Self {
        assert!(tuples_per_page > 0, "tuples_per_page must be > 0");

        let pages = tuples
            .chunks(tuples_per_page)
            .map(|chunk| chunk.to_vec())
            .collect();

        Self {
            table_id,
            desc,
            pages,
            version: 0,
        }
    }

    /// Build a table with [`DEFAULT_TUPLES_PER_PAGE`] rows per page.
    pub fn with_default_page_size(table_id: i32, desc: TupleDesc, tuples: Vec<Tuple>) -> Self {
        Self::new(table_id, desc, tuples, DEFAULT_TUPLES_PER_PAGE)
    }

    #[inline]
    pub fn table_id(&self) -> i32 {
        self.table_id
    }

    #[inline]
    pub fn tuple_desc(&self) -> &TupleDesc {
        &self.desc
    }

    /// Registration version; 0 until the file is added to a catalog.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    #[inline]
    pub fn num_pages(&self) -> i32 {
        self.pages.len() as i32
    }

    /// Read one page of this table.
    ///
    /// # Errors
    /// `Error::PageNotFound` if the id names another table or a page
    /// number outside `0..num_pages()`.
    pub fn read_page(&self, pid: HeapPageId) -> Result<HeapPage> {
        if pid.table_id() != self.table_id {
            return Err(Error::PageNotFound(pid));
        }
        let rows = usize::try_from(pid.page_number())
            .ok()
            .and_then(|n| self.pages.get(n))
            .ok_or(Error::PageNotFound(pid))?;
        Ok(HeapPage::new(pid, rows.clone()).with_version(self.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(rows: i32, per_page: usize) -> HeapFile {
        let tuples = (0..rows).map(|v| Tuple::int_tuple(v, 1)).collect();
        HeapFile::new(9, TupleDesc::int_desc(1), tuples, per_page)
    }

    #[test]
    fn test_page_split() {
        let f = file(10, 4);
        assert_eq!(f.num_pages(), 3);

        let last = f.read_page(HeapPageId::new(9, 2)).unwrap();
        assert_eq!(last.num_tuples(), 2);
        assert_eq!(last.tuple(0), Some(&Tuple::int_tuple(8, 1)));
    }

    #[test]
    fn test_pages_carry_file_version() {
        let mut f = file(4, 2);
        assert_eq!(f.read_page(HeapPageId::new(9, 0)).unwrap().version(), 0);

        f.set_version(7);
        assert_eq!(f.read_page(HeapPageId::new(9, 1)).unwrap().version(), 7);
    }

    #[test]
    fn test_empty_file() {
        let f = file(0, 4);
        assert_eq!(f.num_pages(), 0);
        assert!(f.read_page(HeapPageId::new(9, 0)).is_err());
    }

    #[test]
    fn test_read_page_not_found() {
        let f = file(4, 4);
        assert!(matches!(
            f.read_page(HeapPageId::new(9, 1)),
            Err(Error::PageNotFound(pid)) if pid == HeapPageId::new(9, 1)
        ));
        assert!(f.read_page(HeapPageId::new(9, -1)).is_err());
        assert!(f.read_page(HeapPageId::new(8, 0)).is_err());
    }

    #[test]
    #[should_panic(expected = "tuples_per_page must be > 0")]
    fn test_zero_page_size() {
        file(1, 0);
    }
}
