//! Heap pages.

use crate::common::HeapPageId;
use crate::tuple::Tuple;

/// A page of a heap table: the rows stored under one [`HeapPageId`].
///
/// Pages are immutable once loaded; the buffer pool hands them out as
/// `Arc<HeapPage>` so readers keep their copy alive across evictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapPage {
    id: HeapPageId,
    /// Version of the [`HeapFile`](crate::storage::HeapFile) this page was read from.
    version: u64,
    tuples: Vec<Tuple>,
}

impl HeapPage {
    pub fn new(id: HeapPageId, tuples: Vec<Tuple>) -> Self {
        Self {
            id,
            version: 0,
            tuples,
        }
    }

    pub(crate) fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    #[inline]
    pub fn id(&self) -> HeapPageId {
        self.id
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    pub fn tuple(&self, slot: usize) -> Option<&Tuple> {
        self.tuples.get(slot)
    }

    #[inline]
    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_page_slots() {
        let pid = HeapPageId::new(1, 0);
        let page = HeapPage::new(pid, vec![Tuple::int_tuple(1, 1), Tuple::int_tuple(2, 1)]);

        assert_eq!(page.id(), pid);
        assert_eq!(page.num_tuples(), 2);
        assert_eq!(page.tuple(1), Some(&Tuple::int_tuple(2, 1)));
        assert_eq!(page.tuple(2), None);
    }
}
