//! Page identifier types.

use std::fmt;
use std::hash::Hash;

use super::config::SERIALIZED_PAGE_ID_LEN;
use super::{Error, Result};

/// Capability shared by every kind of page identifier.
///
/// Each page kind gets its own concrete type, so identifiers of unrelated
/// kinds can never compare equal even when their fields match.
pub trait PageId: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync {
    /// The table this page belongs to.
    fn table_id(&self) -> i32;

    /// Position of the page within its table.
    fn page_number(&self) -> i32;

    /// Ordered integers that name this page, for persistence or transfer.
    ///
    /// The length matches the number of constructor arguments.
    fn serialize(&self) -> Vec<i32>;
}

/// Identifies a page of a heap table: `(table_id, page_number)`.
///
/// Equality and hashing are derived from both fields, so equal identifiers
/// always land on the same buffer pool slot.
///
/// No range checks happen here; whether a page number exists is the
/// storage layer's concern.
///
/// # Example
/// ```
/// use volcanodb::common::{HeapPageId, PageId};
///
/// let pid = HeapPageId::new(1, 2);
/// assert_eq!(pid.table_id(), 1);
/// assert_eq!(pid.page_number(), 2);
/// assert_eq!(HeapPageId::deserialize(&pid.serialize()).unwrap(), pid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeapPageId {
    table_id: i32,
    page_number: i32,
}

impl HeapPageId {
    /// Create a page id for page `page_number` of table `table_id`.
    #[inline]
    pub const fn new(table_id: i32, page_number: i32) -> Self {
        Self {
            table_id,
            page_number,
        }
    }

    /// Rebuild a page id from its serialized `[table_id, page_number]` form.
    ///
    /// # Errors
    /// `Error::InvalidPageId` if `data` does not hold exactly two integers.
    pub fn deserialize(data: &[i32]) -> Result<Self> {
        match data {
            [table_id, page_number] => Ok(Self::new(*table_id, *page_number)),
            _ => Err(Error::InvalidPageId(data.to_vec())),
        }
    }

    /// The serialized pair as a fixed-size array.
    #[inline]
    pub fn to_array(self) -> [i32; SERIALIZED_PAGE_ID_LEN] {
        [self.table_id, self.page_number]
    }
}

impl PageId for HeapPageId {
    #[inline]
    fn table_id(&self) -> i32 {
        self.table_id
    }

    #[inline]
    fn page_number(&self) -> i32 {
        self.page_number
    }

    fn serialize(&self) -> Vec<i32> {
        self.to_array().to_vec()
    }
}

impl From<[i32; SERIALIZED_PAGE_ID_LEN]> for HeapPageId {
    fn from([table_id, page_number]: [i32; SERIALIZED_PAGE_ID_LEN]) -> Self {
        Self::new(table_id, page_number)
    }
}

impl From<HeapPageId> for [i32; SERIALIZED_PAGE_ID_LEN] {
    fn from(pid: HeapPageId) -> Self {
        pid.to_array()
    }
}

impl fmt::Display for HeapPageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HeapPage({}, {})", self.table_id, self.page_number)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::Hasher;

    use super::*;

    fn hash_of(pid: &HeapPageId) -> u64 {
        let mut hasher = DefaultHasher::new();
        pid.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_heap_page_id_new() {
        let pid = HeapPageId::new(7, 42);
        assert_eq!(pid.table_id(), 7);
        assert_eq!(pid.page_number(), 42);
    }

    #[test]
    fn test_heap_page_id_equality() {
        assert_eq!(HeapPageId::new(1, 2), HeapPageId::new(1, 2));
        assert_ne!(HeapPageId::new(1, 2), HeapPageId::new(1, 3));
        assert_ne!(HeapPageId::new(1, 2), HeapPageId::new(2, 2));

        // "no page" never equals a real id
        assert_ne!(Some(HeapPageId::new(1, 2)), None);
    }

    #[test]
    fn test_heap_page_id_hash_consistent() {
        let a = HeapPageId::new(1, 2);
        let b = HeapPageId::new(1, 2);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_heap_page_id_dedup_in_set() {
        let mut set = HashSet::new();
        set.insert(HeapPageId::new(1, 2));
        set.insert(HeapPageId::new(1, 2));
        set.insert(HeapPageId::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serialize_order() {
        let pid = HeapPageId::new(5, 9);
        assert_eq!(pid.serialize(), vec![5, 9]);
        assert_eq!(pid.to_array(), [5, 9]);
    }

    #[test]
    fn test_deserialize_roundtrip_edge_values() {
        for pid in [
            HeapPageId::new(0, 0),
            HeapPageId::new(-1, -7),
            HeapPageId::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(HeapPageId::deserialize(&pid.serialize()).unwrap(), pid);
            assert_eq!(HeapPageId::from(pid.to_array()), pid);
        }
    }

    #[test]
    fn test_deserialize_wrong_length() {
        assert!(matches!(
            HeapPageId::deserialize(&[1]),
            Err(Error::InvalidPageId(v)) if v == vec![1]
        ));
        assert!(HeapPageId::deserialize(&[1, 2, 3]).is_err());
        assert!(HeapPageId::deserialize(&[]).is_err());
    }

    #[test]
    fn test_heap_page_id_display() {
        assert_eq!(format!("{}", HeapPageId::new(3, 42)), "HeapPage(3, 42)");
    }
}
