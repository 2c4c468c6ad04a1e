//! Configuration constants for volcanodb.

/// Default number of frames in the buffer pool.
pub const DEFAULT_POOL_SIZE: usize = 50;

/// Default number of tuples stored on a single heap page.
///
/// Pages are in-memory containers here, so the page capacity is counted in
/// tuples rather than bytes.
pub const DEFAULT_TUPLES_PER_PAGE: usize = 64;

/// Number of integers in a serialized page identifier (`[table_id, page_number]`).
pub const SERIALIZED_PAGE_ID_LEN: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_nonzero() {
        assert!(DEFAULT_POOL_SIZE > 0);
        assert!(DEFAULT_TUPLES_PER_PAGE > 0);
    }

    #[test]
    fn test_serialized_page_id_len() {
        assert_eq!(SERIALIZED_PAGE_ID_LEN, 2);
    }
}
