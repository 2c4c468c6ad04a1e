//! Error types for volcanodb.

use thiserror::Error;

use super::HeapPageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in volcanodb.
///
/// The variants fall into three groups:
/// - usage errors: an operator was driven out of lifecycle order
/// - exhaustion: `next()` was called with no row left
/// - storage and transaction failures raised by collaborators, which
///   operators propagate without translation
#[derive(Debug, Error)]
pub enum Error {
    /// An operator method other than `open()` was called while closed.
    #[error("operator is not open")]
    NotOpen,

    /// `open()` was called on an operator that is already open.
    #[error("operator is already open")]
    AlreadyOpen,

    /// A plan rewrite addressed a child slot the operator does not have.
    #[error("operator has no child at index {0}")]
    NoSuchChild(usize),

    /// `next()` was called with no row available.
    #[error("no more tuples")]
    NoSuchElement,

    /// The surrounding transaction must abort.
    #[error("transaction aborted")]
    TransactionAborted,

    /// Requested page does not exist in its table.
    #[error("{0} not found")]
    PageNotFound(HeapPageId),

    /// No table is registered under this id.
    #[error("Table {0} not found")]
    TableNotFound(i32),

    /// Buffer pool has no frame it can hand out.
    #[error("No free frames available in buffer pool")]
    NoFreeFrames,

    /// A serialized page identifier had the wrong shape.
    #[error("invalid serialized page id: {0:?}")]
    InvalidPageId(Vec<i32>),
}

impl Error {
    /// True for errors caused by driving an operator out of lifecycle order.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::NotOpen | Error::AlreadyOpen | Error::NoSuchChild(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PageNotFound(HeapPageId::new(3, 42));
        assert_eq!(format!("{}", err), "HeapPage(3, 42) not found");

        let err = Error::NoFreeFrames;
        assert_eq!(format!("{}", err), "No free frames available in buffer pool");

        let err = Error::TableNotFound(7);
        assert_eq!(format!("{}", err), "Table 7 not found");
    }

    #[test]
    fn test_usage_errors() {
        assert!(Error::NotOpen.is_usage_error());
        assert!(Error::AlreadyOpen.is_usage_error());
        assert!(Error::NoSuchChild(1).is_usage_error());
        assert!(!Error::NoSuchElement.is_usage_error());
        assert!(!Error::TransactionAborted.is_usage_error());
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
