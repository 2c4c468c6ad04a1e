//! Buffer pool management.
//!
//! The buffer pool is the in-memory cache between operators and tables. It
//! manages a fixed pool of frames, each holding one page, and is keyed by
//! [`HeapPageId`](crate::common::HeapPageId).
//!
//! # Components
//! - [`BufferPool`] - The page cache
//! - [`Frame`] - A slot in the buffer pool holding one page
//! - [`BufferPoolStats`] - Performance statistics
//! - [`replacer`] - Eviction policy implementations

mod buffer_pool;
mod frame;
pub mod replacer;
mod stats;

pub use buffer_pool::BufferPool;
pub use frame::Frame;
pub use stats::{BufferPoolStats, StatsSnapshot};
