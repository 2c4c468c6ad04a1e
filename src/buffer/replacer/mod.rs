//! Eviction policy implementations (replacers).
//!
//! - [`FifoReplacer`] - Evicts in load order

mod fifo;

pub use fifo::FifoReplacer;
