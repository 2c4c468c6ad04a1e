//! volcanodb - A pull-based query execution engine.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           volcanodb                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Execution Layer (execution/)                │   │
//! │  │     DbIterator ← Operator<S: FetchNext> ← Filter, ...    │   │
//! │  │        open / close / rewind / has_next / next           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Buffer Pool (buffer/)                       │   │
//! │  │   BufferPool + Frame + FifoReplacer + Statistics         │   │
//! │  │          keyed by HeapPageId(table, page)                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Storage Layer (storage/)                    │   │
//! │  │          Catalog + HeapFile + HeapPage                   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (HeapPageId, FrameId, Error, config, logging)
//! - [`tuple`] - Rows, fields and schemas
//! - [`execution`] - The operator protocol and the operators built on it
//! - [`buffer`] - Page cache keyed by page identity
//! - [`storage`] - In-memory tables and the catalog
//!
//! # Quick Start
//! ```
//! use std::sync::Arc;
//! use volcanodb::buffer::BufferPool;
//! use volcanodb::execution::{collect_tuples, DbIterator, FetchNext, Filter, Op, Predicate, SeqScan};
//! use volcanodb::storage::{Catalog, HeapFile};
//! use volcanodb::tuple::{Field, Tuple, TupleDesc};
//!
//! let catalog = Arc::new(Catalog::new());
//! let rows = (1..=5).map(|v| Tuple::int_tuple(v, 1)).collect();
//! catalog.add_table(HeapFile::with_default_page_size(1, TupleDesc::int_desc(1), rows), "nums");
//! let pool = Arc::new(BufferPool::with_default_size(catalog));
//!
//! let scan = SeqScan::new(pool, 1, "n").unwrap().into_operator();
//! let predicate = Predicate::new(0, Op::GreaterThan, Field::Int(2));
//! let mut plan = Filter::new(predicate, Box::new(scan)).into_operator();
//!
//! plan.open().unwrap();
//! assert_eq!(collect_tuples(&mut plan).unwrap().len(), 3);
//! plan.close().unwrap();
//! ```

pub mod buffer;
pub mod common;
pub mod execution;
pub mod storage;
pub mod tuple;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, HeapPageId, PageId, Result};

pub use buffer::{BufferPool, BufferPoolStats, Frame, StatsSnapshot};
pub use execution::{DbIterator, FetchNext, Filter, Operator, Predicate};
pub use tuple::{Field, Tuple, TupleDesc, Type};
