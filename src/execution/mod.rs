//! Query execution - pull-based operators.
//!
//! - [`DbIterator`] - The protocol every operator speaks
//! - [`FetchNext`] / [`Operator`] - Per-operator hook and the driver around it
//! - [`Filter`] - Relational select
//! - [`SeqScan`] / [`TupleIterator`] - Leaf operators

mod filter;
mod operator;
mod predicate;
mod seq_scan;
mod tuple_iterator;

pub use filter::Filter;
pub use operator::{collect_tuples, DbIterator, FetchNext, Operator};
pub use predicate::{Op, Predicate, TuplePredicate};
pub use seq_scan::SeqScan;
pub use tuple_iterator::TupleIterator;
