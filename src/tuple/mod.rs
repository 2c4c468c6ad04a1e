//! Rows and schemas.
//!
//! - [`Field`] / [`Type`] - A single typed value and its type
//! - [`TupleDesc`] - The schema of a row
//! - [`Tuple`] - A row of fields

mod field;
#[allow(clippy::module_inception)]
mod tuple;
mod tuple_desc;

pub use field::{Field, Type};
pub use tuple::Tuple;
pub use tuple_desc::{TdItem, TupleDesc};
