//! Storage layer - tables and their pages.
//!
//! Rows are kept in memory; this layer only decides how they are grouped
//! into pages and how pages are named.
//!
//! - [`HeapFile`] - One table's rows, split into pages
//! - [`HeapPage`] - The rows under one `HeapPageId`
//! - [`Catalog`] - Table registry, by id and by name

mod catalog;
mod heap_file;
mod heap_page;

pub use catalog::Catalog;
pub use heap_file::HeapFile;
pub use heap_page::HeapPage;
