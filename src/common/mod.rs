//! Common types and utilities shared across volcanodb.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (HeapPageId, FrameId)
//! - Logging setup

pub mod config;
pub mod error;
mod frame_id;
pub mod logging;
mod page_id;

pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::{HeapPageId, PageId};
