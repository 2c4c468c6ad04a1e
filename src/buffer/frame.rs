//! Frame - a slot in the buffer pool.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::common::HeapPageId;
use crate::storage::HeapPage;

/// A slot in the buffer pool holding at most one page.
///
/// The pool allocates a fixed number of frames up front. A loaded page is
/// shared as `Arc<HeapPage>`: resetting the frame drops the pool's handle,
/// while callers that fetched the page keep theirs.
pub struct Frame {
    page: RwLock<Option<Arc<HeapPage>>>,
}

impl Frame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self {
            page: RwLock::new(None),
        }
    }

    /// The loaded page, if any.
    #[inline]
    pub fn page(&self) -> Option<Arc<HeapPage>> {
        self.page.read().clone()
    }

    /// Id of the loaded page, if any.
    #[inline]
    pub fn page_id(&self) -> Option<HeapPageId> {
        self.page.read().as_ref().map(|page| page.id())
    }

    /// Put `page` in this frame, replacing whatever was there.
    pub fn load(&self, page: Arc<HeapPage>) {
        *self.page.write() = Some(page);
    }

    /// Drop the loaded page. Called after eviction to prepare for reuse.
    pub fn reset(&self) {
        *self.page.write() = None;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
