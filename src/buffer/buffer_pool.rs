//! Buffer Pool - the page caching layer.
//!
//! The [`BufferPool`] provides:
//! - Page caching between tables and operators
//! - One cached copy per [`HeapPageId`]
//! - FIFO eviction once every frame is in use

use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use log::debug;
use parking_lot::{Mutex, RwLock};

use crate::buffer::replacer::FifoReplacer;
use crate::buffer::{BufferPoolStats, Frame};
use crate::common::config::DEFAULT_POOL_SIZE;
use crate::common::{Error, FrameId, HeapPageId, PageId, Result};
use crate::storage::{Catalog, HeapFile, HeapPage};

/// Caches heap pages in a fixed number of frames.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │                         BufferPool                           │
/// │  ┌────────────────────┐  ┌───────────────────────────────┐   │
/// │  │ page_table         │  │      frames: Vec<Frame>       │   │
/// │  │ HeapPageId → Fid   │─▶│  [Frame0] [Frame1] [Frame2]   │   │
/// │  └────────────────────┘  └───────────────────────────────┘   │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐        │
/// │  │  free_list   │  │   replacer   │  │   catalog    │        │
/// │  │ Vec<FrameId> │  │ FifoReplacer │  │ Arc<Catalog> │        │
/// │  └──────────────┘  └──────────────┘  └──────────────┘        │
/// └──────────────────────────────────────────────────────────────┘
/// ```
///
/// Equal page ids always resolve to the same frame, so a page is cached at
/// most once. A cached page is only served while its version matches the
/// table currently registered in the catalog; pages left over from a
/// replaced table are reloaded in place on their next fetch.
///
/// # Thread Safety
/// - `page_table`: `RwLock` - many readers, few writers
/// - `free_list`: `Mutex` - always modified
/// - `replacer`: `Mutex` - internal state changes on access
/// - `frames`: No lock - fixed size, each Frame has an internal lock
/// - `stats`: No lock - all atomic counters
///
/// Locks are taken in the order `page_table` → `free_list` → `replacer`.
///
/// # Usage
/// ```
/// use std::sync::Arc;
/// use volcanodb::buffer::BufferPool;
/// use volcanodb::common::HeapPageId;
/// use volcanodb::storage::{Catalog, HeapFile};
/// use volcanodb::tuple::{Tuple, TupleDesc};
///
/// let catalog = Arc::new(Catalog::new());
/// let rows = (0..10).map(|v| Tuple::int_tuple(v, 1)).collect();
/// catalog.add_table(HeapFile::new(1, TupleDesc::int_desc(1), rows, 4), "t");
///
/// let pool = BufferPool::new(2, catalog);
/// let page = pool.fetch_page(HeapPageId::new(1, 0)).unwrap();
/// assert_eq!(page.num_tuples(), 4);
/// ```
pub struct BufferPool {
    /// Fixed pool of frames allocated at startup.
    frames: Vec<Frame>,

    /// Maps page IDs to frame IDs.
    page_table: RwLock<HashMap<HeapPageId, FrameId>>,

    /// Stack of free frame IDs.
    free_list: Mutex<Vec<FrameId>>,

    /// Eviction policy for selecting victim frames.
    replacer: Mutex<FifoReplacer>,

    /// Resolves table ids to the files pages are loaded from.
    catalog: Arc<Catalog>,

    stats: BufferPoolStats,

    /// Number of frames in the pool (immutable after construction).
    pool_size: usize,
}

impl BufferPool {
    /// Create a buffer pool with `pool_size` frames reading from `catalog`.
    ///
    /// # Panics
    /// Panics if `pool_size` is 0.
    pub fn new(pool_size: usize, catalog: Arc<Catalog>) -> Self {
        assert!(pool_size > 0, "pool_size must be > 0");

        let frames: Vec<Frame> = (0..pool_size).map(|_| Frame::new()).collect();

        Self {
            frames,
            page_table: RwLock::new(HashMap::new()),
            free_list: Mutex::new(Self::all_frames(pool_size)),
            replacer: Mutex::new(FifoReplacer::new()),
            catalog,
            stats: BufferPoolStats::new(),
            pool_size,
        }
    }

    /// Create a buffer pool with [`DEFAULT_POOL_SIZE`] frames.
    pub fn with_default_size(catalog: Arc<Catalog>) -> Self {
        Self::new(DEFAULT_POOL_SIZE, catalog)
    }

    // ========================================================================
    // Public API: Fetch pages
    // ========================================================================

    /// Fetch a page, loading it from its table on a miss.
    ///
    /// The returned handle stays valid even if the page is later evicted.
    ///
    /// # Errors
    /// - `Error::TableNotFound` if the page's table is not in the catalog
    /// - `Error::PageNotFound` if the table has no such page
    /// - `Error::NoFreeFrames` if no frame can be reclaimed
    pub fn fetch_page(&self, pid: HeapPageId) -> Result<Arc<HeapPage>> {
        let file = self.catalog.file(pid.table_id())?;

        // Fast path: read lock only
        {
            let pt = self.page_table.read();
            if let Some(page) = self.cached(&pt, pid, file.version()) {
                return Ok(page);
            }
        }

        self.handle_cache_miss(pid, &file)
    }

    /// Drop a page from the pool without touching its table.
    ///
    /// Readers holding the page keep their copy. Does nothing if the page is
    /// not cached.
    pub fn discard_page(&self, pid: HeapPageId) {
        let mut pt = self.page_table.write();

        let frame_id = match pt.remove(&pid) {
            Some(fid) => fid,
            None => return,
        };

        self.frames[frame_id.0].reset();
        self.free_list.lock().push(frame_id);
        self.replacer.lock().remove(frame_id);

        debug!("buffer pool: discarded {}", pid);
    }

    /// Drop every cached page and reset the statistics.
    pub fn clear(&self) {
        let mut pt = self.page_table.write();
        pt.clear();
        for frame in &self.frames {
            frame.reset();
        }
        *self.free_list.lock() = Self::all_frames(self.pool_size);
        *self.replacer.lock() = FifoReplacer::new();
        self.stats.reset();
    }

    // ========================================================================
    // Public API: Stats and info
    // ========================================================================

    pub fn stats(&self) -> &BufferPoolStats {
        &self.stats
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn free_frame_count(&self) -> usize {
        self.free_list.lock().len()
    }

    /// Number of pages currently cached.
    pub fn page_count(&self) -> usize {
        self.page_table.read().len()
    }

    /// Whether `pid` is currently cached.
    pub fn contains(&self, pid: HeapPageId) -> bool {
        self.page_table.read().contains_key(&pid)
    }

    // ========================================================================
    // Internal: Core fetch logic
    // ========================================================================

    /// Look `pid` up in the page table, counting a hit if a page of the
    /// given table version is cached.
    fn cached(
        &self,
        pt: &HashMap<HeapPageId, FrameId>,
        pid: HeapPageId,
        version: u64,
    ) -> Option<Arc<HeapPage>> {
        let frame_id = *pt.get(&pid)?;
        let page = self.frames[frame_id.0].page()?;
        if page.version() != version {
            return None;
        }
        self.stats.cache_hits.fetch_add(1, Ordering::Relaxed);
        Some(page)
    }

    /// Handle a cache miss: load the page, find a frame, update mappings.
    fn handle_cache_miss(&self, pid: HeapPageId, file: &HeapFile) -> Result<Arc<HeapPage>> {
        let page = Arc::new(file.read_page(pid)?);

        let mut pt = self.page_table.write();

        // Another thread may have loaded it while we were reading
        if let Some(cached) = self.cached(&pt, pid, file.version()) {
            return Ok(cached);
        }

        self.stats.cache_misses.fetch_add(1, Ordering::Relaxed);

        // A stale copy from a replaced table keeps its frame
        let frame_id = match pt.get(&pid) {
            Some(&frame_id) => {
                debug!("buffer pool: replacing stale {} in {}", pid, frame_id);
                frame_id
            }
            None => self.get_free_frame(&mut pt)?,
        };
        self.frames[frame_id.0].load(Arc::clone(&page));
        pt.insert(pid, frame_id);
        self.replacer.lock().record_access(frame_id);

        self.stats.pages_read.fetch_add(1, Ordering::Relaxed);
        debug!("buffer pool: loaded {} into {}", pid, frame_id);

        Ok(page)
    }

    // ========================================================================
    // Internal: Frame allocation and eviction
    // ========================================================================

    /// Get a free frame, evicting if necessary.
    fn get_free_frame(&self, pt: &mut HashMap<HeapPageId, FrameId>) -> Result<FrameId> {
        if let Some(frame_id) = self.free_list.lock().pop() {
            return Ok(frame_id);
        }

        self.evict_page(pt)
    }

    /// Evict a page and return its frame.
    fn evict_page(&self, pt: &mut HashMap<HeapPageId, FrameId>) -> Result<FrameId> {
        let frame_id = self.replacer.lock().evict().ok_or(Error::NoFreeFrames)?;

        self.stats.evictions.fetch_add(1, Ordering::Relaxed);

        let frame = &self.frames[frame_id.0];
        if let Some(old) = frame.page_id() {
            pt.remove(&old);
            debug!("buffer pool: evicted {} from {}", old, frame_id);
        }
        frame.reset();

        Ok(frame_id)
    }

    /// Every frame id, in LIFO order for the free list.
    fn all_frames(pool_size: usize) -> Vec<FrameId> {
        (0..pool_size).rev().map(FrameId::new).collect()
    }
}
