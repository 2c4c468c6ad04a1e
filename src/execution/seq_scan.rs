//! Table scan through the buffer pool.

use std::sync::Arc;

use log::debug;

use super::operator::FetchNext;
use crate::buffer::BufferPool;
use crate::common::{HeapPageId, Result};
use crate::storage::HeapPage;
use crate::tuple::{Tuple, TupleDesc};

/// Leaf operator that reads every row of a table in page order.
///
/// Pages are fetched one at a time from the [`BufferPool`], so a scan over
/// a table larger than the pool evicts its own earlier pages as it goes.
/// Column names in the output schema are prefixed with `alias.`; an empty
/// alias leaves them unchanged.
///
/// Schema and page count are re-read from the catalog on every `open()`, so
/// a table replaced while the scan is closed is seen in full on reopen.
pub struct SeqScan {
    pool: Arc<BufferPool>,
    table_id: i32,
    alias: String,
    desc: TupleDesc,
    num_pages: i32,

    /// Next page to fetch once `page` runs out.
    next_page: i32,
    page: Option<Arc<HeapPage>>,
    slot: usize,
}

impl SeqScan {
    /// Scan table `table_id` as `alias`.
    ///
    /// # Errors
    /// `Error::TableNotFound` if the catalog has no such table.
    pub fn new(pool: Arc<BufferPool>, table_id: i32, alias: &str) -> Result<Self> {
        let file = pool.catalog().file(table_id)?;
        let desc = file.tuple_desc().with_alias(alias);
        let num_pages = file.num_pages();

        Ok(Self {
            pool,
            table_id,
            alias: alias.to_string(),
            desc,
            num_pages,
            next_page: 0,
            page: None,
            slot: 0,
        })
    }

    #[inline]
    pub fn table_id(&self) -> i32 {
        self.table_id
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    fn reset(&mut self) {
        self.next_page = 0;
        self.page = None;
        self.slot = 0;
    }
}

impl FetchNext for SeqScan {
    fn fetch_next(&mut self) -> Result<Option<Tuple>> {
        loop {
            if let Some(page) = &self.page {
                if let Some(tuple) = page.tuple(self.slot) {
                    self.slot += 1;
                    return Ok(Some(tuple.clone()));
                }
                self.page = None;
            }

            if self.next_page >= self.num_pages {
                return Ok(None);
            }

            let pid = HeapPageId::new(self.table_id, self.next_page);
            self.page = Some(self.pool.fetch_page(pid)?);
            self.next_page += 1;
            self.slot = 0;
        }
    }

    fn tuple_desc(&self) -> &TupleDesc {
        &self.desc
    }

    fn on_open(&mut self) -> Result<()> {
        // Pick up a table that was replaced in the catalog since construction
        let file = self.pool.catalog().file(self.table_id)?;
        self.desc = file.tuple_desc().with_alias(&self.alias);
        self.num_pages = file.num_pages();
        self.reset();
        debug!(
            "seq_scan: table {} as '{}', {} pages",
            self.table_id, self.alias, self.num_pages
        );
        Ok(())
    }

    fn on_close(&mut self) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn on_rewind(&mut self) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "seq_scan"
    }
}
