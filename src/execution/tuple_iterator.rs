//! In-memory leaf operator.

use super::operator::FetchNext;
use crate::common::Result;
use crate::tuple::{Tuple, TupleDesc};

/// Leaf operator that replays a fixed list of rows.
///
/// Handy for tests and for feeding literal values into a plan.
pub struct TupleIterator {
    desc: TupleDesc,
    tuples: Vec<Tuple>,
    pos: usize,
}

impl TupleIterator {
    pub fn new(desc: TupleDesc, tuples: Vec<Tuple>) -> Self {
        Self {
            desc,
            tuples,
            pos: 0,
        }
    }
}

impl FetchNext for TupleIterator {
    fn fetch_next(&mut self) -> Result<Option<Tuple>> {
        let tuple = self.tuples.get(self.pos).cloned();
        if tuple.is_some() {
            self.pos += 1;
        }
        Ok(tuple)
    }

    fn tuple_desc(&self) -> &TupleDesc {
        &self.desc
    }

    fn on_open(&mut self) -> Result<()> {
        self.pos = 0;
        Ok(())
    }

    fn on_rewind(&mut self) -> Result<()> {
        self.pos = 0;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tuple_iterator"
    }
}
