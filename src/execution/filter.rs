//! Relational select.

use log::trace;

use super::operator::{DbIterator, FetchNext, Operator};
use super::predicate::{Predicate, TuplePredicate};
use crate::common::Result;
use crate::tuple::{Tuple, TupleDesc};

/// Passes through the rows of its child that satisfy a predicate.
///
/// Order is preserved and no projection happens: the output schema is the
/// child's schema. The predicate runs exactly once per row pulled from the
/// child, and rejected rows are consumed.
///
/// # Example
/// ```
/// use volcanodb::execution::{collect_tuples, DbIterator, FetchNext, Filter, Op, Predicate, TupleIterator};
/// use volcanodb::tuple::{Field, Tuple, TupleDesc};
///
/// let rows = (1..=5).map(|v| Tuple::new(vec![Field::Int(v)])).collect();
/// let scan = TupleIterator::new(TupleDesc::int_desc(1), rows).into_operator();
/// let predicate = Predicate::new(0, Op::GreaterThan, Field::Int(2));
///
/// let mut filter = Filter::new(predicate, Box::new(scan)).into_operator();
/// filter.open().unwrap();
/// assert_eq!(collect_tuples(&mut filter).unwrap().len(), 3);
/// filter.close().unwrap();
/// ```
pub struct Filter<P = Predicate> {
    predicate: P,
    child: Box<dyn DbIterator>,
}

impl<P: TuplePredicate> Filter<P> {
    pub fn new(predicate: P, child: Box<dyn DbIterator>) -> Self {
        Self { predicate, child }
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    pub fn child(&self) -> &dyn DbIterator {
        self.child.as_ref()
    }
}

impl<P: TuplePredicate> Operator<Filter<P>> {
    pub fn predicate(&self) -> &P {
        self.source().predicate()
    }

    pub fn child(&self) -> &dyn DbIterator {
        self.source().child()
    }

    /// Swap in a new child, returning the old one. Only allowed while closed.
    pub fn set_child(&mut self, child: Box<dyn DbIterator>) -> Result<Box<dyn DbIterator>> {
        self.replace_child(0, child)
    }
}

impl<P: TuplePredicate> FetchNext for Filter<P> {
    fn fetch_next(&mut self) -> Result<Option<Tuple>> {
        while self.child.has_next()? {
            let tuple = self.child.next()?;
            if self.predicate.filter(&tuple) {
                return Ok(Some(tuple));
            }
            trace!("filter: rejected {}", tuple);
        }
        Ok(None)
    }

    fn tuple_desc(&self) -> &TupleDesc {
        self.child.tuple_desc()
    }

    fn on_open(&mut self) -> Result<()> {
        self.child.open()
    }

    fn on_close(&mut self) -> Result<()> {
        self.child.close()
    }

    fn on_rewind(&mut self) -> Result<()> {
        self.child.rewind()
    }

    fn children(&self) -> Vec<&dyn DbIterator> {
        vec![self.child.as_ref()]
    }

    fn children_mut(&mut self) -> Vec<&mut Box<dyn DbIterator>> {
        vec![&mut self.child]
    }

    fn name(&self) -> &'static str {
        "filter"
    }
}
