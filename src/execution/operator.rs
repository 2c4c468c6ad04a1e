//! The pull-based operator protocol.
//!
//! Every operator exposes the same five calls through [`DbIterator`]:
//! `open`, `close`, `rewind`, `has_next` and `next`. Concrete operators only
//! implement [`FetchNext`]; the generic [`Operator`] driver wraps them and
//! owns the lifecycle flag and the one-row lookahead slot.
//!
//! # Lifecycle
//! ```text
//!            open()                 has_next() / next() / rewind()
//!  Closed ───────────▶ Open ◀──────────────────────────────────┐
//!    ▲                  │ └────────────────────────────────────┘
//!    └───── close() ────┘
//! ```
//!
//! Children are opened before their parent is marked open. On close the
//! parent is marked closed and drops its lookahead first, then closes its
//! children.

use log::trace;

use crate::common::{Error, Result};
use crate::tuple::{Tuple, TupleDesc};

/// Public protocol shared by every operator in a query tree.
///
/// Parents hold their children as `Box<dyn DbIterator>`, so any
/// implementation can be plugged into a plan.
pub trait DbIterator: Send {
    /// Prepare to produce rows. Opens children first.
    ///
    /// # Errors
    /// - `Error::AlreadyOpen` if called twice without `close()`
    /// - any error raised while opening a child
    fn open(&mut self) -> Result<()>;

    /// Release this operator and, transitively, its children.
    ///
    /// # Errors
    /// `Error::NotOpen` if the operator is not open.
    fn close(&mut self) -> Result<()>;

    /// Restart from the first row without rebuilding the operator.
    ///
    /// # Errors
    /// `Error::NotOpen` if the operator is not open.
    fn rewind(&mut self) -> Result<()>;

    /// Whether the next call to `next()` will yield a row. Does not consume it.
    ///
    /// # Errors
    /// `Error::NotOpen` if the operator is not open.
    fn has_next(&mut self) -> Result<bool>;

    /// Return the next row.
    ///
    /// # Errors
    /// - `Error::NotOpen` if the operator is not open
    /// - `Error::NoSuchElement` if no row is left
    fn next(&mut self) -> Result<Tuple>;

    /// Schema of the rows this operator produces.
    fn tuple_desc(&self) -> &TupleDesc;

    /// Direct inputs of this operator, for plan inspection.
    fn children(&self) -> Vec<&dyn DbIterator> {
        Vec::new()
    }
}

/// The per-operator extension point.
///
/// Implementors produce rows one at a time and manage their own children;
/// they never see the lookahead slot or the open flag.
pub trait FetchNext: Send {
    /// Produce the next row, or `None` once exhausted.
    ///
    /// Only called while the operator is open. After returning `None` it
    /// must keep returning `None` until `on_rewind()`.
    fn fetch_next(&mut self) -> Result<Option<Tuple>>;

    /// Schema of the produced rows.
    fn tuple_desc(&self) -> &TupleDesc;

    /// Open children and acquire per-run state.
    fn on_open(&mut self) -> Result<()> {
        Ok(())
    }

    /// Release per-run state and close children.
    fn on_close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Reset to the first row, rewinding children.
    fn on_rewind(&mut self) -> Result<()>;

    fn children(&self) -> Vec<&dyn DbIterator> {
        Vec::new()
    }

    /// Mutable child slots, in the same order as `children()`.
    fn children_mut(&mut self) -> Vec<&mut Box<dyn DbIterator>> {
        Vec::new()
    }

    /// Short operator name used in log lines.
    fn name(&self) -> &'static str;

    /// Wrap this operator kind in the generic driver.
    fn into_operator(self) -> Operator<Self>
    where
        Self: Sized,
    {
        Operator::new(self)
    }
}

/// Generic driver that turns a [`FetchNext`] into a full [`DbIterator`].
///
/// # State
/// - `open`: lifecycle flag; everything but `open()` requires it set
/// - `lookahead`: at most one row already pulled from `fetch_next` but not
///   yet returned by `next()`
pub struct Operator<S> {
    source: S,
    open: bool,
    lookahead: Option<Tuple>,
}

impl<S: FetchNext> Operator<S> {
    /// Create a closed operator.
    pub fn new(source: S) -> Self {
        Self {
            source,
            open: false,
            lookahead: None,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The row buffered by the last `has_next()`, if any.
    #[inline]
    pub fn lookahead(&self) -> Option<&Tuple> {
        self.lookahead.as_ref()
    }

    /// The wrapped operator kind.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Swap the child at `index` for `child`, returning the old one.
    ///
    /// Used by plan rewrites. Only allowed while closed.
    ///
    /// # Errors
    /// - `Error::AlreadyOpen` if the operator is open
    /// - `Error::NoSuchChild` if `index` is out of range
    pub fn replace_child(
        &mut self,
        index: usize,
        child: Box<dyn DbIterator>,
    ) -> Result<Box<dyn DbIterator>> {
        if self.open {
            return Err(Error::AlreadyOpen);
        }
        let mut slots = self.source.children_mut();
        if index >= slots.len() {
            return Err(Error::NoSuchChild(index));
        }
        Ok(std::mem::replace(slots.swap_remove(index), child))
    }

    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(Error::NotOpen)
        }
    }
}

impl<S: FetchNext> DbIterator for Operator<S> {
    fn open(&mut self) -> Result<()> {
        if self.open {
            return Err(Error::AlreadyOpen);
        }
        self.source.on_open()?;
        self.lookahead = None;
        self.open = true;
        trace!("{}: opened", self.source.name());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.open = false;
        self.lookahead = None;
        trace!("{}: closed", self.source.name());
        self.source.on_close()
    }

    fn rewind(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.lookahead = None;
        trace!("{}: rewind", self.source.name());
        self.source.on_rewind()
    }

    fn has_next(&mut self) -> Result<bool> {
        self.ensure_open()?;
        if self.lookahead.is_none() {
            self.lookahead = self.source.fetch_next()?;
        }
        Ok(self.lookahead.is_some())
    }

    fn next(&mut self) -> Result<Tuple> {
        if !self.has_next()? {
            return Err(Error::NoSuchElement);
        }
        self.lookahead.take().ok_or(Error::NoSuchElement)
    }

    fn tuple_desc(&self) -> &TupleDesc {
        self.source.tuple_desc()
    }

    fn children(&self) -> Vec<&dyn DbIterator> {
        self.source.children()
    }
}

/// Drain every remaining row of an open operator.
pub fn collect_tuples(op: &mut dyn DbIterator) -> Result<Vec<Tuple>> {
    let mut tuples = Vec::new();
    while op.has_next()? {
        tuples.push(op.next()?);
    }
    Ok(tuples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::Field;

    /// Counts up to `limit`, recording how often `fetch_next` ran.
    struct Counter {
        desc: TupleDesc,
        next: i32,
        limit: i32,
        fetches: usize,
    }

    impl Counter {
        fn new(limit: i32) -> Self {
            Self {
                desc: TupleDesc::int_desc(1),
                next: 0,
                limit,
                fetches: 0,
            }
        }
    }

    impl FetchNext for Counter {
        fn fetch_next(&mut self) -> Result<Option<Tuple>> {
            self.fetches += 1;
            if self.next >= self.limit {
                return Ok(None);
            }
            self.next += 1;
            Ok(Some(Tuple::new(vec![Field::Int(self.next)])))
        }

        fn tuple_desc(&self) -> &TupleDesc {
            &self.desc
        }

        fn on_rewind(&mut self) -> Result<()> {
            self.next = 0;
            Ok(())
        }

        fn name(&self) -> &'static str {
            "counter"
        }
    }

    fn int_at(t: &Tuple) -> i32 {
        match t.field(0) {
            Some(Field::Int(v)) => *v,
            other => panic!("unexpected field {:?}", other),
        }
    }

    #[test]
    fn test_starts_closed() {
        let op = Counter::new(3).into_operator();
        assert!(!op.is_open());
        assert!(op.lookahead().is_none());
    }

    #[test]
    fn test_full_iteration() {
        let mut op = Counter::new(3).into_operator();
        op.open().unwrap();
        let rows: Vec<i32> = collect_tuples(&mut op).unwrap().iter().map(int_at).collect();
        assert_eq!(rows, vec![1, 2, 3]);
        op.close().unwrap();
    }

    #[test]
    fn test_has_next_buffers_one_row() {
        let mut op = Counter::new(3).into_operator();
        op.open().unwrap();

        assert!(op.has_next().unwrap());
        assert!(op.has_next().unwrap());
        assert!(op.has_next().unwrap());

        // repeated has_next pulls only once
        assert_eq!(op.source().fetches, 1);
        assert_eq!(op.lookahead().map(int_at), Some(1));

        assert_eq!(int_at(&op.next().unwrap()), 1);
        assert!(op.lookahead().is_none());
        assert_eq!(int_at(&op.next().unwrap()), 2);
    }

    #[test]
    fn test_next_without_has_next() {
        let mut op = Counter::new(2).into_operator();
        op.open().unwrap();
        assert_eq!(int_at(&op.next().unwrap()), 1);
        assert_eq!(int_at(&op.next().unwrap()), 2);
        assert!(matches!(op.next(), Err(Error::NoSuchElement)));
    }

    #[test]
    fn test_exhaustion_is_stable() {
        let mut op = Counter::new(1).into_operator();
        op.open().unwrap();
        op.next().unwrap();
        for _ in 0..5 {
            assert!(!op.has_next().unwrap());
        }
        assert!(matches!(op.next(), Err(Error::NoSuchElement)));
    }

    #[test]
    fn test_rewind_clears_lookahead() {
        let mut op = Counter::new(3).into_operator();
        op.open().unwrap();
        op.next().unwrap();
        assert!(op.has_next().unwrap());
        assert_eq!(op.lookahead().map(int_at), Some(2));

        op.rewind().unwrap();
        assert!(op.lookahead().is_none());
        assert_eq!(int_at(&op.next().unwrap()), 1);
    }

    #[test]
    fn test_lifecycle_errors() {
        let mut op = Counter::new(3).into_operator();

        assert!(matches!(op.has_next(), Err(Error::NotOpen)));
        assert!(matches!(op.next(), Err(Error::NotOpen)));
        assert!(matches!(op.rewind(), Err(Error::NotOpen)));
        assert!(matches!(op.close(), Err(Error::NotOpen)));

        op.open().unwrap();
        assert!(matches!(op.open(), Err(Error::AlreadyOpen)));

        op.close().unwrap();
        assert!(matches!(op.has_next(), Err(Error::NotOpen)));
        assert!(matches!(op.next(), Err(Error::NotOpen)));
        assert!(matches!(op.rewind(), Err(Error::NotOpen)));
    }

    #[test]
    fn test_reopen_after_close() {
        let mut op = Counter::new(2).into_operator();
        op.open().unwrap();
        assert!(op.has_next().unwrap());
        op.close().unwrap();
        assert!(op.lookahead().is_none());

        op.open().unwrap();
        assert!(op.is_open());
    }

    #[test]
    fn test_replace_child_on_leaf() {
        let mut op = Counter::new(1).into_operator();
        let other = Box::new(Counter::new(1).into_operator());
        assert!(matches!(
            op.replace_child(0, other),
            Err(Error::NoSuchChild(0))
        ));
    }
}
