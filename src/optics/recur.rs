//! Recursive traversal of tree-shaped data.
//!
//! [`Recur`] applies a "step" traversal repeatedly: every focus the step
//! finds is first searched recursively, then visited itself. The update
//! function therefore runs post-order (children before their parent,
//! siblings left to right) and every parent sees its rebuilt children. The
//! results are reported pre-order: each parent's result comes ahead of the
//! results of its descendants. The walk stops where the step finds no
//! further foci.
//!
//! # Stack depth
//!
//! Each level of the data costs a few native stack frames, so recursion
//! depth scales with the nesting depth of the input. There is no internal
//! bound. Owned values cannot be cyclic, so the walk always terminates, but
//! very deep inputs can exhaust the stack.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Traversal, all, key};
//! use lenskit::{Value, atom};
//!
//! fn node(data: i64, items: Vec<Value>) -> Value {
//!     Value::map([(atom("data"), Value::from(data)), (atom("items"), Value::List(items))])
//! }
//!
//! let tree = node(1, vec![node(2, vec![]), node(3, vec![node(4, vec![])])]);
//! let data = key(atom("items")).compose(all()).recur().compose(key(atom("data")));
//!
//! assert_eq!(
//!     data.to_list(tree.clone()),
//!     Ok(vec![Value::from(2), Value::from(3), Value::from(4)])
//! );
//!
//! let mut invoked = Vec::new();
//! data.map(tree, |value| {
//!     invoked.push(value.clone());
//!     value
//! })
//! .unwrap();
//! assert_eq!(invoked, vec![Value::from(2), Value::from(4), Value::from(3)]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::basic::Root;
use super::compose::Both;
use super::traversal::{NestedVisit, Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::Result;

/// A Traversal that applies `step` recursively.
#[derive(Clone, PartialEq, Eq)]
pub struct Recur<T, D> {
    step: T,
    _marker: PhantomData<fn(D) -> D>,
}

impl<T, D> Recur<T, D> {
    /// Creates a new recursive traversal.
    #[must_use]
    pub const fn new(step: T) -> Self {
        Self {
            step,
            _marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, D> fmt::Debug for Recur<T, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Recur").field(&self.step).finish()
    }
}

impl<D, T> Traversal<D> for Recur<T, D>
where
    D: Container,
    T: Traversal<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        self.step.traverse(
            data,
            &mut NestedVisit::new(visit, |child, visit| {
                let mark = visit.recorded();
                let rebuilt = self.traverse(child, visit)?;
                let split = visit.recorded();
                let replacement = visit.visit(rebuilt)?;
                visit.hoist(mark, split);
                Ok(replacement)
            }),
        )
    }
}

/// Creates a [`Recur`] traversal.
#[must_use]
pub const fn recur<D, T>(step: T) -> Recur<T, D> {
    Recur::new(step)
}

/// Like [`recur`], finishing with the root itself.
#[must_use]
pub const fn recur_root<D, T>(step: T) -> Both<Recur<T, D>, Root, D> {
    Both::new(Recur::new(step), Root)
}
