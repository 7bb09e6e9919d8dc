//! Filtered traversals for conditional element access.
//!
//! A filtered traversal skips foci entirely: a skipped focus is not passed
//! to the update function, produces no result and is left unchanged.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Traversal, all};
//! use lenskit::Value;
//!
//! let is_odd = |value: &Value| value.as_int().is_some_and(|number| number % 2 != 0);
//!
//! let result = all()
//!     .filter(is_odd)
//!     .map(Value::list([1, 2, 3, 4]), |x| Value::Int(x.as_int().unwrap_or(0) + 10));
//! assert_eq!(result, Ok(Value::list([11, 2, 13, 4])));
//!
//! let result = all()
//!     .reject(is_odd)
//!     .to_list(Value::list([1, 2, 3, 4]));
//! assert_eq!(result, Ok(vec![Value::from(2), Value::from(4)]));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::traversal::{NestedVisit, Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::Result;

/// A Traversal that only visits foci whose predicate outcome matches.
pub struct Filtered<T, P, D> {
    inner: T,
    predicate: P,
    retain: bool,
    _marker: PhantomData<fn(D) -> D>,
}

impl<T, P, D> Filtered<T, P, D> {
    /// Visits the foci of `inner` satisfying `predicate`.
    #[must_use]
    pub const fn retaining(inner: T, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            retain: true,
            _marker: PhantomData,
        }
    }

    /// Visits the foci of `inner` not satisfying `predicate`.
    #[must_use]
    pub const fn rejecting(inner: T, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            retain: false,
            _marker: PhantomData,
        }
    }
}

impl<T: Clone, P: Clone, D> Clone for Filtered<T, P, D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            predicate: self.predicate.clone(),
            retain: self.retain,
            _marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, P, D> fmt::Debug for Filtered<T, P, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filtered")
            .field("inner", &self.inner)
            .field("retain", &self.retain)
            .finish_non_exhaustive()
    }
}

impl<D, T, P> Traversal<D> for Filtered<T, P, D>
where
    D: Container,
    T: Traversal<D>,
    P: Fn(&D) -> bool,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        self.inner.traverse(
            data,
            &mut NestedVisit::new(visit, |focus, visit| {
                if (self.predicate)(&focus) == self.retain {
                    visit.visit(focus)
                } else {
                    Ok(focus)
                }
            }),
        )
    }
}

/// Creates a [`Filtered`] traversal keeping the foci of `inner` that
/// satisfy `predicate`.
#[must_use]
pub const fn filter<D, T, P>(inner: T, predicate: P) -> Filtered<T, P, D>
where
    D: Container,
    T: Traversal<D>,
    P: Fn(&D) -> bool,
{
    Filtered::retaining(inner, predicate)
}

/// Creates a [`Filtered`] traversal dropping the foci of `inner` that
/// satisfy `predicate`.
#[must_use]
pub const fn reject<D, T, P>(inner: T, predicate: P) -> Filtered<T, P, D>
where
    D: Container,
    T: Traversal<D>,
    P: Fn(&D) -> bool,
{
    Filtered::rejecting(inner, predicate)
}
