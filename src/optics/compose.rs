//! Composition combinators.
//!
//! - [`Seq`]: the foci of the second traversal inside every focus of the first
//! - [`Both`]: the foci of the first traversal, then those of the second
//! - [`SeqBoth`]: the nested foci of a [`Seq`], then the outer foci
//! - [`Either`]: the foci of the first traversal, or of a fallback when
//!   there are none
//! - [`multiple`]: [`Both`] folded over any number of traversals
//!
//! Every combinator that runs one traversal after another feeds the data
//! already rebuilt by the earlier one into the later one. A later traversal
//! must therefore be valid against the earlier one's output shape.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Traversal, all, both, key};
//! use lenskit::{Value, atom};
//!
//! let data = Value::map([(atom("a"), 1), (atom("b"), 2)]);
//! assert_eq!(
//!     both(key(atom("a")), key(atom("b"))).to_list(data),
//!     Ok(vec![Value::from(1), Value::from(2)])
//! );
//!
//! let nested = Value::list([Value::list([1, 2]), Value::list([3])]);
//! assert_eq!(
//!     all().compose(all()).to_list(nested),
//!     Ok(vec![Value::from(1), Value::from(2), Value::from(3)])
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::basic::Empty;
use super::traversal::{Lens, NestedVisit, Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::Result;

// =============================================================================
// Seq
// =============================================================================

/// A Traversal composed of two Traversals, the second applied inside every
/// focus of the first.
///
/// Results are ordered by the first traversal's foci, each followed by the
/// nested foci of the second.
#[derive(Clone, PartialEq, Eq)]
pub struct Seq<T1, T2, D> {
    first: T1,
    second: T2,
    _marker: PhantomData<fn(D) -> D>,
}

impl<T1, T2, D> Seq<T1, T2, D> {
    /// Creates a new sequential composition.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<T1: fmt::Debug, T2: fmt::Debug, D> fmt::Debug for Seq<T1, T2, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Seq")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<D, T1, T2> Traversal<D> for Seq<T1, T2, D>
where
    D: Container,
    T1: Traversal<D>,
    T2: Traversal<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        self.first.traverse(
            data,
            &mut NestedVisit::new(visit, |focus, visit| self.second.traverse(focus, visit)),
        )
    }
}

/// Creates a [`Seq`] composition.
#[must_use]
pub const fn seq<D, T1, T2>(first: T1, second: T2) -> Seq<T1, T2, D> {
    Seq::new(first, second)
}

// =============================================================================
// Both
// =============================================================================

/// A Traversal visiting the foci of two Traversals one after the other.
///
/// The second traversal runs against the data already rebuilt by the first.
#[derive(Clone, PartialEq, Eq)]
pub struct Both<T1, T2, D> {
    first: T1,
    second: T2,
    _marker: PhantomData<fn(D) -> D>,
}

impl<T1, T2, D> Both<T1, T2, D> {
    /// Creates a new parallel composition.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<T1: fmt::Debug, T2: fmt::Debug, D> fmt::Debug for Both<T1, T2, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Both")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<D, T1, T2> Traversal<D> for Both<T1, T2, D>
where
    D: Container,
    T1: Traversal<D>,
    T2: Traversal<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        let data = self.first.traverse(data, &mut *visit)?;
        self.second.traverse(data, visit)
    }
}

/// Creates a [`Both`] composition.
#[must_use]
pub const fn both<D, T1, T2>(first: T1, second: T2) -> Both<T1, T2, D> {
    Both::new(first, second)
}

/// Visits the foci of every traversal in list order.
///
/// Built as a right fold of [`Both`] seeded with [`Empty`], so each
/// traversal sees the data rebuilt by all the traversals before it.
pub fn multiple<D, I>(traversals: I) -> Lens<D>
where
    D: Container,
    I: IntoIterator<Item = Lens<D>>,
    I::IntoIter: DoubleEndedIterator,
{
    traversals
        .into_iter()
        .rev()
        .fold(Lens::new(Empty), |rest, traversal| {
            Lens::new(Both::new(traversal, rest))
        })
}

// =============================================================================
// SeqBoth
// =============================================================================

/// The nested foci of `first.compose(second)`, followed by the foci of
/// `first` itself.
///
/// The outer foci are read from the data already rebuilt by the nested
/// pass.
#[derive(Clone, PartialEq, Eq)]
pub struct SeqBoth<T1, T2, D> {
    first: T1,
    second: T2,
    _marker: PhantomData<fn(D) -> D>,
}

impl<T1, T2, D> SeqBoth<T1, T2, D> {
    /// Creates a new `SeqBoth`.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<T1: fmt::Debug, T2: fmt::Debug, D> fmt::Debug for SeqBoth<T1, T2, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SeqBoth")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<D, T1, T2> Traversal<D> for SeqBoth<T1, T2, D>
where
    D: Container,
    T1: Traversal<D>,
    T2: Traversal<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        let data = self.first.traverse(
            data,
            &mut NestedVisit::new(&mut *visit, |focus, visit| {
                self.second.traverse(focus, visit)
            }),
        )?;
        self.first.traverse(data, visit)
    }
}

/// Creates a [`SeqBoth`] composition.
#[must_use]
pub const fn seq_both<D, T1, T2>(first: T1, second: T2) -> SeqBoth<T1, T2, D> {
    SeqBoth::new(first, second)
}

// =============================================================================
// Either
// =============================================================================

/// The foci of `primary`, or the foci of `fallback` when `primary` has none.
///
/// The fallback runs against the original data.
#[derive(Clone, PartialEq, Eq)]
pub struct Either<T1, T2, D> {
    primary: T1,
    fallback: T2,
    _marker: PhantomData<fn(D) -> D>,
}

impl<T1, T2, D> Either<T1, T2, D> {
    /// Creates a new `Either`.
    #[must_use]
    pub const fn new(primary: T1, fallback: T2) -> Self {
        Self {
            primary,
            fallback,
            _marker: PhantomData,
        }
    }
}

impl<T1: fmt::Debug, T2: fmt::Debug, D> fmt::Debug for Either<T1, T2, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Either")
            .field("primary", &self.primary)
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl<D, T1, T2> Traversal<D> for Either<T1, T2, D>
where
    D: Container,
    T1: Traversal<D>,
    T2: Traversal<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        let original = data.clone();
        let mut visited = 0_usize;
        let updated = self.primary.traverse(
            data,
            &mut NestedVisit::new(&mut *visit, |focus, visit| {
                visited += 1;
                visit.visit(focus)
            }),
        )?;
        if visited == 0 {
            self.fallback.traverse(original, visit)
        } else {
            Ok(updated)
        }
    }
}

/// Creates an [`Either`] traversal.
#[must_use]
pub const fn either<D, T1, T2>(primary: T1, fallback: T2) -> Either<T1, T2, D> {
    Either::new(primary, fallback)
}
