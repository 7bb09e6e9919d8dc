//! The traversal protocol.
//!
//! A [`Traversal`] describes where to look inside a value and how to rebuild
//! it afterwards. It has one required method, [`Traversal::traverse`], which
//! walks every focus in order, hands each one to a visitor and rebuilds the
//! data from the visitor's replacements. Reading and updating both go
//! through this method, so the two modes cannot diverge.
//!
//! # Laws
//!
//! 1. **Invocation Law**: the visitor is invoked exactly once per focus, and
//!    `get_and_map` returns exactly one result per invocation. Results come
//!    in invocation order, except under `recur`, which invokes children
//!    before their parent but reports each parent ahead of its descendants.
//! 2. **Identity Law**: `traversal.map(data, |x| x) == Ok(data)` whenever the
//!    traversal succeeds.
//! 3. **Associativity Law**: `seq(seq(a, b), c)` and `seq(a, seq(b, c))`
//!    produce identical results and updated data.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Traversal, all, key};
//! use lenskit::{Value, atom};
//!
//! let data = Value::map([(atom("scores"), Value::list([1, 2, 3]))]);
//! let scores = key(atom("scores")).compose(all());
//!
//! assert_eq!(
//!     scores.to_list(data.clone()),
//!     Ok(vec![Value::from(1), Value::from(2), Value::from(3)])
//! );
//!
//! let bumped = scores.map(data, |score| Value::Int(score.as_int().unwrap_or(0) + 10));
//! assert_eq!(
//!     bumped,
//!     Ok(Value::map([(atom("scores"), Value::list([11, 12, 13]))]))
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use super::compose::{Both, Either, Seq, SeqBoth};
use super::filtered::Filtered;
use super::into::IntoContainer;
use super::recur::Recur;
use crate::container::Container;
use crate::error::{OpticsError, Result};

/// The receiver a traversal hands each focus to.
///
/// Besides returning a replacement for every focus, a visitor keeps the
/// ordered log of results produced so far. Combinators that report foci in
/// a different order than they visit them (see [`Recur`]) reorder that log
/// through [`Visitor::recorded`] and [`Visitor::hoist`].
pub trait Visitor<D> {
    /// Receives a focus and returns its replacement.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the update function.
    fn visit(&mut self, focus: D) -> Result<D>;

    /// Returns the number of results recorded so far.
    fn recorded(&self) -> usize;

    /// Moves the results recorded from position `split` onward to position
    /// `mark`, keeping their relative order. Positions out of order or past
    /// the end leave the log unchanged.
    fn hoist(&mut self, mark: usize, split: usize);
}

/// The visitor as passed to [`Traversal::traverse`].
pub type Visit<'a, D> = dyn Visitor<D> + 'a;

/// A visitor that runs `body` on each focus and shares the result log of an
/// outer visitor.
///
/// Combinators use it to intercept foci before they reach the outer visitor.
///
/// # Example
///
/// ```
/// use lenskit::optics::{Lens, NestedVisit, Traversal, Visitor, all};
/// use lenskit::Value;
///
/// // Visits only the first element of any list.
/// let first = Lens::from_fn("first", |data: Value, visit| {
///     let mut seen = false;
///     all().traverse(data, &mut NestedVisit::new(visit, |focus, visit| {
///         if seen {
///             Ok(focus)
///         } else {
///             seen = true;
///             visit.visit(focus)
///         }
///     }))
/// });
/// assert_eq!(first.to_list(Value::list([1, 2, 3])), Ok(vec![Value::from(1)]));
/// ```
pub struct NestedVisit<'v, 'w, D, F> {
    outer: &'v mut Visit<'w, D>,
    body: F,
}

impl<'v, 'w, D, F> NestedVisit<'v, 'w, D, F>
where
    F: FnMut(D, &mut Visit<'_, D>) -> Result<D>,
{
    /// Wraps `outer`, routing every focus through `body`.
    pub fn new(outer: &'v mut Visit<'w, D>, body: F) -> Self {
        Self { outer, body }
    }
}

impl<D, F> Visitor<D> for NestedVisit<'_, '_, D, F>
where
    F: FnMut(D, &mut Visit<'_, D>) -> Result<D>,
{
    fn visit(&mut self, focus: D) -> Result<D> {
        (self.body)(focus, &mut *self.outer)
    }

    fn recorded(&self) -> usize {
        self.outer.recorded()
    }

    fn hoist(&mut self, mark: usize, split: usize) {
        self.outer.hoist(mark, split);
    }
}

/// The visitor at the root of every application: calls the update function
/// and records its results.
struct Recorder<R, F> {
    function: F,
    results: Vec<R>,
}

impl<D, R, F> Visitor<D> for Recorder<R, F>
where
    F: FnMut(D) -> Result<(R, D)>,
{
    fn visit(&mut self, focus: D) -> Result<D> {
        let (result, replacement) = (self.function)(focus)?;
        self.results.push(result);
        Ok(replacement)
    }

    fn recorded(&self) -> usize {
        self.results.len()
    }

    fn hoist(&mut self, mark: usize, split: usize) {
        if mark <= split && split <= self.results.len() {
            self.results[mark..].rotate_left(split - mark);
        }
    }
}

/// A composable descriptor of foci inside a value of type `D`.
///
/// Implementations must express `traverse` purely in terms of `traverse`
/// calls on their sub-traversals plus [`Container`] calls on the data.
///
/// # Type Parameters
///
/// - `D`: The data model being traversed
pub trait Traversal<D: Container>: fmt::Debug {
    /// Visits every focus of `data` in order and rebuilds it from the
    /// visitor's replacements.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a container capability or by the
    /// visitor.
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D>;

    /// Applies the traversal with a fallible update function.
    ///
    /// `function` maps each focus to a `(result, replacement)` pair. Returns
    /// one result per invocation, in focus order, together with the rebuilt
    /// data.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a container capability or by
    /// `function`.
    fn try_get_and_map<R, F>(&self, data: D, function: F) -> Result<(Vec<R>, D)>
    where
        Self: Sized,
        F: FnMut(D) -> Result<(R, D)>,
    {
        let span = tracing::trace_span!("traversal", traversal = ?self);
        let _entered = span.enter();

        let mut recorder = Recorder {
            function,
            results: Vec::new(),
        };
        match self.traverse(data, &mut recorder) {
            Ok(updated) => {
                tracing::trace!(foci = recorder.results.len(), "traversal applied");
                Ok((recorder.results, updated))
            }
            Err(error) => {
                tracing::debug!(%error, visited = recorder.results.len(), "traversal failed");
                Err(error)
            }
        }
    }

    /// Applies the traversal with an update function returning
    /// `(result, replacement)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a container capability.
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::{Traversal, all};
    /// use lenskit::Value;
    ///
    /// let (old, updated) = all()
    ///     .get_and_map(Value::list([1, 2]), |x| (x, Value::Nil))
    ///     .unwrap();
    /// assert_eq!(old, vec![Value::from(1), Value::from(2)]);
    /// assert_eq!(updated, Value::list([Value::Nil, Value::Nil]));
    /// ```
    fn get_and_map<R, F>(&self, data: D, mut function: F) -> Result<(Vec<R>, D)>
    where
        Self: Sized,
        F: FnMut(D) -> (R, D),
    {
        self.try_get_and_map(data, |focus| Ok(function(focus)))
    }

    /// Returns every focus in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a container capability.
    fn to_list(&self, data: D) -> Result<Vec<D>>
    where
        Self: Sized,
    {
        self.try_get_and_map(data, |focus| Ok((focus.clone(), focus)))
            .map(|(results, _)| results)
    }

    /// Replaces every focus with `function(focus)` and returns the rebuilt
    /// data.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a container capability.
    fn map<F>(&self, data: D, mut function: F) -> Result<D>
    where
        Self: Sized,
        F: FnMut(D) -> D,
    {
        self.try_get_and_map(data, |focus| Ok(((), function(focus))))
            .map(|(_, updated)| updated)
    }

    /// Like [`Traversal::map`], with a fallible function.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a container capability or by
    /// `function`.
    fn try_map<F>(&self, data: D, mut function: F) -> Result<D>
    where
        Self: Sized,
        F: FnMut(D) -> Result<D>,
    {
        self.try_get_and_map(data, |focus| function(focus).map(|replacement| ((), replacement)))
            .map(|(_, updated)| updated)
    }

    /// Calls `function` on every focus, in [`Traversal::to_list`] order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a container capability.
    fn each<F>(&self, data: D, function: F) -> Result<()>
    where
        Self: Sized,
        F: FnMut(D),
    {
        self.to_list(data)?.into_iter().for_each(function);
        Ok(())
    }

    /// Returns the single focus.
    ///
    /// # Errors
    ///
    /// Returns [`OpticsError::ArityViolation`] unless exactly one focus is
    /// visited.
    fn one(&self, data: D) -> Result<D>
    where
        Self: Sized,
    {
        match <[D; 1]>::try_from(self.to_list(data)?) {
            Ok([focus]) => Ok(focus),
            Err(foci) => Err(OpticsError::ArityViolation { found: foci.len() }),
        }
    }

    /// Sequential composition: visits the foci of `next` inside every focus
    /// of `self`.
    fn compose<T>(self, next: T) -> Seq<Self, T, D>
    where
        Self: Sized,
        T: Traversal<D>,
    {
        Seq::new(self, next)
    }

    /// Parallel composition: the foci of `self`, then the foci of `other`
    /// in the data already rebuilt by `self`.
    fn both<T>(self, other: T) -> Both<Self, T, D>
    where
        Self: Sized,
        T: Traversal<D>,
    {
        Both::new(self, other)
    }

    /// The nested foci of `self.compose(next)`, then the foci of `self`.
    fn seq_both<T>(self, next: T) -> SeqBoth<Self, T, D>
    where
        Self: Sized,
        T: Traversal<D>,
    {
        SeqBoth::new(self, next)
    }

    /// The foci of `self`, or those of `fallback` when `self` has none.
    fn either<T>(self, fallback: T) -> Either<Self, T, D>
    where
        Self: Sized,
        T: Traversal<D>,
    {
        Either::new(self, fallback)
    }

    /// Keeps only the foci satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filtered<Self, P, D>
    where
        Self: Sized,
        P: Fn(&D) -> bool,
    {
        Filtered::retaining(self, predicate)
    }

    /// Drops the foci satisfying `predicate`.
    fn reject<P>(self, predicate: P) -> Filtered<Self, P, D>
    where
        Self: Sized,
        P: Fn(&D) -> bool,
    {
        Filtered::rejecting(self, predicate)
    }

    /// Rebuilds the data into `target` instead of the default container.
    fn into_container(self, target: D) -> IntoContainer<Self, D>
    where
        Self: Sized,
    {
        IntoContainer::new(self, target)
    }

    /// Applies `self` recursively, invoking the update function on
    /// descendants before ancestors and reporting ancestors first.
    fn recur(self) -> Recur<Self, D>
    where
        Self: Sized,
    {
        Recur::new(self)
    }

    /// Erases the concrete type behind a [`Lens`].
    fn boxed(self) -> Lens<D>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Lens::new(self)
    }
}

// =============================================================================
// Lens - type-erased traversal handle
// =============================================================================

/// A cheaply clonable, thread-safe handle to any traversal.
///
/// Use it when traversals of different concrete types must be stored
/// together, as in [`multiple`](super::multiple), or returned from a
/// [`matching`](super::matching) selector.
pub struct Lens<D: Container> {
    traversal: Arc<dyn Traversal<D> + Send + Sync>,
}

impl<D: Container> Lens<D> {
    /// Wraps a traversal.
    pub fn new<T>(traversal: T) -> Self
    where
        T: Traversal<D> + Send + Sync + 'static,
    {
        Self {
            traversal: Arc::new(traversal),
        }
    }

    /// Declares a primitive traversal from a raw body.
    ///
    /// `body` receives the data and the visitor and must return the rebuilt
    /// data, invoking the visitor once per focus. `name` is used for
    /// `Debug` output and tracing.
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::{Lens, Traversal, Visitor};
    /// use lenskit::Value;
    ///
    /// // Focuses on the data twice, threading the first replacement.
    /// let twice = Lens::from_fn("twice", |data: Value, visit| {
    ///     let data = visit.visit(data)?;
    ///     visit.visit(data)
    /// });
    /// let result = twice.map(Value::from(1), |x| Value::Int(x.as_int().unwrap_or(0) * 3));
    /// assert_eq!(result, Ok(Value::from(9)));
    /// ```
    pub fn from_fn<F>(name: &'static str, body: F) -> Self
    where
        F: for<'v> Fn(D, &mut Visit<'v, D>) -> Result<D> + Send + Sync + 'static,
    {
        Self::new(FnTraversal { name, body })
    }
}

impl<D: Container> Clone for Lens<D> {
    fn clone(&self) -> Self {
        Self {
            traversal: Arc::clone(&self.traversal),
        }
    }
}

impl<D: Container> fmt::Debug for Lens<D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.traversal, formatter)
    }
}

impl<D: Container> Traversal<D> for Lens<D> {
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        self.traversal.traverse(data, visit)
    }
}

static_assertions::assert_impl_all!(Lens<crate::Value>: Send, Sync, Clone);

/// A traversal declared with [`Lens::from_fn`].
pub struct FnTraversal<F> {
    name: &'static str,
    body: F,
}

impl<F> fmt::Debug for FnTraversal<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("FnTraversal")
            .field(&self.name)
            .finish()
    }
}

impl<D, F> Traversal<D> for FnTraversal<F>
where
    D: Container,
    F: for<'v> Fn(D, &mut Visit<'v, D>) -> Result<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        (self.body)(data, visit)
    }
}
