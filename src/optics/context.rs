//! Contextual pairing of an outer focus with its nested foci.

use super::traversal::{NestedVisit, Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::Result;

/// Like [`Seq`](super::Seq), but every nested focus is presented together
/// with the outer focus it was found in.
///
/// The update function receives `Container::pair(context, item)` and
/// returns the replacement for `item` alone. `context` is the outer focus as
/// the context traversal presents it, so it reflects any changes made while
/// visiting earlier outer foci, but not changes made to sibling items within
/// the same context.
///
/// # Example
///
/// ```
/// use lenskit::optics::{Traversal, all, context, key};
/// use lenskit::{Value, atom};
///
/// // Scale every item by its order's multiplier.
/// let orders = Value::list([Value::map([
///     (atom("factor"), Value::from(10)),
///     (atom("items"), Value::list([1, 2])),
/// ])]);
///
/// let lens = context(all(), key(atom("items")).compose(all()));
/// let scaled = lens.map(orders, |pair| {
///     let Value::Tuple(parts) = pair else { return Value::Nil };
///     let factor = match &parts[0] {
///         Value::Map(order) => order.get(&atom("factor")).and_then(Value::as_int).unwrap_or(1),
///         _ => 1,
///     };
///     Value::Int(parts[1].as_int().unwrap_or(0) * factor)
/// });
///
/// assert_eq!(
///     scaled,
///     Ok(Value::list([Value::map([
///         (atom("factor"), Value::from(10)),
///         (atom("items"), Value::list([10, 20])),
///     ])]))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context<C, I> {
    context: C,
    item: I,
}

impl<C, I> Context<C, I> {
    /// Creates a new contextual pairing.
    #[must_use]
    pub const fn new(context: C, item: I) -> Self {
        Self { context, item }
    }
}

impl<D, C, I> Traversal<D> for Context<C, I>
where
    D: Container,
    C: Traversal<D>,
    I: Traversal<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        self.context.traverse(
            data,
            &mut NestedVisit::new(visit, |context: D, visit| {
                self.item.traverse(
                    context.clone(),
                    &mut NestedVisit::new(visit, |focus, visit| {
                        visit.visit(D::pair(context.clone(), focus))
                    }),
                )
            }),
        )
    }
}

/// Creates a [`Context`] traversal.
#[must_use]
pub const fn context<C, I>(context: C, item: I) -> Context<C, I> {
    Context::new(context, item)
}
