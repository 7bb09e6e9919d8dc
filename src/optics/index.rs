//! Positional access into sequences and tuples.

use super::compose::multiple;
use super::traversal::{Lens, Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::Result;

/// A traversal focusing on the element at one position.
///
/// Works on anything the container indexes (lists and tuples for
/// [`Value`](crate::Value), arrays for JSON). An out-of-range position is
/// reported as [`OpticsError::IndexOutOfRange`](crate::OpticsError::IndexOutOfRange).
///
/// # Example
///
/// ```
/// use lenskit::optics::{Traversal, at};
/// use lenskit::{Value, atom};
///
/// let data = Value::tuple([atom("ok"), Value::from(1)]);
/// assert_eq!(
///     at(0).map(data, |_| atom("done")),
///     Ok(Value::tuple([atom("done"), Value::from(1)]))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct At {
    index: usize,
}

impl<D: Container> Traversal<D> for At {
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        let focus = data.fetch_by_index(self.index)?;
        let replacement = visit.visit(focus)?;
        data.put_by_index(self.index, replacement)
    }
}

/// Focuses on the element at `index`.
#[must_use]
pub const fn at(index: usize) -> At {
    At { index }
}

/// Alias for [`at`].
#[must_use]
pub const fn index(index: usize) -> At {
    at(index)
}

/// Focuses on each listed position, in list order.
///
/// A position listed twice is visited twice, the second visit seeing the
/// first visit's replacement.
pub fn indices<D, I>(indices: I) -> Lens<D>
where
    D: Container,
    I: IntoIterator<Item = usize>,
{
    let lenses: Vec<Lens<D>> = indices.into_iter().map(|index| Lens::new(at(index))).collect();
    multiple(lenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpticsError;
    use crate::container::Value;

    #[test]
    fn test_at_reads_list_element() {
        assert_eq!(at(1).to_list(Value::list([5, 6, 7])), Ok(vec![Value::from(6)]));
    }

    #[test]
    fn test_index_is_alias_for_at() {
        assert_eq!(index(2), at(2));
    }

    #[test]
    fn test_at_out_of_range() {
        assert_eq!(
            at(3).to_list(Value::list([5, 6, 7])),
            Err(OpticsError::IndexOutOfRange {
                index: 3,
                length: 3
            })
        );
    }

    #[test]
    fn test_at_on_map_is_mismatch() {
        assert!(matches!(
            at(0).to_list(Value::empty_map()),
            Err(OpticsError::CapabilityMismatch { .. })
        ));
    }

    #[test]
    fn test_indices_follow_list_order() {
        let lens: Lens<Value> = indices([2, 0]);
        assert_eq!(
            lens.to_list(Value::list([5, 6, 7])),
            Ok(vec![Value::from(7), Value::from(5)])
        );
    }

    #[test]
    fn test_repeated_index_sees_earlier_replacement() {
        let lens: Lens<Value> = indices([0, 0]);
        let (results, updated) = lens
            .get_and_map(Value::list([1]), |focus| {
                let next = Value::Int(focus.as_int().unwrap_or(0) + 1);
                (focus, next)
            })
            .unwrap();
        assert_eq!(results, vec![Value::from(1), Value::from(2)]);
        assert_eq!(updated, Value::list([3]));
    }
}
