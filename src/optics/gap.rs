//! Gap traversals for inserting new elements into sequences.
//!
//! A gap focus is synthetic: it always reads as the absence marker, and its
//! replacement is inserted as a new element. Existing elements are never
//! overwritten. The sequence is rebuilt as `init ++ [item] ++ tail`, split at
//! the gap's position clamped to the length.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Traversal, back, before};
//! use lenskit::{Value, atom};
//!
//! let data = Value::list([atom("a"), atom("b"), atom("c")]);
//!
//! assert_eq!(
//!     before(2).map(data.clone(), |_| atom("d")),
//!     Ok(Value::list([atom("a"), atom("b"), atom("d"), atom("c")]))
//! );
//! assert_eq!(
//!     back().map(data, |_| atom("d")),
//!     Ok(Value::list([atom("a"), atom("b"), atom("c"), atom("d")]))
//! );
//! ```

use super::traversal::{Traversal, Visit, Visitor};
use crate::container::Container;
use crate::error::Result;

/// A traversal focusing on the gap at one position of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gap {
    /// The gap immediately ahead of the element at this index.
    Before(usize),
    /// The gap immediately after the element at this index.
    Behind(usize),
    /// The gap after the last element, resolved from the data at apply time.
    Back,
}

impl Gap {
    fn position(self, length: usize) -> usize {
        match self {
            Self::Before(index) => index,
            Self::Behind(index) => index.saturating_add(1),
            Self::Back => length,
        }
    }
}

impl<D: Container> Traversal<D> for Gap {
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        let position = self.position(data.length()?);
        let item = visit.visit(D::absent())?;
        data.insert_at(position, item)
    }
}

/// Focuses on the gap ahead of `index`.
#[must_use]
pub const fn before(index: usize) -> Gap {
    Gap::Before(index)
}

/// Focuses on the gap after `index`.
#[must_use]
pub const fn behind(index: usize) -> Gap {
    Gap::Behind(index)
}

/// Focuses on the gap ahead of the first element.
#[must_use]
pub const fn front() -> Gap {
    Gap::Before(0)
}

/// Focuses on the gap after the last element.
#[must_use]
pub const fn back() -> Gap {
    Gap::Back
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpticsError;
    use crate::container::Value;

    #[test]
    fn test_gap_reads_absence_marker() {
        assert_eq!(front().to_list(Value::list([1, 2])), Ok(vec![Value::Nil]));
    }

    #[test]
    fn test_front_inserts_first() {
        assert_eq!(
            front().map(Value::list([1, 2]), |_| Value::from(0)),
            Ok(Value::list([0, 1, 2]))
        );
    }

    #[test]
    fn test_behind_inserts_after_index() {
        assert_eq!(
            behind(0).map(Value::list([1, 2]), |_| Value::from(9)),
            Ok(Value::list([1, 9, 2]))
        );
    }

    #[test]
    fn test_back_on_empty_sequence() {
        assert_eq!(
            back().map(Value::list(Vec::<Value>::new()), |_| Value::from(1)),
            Ok(Value::list([1]))
        );
    }

    #[test]
    fn test_back_length_is_resolved_per_application() {
        let lens = back();
        assert_eq!(
            lens.map(Value::list([1]), |_| Value::from(0)),
            Ok(Value::list([1, 0]))
        );
        assert_eq!(
            lens.map(Value::list([1, 2, 3]), |_| Value::from(0)),
            Ok(Value::list([1, 2, 3, 0]))
        );
    }

    #[test]
    fn test_positions_past_the_end_are_clamped() {
        assert_eq!(
            before(10).map(Value::list([1]), |_| Value::from(2)),
            Ok(Value::list([1, 2]))
        );
    }

    #[test]
    fn test_gap_on_scalar_fails_before_visiting() {
        let mut calls = 0;
        let result = front().map(Value::from(1), |focus| {
            calls += 1;
            focus
        });
        assert!(matches!(result, Err(OpticsError::CapabilityMismatch { .. })));
        assert_eq!(calls, 0);
    }
}
