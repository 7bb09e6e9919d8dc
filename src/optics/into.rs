//! Redirecting the rebuilt data into another container.

use super::traversal::{Traversal, Visit};
use crate::container::Container;
use crate::error::Result;

/// A Traversal that rebuilds into a target container.
///
/// Reading is unchanged. After the inner traversal rebuilds the data, its
/// elements are poured into a copy of `target` with
/// [`Container::collect_into`].
///
/// # Example
///
/// ```
/// use lenskit::optics::{Traversal, all};
/// use lenskit::{Value, atom};
///
/// let tags = Value::set([atom("a"), atom("b")]);
///
/// // `all` alone rebuilds a list ...
/// assert_eq!(
///     all().map(tags.clone(), |tag| tag),
///     Ok(Value::list([atom("a"), atom("b")]))
/// );
///
/// // ... unless redirected.
/// let upper = all()
///     .into_container(Value::set(Vec::<Value>::new()))
///     .map(tags, |tag| match tag {
///         Value::Atom(name) => Value::Atom(name.to_uppercase()),
///         other => other,
///     });
/// assert_eq!(upper, Ok(Value::set([atom("A"), atom("B")])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntoContainer<T, D> {
    inner: T,
    target: D,
}

impl<T, D> IntoContainer<T, D> {
    /// Creates a new redirecting traversal.
    #[must_use]
    pub const fn new(inner: T, target: D) -> Self {
        Self { inner, target }
    }
}

impl<D, T> Traversal<D> for IntoContainer<T, D>
where
    D: Container,
    T: Traversal<D>,
{
    fn traverse(&self, data: D, visit: &mut Visit<'_, D>) -> Result<D> {
        self.inner
            .traverse(data, visit)?
            .collect_into(self.target.clone())
    }
}

/// Creates an [`IntoContainer`] traversal.
#[must_use]
pub const fn into_container<T, D>(inner: T, target: D) -> IntoContainer<T, D> {
    IntoContainer::new(inner, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpticsError;
    use crate::container::{Value, atom};
    use crate::optics::all;

    #[test]
    fn test_into_map_from_pairs() {
        let data = Value::map([(atom("a"), 1)]);
        let lens = into_container(all(), Value::empty_map());
        assert_eq!(lens.map(data.clone(), |entry| entry), Ok(data));
    }

    #[test]
    fn test_into_keeps_target_contents() {
        let lens = into_container(all(), Value::list([0]));
        assert_eq!(
            lens.map(Value::list([1, 2]), |x| x),
            Ok(Value::list([0, 1, 2]))
        );
    }

    #[test]
    fn test_into_reads_unchanged() {
        let lens = into_container(all(), Value::empty_map());
        assert_eq!(
            lens.to_list(Value::list([Value::tuple([atom("k"), Value::from(1)])])),
            Ok(vec![Value::tuple([atom("k"), Value::from(1)])])
        );
    }

    #[test]
    fn test_into_non_collectable_target() {
        let lens = into_container(all(), Value::from(1));
        assert!(matches!(
            lens.map(Value::list([1]), |x| x),
            Err(OpticsError::CapabilityMismatch { operation: "collect_into", .. })
        ));
    }
}
