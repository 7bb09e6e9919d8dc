//! Error types for traversals.
//!
//! Every operation in this crate returns [`OpticsError`] on failure. No
//! traversal or combinator recovers from an error: the first failure aborts
//! the application and is returned unchanged to the caller of the top-level
//! operation.

use std::fmt;

/// Represents errors that can occur while applying a traversal.
///
/// # Examples
///
/// ```rust
/// use lenskit::OpticsError;
///
/// let error = OpticsError::ArityViolation { found: 2 };
/// assert_eq!(
///     format!("{error}"),
///     "expected exactly one focus, found 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpticsError {
    /// A required key was absent.
    #[error("key {key} not found in {container}")]
    MissingKey {
        /// Debug rendering of the key that was looked up.
        key: String,
        /// Debug rendering of the container that lacked the key.
        container: String,
    },

    /// A primitive was applied to a value of an incompatible shape.
    #[error("{operation} expects {expected}, found {found}")]
    CapabilityMismatch {
        /// The capability that was requested (for example `fetch_by_key`).
        operation: &'static str,
        /// The shape the capability requires.
        expected: &'static str,
        /// The shape that was actually presented.
        found: String,
    },

    /// An indexed access was out of range.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the indexed container.
        length: usize,
    },

    /// `one` found zero or several foci.
    #[error("expected exactly one focus, found {found}")]
    ArityViolation {
        /// The number of foci actually visited.
        found: usize,
    },

    /// A caller-supplied update function failed.
    #[error("{0}")]
    Custom(String),
}

impl OpticsError {
    /// Creates a [`OpticsError::Custom`] from any displayable message.
    ///
    /// Fallible update functions passed to `try_map` and `try_get_and_map`
    /// use this to abort a traversal.
    ///
    /// ```rust
    /// use lenskit::OpticsError;
    ///
    /// let error = OpticsError::custom("negative balance");
    /// assert_eq!(error.to_string(), "negative balance");
    /// ```
    pub fn custom(message: impl fmt::Display) -> Self {
        Self::Custom(message.to_string())
    }

    pub(crate) fn missing_key(key: &impl fmt::Debug, container: &impl fmt::Debug) -> Self {
        Self::MissingKey {
            key: format!("{key:?}"),
            container: format!("{container:?}"),
        }
    }

    pub(crate) fn mismatch(
        operation: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::CapabilityMismatch {
            operation,
            expected,
            found: found.into(),
        }
    }
}

/// A specialized `Result` type for traversal operations.
pub type Result<T> = std::result::Result<T, OpticsError>;
