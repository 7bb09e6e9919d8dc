//! # lenskit
//!
//! Composable traversals ("lenses") for reading and rebuilding
//! heterogeneous nested data.
//!
//! ## Overview
//!
//! A traversal is an immutable descriptor of which parts of a value to
//! visit. Applying it with an update function yields the ordered results of
//! every visit together with a rebuilt copy of the value in which each
//! visited part holds its replacement. Reading and writing go through the
//! same single protocol, so they can never disagree about what is focused.
//!
//! - **Container contract**: [`Container`] abstracts keyed, indexed and
//!   enumerable access; [`Value`] and `serde_json::Value` implement it
//! - **Primitives**: keys, indices, gaps, `all`, `root`, `empty`, `const`
//! - **Combinators**: `seq`, `both`, `multiple`, `context`, `filter`,
//!   `into_container`, `recur`
//! - **Operations**: `to_list`, `map`, `get_and_map`, `each`, `one`
//!
//! ## Feature Flags
//!
//! - `json` (default): `Container` adapter for `serde_json::Value`
//! - `serde`: `Serialize`/`Deserialize` for [`Value`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lenskit::prelude::*;
//!
//! let data = Value::map([(atom("a"), 1), (atom("b"), 2)]);
//! let lens = both(key(atom("a")), key(atom("b")));
//!
//! assert_eq!(lens.to_list(data.clone()), Ok(vec![Value::from(1), Value::from(2)]));
//! assert_eq!(
//!     lens.map(data, |_| Value::from(0)),
//!     Ok(Value::map([(atom("a"), 0), (atom("b"), 0)]))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container contract, the value type and every traversal
/// constructor.
///
/// # Usage
///
/// ```rust
/// use lenskit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::{Container, Value, atom};
    pub use crate::error::OpticsError;
    pub use crate::optics::*;
}

pub mod container;
pub mod error;
pub mod optics;

pub use container::{Container, Value, atom};
pub use error::{OpticsError, Result};
pub use optics::{Lens, Traversal};
