//! Composable traversals over heterogeneous nested data.
//!
//! A traversal describes which parts of a value to visit and how to rebuild
//! the value afterwards. Traversals are small immutable values, built bottom
//! up from primitives and combinators and applied any number of times.
//!
//! # Available Traversals
//!
//! Primitives:
//!
//! - [`empty`], [`root`], [`const_value`], [`matching`]
//! - [`key`], [`key_required`], [`key_optional`] and their plural forms
//! - [`at`] / [`index`], [`indices`]
//! - [`before`], [`behind`], [`front`], [`back`]: gaps for insertion
//! - [`all`], [`map_values`], [`map_keys`]
//!
//! Combinators (also available as [`Traversal`] methods):
//!
//! - [`seq`] (`compose`), [`both`], [`seq_both`], [`either`], [`multiple`]
//! - [`context`]
//! - [`filter`], [`reject`]
//! - [`into_container`]
//! - [`recur`], [`recur_root`]
//!
//! Operations, provided by [`Traversal`]: `to_list`, `map`, `try_map`,
//! `get_and_map`, `try_get_and_map`, `each` and `one`.
//!
//! # Example
//!
//! ```
//! use lenskit::optics::{Traversal, all, key};
//! use lenskit::{Value, atom};
//!
//! let team = Value::map([(
//!     atom("members"),
//!     Value::list([
//!         Value::map([(atom("name"), "Ada"), (atom("role"), "lead")]),
//!         Value::map([(atom("name"), "Grace"), (atom("role"), "dev")]),
//!     ]),
//! )]);
//!
//! let names = key(atom("members")).compose(all()).compose(key(atom("name")));
//! assert_eq!(
//!     names.to_list(team.clone()),
//!     Ok(vec![Value::from("Ada"), Value::from("Grace")])
//! );
//!
//! let shouted = names.map(team, |name| match name {
//!     Value::Str(text) => Value::Str(text.to_uppercase()),
//!     other => other,
//! });
//! assert!(shouted.is_ok());
//! ```
//!
//! # Ordering
//!
//! Foci are visited in a documented order: maps and sets in key order,
//! sequences front to back, `both`/`multiple` left to right, `seq` outer
//! focus first then its nested foci. `get_and_map` returns one result per
//! visit, in visit order. The one exception is `recur`, which updates
//! children before their parent but lists each parent's result ahead of its
//! descendants'.

mod basic;
mod compose;
mod context;
mod each;
mod filtered;
mod gap;
mod index;
mod into;
mod key;
mod recur;
mod traversal;

pub use traversal::FnTraversal;
pub use traversal::Lens;
pub use traversal::Traversal;
pub use traversal::{NestedVisit, Visit, Visitor};

pub use basic::{Const, Empty, Match, Root};
pub use basic::{const_value, empty, matching, root};

pub use key::{Key, KeyPolicy};
pub use key::{key, key_optional, key_required, keys, keys_optional, keys_required};

pub use index::At;
pub use index::{at, index, indices};

pub use gap::Gap;
pub use gap::{back, before, behind, front};

pub use each::All;
pub use each::{all, map_keys, map_values};

pub use filtered::Filtered;
pub use filtered::{filter, reject};

pub use compose::{Both, Either, Seq, SeqBoth};
pub use compose::{both, either, multiple, seq, seq_both};

pub use context::{Context, context};

pub use into::{IntoContainer, into_container};

pub use recur::Recur;
pub use recur::{recur, recur_root};
