//! A module containing [`HashSet`] and associated types.
//!
//! The iterators here provide owned and borrowed iteration over a set's elements. Iterators over
//! the result of combining two sets live with the [`Set`](crate::collections::traits::Set) trait.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
#[cfg(feature = "ops")]
mod ops;

pub use hash_set::*;
pub use iter::*;
