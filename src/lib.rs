//! A generic, unordered set with membership testing and the usual set algebra.
//!
//! # Purpose
//! This crate provides [`HashSet`], a collection of unique elements backed by a hash table, along
//! with union, intersection, difference, symmetric difference and subset / superset tests.
//!
//! # Method
//! The set itself is a thin wrapper around a map from each element to `()`. The algebra is
//! written once, on the [`Set`] trait, as lazy iterators over borrowed (or owned) elements.
//! Operations that produce a new set just collect those iterators, which is what the operator
//! impls (`|`, `&`, `-` and `^`) do.
//!
//! ```
//! use set_algebra::{set, HashSet, Set};
//!
//! let a: HashSet<i32> = set![1, 2];
//! let b: HashSet<i32> = set![2, 3];
//!
//! let diff: HashSet<i32> = a.difference(&b).copied().collect();
//! assert_eq!(diff, set![1]);
//! assert!(a.intersection(&b).eq([&2]));
//!
//! // With the `ops` feature, the operators do the collecting.
//! # #[cfg(feature = "ops")]
//! assert_eq!(&a ^ &b, set![1, 3]);
//! ```
//!
//! # Element Types
//! The element type is a type parameter, so a set can only ever hold one type. If a set needs to
//! hold "a number or a string", make an enum of the two and use that as the element type.
//!
//! # Error Handling
//! Nothing here can fail at runtime. Removing something that isn't there is a no-op, and mixing
//! element types is a compile error. The only panics are the allocation failures that `std`
//! would panic on anyway.
//!
//! # Logging
//! A few bulk operations (clearing, draining and capacity changes) report through the [`log`]
//! facade at trace level. Nothing is logged per element.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use collections::hash::HashSet;
#[doc(inline)]
pub use collections::traits::{Relation, Set};

/// Creates a [`HashSet`] containing the provided elements, using the default hasher.
///
/// Duplicate elements are absorbed, as they would be by [`HashSet::insert`].
///
/// ```
/// use set_algebra::{set, HashSet};
///
/// let s: HashSet<&str> = set!["a", "b", "a"];
/// assert_eq!(s.len(), 2);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::HashSet::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let mut set = $crate::HashSet::with_cap([$(stringify!($item)),+].len());
        $(
            set.insert($item);
        )+
        set
    }};
}
