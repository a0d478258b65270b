//! Traits shared by the set types in this crate.
//!
//! [`Set`] carries the set algebra as lazy iterators, which any type providing membership and
//! borrowed iteration gets for free.

pub mod relation;
pub mod set;

#[doc(inline)]
pub use relation::Relation;
#[doc(inline)]
pub use set::Set;
