//! Collection types and the traits they share.
//!
//! # Method
//! [`HashSet`](hash::HashSet) stores its elements as the keys of a map whose values are `()`,
//! which leaves the map to do all of the hashing, probing and resizing.

pub mod hash;
pub mod traits;
