#![warn(missing_docs)]

pub mod hash;
