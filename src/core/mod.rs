//! Core data types: grade rows, roster entries, match outcomes, and the
//! normalization they all rely on.

pub mod normalize;
pub mod roster;
pub mod types;
