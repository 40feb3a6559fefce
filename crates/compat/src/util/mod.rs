//! Shared compat utilities — mirrors upstream `compat/util`.

pub mod iteratee;

pub use iteratee::Iteratee;
