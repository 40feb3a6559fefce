//! Sorted-index helpers — port of the `es-toolkit/compat` family
//! `sortedIndex` / `sortedIndexBy` / `sortedLastIndex` /
//! `sortedLastIndexBy`.
//!
//! # Overview
//!
//! Given a slice already sorted under some key ordering, these
//! functions binary-search the index at which a value can be inserted
//! while keeping the slice sorted. Keys are computed through an
//! [`Iteratee`] (a function, a property name, a `[property, value]`
//! pair, or a partial-match object), and keys of mixed kinds order the
//! way the upstream library orders them: comparables first, then
//! symbols, `null`, `undefined`, and `NaN` last.
//!
//! # Example
//!
//! ```
//! use es_toolkit_compat::{sorted_index_by, sorted_last_index_by, Iteratee};
//! use es_toolkit_util::JsValue;
//! use serde_json::json;
//!
//! let objects: Vec<JsValue> = vec![
//!     json!({"x": 4}).into(),
//!     json!({"x": 5}).into(),
//!     json!({"x": 5}).into(),
//! ];
//! let probe: JsValue = json!({"x": 5}).into();
//!
//! assert_eq!(sorted_index_by(&objects, &probe, &Iteratee::property("x")), 1);
//! assert_eq!(sorted_last_index_by(&objects, &probe, &Iteratee::property("x")), 3);
//! ```

pub mod array;
pub mod util;

// Re-export the core public API
pub use array::{
    sorted_index, sorted_index_by, sorted_index_with, sorted_last_index, sorted_last_index_by,
    OrderClass,
};
pub use util::iteratee::Iteratee;
