//! es-toolkit-util - JavaScript value semantics for es-toolkit-rs
//!
//! This crate provides the dynamic value model and the small pure helpers
//! ported from the TypeScript `es-toolkit` package that the compat crate
//! builds on: type predicates, loose coercion/comparison, and deep
//! equality.

pub mod compare;
pub mod deep_equal;
pub mod predicate;
pub mod value;

// Re-exports for convenience
pub use compare::{as_string_value, loose_lt, loose_lte, to_number};
pub use deep_equal::deep_equal;
pub use predicate::{is_nan, is_nil, is_null, is_symbol, is_undefined};
pub use value::{JsSymbol, JsValue};
