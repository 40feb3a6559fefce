//! Array helpers — mirrors upstream `compat/array`.

pub mod order_class;
pub mod sorted_index;
pub mod sorted_index_by;

pub use order_class::OrderClass;
pub use sorted_index::{sorted_index, sorted_last_index};
pub use sorted_index_by::{sorted_index_by, sorted_index_with, sorted_last_index_by};
