//! Type predicates — mirror the upstream `compat/predicate` helpers
//! consumed by the sorted-index family.

use crate::value::JsValue;

/// Checks if `value` is `NaN`: a number that is not equal to itself.
///
/// Unlike the global JS `isNaN`, this does not coerce; only an actual
/// NaN number answers `true`.
///
/// # Examples
///
/// ```
/// use es_toolkit_util::{is_nan, JsValue};
///
/// assert!(is_nan(&JsValue::Number(f64::NAN)));
/// assert!(!is_nan(&JsValue::Undefined));
/// assert!(!is_nan(&JsValue::from("NaN")));
/// ```
pub fn is_nan(value: &JsValue) -> bool {
    matches!(value, JsValue::Number(n) if n.is_nan())
}

/// Checks if `value` is exactly `undefined`.
pub fn is_undefined(value: &JsValue) -> bool {
    matches!(value, JsValue::Undefined)
}

/// Checks if `value` is exactly `null` (not `undefined`).
pub fn is_null(value: &JsValue) -> bool {
    matches!(value, JsValue::Null)
}

/// Checks if `value` is nullish: `null` or `undefined`.
pub fn is_nil(value: &JsValue) -> bool {
    matches!(value, JsValue::Null | JsValue::Undefined)
}

/// Checks if `value` is a symbol.
pub fn is_symbol(value: &JsValue) -> bool {
    matches!(value, JsValue::Symbol(_))
}
