use es_toolkit_util::predicate::{is_nan, is_null, is_symbol, is_undefined};
use es_toolkit_util::JsValue;

/// The bucket a sort key falls into when ordering heterogeneous values.
///
/// Upstream `sortedIndexBy.ts` settles comparisons between otherwise
/// incomparable kinds with a fixed precedence: ordinary comparable
/// values first, then symbols, `null`, `undefined`, and finally values
/// that are not equal to themselves (`NaN`). Variants are declared in
/// that order, so the derived `Ord` is exactly the rank comparison; a
/// value comparison is only ever needed when both sides are
/// [`Comparable`](OrderClass::Comparable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OrderClass {
    /// Numbers, strings, booleans — anything with a magnitude.
    Comparable,
    /// Symbols: identity without magnitude.
    Symbol,
    Null,
    Undefined,
    /// Non-reflexive values; `NaN` is the canonical case.
    Nan,
}

impl OrderClass {
    /// Classifies a sort key. Total: every value lands in exactly one
    /// class.
    pub fn of(value: &JsValue) -> OrderClass {
        if is_nan(value) {
            OrderClass::Nan
        } else if is_undefined(value) {
            OrderClass::Undefined
        } else if is_null(value) {
            OrderClass::Null
        } else if is_symbol(value) {
            OrderClass::Symbol
        } else {
            OrderClass::Comparable
        }
    }
}
