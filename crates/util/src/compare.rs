//! Loose (JS-style) coercion and relational comparison.

use crate::value::JsValue;

/// Converts a value to a number. Mirrors JS `Number(value)` coercion.
///
/// `null` and the empty (or blank) string become `0`, booleans become
/// `0`/`1`, numeric strings parse, and everything without a numeric
/// interpretation — including `undefined` and symbols, which would throw
/// in JS — becomes `NaN`.
pub fn to_number(value: &JsValue) -> f64 {
    match value {
        JsValue::Undefined | JsValue::Symbol(_) | JsValue::Object(_) => f64::NAN,
        JsValue::Null => 0.0,
        JsValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        JsValue::Number(n) => *n,
        JsValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        // [] -> 0, [x] -> Number(x), longer arrays -> NaN, as in JS.
        JsValue::Array(items) => match items.len() {
            0 => 0.0,
            1 => to_number(&items[0]),
            _ => f64::NAN,
        },
    }
}

/// Converts a value to a string. Mirrors JS `String(value)`.
pub fn as_string_value(value: &JsValue) -> String {
    match value {
        JsValue::Undefined => "undefined".to_string(),
        JsValue::Null => "null".to_string(),
        JsValue::Bool(b) => b.to_string(),
        JsValue::Number(n) => format_number(*n),
        JsValue::String(s) => s.clone(),
        JsValue::Symbol(sym) => match sym.description() {
            Some(d) => format!("Symbol({})", d),
            None => "Symbol()".to_string(),
        },
        JsValue::Array(items) => items
            .iter()
            .map(as_string_value)
            .collect::<Vec<_>>()
            .join(","),
        JsValue::Object(_) => "[object Object]".to_string(),
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{}", n)
    }
}

// Kinds whose JS ToPrimitive result is a string, making `<` compare
// lexicographically when both operands are such.
fn coerces_to_string(value: &JsValue) -> bool {
    matches!(
        value,
        JsValue::String(_) | JsValue::Array(_) | JsValue::Object(_)
    )
}

/// JS `<` over two values.
///
/// When both operands reduce to strings the comparison is
/// lexicographic; otherwise both sides go through [`to_number`] and any
/// `NaN` operand makes the relation `false`.
///
/// # Examples
///
/// ```
/// use es_toolkit_util::{loose_lt, JsValue};
///
/// assert!(loose_lt(&JsValue::from(9), &JsValue::from("10")));
/// assert!(!loose_lt(&JsValue::from("9"), &JsValue::from("10")));
/// assert!(!loose_lt(&JsValue::Number(f64::NAN), &JsValue::from(1)));
/// ```
pub fn loose_lt(a: &JsValue, b: &JsValue) -> bool {
    if coerces_to_string(a) && coerces_to_string(b) {
        as_string_value(a) < as_string_value(b)
    } else {
        to_number(a) < to_number(b)
    }
}

/// JS `<=` over two values. Same coercion rules as [`loose_lt`].
pub fn loose_lte(a: &JsValue, b: &JsValue) -> bool {
    if coerces_to_string(a) && coerces_to_string(b) {
        as_string_value(a) <= as_string_value(b)
    } else {
        to_number(a) <= to_number(b)
    }
}
