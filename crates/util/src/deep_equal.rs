use crate::value::JsValue;

/// Performs a deep equality check between two values.
///
/// Compares recursively: primitives by value, arrays element by element,
/// objects key by key. Two deliberate departures from strict equality:
/// `NaN` is equal to itself (SameValueZero, which is what the partial
/// matchers want), and symbols still compare by identity.
///
/// # Examples
///
/// ```
/// use es_toolkit_util::{deep_equal, JsValue};
/// use serde_json::json;
///
/// let a = JsValue::from(json!({"foo": [1, 2, 3]}));
/// let b = JsValue::from(json!({"foo": [1, 2, 3]}));
/// let c = JsValue::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Undefined, JsValue::Undefined) => true,
        (JsValue::Null, JsValue::Null) => true,
        (JsValue::Bool(a), JsValue::Bool(b)) => a == b,
        (JsValue::Number(a), JsValue::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        (JsValue::String(a), JsValue::String(b)) => a == b,
        (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,

        // Arrays
        (JsValue::Array(arr_a), JsValue::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            for i in 0..arr_a.len() {
                if !deep_equal(&arr_a[i], &arr_b[i]) {
                    return false;
                }
            }
            true
        }

        // Objects
        (JsValue::Object(obj_a), JsValue::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different kinds are never equal
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::JsSymbol;
    use serde_json::json;

    fn js(v: serde_json::Value) -> JsValue {
        JsValue::from(v)
    }

    #[test]
    fn test_scalars() {
        assert!(deep_equal(&js(json!(1)), &js(json!(1))));
        assert!(!deep_equal(&js(json!(1)), &js(json!(2))));
        assert!(!deep_equal(&js(json!(0)), &js(json!(null))));
        assert!(!deep_equal(&js(json!(1)), &js(json!(true))));
        assert!(!deep_equal(&js(json!("")), &js(json!(null))));
    }

    #[test]
    fn test_nan_equals_nan() {
        let nan = JsValue::Number(f64::NAN);
        assert!(deep_equal(&nan, &nan));
        assert!(!deep_equal(&nan, &JsValue::Number(0.0)));
    }

    #[test]
    fn test_undefined_and_null_are_distinct() {
        assert!(deep_equal(&JsValue::Undefined, &JsValue::Undefined));
        assert!(!deep_equal(&JsValue::Undefined, &JsValue::Null));
    }

    #[test]
    fn test_symbols_by_identity() {
        let sym = JsSymbol::new();
        assert!(deep_equal(
            &JsValue::Symbol(sym.clone()),
            &JsValue::Symbol(sym)
        ));
        assert!(!deep_equal(&JsValue::symbol(), &JsValue::symbol()));
    }

    #[test]
    fn test_objects_ignore_key_order() {
        assert!(deep_equal(
            &js(json!({"a": 1, "b": "2"})),
            &js(json!({"b": "2", "a": 1}))
        ));
        assert!(!deep_equal(
            &js(json!({"a": 1})),
            &js(json!({"a": 1, "b": 2}))
        ));
    }

    #[test]
    fn test_nested_structures() {
        assert!(deep_equal(
            &js(json!({"a": [{"b": "c"}]})),
            &js(json!({"a": [{"b": "c"}]}))
        ));
        assert!(!deep_equal(
            &js(json!([{"a": "a"}, {"b": "b"}])),
            &js(json!([{"a": "a"}, {"b": "c"}]))
        ));
        assert!(!deep_equal(&js(json!([1, 2, 3])), &js(json!([1, 2]))));
    }
}
