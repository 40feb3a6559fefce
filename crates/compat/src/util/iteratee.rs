//! Iteratee resolution — mirrors upstream `compat/util/iteratee.ts`.

use std::collections::BTreeMap;
use std::fmt;

use es_toolkit_util::deep_equal;
use es_toolkit_util::JsValue;

/// A key-extraction specification in one of the upstream shorthand
/// shapes: a function, a property name, a `[property, value]` pair, or
/// a partial-match object.
///
/// The consumers of an `Iteratee` only ever see the single extraction
/// function produced by [`Iteratee::resolve`]; the shape is dispatched
/// on exactly once per call.
///
/// # Examples
///
/// ```
/// use es_toolkit_compat::Iteratee;
/// use es_toolkit_util::JsValue;
/// use serde_json::json;
///
/// let it = Iteratee::property("x");
/// let key = it.resolve();
/// assert_eq!(key(&json!({"x": 4}).into()), JsValue::Number(4.0));
/// assert_eq!(key(&json!({"y": 4}).into()), JsValue::Undefined);
/// ```
pub enum Iteratee {
    /// The value itself is the key. This is the default.
    Identity,
    /// An arbitrary unary function. A panic inside it propagates
    /// unchanged to the caller.
    Func(Box<dyn Fn(&JsValue) -> JsValue>),
    /// Extract the named property (object key or array index).
    Property(String),
    /// Boolean key: does the named property deep-equal the expected
    /// value?
    MatchesProperty(String, JsValue),
    /// Boolean key: does the element partially deep-match the source
    /// object?
    Matches(BTreeMap<String, JsValue>),
}

impl Iteratee {
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&JsValue) -> JsValue + 'static,
    {
        Iteratee::Func(Box::new(f))
    }

    pub fn property(name: impl Into<String>) -> Self {
        Iteratee::Property(name.into())
    }

    pub fn matches_property(name: impl Into<String>, expected: JsValue) -> Self {
        Iteratee::MatchesProperty(name.into(), expected)
    }

    /// Builds a partial-match iteratee from a source object. A
    /// non-object source has no properties to check and matches
    /// everything.
    pub fn matches(source: JsValue) -> Self {
        match source {
            JsValue::Object(map) => Iteratee::Matches(map),
            _ => Iteratee::Matches(BTreeMap::new()),
        }
    }

    /// Resolves the specification to a single key-extraction function.
    pub fn resolve(&self) -> Box<dyn Fn(&JsValue) -> JsValue + '_> {
        match self {
            Iteratee::Identity => Box::new(|value| value.clone()),
            Iteratee::Func(f) => Box::new(move |value| f(value)),
            Iteratee::Property(name) => Box::new(move |value| value.get(name)),
            Iteratee::MatchesProperty(name, expected) => {
                Box::new(move |value| JsValue::Bool(deep_equal(&value.get(name), expected)))
            }
            Iteratee::Matches(source) => Box::new(move |value| JsValue::Bool(is_match(value, source))),
        }
    }
}

impl Default for Iteratee {
    fn default() -> Self {
        Iteratee::Identity
    }
}

impl fmt::Debug for Iteratee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iteratee::Identity => f.write_str("Identity"),
            Iteratee::Func(_) => f.write_str("Func(..)"),
            Iteratee::Property(name) => f.debug_tuple("Property").field(name).finish(),
            Iteratee::MatchesProperty(name, expected) => f
                .debug_tuple("MatchesProperty")
                .field(name)
                .field(expected)
                .finish(),
            Iteratee::Matches(source) => f.debug_tuple("Matches").field(source).finish(),
        }
    }
}

/// Partial deep comparison: does `object` hold equivalent values for
/// every property of `source`? Nested object properties also match
/// partially, as in upstream `isMatch`.
pub fn is_match(object: &JsValue, source: &BTreeMap<String, JsValue>) -> bool {
    for (key, expected) in source {
        let actual = object.get(key);
        let matched = match expected {
            JsValue::Object(nested) => is_match(&actual, nested),
            _ => deep_equal(&actual, expected),
        };
        if !matched {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn js(v: serde_json::Value) -> JsValue {
        JsValue::from(v)
    }

    #[test]
    fn test_identity_is_the_default() {
        let it = Iteratee::default();
        let key = it.resolve();
        assert_eq!(key(&js(json!(3))), JsValue::Number(3.0));
        assert_eq!(key(&JsValue::Undefined), JsValue::Undefined);
    }

    #[test]
    fn test_func_shape() {
        let it = Iteratee::func(|v| v.get("n"));
        let key = it.resolve();
        assert_eq!(key(&js(json!({"n": 4}))), JsValue::Number(4.0));
    }

    #[test]
    fn test_property_shape() {
        let it = Iteratee::property("x");
        let key = it.resolve();
        assert_eq!(key(&js(json!({"x": "a"}))), JsValue::from("a"));
        assert_eq!(key(&js(json!({}))), JsValue::Undefined);
        // Array index access
        assert_eq!(key(&js(json!([1, 2]))), JsValue::Undefined);
        let by_index = Iteratee::property("1");
        let idx = by_index.resolve();
        assert_eq!(idx(&js(json!([1, 2]))), JsValue::Number(2.0));
    }

    #[test]
    fn test_matches_property_shape() {
        let it = Iteratee::matches_property("x", js(json!([1, 2])));
        let key = it.resolve();
        assert_eq!(key(&js(json!({"x": [1, 2]}))), JsValue::Bool(true));
        assert_eq!(key(&js(json!({"x": [1, 3]}))), JsValue::Bool(false));
        assert_eq!(key(&js(json!({}))), JsValue::Bool(false));
    }

    #[test]
    fn test_matches_shape_is_partial() {
        let it = Iteratee::matches(js(json!({"a": 1, "b": {"c": 2}})));
        let key = it.resolve();
        assert_eq!(
            key(&js(json!({"a": 1, "b": {"c": 2, "d": 3}, "extra": 0}))),
            JsValue::Bool(true)
        );
        assert_eq!(key(&js(json!({"a": 1, "b": {"c": 9}}))), JsValue::Bool(false));
        assert_eq!(key(&js(json!({"a": 1}))), JsValue::Bool(false));
    }

    #[test]
    fn test_matches_with_non_object_source_matches_everything() {
        let it = Iteratee::matches(js(json!(5)));
        let key = it.resolve();
        assert_eq!(key(&js(json!({"x": 1}))), JsValue::Bool(true));
        assert_eq!(key(&JsValue::Null), JsValue::Bool(true));
    }
}
