use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

/// Represents any JavaScript value, including `undefined` and symbols
/// (which have no JSON equivalent) and NaN-capable numbers (which
/// `serde_json::Number` cannot hold).
///
/// Equality follows JS strict equality for primitives: `NaN` is not
/// equal to itself (the derived `PartialEq` on `f64` already behaves
/// this way) and symbols are equal only to themselves. Arrays and
/// objects compare structurally.
///
/// # Examples
///
/// ```
/// use es_toolkit_util::JsValue;
/// use serde_json::json;
///
/// let value = JsValue::from(json!({"x": 4}));
/// assert_eq!(value.get("x"), JsValue::Number(4.0));
/// assert_eq!(value.get("y"), JsValue::Undefined);
///
/// let nan = JsValue::Number(f64::NAN);
/// assert_ne!(nan.clone(), nan);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    /// JavaScript `undefined`.
    Undefined,
    /// JavaScript `null`.
    Null,
    Bool(bool),
    /// Any JS number, including `NaN` and the infinities.
    Number(f64),
    String(String),
    /// A `Symbol` equivalent: identity without magnitude.
    Symbol(JsSymbol),
    Array(Vec<JsValue>),
    Object(BTreeMap<String, JsValue>),
}

impl JsValue {
    /// Creates a fresh symbol value, distinct from every other symbol.
    pub fn symbol() -> Self {
        JsValue::Symbol(JsSymbol::new())
    }

    /// Returns the JavaScript `typeof` name of the value.
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null | JsValue::Array(_) | JsValue::Object(_) => "object",
            JsValue::Bool(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Symbol(_) => "symbol",
        }
    }

    /// Property lookup, as JS `value[key]`.
    ///
    /// Objects look up the key, arrays accept a numeric index, and every
    /// other receiver (or a missing property) yields `Undefined`.
    pub fn get(&self, key: &str) -> JsValue {
        match self {
            JsValue::Object(map) => map.get(key).cloned().unwrap_or(JsValue::Undefined),
            JsValue::Array(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .cloned()
                .unwrap_or(JsValue::Undefined),
            _ => JsValue::Undefined,
        }
    }

    /// Lossy projection onto JSON.
    ///
    /// `undefined`, symbols, and non-finite numbers all become `null`,
    /// which is how `JSON.stringify` treats them inside arrays.
    pub fn to_json(&self) -> Value {
        match self {
            JsValue::Undefined | JsValue::Null | JsValue::Symbol(_) => Value::Null,
            JsValue::Bool(b) => Value::Bool(*b),
            JsValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            JsValue::String(s) => Value::String(s.clone()),
            JsValue::Array(items) => Value::Array(items.iter().map(JsValue::to_json).collect()),
            JsValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for JsValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => JsValue::Null,
            Value::Bool(b) => JsValue::Bool(b),
            Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => JsValue::String(s),
            Value::Array(items) => JsValue::Array(items.into_iter().map(JsValue::from).collect()),
            Value::Object(map) => JsValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Bool(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i32> for JsValue {
    fn from(n: i32) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<i64> for JsValue {
    fn from(n: i64) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl From<JsSymbol> for JsValue {
    fn from(sym: JsSymbol) -> Self {
        JsValue::Symbol(sym)
    }
}

impl From<Vec<JsValue>> for JsValue {
    fn from(items: Vec<JsValue>) -> Self {
        JsValue::Array(items)
    }
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A JavaScript `Symbol` equivalent.
///
/// Every symbol minted with [`JsSymbol::new`] or
/// [`JsSymbol::with_description`] is distinct; the description is for
/// display only and does not participate in equality.
#[derive(Debug, Clone)]
pub struct JsSymbol {
    id: u64,
    description: Option<String>,
}

impl JsSymbol {
    pub fn new() -> Self {
        JsSymbol {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        JsSymbol {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Some(description.into()),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for JsSymbol {
    fn default() -> Self {
        JsSymbol::new()
    }
}

impl PartialEq for JsSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
