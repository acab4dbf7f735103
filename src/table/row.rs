//! Row access and value coercion
//!
//! The table engine never looks at a row beyond asking for a field by name.
//! Field values are `serde_json::Value`, so records coming from JSON, maps or
//! hand-built objects all work the same way.

use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A record the engine can read fields from
pub trait Row {
    /// Look up a field by name. `None` means the field is absent.
    fn field(&self, key: &str) -> Option<&Value>;

    /// Look up a field, treating `Value::Null` the same as an absent field
    fn present(&self, key: &str) -> Option<&Value> {
        self.field(key).filter(|v| !v.is_null())
    }
}

impl Row for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Only objects have fields; every other variant reads as empty.
impl Row for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|m| m.get(key))
    }
}

impl<S: BuildHasher> Row for HashMap<String, Value, S> {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, key: &str) -> Option<&Value> {
        (**self).field(key)
    }
}

impl<R: Row + ?Sized> Row for Box<R> {
    fn field(&self, key: &str) -> Option<&Value> {
        (**self).field(key)
    }
}

/// Coerce a value to display text
///
/// Strings pass through, numbers and booleans use their JSON rendering,
/// arrays join their element texts with `,` and objects render as compact JSON.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(value_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Lowercased text coercion, used for case-insensitive comparisons
pub(crate) fn folded_text(value: &Value) -> String {
    value_text(value).to_lowercase()
}

/// Equality with numbers compared by value, so `1` equals `1.0`
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y).is_eq(),
        _ => a == b,
    }
}

/// A JSON number read without losing precision
#[derive(Clone, Copy)]
enum Numeric {
    Int(i128),
    Float(f64),
}

impl From<&Number> for Numeric {
    fn from(n: &Number) -> Self {
        match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Numeric::Int(i as i128),
            (_, Some(u)) => Numeric::Int(u as i128),
            _ => Numeric::Float(n.as_f64().unwrap_or(0.0)),
        }
    }
}

/// 2^127, the first float above every `i128`
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Exact comparison of an integer against a float
fn compare_int_float(i: i128, f: f64) -> Ordering {
    let whole = f.trunc();
    if whole >= I128_LIMIT {
        return Ordering::Less;
    }
    if whole < -I128_LIMIT {
        return Ordering::Greater;
    }
    // `whole` is integral and in range, so the cast is exact
    match i.cmp(&(whole as i128)) {
        Ordering::Equal => whole.partial_cmp(&f).unwrap_or(Ordering::Equal),
        ord => ord,
    }
}

/// Numeric order over JSON numbers
///
/// Integers and floats compare exactly against each other, so large
/// integers never collapse onto a nearby float.
pub(crate) fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    match (Numeric::from(x), Numeric::from(y)) {
        (Numeric::Int(a), Numeric::Int(b)) => a.cmp(&b),
        (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Numeric::Int(a), Numeric::Float(b)) => compare_int_float(a, b),
        (Numeric::Float(a), Numeric::Int(b)) => compare_int_float(b, a).reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_lookup() {
        let row = json!({"id": 1, "name": "Bob", "note": null});
        assert_eq!(row.field("name"), Some(&json!("Bob")));
        assert_eq!(row.field("missing"), None);
        assert_eq!(row.field("note"), Some(&Value::Null));
        assert_eq!(row.present("note"), None);

        // Non-object values have no fields
        assert_eq!(json!([1, 2]).field("0"), None);
    }

    #[test]
    fn test_map_rows() {
        let mut map: HashMap<String, Value> = HashMap::new();
        map.insert("a".into(), json!(3));
        assert_eq!(map.field("a"), Some(&json!(3)));

        let tree: BTreeMap<String, Value> = [("b".to_string(), json!("x"))].into();
        assert_eq!((&tree).field("b"), Some(&json!("x")));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("Hi")), "Hi");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!(2.5)), "2.5");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!(null)), "");
        assert_eq!(value_text(&json!([1, "a", false])), "1,a,false");
        assert_eq!(value_text(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn test_values_equal() {
        assert!(values_equal(&json!(1), &json!(1.0)));
        assert!(values_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!values_equal(&json!(1), &json!("1")));
        assert!(values_equal(&json!(true), &json!(true)));
        assert!(!values_equal(&json!(9007199254740993u64), &json!(9007199254740992.0)));
    }

    #[test]
    fn test_compare_numbers_exact() {
        let n = |v: Value| match v {
            Value::Number(n) => n,
            _ => unreachable!(),
        };
        let big = n(json!(9007199254740993i64));
        let big_float = n(json!(9007199254740992.0));
        assert_eq!(compare_numbers(&big, &big_float), Ordering::Greater);
        assert_eq!(compare_numbers(&big_float, &big), Ordering::Less);

        assert_eq!(compare_numbers(&n(json!(2)), &n(json!(1.5))), Ordering::Greater);
        assert_eq!(compare_numbers(&n(json!(-2)), &n(json!(-1.5))), Ordering::Less);
        assert_eq!(compare_numbers(&n(json!(-1)), &n(json!(-1.5))), Ordering::Greater);
        assert_eq!(compare_numbers(&n(json!(3)), &n(json!(3.0))), Ordering::Equal);
        assert_eq!(compare_numbers(&n(json!(0)), &n(json!(-0.0))), Ordering::Equal);
        assert_eq!(compare_numbers(&n(json!(u64::MAX)), &n(json!(i64::MIN))), Ordering::Greater);
        assert_eq!(compare_numbers(&n(json!(i64::MAX)), &n(json!(1e300))), Ordering::Less);
        assert_eq!(compare_numbers(&n(json!(i64::MIN)), &n(json!(-1e300))), Ordering::Greater);
    }
}
