//! Record helpers.
//!
//! Records are JSON objects ([`Record`]). Their iteration order is insertion
//! order, and every helper here returns a rebuilt record instead of touching
//! its input.
//!
//! # Plain and typed records
//!
//! A record holding a string under [`TYPE_TAG`] is *typed*: it stands for an
//! instance of some named type (a date, a domain object) rather than a bag of
//! fields. Typed records are never merged by [`patch`] and never descended
//! into by [`traverse`], and the tag survives [`clone`] and [`patch`] because
//! it is an ordinary entry.
//!
//! ```
//! use serde_json::json;
//! use tirea_data::obj;
//!
//! let when = json!({"$type": "Date", "iso": "2017-02-01"});
//! assert!(!obj::is_literal(&when));
//! assert_eq!(obj::type_tag(&obj::clone(&when)), Some("Date"));
//! ```

mod access;
mod chain;
mod fold;
mod matching;
mod typed;

pub use access::{patch, sub};
pub use chain::{chain_call, chain_fns, Call, MethodTable};
pub use fold::{filter, map, reduce, reduce_unseeded, traverse};
pub use matching::{switch, Case, Match, MatchTable, DEFAULT_KEY};
pub use typed::{patch_as, sub_as};

use serde_json::{Map, Value};

/// A JSON object.
pub type Record = Map<String, Value>;

/// Reserved key naming the type of a typed record.
pub const TYPE_TAG: &str = "$type";

/// Build the single-entry record `{k: v}`.
///
/// ```
/// use serde_json::json;
/// use tirea_data::obj;
///
/// assert_eq!(obj::key_value("foo", json!("bar")), json!({"foo": "bar"}));
/// ```
pub fn key_value(k: impl Into<String>, v: Value) -> Value {
    let mut record = Record::new();
    record.insert(k.into(), v);
    Value::Object(record)
}

/// True for objects that carry no type tag.
pub fn is_literal(x: &Value) -> bool {
    x.as_object().is_some_and(is_plain)
}

pub(crate) fn is_plain(record: &Record) -> bool {
    !record.get(TYPE_TAG).is_some_and(Value::is_string)
}

/// The type tag of a typed record.
pub fn type_tag(x: &Value) -> Option<&str> {
    x.as_object()?.get(TYPE_TAG)?.as_str()
}

/// Shallow copy of a value, keeping its type tag.
///
/// Non-record values are copied as they are.
pub fn clone(x: &Value) -> Value {
    match x {
        Value::Object(record) => Value::Object(
            record
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// JSON truthiness: `null`, `false`, zero and `""` are falsy.
pub fn is_truthy(x: &Value) -> bool {
    match x {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_value_builds_single_entry() {
        assert_eq!(key_value("foo", json!("bar")), json!({"foo": "bar"}));
        assert_eq!(key_value(String::from("n"), json!(null)), json!({"n": null}));
    }

    #[test]
    fn is_literal_accepts_only_untagged_objects() {
        assert!(is_literal(&json!({"foo": "bar"})));
        assert!(is_literal(&json!({})));
        assert!(!is_literal(&json!({"$type": "Date", "iso": "2017-02-01"})));
        assert!(!is_literal(&json!(null)));
        assert!(!is_literal(&json!([1, 2])));
        assert!(!is_literal(&json!("x")));
    }

    #[test]
    fn non_string_tag_does_not_type_a_record() {
        assert!(is_literal(&json!({"$type": 3})));
        assert_eq!(type_tag(&json!({"$type": 3})), None);
    }

    #[test]
    fn clone_preserves_tag_and_entries() {
        let date = json!({"$type": "Date", "iso": "2017-02-01"});
        let copy = clone(&date);
        assert_eq!(copy, date);
        assert_eq!(type_tag(&copy), Some("Date"));

        let tree = json!({"a": 1, "b": {"c": 2}});
        assert_eq!(clone(&tree), tree);
    }

    #[test]
    fn clone_keeps_nested_typed_records() {
        let tree = json!({"foo": {"bar": {"$type": "Date", "iso": "2016-01-01"}}});
        assert_eq!(type_tag(&clone(&tree)["foo"]["bar"]), Some("Date"));
    }

    #[test]
    fn clone_keeps_key_order() {
        let tree = json!({"z": 1, "a": 2, "m": 3});
        let keys: Vec<_> = clone(&tree)
            .as_object()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn truthiness_matches_json_literals() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(-1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }
}
