//! Folding over record entries.
//!
//! Callbacks receive `(key, value, index, record)`, with `index` the entry's
//! position in iteration order and `record` the record being walked.

use super::access::patch_entry;
use super::{is_plain, Record};
use serde_json::Value;

/// Fold the entries of `record`, starting from `initial`.
///
/// ```
/// use serde_json::json;
/// use tirea_data::obj;
///
/// let record = json!({"a": 1, "b": 2, "c": 3});
/// let sum = obj::reduce(
///     record.as_object().unwrap(),
///     |acc, _, v, _, _| acc + v.as_i64().unwrap_or(0),
///     0,
/// );
/// assert_eq!(sum, 6);
/// ```
pub fn reduce<A, F>(record: &Record, mut reduce_fn: F, initial: A) -> A
where
    F: FnMut(A, &str, &Value, usize, &Record) -> A,
{
    record
        .iter()
        .enumerate()
        .fold(initial, |acc, (index, (key, value))| {
            reduce_fn(acc, key, value, index, record)
        })
}

/// Fold the entries of `record`, seeding the accumulator with the first value.
///
/// The seed is only the starting accumulator: `reduce_fn` still visits every
/// entry, the first one included, from index 0. Returns `None` for an empty
/// record.
///
/// ```
/// use serde_json::json;
/// use tirea_data::obj;
///
/// let record = json!({"a": 1, "b": 2, "c": 3});
/// let total = obj::reduce_unseeded(record.as_object().unwrap(), |acc, _, v, _, _| {
///     json!(acc.as_i64().unwrap_or(0) + v.as_i64().unwrap_or(0))
/// });
/// assert_eq!(total, Some(json!(7)));
/// ```
pub fn reduce_unseeded<F>(record: &Record, reduce_fn: F) -> Option<Value>
where
    F: FnMut(Value, &str, &Value, usize, &Record) -> Value,
{
    let seed = record.values().next()?.clone();
    Some(reduce(record, reduce_fn, seed))
}

/// Replace every value with the result of `map_fn`, keeping the keys.
pub fn map<F>(record: &Record, mut map_fn: F) -> Record
where
    F: FnMut(&str, &Value, usize, &Record) -> Value,
{
    reduce(
        record,
        |acc, key, value, index, record| patch_entry(acc, key, map_fn(key, value, index, record)),
        Record::new(),
    )
}

/// Keep the entries for which `filter_fn` returns true.
pub fn filter<F>(record: &Record, mut filter_fn: F) -> Record
where
    F: FnMut(&str, &Value, usize, &Record) -> bool,
{
    reduce(
        record,
        |acc, key, value, index, record| {
            if filter_fn(key, value, index, record) {
                patch_entry(acc, key, value.clone())
            } else {
                acc
            }
        },
        Record::new(),
    )
}

/// Rebuild `tree`, replacing every leaf with the result of `leaf_fn`.
///
/// Plain records are descended into; arrays, typed records and scalars are
/// leaves. `leaf_fn` receives the record that directly holds the leaf.
///
/// ```
/// use serde_json::json;
/// use tirea_data::obj;
///
/// let tree = json!({"a": 1, "b": {"c": 3}});
/// let out = obj::traverse(tree.as_object().unwrap(), |_, v, _, _| {
///     json!(v.as_i64().unwrap_or(0) + 1)
/// });
/// assert_eq!(serde_json::Value::Object(out), json!({"a": 2, "b": {"c": 4}}));
/// ```
pub fn traverse<F>(tree: &Record, mut leaf_fn: F) -> Record
where
    F: FnMut(&str, &Value, usize, &Record) -> Value,
{
    traverse_with(tree, &mut leaf_fn)
}

fn traverse_with<F>(tree: &Record, leaf_fn: &mut F) -> Record
where
    F: FnMut(&str, &Value, usize, &Record) -> Value,
{
    tree.iter()
        .enumerate()
        .fold(Record::new(), |acc, (index, (key, value))| {
            let next = match value {
                Value::Object(child) if is_plain(child) => {
                    Value::Object(traverse_with(child, &mut *leaf_fn))
                }
                leaf => leaf_fn(key, leaf, index, tree),
            };
            patch_entry(acc, key, next)
        })
}
