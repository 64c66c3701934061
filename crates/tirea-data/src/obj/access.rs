//! Path reads and path writes.

use super::{is_plain, Record};
use crate::{Path, Seg};
use serde_json::Value;

/// Read the value at `path`.
///
/// Returns `None` when any step runs into a missing key, `null`, or a value
/// that has no children. Present `null`, `0` and `false` values come back as
/// `Some`.
///
/// ```
/// use serde_json::json;
/// use tirea_data::obj;
///
/// let doc = json!({"a": {"b": {"c": 1}}, "n": null});
/// assert_eq!(obj::sub(&doc, ["a", "b", "c"]), Some(&json!(1)));
/// assert_eq!(obj::sub(&doc, "n"), Some(&json!(null)));
/// assert_eq!(obj::sub(&doc, "missing"), None);
/// ```
pub fn sub<'a>(record: &'a Value, path: impl Into<Path>) -> Option<&'a Value> {
    let path = path.into();
    sub_segments(record, path.segments())
}

pub(crate) fn sub_segments<'a>(record: &'a Value, segments: &[Seg]) -> Option<&'a Value> {
    // An empty path names no key.
    if segments.is_empty() {
        return None;
    }
    segments
        .iter()
        .try_fold(record, |current, seg| child(current, seg))
}

fn child<'a>(value: &'a Value, seg: &Seg) -> Option<&'a Value> {
    match value {
        Value::Object(record) => record.get(&*seg.record_key()),
        Value::Array(items) => seg.position().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Return a copy of `record` with `value` written at `path`.
///
/// At the last segment, two plain records are shallow-merged (keys of `value`
/// win); anything else replaces the existing value. Missing intermediate
/// records are created. Records rebuilt along the way keep their type tag.
/// Arrays are written by position, up to one past the end; other segments
/// turn an array into a record keyed by position.
///
/// ```
/// use serde_json::json;
/// use tirea_data::obj;
///
/// assert_eq!(
///     obj::patch(&json!({"a": 1}), ["b", "c", "d"], json!(2)),
///     json!({"a": 1, "b": {"c": {"d": 2}}})
/// );
/// assert_eq!(
///     obj::patch(&json!({"a": {"b": 1}}), "a", json!({"c": 2})),
///     json!({"a": {"b": 1, "c": 2}})
/// );
/// ```
pub fn patch(record: &Value, path: impl Into<Path>, value: Value) -> Value {
    let path = path.into();
    match path.segments() {
        [] => merge_or_replace(Some(record), value),
        segments => patch_segments(record, segments, value),
    }
}

fn patch_segments(current: &Value, segments: &[Seg], value: Value) -> Value {
    let Some((seg, rest)) = segments.split_first() else {
        return value;
    };

    let existing = child(current, seg);
    let next = if rest.is_empty() {
        merge_or_replace(existing, value)
    } else {
        match existing {
            Some(inner @ (Value::Object(_) | Value::Array(_))) => patch_segments(inner, rest, value),
            _ => patch_segments(&Value::Object(Record::new()), rest, value),
        }
    };

    with_child(current, seg, next)
}

/// Copy of `current` with `seg` set to `next`.
///
/// An array takes a position inside it or one past its end. Any other segment
/// turns the array into a record keyed by position, so no element is lost.
fn with_child(current: &Value, seg: &Seg, next: Value) -> Value {
    match current {
        Value::Array(items) => match seg.position().filter(|&at| at <= items.len()) {
            Some(at) => {
                let mut items = items.clone();
                if at == items.len() {
                    items.push(next);
                } else {
                    items[at] = next;
                }
                Value::Array(items)
            }
            None => {
                let mut record = keyed_by_position(items);
                record.insert(seg.record_key().into_owned(), next);
                Value::Object(record)
            }
        },
        Value::Object(record) => {
            let mut record = record.clone();
            record.insert(seg.record_key().into_owned(), next);
            Value::Object(record)
        }
        _ => {
            let mut record = Record::new();
            record.insert(seg.record_key().into_owned(), next);
            Value::Object(record)
        }
    }
}

fn keyed_by_position(items: &[Value]) -> Record {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (i.to_string(), item.clone()))
        .collect()
}

/// Shallow merge when both sides are plain records, else `value`.
fn merge_or_replace(existing: Option<&Value>, value: Value) -> Value {
    match (existing, value) {
        (Some(Value::Object(old)), Value::Object(new)) if is_plain(old) && is_plain(&new) => {
            let mut merged = old.clone();
            merged.extend(new);
            Value::Object(merged)
        }
        (_, value) => value,
    }
}

/// Single-key patch on an owned record, used by the folding helpers.
pub(crate) fn patch_entry(mut record: Record, key: &str, value: Value) -> Record {
    let next = merge_or_replace(record.get(key), value);
    record.insert(key.to_owned(), next);
    record
}
