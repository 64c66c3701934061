//! Sequence helpers.
//!
//! Every helper borrows its input and returns a new sequence. `remove` is the
//! one exception: when nothing matches it hands the input slice back as
//! [`Cow::Borrowed`].

use serde_json::Value;
use std::borrow::Cow;

/// Append `item` to a copy of `seq`.
///
/// ```
/// use tirea_data::arr;
///
/// assert_eq!(arr::add(&[1, 2, 3], 4), vec![1, 2, 3, 4]);
/// ```
pub fn add<T: Clone>(seq: &[T], item: T) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len() + 1);
    out.extend_from_slice(seq);
    out.push(item);
    out
}

/// Remove the leftmost element equal to `item`.
///
/// Returns the original slice, borrowed, when no element is equal.
///
/// ```
/// use std::borrow::Cow;
/// use tirea_data::arr;
///
/// assert_eq!(arr::remove(&[1, 2, 3, 2], &2).as_ref(), &[1, 3, 2]);
/// assert!(matches!(arr::remove(&[1, 2, 3], &4), Cow::Borrowed(_)));
/// ```
pub fn remove<'a, T: Clone + PartialEq>(seq: &'a [T], item: &T) -> Cow<'a, [T]> {
    match seq.iter().position(|el| el == item) {
        Some(at) => {
            let mut out = Vec::with_capacity(seq.len() - 1);
            out.extend_from_slice(&seq[..at]);
            out.extend_from_slice(&seq[at + 1..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(seq),
    }
}

/// Remove `item` if an equal element exists, append it otherwise.
pub fn toggle<T: Clone + PartialEq>(seq: &[T], item: T) -> Vec<T> {
    if seq.contains(&item) {
        remove(seq, &item).into_owned()
    } else {
        add(seq, item)
    }
}

/// Check whether a JSON array or comma-separated string contains `el`.
///
/// Strings are split on `,` and each chunk compared as a JSON string. Any
/// other input behaves like an empty sequence.
///
/// ```
/// use serde_json::json;
/// use tirea_data::arr;
///
/// assert!(arr::contains(&json!(["bar", "foo"]), &json!("foo")));
/// assert!(arr::contains(&json!("bar,foo"), &json!("foo")));
/// assert!(!arr::contains(&json!({"foo": "bar"}), &json!("foo")));
/// ```
pub fn contains(haystack: &Value, el: &Value) -> bool {
    match haystack {
        Value::Array(items) => items.contains(el),
        Value::String(csv) => match el {
            Value::String(needle) => csv.split(',').any(|chunk| chunk == needle),
            _ => false,
        },
        _ => false,
    }
}
