//! Path reads and writes on Rust types.
//!
//! The value is viewed as JSON, patched, and read back as the same type, so
//! the concrete type of the root survives the update.

use super::access::{patch, sub_segments};
use crate::error::DataResult;
use crate::Path;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read the value at `path` as a `T`.
///
/// `Ok(None)` when nothing is at `path`; an error when something is there but
/// does not deserialize as `T`.
pub fn sub_as<T: DeserializeOwned>(record: &Value, path: impl Into<Path>) -> DataResult<Option<T>> {
    let path = path.into();
    match sub_segments(record, path.segments()) {
        Some(found) => Ok(Some(T::deserialize(found)?)),
        None => Ok(None),
    }
}

/// Return a copy of `record` with `value` written at `path`, as the same type.
///
/// Follows the merge rules of [`patch`]. Fails when the patched document no
/// longer deserializes as `T`.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tirea_data::obj;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Profile {
///     name: String,
///     age: u32,
/// }
///
/// let before = Profile { name: "Ann".into(), age: 30 };
/// let after: Profile = obj::patch_as(&before, "age", 31).unwrap();
/// assert_eq!(after, Profile { name: "Ann".into(), age: 31 });
/// assert_eq!(before.age, 30);
/// ```
pub fn patch_as<T, V>(record: &T, path: impl Into<Path>, value: V) -> DataResult<T>
where
    T: Serialize + DeserializeOwned,
    V: Serialize,
{
    let path = path.into();
    let doc = serde_json::to_value(record)?;
    let patched = patch(&doc, &path, serde_json::to_value(value)?);
    T::deserialize(patched).map_err(|err| {
        tracing::debug!(%path, error = %err, "patched document no longer fits its type");
        err.into()
    })
}
