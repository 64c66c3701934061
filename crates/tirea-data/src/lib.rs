//! Immutable helpers for sequences, JSON records, strings and functions.
//!
//! Every helper is a pure function: inputs are borrowed, never modified, and
//! results are freshly built values.
//!
//! # Modules
//!
//! - [`arr`]: add, remove, toggle and membership on sequences
//! - [`obj`]: path reads and writes on records, folds, chained calls and case
//!   matching
//! - [`text`]: camelCase conversion and naive pluralization
//! - [`func`]: left-to-right and right-to-left composition
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use tirea_data::{arr, obj, text};
//!
//! let state = json!({"user": {"name": "Ann", "roles": ["reader"]}});
//!
//! let roles = obj::sub(&state, ["user", "roles"]).cloned().unwrap_or_default();
//! let next = obj::patch(&state, ["user", "roles"], json!(["reader", "editor"]));
//!
//! assert!(!arr::contains(&roles, &json!("editor")));
//! assert!(arr::contains(&next["user"]["roles"], &json!("editor")));
//! assert_eq!(state["user"]["roles"], json!(["reader"])); // original unchanged
//!
//! assert_eq!(text::to_camel_case("user_roles", text::DEFAULT_GLUE), "userRoles");
//! ```

pub mod arr;
mod error;
pub mod func;
pub mod obj;
mod path;
pub mod text;

pub use error::{value_type_name, DataError, DataResult};
pub use path::{Path, Seg};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
