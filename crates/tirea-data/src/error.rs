//! Error types for tirea-data operations.
//!
//! Lookups that may simply miss (`sub`, `switch`, `contains`) report through
//! `Option`/`bool`. Only failures a caller must handle surface here.

use crate::Path;
use thiserror::Error;

/// Result type alias for tirea-data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur during tirea-data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// A chained call named a method the method table does not provide.
    #[error("method `{method}` not found (call #{step} of the chain)")]
    MethodNotFound {
        /// The requested method name.
        method: String,
        /// Zero-based position of the call in the chain.
        step: usize,
    },

    /// A method was invoked on a receiver it cannot handle.
    #[error("method `{method}` expects a {expected} receiver, found {found}")]
    InvalidReceiver {
        /// The method that rejected its receiver.
        method: String,
        /// The receiver type the method accepts.
        expected: &'static str,
        /// The receiver type it was given.
        found: &'static str,
    },

    /// A method was invoked with arguments it cannot handle.
    #[error("invalid arguments for `{method}`: {message}")]
    InvalidArguments {
        /// The method that rejected its arguments.
        method: String,
        /// What was wrong with them.
        message: String,
    },

    /// Type mismatch when reading or converting a value.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The path where the mismatch occurred.
        path: Path,
        /// The expected type.
        expected: &'static str,
        /// The actual type found.
        found: &'static str,
    },

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DataError {
    #[inline]
    pub fn method_not_found(method: impl Into<String>, step: usize) -> Self {
        DataError::MethodNotFound {
            method: method.into(),
            step,
        }
    }

    #[inline]
    pub fn invalid_receiver(
        method: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        DataError::InvalidReceiver {
            method: method.into(),
            expected,
            found,
        }
    }

    #[inline]
    pub fn invalid_arguments(method: impl Into<String>, message: impl Into<String>) -> Self {
        DataError::InvalidArguments {
            method: method.into(),
            message: message.into(),
        }
    }

    #[inline]
    pub fn type_mismatch(path: Path, expected: &'static str, found: &'static str) -> Self {
        DataError::TypeMismatch {
            path,
            expected,
            found,
        }
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn method_not_found_names_method_and_step() {
        let err = DataError::method_not_found("sum", 2);
        assert_eq!(err.to_string(), "method `sum` not found (call #2 of the chain)");
    }

    #[test]
    fn type_mismatch_display_includes_path() {
        let err = DataError::type_mismatch(path!("a", "b"), "object", "string");
        assert_eq!(
            err.to_string(),
            "type mismatch at $.a.b: expected object, found string"
        );
    }

    #[test]
    fn receiver_and_argument_errors_keep_their_fields() {
        let err = DataError::invalid_receiver("add", "object", "array");
        assert!(matches!(
            &err,
            DataError::InvalidReceiver { method, expected: "object", found: "array" } if method == "add"
        ));
        assert_eq!(err.to_string(), "method `add` expects a object receiver, found array");

        let err = DataError::invalid_arguments("add", "expected an integer");
        assert!(matches!(
            &err,
            DataError::InvalidArguments { method, message } if method == "add" && message == "expected an integer"
        ));
        assert_eq!(err.to_string(), "invalid arguments for `add`: expected an integer");
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!(42)), "number");
        assert_eq!(value_type_name(&json!("hello")), "string");
        assert_eq!(value_type_name(&json!([1, 2, 3])), "array");
        assert_eq!(value_type_name(&json!({"a": 1})), "object");
    }
}
