//! Pattern matching against case tables.
//!
//! A lookup walks the case table along the match path. When nothing matches,
//! the path is shortened one segment at a time, so `["user", "admin"]` falls
//! back to the `user` case before the table-wide `default`.

use super::access::sub_segments;
use super::{is_literal, is_truthy};
use crate::error::{value_type_name, DataError, DataResult};
use crate::{Path, Seg};
use serde_json::Value;

/// Reserved case key holding the fallback outcome.
pub const DEFAULT_KEY: &str = "default";

/// Match `value` against a JSON case table.
///
/// Resolution order:
/// 1. the case at `value`, or that case's own `default` when it is a table
///    with a truthy `default`; falsy cases do not match;
/// 2. the same lookup with the last path segment dropped, while the path has
///    more than one segment;
/// 3. the table's truthy `default`;
/// 4. `None`.
///
/// ```
/// use serde_json::json;
/// use tirea_data::obj;
///
/// assert_eq!(obj::switch("b", &json!({"a": 1, "b": 3, "c": 4})), Some(&json!(3)));
/// assert_eq!(obj::switch("b", &json!({"a": 2, "c": 7, "default": 4})), Some(&json!(4)));
/// assert_eq!(obj::switch("b", &json!({"a": 1, "c": 4})), None);
/// ```
pub fn switch<'a>(value: impl Into<Path>, cases: &'a Value) -> Option<&'a Value> {
    let path = value.into();
    switch_segments(path.segments(), cases)
}

fn switch_segments<'a>(segments: &[Seg], cases: &'a Value) -> Option<&'a Value> {
    if let Some(hit) = sub_segments(cases, segments).filter(|hit| is_truthy(hit)) {
        let nested_default = hit.get(DEFAULT_KEY).filter(|d| is_truthy(d));
        return Some(nested_default.unwrap_or(hit));
    }
    if segments.len() > 1 {
        let shorter = &segments[..segments.len() - 1];
        tracing::trace!(path = %Path::from(shorter), "no case matched, retrying parent path");
        return switch_segments(shorter, cases);
    }
    cases.get(DEFAULT_KEY).filter(|d| is_truthy(d))
}

/// An entry of a [`MatchTable`].
#[derive(Clone, Debug, PartialEq)]
pub enum Case<T> {
    Outcome(T),
    Table(MatchTable<T>),
}

/// The result of [`MatchTable::resolve`].
#[derive(Debug, PartialEq)]
pub enum Match<'a, T> {
    Outcome(&'a T),
    /// A nested table without a default of its own.
    Table(&'a MatchTable<T>),
}

impl<'a, T> Match<'a, T> {
    /// The matched outcome, if the match is not a bare table.
    pub fn outcome(self) -> Option<&'a T> {
        match self {
            Match::Outcome(value) => Some(value),
            Match::Table(_) => None,
        }
    }
}

/// Typed case table: ordered cases, nested tables and an optional default.
///
/// Unlike [`switch`], outcomes have no truthiness; every stored outcome
/// matches.
///
/// ```
/// use tirea_data::obj::{Match, MatchTable};
///
/// let routes = MatchTable::new()
///     .case("home", "index.html")
///     .table("admin", MatchTable::new().case("users", "users.html").with_default("admin.html"))
///     .with_default("404.html");
///
/// assert_eq!(routes.resolve(["admin", "users"]), Some(Match::Outcome(&"users.html")));
/// assert_eq!(routes.resolve(["admin", "logs"]), Some(Match::Outcome(&"admin.html")));
/// assert_eq!(routes.resolve("missing"), Some(Match::Outcome(&"404.html")));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MatchTable<T> {
    cases: Vec<(String, Case<T>)>,
    default: Option<T>,
}

impl<T> Default for MatchTable<T> {
    fn default() -> Self {
        Self {
            cases: Vec::new(),
            default: None,
        }
    }
}

impl<T> MatchTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outcome case (builder form).
    pub fn case(mut self, key: impl Into<String>, outcome: T) -> Self {
        self.insert(key, Case::Outcome(outcome));
        self
    }

    /// Add a nested table (builder form).
    pub fn table(mut self, key: impl Into<String>, table: MatchTable<T>) -> Self {
        self.insert(key, Case::Table(table));
        self
    }

    /// Set the fallback outcome (builder form).
    pub fn with_default(mut self, outcome: T) -> Self {
        self.default = Some(outcome);
        self
    }

    /// Insert a case, replacing an existing case with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, case: Case<T>) {
        let key = key.into();
        match self.cases.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = case,
            None => self.cases.push((key, case)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Case<T>> {
        self.cases.iter().find(|(k, _)| k == key).map(|(_, case)| case)
    }

    pub fn default_outcome(&self) -> Option<&T> {
        self.default.as_ref()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|(k, _)| k.as_str())
    }

    /// Resolve `path` with the same fallback order as [`switch`].
    pub fn resolve(&self, path: impl Into<Path>) -> Option<Match<'_, T>> {
        let path = path.into();
        let segments = path.segments();
        for len in (1..=segments.len()).rev() {
            if let Some(hit) = self.lookup(&segments[..len]) {
                return Some(match hit {
                    Case::Outcome(outcome) => Match::Outcome(outcome),
                    Case::Table(table) => table
                        .default
                        .as_ref()
                        .map_or(Match::Table(table), Match::Outcome),
                });
            }
            if len > 1 {
                tracing::trace!(path = %Path::from(&segments[..len]), "no case matched, retrying parent path");
            }
        }
        self.default.as_ref().map(Match::Outcome)
    }

    fn lookup(&self, segments: &[Seg]) -> Option<&Case<T>> {
        let (first, rest) = segments.split_first()?;
        let case = self.get(&first.record_key())?;
        match (case, rest) {
            (case, []) => Some(case),
            (Case::Table(table), rest) => table.lookup(rest),
            (Case::Outcome(_), _) => None,
        }
    }
}

impl MatchTable<Value> {
    /// Build a table from a JSON case record.
    ///
    /// Plain records become nested tables, the `default` key becomes the
    /// fallback, and every other value becomes an outcome.
    pub fn from_value(cases: &Value) -> DataResult<Self> {
        Self::from_value_at(cases, Path::root())
    }

    fn from_value_at(cases: &Value, at: Path) -> DataResult<Self> {
        let record = cases
            .as_object()
            .ok_or_else(|| DataError::type_mismatch(at.clone(), "object", value_type_name(cases)))?;

        let mut table = MatchTable::new();
        for (key, value) in record {
            if key == DEFAULT_KEY {
                table.default = Some(value.clone());
                continue;
            }
            let case = if is_literal(value) {
                Case::Table(Self::from_value_at(value, at.clone().key(key.as_str()))?)
            } else {
                Case::Outcome(value.clone())
            };
            table.insert(key.as_str(), case);
        }
        Ok(table)
    }
}

impl TryFrom<&Value> for MatchTable<Value> {
    type Error = DataError;

    fn try_from(cases: &Value) -> Result<Self, Self::Error> {
        Self::from_value(cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn switch_returns_matched_case() {
        assert_eq!(switch("b", &json!({"a": 1, "b": 3, "c": 4})), Some(&json!(3)));
    }

    #[test]
    fn switch_falls_back_to_default() {
        assert_eq!(switch("b", &json!({"a": 2, "c": 7, "default": 4})), Some(&json!(4)));
    }

    #[test]
    fn switch_without_match_or_default_is_none() {
        assert_eq!(switch("b", &json!({"a": 1, "c": 4})), None);
    }

    #[test]
    fn switch_skips_falsy_cases_and_defaults() {
        let cases = json!({"a": 0, "b": "", "default": 5});
        assert_eq!(switch("a", &cases), Some(&json!(5)));
        assert_eq!(switch("b", &cases), Some(&json!(5)));
        assert_eq!(switch("x", &json!({"default": false})), None);
    }

    #[test]
    fn switch_prefers_nested_default() {
        let cases = json!({"user": {"admin": "A", "default": "U"}, "default": "D"});
        assert_eq!(switch(["user", "admin"], &cases), Some(&json!("A")));
        assert_eq!(switch(["user", "guest"], &cases), Some(&json!("U")));
        assert_eq!(switch("user", &cases), Some(&json!("U")));
        assert_eq!(switch(["other", "guest"], &cases), Some(&json!("D")));
    }

    #[test]
    fn switch_returns_nested_table_without_default() {
        let cases = json!({"a": {"b": 1}});
        assert_eq!(switch("a", &cases), Some(&json!({"b": 1})));
        assert_eq!(switch(["a", "c"], &cases), Some(&json!({"b": 1})));
    }

    #[test]
    fn switch_shortens_long_paths_step_by_step() {
        let cases = json!({"a": {"b": {"default": "AB"}}});
        assert_eq!(switch(["a", "b", "c", "d"], &cases), Some(&json!("AB")));
    }

    #[test]
    fn switch_empty_path_uses_default() {
        assert_eq!(switch(Path::root(), &json!({"a": 1, "default": 2})), Some(&json!(2)));
    }

    #[test]
    fn switch_numeric_values_match_string_keys() {
        assert_eq!(switch(2usize, &json!({"1": "one", "2": "two"})), Some(&json!("two")));
    }

    #[test]
    fn table_resolves_outcomes_and_defaults() {
        let table = MatchTable::new().case("a", 1).case("b", 3).case("c", 4);
        assert_eq!(table.resolve("b").and_then(Match::outcome), Some(&3));
        assert_eq!(table.resolve("z"), None);

        let table = MatchTable::new().case("a", 2).case("c", 7).with_default(4);
        assert_eq!(table.resolve("b").and_then(Match::outcome), Some(&4));
    }

    #[test]
    fn table_keeps_falsy_outcomes() {
        let table = MatchTable::new().case("zero", 0).with_default(9);
        assert_eq!(table.resolve("zero"), Some(Match::Outcome(&0)));
    }

    #[test]
    fn table_returns_bare_nested_table() {
        let inner = MatchTable::new().case("b", 1);
        let table = MatchTable::new().table("a", inner.clone());
        assert_eq!(table.resolve("a"), Some(Match::Table(&inner)));
        assert_eq!(table.resolve(["a", "x"]), Some(Match::Table(&inner)));
        assert_eq!(table.resolve("a").and_then(Match::outcome), None);
    }

    #[test]
    fn table_insert_replaces_in_place() {
        let table = MatchTable::new().case("a", 1).case("b", 2).case("a", 3);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(table.get("a"), Some(&Case::Outcome(3)));
    }

    #[test]
    fn table_from_value_agrees_with_switch() {
        let cases = json!({
            "user": {"admin": "A", "default": "U"},
            "guest": "G",
            "at": {"$type": "Date", "iso": "2017-02-01"},
            "default": "D"
        });
        let table = MatchTable::from_value(&cases).unwrap();
        for path in [
            Path::from(["user", "admin"]),
            Path::from(["user", "nobody"]),
            Path::from("guest"),
            Path::from(["guest", "x"]),
            Path::from("missing"),
            Path::from("at"),
        ] {
            assert_eq!(
                table.resolve(&path).and_then(Match::outcome),
                switch(&path, &cases),
                "disagreement at {path}"
            );
        }
        assert_eq!(table.default_outcome(), Some(&json!("D")));
    }

    #[test]
    fn table_from_value_rejects_non_records() {
        let nested = MatchTable::from_value(&json!({"a": 1, "b": {"c": 2}, "d": [1]})).unwrap();
        assert!(matches!(nested.get("b"), Some(Case::Table(_))));
        assert_eq!(nested.get("d"), Some(&Case::Outcome(json!([1]))));

        let err = MatchTable::try_from(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, DataError::TypeMismatch { found: "array", .. }));
    }
}
