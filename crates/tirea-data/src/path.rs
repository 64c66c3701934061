//! Locations inside nested records.
//!
//! A [`Path`] is either a single key or an ordered list of keys. Every helper
//! that reads or writes at a location takes `impl Into<Path>`, so callers can
//! pass `"a"`, `["a", "b"]`, `vec!["a".to_string()]` or the [`path!`] macro.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A single step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Record key.
    Key(String),
    /// Sequence position.
    Index(usize),
}

impl Seg {
    /// Create a key segment.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Seg::Key(k.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Seg::Index(i)
    }

    /// The record key this segment addresses.
    ///
    /// Records only have string keys, so an index addresses its decimal form:
    /// `Seg::Index(1)` reads the entry `"1"`.
    pub fn record_key(&self) -> Cow<'_, str> {
        match self {
            Seg::Key(k) => Cow::Borrowed(k.as_str()),
            Seg::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    /// The sequence position this segment addresses, if any.
    ///
    /// Keys that spell a plain decimal number (`"0"`, `"12"`) address the
    /// matching position.
    pub fn position(&self) -> Option<usize> {
        match self {
            Seg::Index(i) => Some(*i),
            Seg::Key(k) => {
                if k.is_empty() || !k.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                // "01" is a key, not a position
                if k.len() > 1 && k.starts_with('0') {
                    return None;
                }
                k.parse().ok()
            }
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, ".{}", k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<&String> for Seg {
    fn from(s: &String) -> Self {
        Seg::Key(s.clone())
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// An ordered list of segments locating a value inside a record.
///
/// # Examples
///
/// ```
/// use tirea_data::{path, Path};
///
/// let single: Path = "name".into();
/// let nested: Path = ["user", "name"].into();
/// assert_eq!(nested, path!("user", "name"));
/// assert_eq!(single.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Seg>);

impl Path {
    /// The empty path.
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Append a key segment (builder form).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    /// Append an index segment (builder form).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    /// Push a segment onto the path.
    #[inline]
    pub fn push(&mut self, seg: impl Into<Seg>) {
        self.0.push(seg.into());
    }

    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The path without its last segment, or `None` for the empty path.
    pub fn parent(&self) -> Option<Path> {
        self.0
            .split_last()
            .map(|(_, rest)| Path(rest.to_vec()))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.0 {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl From<Seg> for Path {
    fn from(seg: Seg) -> Self {
        Path(vec![seg])
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Path(vec![Seg::from(key)])
    }
}

impl From<String> for Path {
    fn from(key: String) -> Self {
        Path(vec![Seg::Key(key)])
    }
}

impl From<usize> for Path {
    fn from(i: usize) -> Self {
        Path(vec![Seg::Index(i)])
    }
}

impl<S: Into<Seg>> From<Vec<S>> for Path {
    fn from(segs: Vec<S>) -> Self {
        segs.into_iter().collect()
    }
}

impl<S: Into<Seg> + Clone> From<&[S]> for Path {
    fn from(segs: &[S]) -> Self {
        segs.iter().cloned().collect()
    }
}

impl<S: Into<Seg>, const N: usize> From<[S; N]> for Path {
    fn from(segs: [S; N]) -> Self {
        segs.into_iter().collect()
    }
}

impl<S: Into<Seg>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Seg;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Construct a [`Path`] from keys and indices.
///
/// ```
/// use tirea_data::path;
///
/// let p = path!("users", 0, "name");
/// assert_eq!(p.len(), 3);
/// assert_eq!(p.to_string(), "$.users[0].name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Seg::from($seg));
        )+
        p
    }};
}
