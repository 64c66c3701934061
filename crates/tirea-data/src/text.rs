//! String case and naive English inflection helpers.
//!
//! Inflection only knows two rules (`y` <-> `ies`, and a trailing `s`), so it
//! is lossy for irregular words: `"series"` singularizes to `"sery"`.

use serde::{Deserialize, Serialize};

/// Separator used by the snake-case conversions.
pub const DEFAULT_GLUE: &str = "_";

/// Upper-case the first character.
///
/// ```
/// use tirea_data::text;
///
/// assert_eq!(text::capitalize("hello"), "Hello");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join `glue`-separated chunks into camelCase.
///
/// The first chunk is kept as is; every later chunk is capitalized.
///
/// ```
/// use tirea_data::text;
///
/// assert_eq!(text::to_camel_case("hello_world", "_"), "helloWorld");
/// assert_eq!(text::to_camel_case("hello-world", "-"), "helloWorld");
/// ```
pub fn to_camel_case(s: &str, glue: &str) -> String {
    split_on(s, glue)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            if i == 0 {
                chunk.to_owned()
            } else {
                capitalize(chunk)
            }
        })
        .collect()
}

/// Split camelCase into lower-case chunks joined with `glue`.
///
/// Every ASCII upper-case letter starts a new chunk, so a leading capital
/// yields a leading empty chunk: `"HelloWorld"` becomes `"_hello_world"`.
///
/// ```
/// use tirea_data::text;
///
/// assert_eq!(text::from_camel_case("helloWorld", "_"), "hello_world");
/// assert_eq!(text::from_camel_case("helloWorld", "-"), "hello-world");
/// ```
pub fn from_camel_case(s: &str, glue: &str) -> String {
    let mut spaced = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    spaced
        .split(' ')
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(glue)
}

/// `category` -> `categories`, `user` -> `users`.
pub fn singular_to_plural(s: &str) -> String {
    match s.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{s}s"),
    }
}

/// `categories` -> `category`, `users` -> `user`.
pub fn plural_to_singular(s: &str) -> String {
    if let Some(stem) = s.strip_suffix("ies") {
        return format!("{stem}y");
    }
    s.strip_suffix('s').unwrap_or(s).to_owned()
}

/// How [`to_document_id`] shapes an identifier name.
///
/// Deserializes with defaults for missing fields, so `{"suffix": "ID"}` is a
/// complete configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentIdFormat {
    /// Separator in the source name.
    pub glue: String,
    pub suffix: String,
    pub prefix: String,
}

impl Default for DocumentIdFormat {
    fn default() -> Self {
        Self {
            glue: DEFAULT_GLUE.to_owned(),
            suffix: "Id".to_owned(),
            prefix: String::new(),
        }
    }
}

impl DocumentIdFormat {
    pub fn with_glue(mut self, glue: impl Into<String>) -> Self {
        self.glue = glue.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Turn a collection name into a reference field name.
///
/// ```
/// use tirea_data::text::{self, DocumentIdFormat};
///
/// assert_eq!(text::to_document_id("user_roles", &DocumentIdFormat::default()), "userRoleId");
/// ```
pub fn to_document_id(s: &str, format: &DocumentIdFormat) -> String {
    let name = plural_to_singular(&to_camel_case(s, &format.glue));
    format!("{}{}{}", format.prefix, name, format.suffix)
}

/// `str::split` yields empty edge chunks for an empty separator; an empty
/// glue splits into single characters instead.
fn split_on<'a>(s: &'a str, glue: &str) -> Vec<&'a str> {
    if glue.is_empty() {
        s.char_indices()
            .map(|(i, c)| &s[i..i + c.len_utf8()])
            .collect()
    } else {
        s.split(glue).collect()
    }
}
