//! Location of a value inside a configuration document.

use owo_colors::OwoColorize;
use serde::{Serialize, Serializer};
use std::fmt;

/// Dotted path to a value in the document, with array indices in brackets.
///
/// Built while walking the document, so it is owned rather than `'static`.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::root().key("sections").index(0).key("items");
/// assert_eq!(path.as_str(), "sections[0].items");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// The document root (empty path).
    #[inline]
    pub const fn root() -> Self {
        Self(String::new())
    }

    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Child path for an object property.
    pub fn key(&self, key: &str) -> Self {
        if self.is_root() {
            Self::new(key)
        } else {
            Self::new(format!("{}.{key}", self.0))
        }
    }

    /// Child path for an array element.
    pub fn index(&self, index: usize) -> Self {
        Self::new(format!("{}[{index}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Human label: `(root)` for the empty path.
    pub fn label(&self) -> &str {
        if self.is_root() { "(root)" } else { self.as_str() }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.label()).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
