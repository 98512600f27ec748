// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dotted/bracketed field paths.
//!
//! The document root is the empty path. Object keys are joined with `.`
//! (`sub.field2`) and array positions are appended as `[i]` (`array[0]`).
//! Keys are used verbatim, without escaping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a field or array element from the document root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// The document root
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Path of the object member `key` below this path
    #[must_use]
    pub fn join(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_owned())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Path of the array element at `index` below this path
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Whether this is the document root
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Rendered path
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}
