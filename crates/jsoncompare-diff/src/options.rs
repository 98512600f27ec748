// SPDX-License-Identifier: MIT OR Apache-2.0
//! Comparison configuration

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Options for [`compare_with_options`](crate::compare_with_options)
///
/// Deserializable so an embedding application can keep it in its own
/// configuration file; missing fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Stop after this many diagnostics. `None` reports everything.
    pub max_diagnostics: Option<NonZeroUsize>,
}

impl CompareOptions {
    /// Default options: no cap
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_diagnostics: None,
        }
    }

    /// Cap the number of diagnostics; `0` removes the cap
    #[must_use]
    pub const fn with_max_diagnostics(mut self, limit: usize) -> Self {
        self.max_diagnostics = NonZeroUsize::new(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_uncapped() {
        assert_eq!(CompareOptions::new(), CompareOptions::default());
        assert!(CompareOptions::new().max_diagnostics.is_none());
    }

    #[test]
    fn test_with_max_diagnostics() {
        let opts = CompareOptions::new().with_max_diagnostics(5);
        assert_eq!(opts.max_diagnostics.map(NonZeroUsize::get), Some(5));
        assert!(opts.with_max_diagnostics(0).max_diagnostics.is_none());
    }

    #[test]
    fn test_deserialize() {
        let opts: CompareOptions = serde_json::from_str(r#"{"max_diagnostics": 3}"#).unwrap();
        assert_eq!(opts, CompareOptions::new().with_max_diagnostics(3));

        let opts: CompareOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, CompareOptions::default());

        assert!(serde_json::from_str::<CompareOptions>(r#"{"max_diagnostics": 0}"#).is_err());
    }
}
