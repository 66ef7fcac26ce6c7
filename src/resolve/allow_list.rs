//! Start-URL allow-list.
//!
//! The resolver only accepts inputs that begin with one of a fixed set of
//! prefixes. Redirect targets reached after the first hop are not checked:
//! following them to arbitrary hosts is the point of the service.

use crate::config::DEFAULT_ALLOWED_PREFIXES;

/// A set of URL prefixes permitted as resolution inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    prefixes: Vec<String>,
}

impl AllowList {
    /// Builds an allow-list from arbitrary prefixes. An empty list permits nothing.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `url` starts with one of the allowed prefixes.
    ///
    /// Matching is a case-sensitive prefix comparison on the raw string.
    pub fn permits(&self, url: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && url.starts_with(prefix.as_str()))
    }

    /// The configured prefixes, in order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_PREFIXES.iter().copied())
    }
}
