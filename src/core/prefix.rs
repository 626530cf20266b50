//! Deployment path prefix
//!
//! The backend can be mounted under a sub-path (e.g. behind a reverse proxy).
//! The prefix is resolved once at startup from an ordered list of candidates
//! and then passed to everything that builds request or route paths.

use std::fmt;

/// Canonical path prefix: empty, or `/segment` with no trailing slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PathPrefix(String);

impl PathPrefix {
    /// Pick the first usable candidate (earlier entries win) and canonicalize it.
    ///
    /// Absent, blank and bare `/` candidates are skipped. A selected candidate
    /// that canonicalizes to nothing (e.g. `//`) yields the empty prefix rather
    /// than falling through. If nothing qualifies the prefix is empty.
    pub(crate) fn resolve<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .flatten()
            .find(|raw| qualifies(raw.as_ref()))
            .map(|raw| PathPrefix(canonicalize(raw.as_ref())))
            .unwrap_or_default()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix a root-relative path. Anything else is returned unchanged.
    pub(crate) fn apply(&self, path: &str) -> String {
        if path.starts_with('/') && !self.is_empty() {
            format!("{}{}", self.0, path)
        } else {
            path.to_string()
        }
    }

    /// Remove the prefix from a path, returning the root-relative remainder.
    ///
    /// Returns `None` when the path lives outside the prefix. `/app` and
    /// `/app/` both map to `/`; `/apple` is not under `/app`.
    pub(crate) fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn qualifies(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed != "/"
}

fn canonicalize(raw: &str) -> String {
    // Every trailing slash goes, so "//" ends up as empty as "/".
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
