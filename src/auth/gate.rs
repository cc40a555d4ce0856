//! Path exclusion matching.
//!
//! # Responsibilities
//! - Decide whether a request path requires authentication
//! - Match paths against the configured exclusion list
//!
//! # Design Decisions
//! - Plain string comparison, case-sensitive, no regex to guarantee O(n) matching
//! - Absent path or absent/empty exclusion list means auth is required
//! - Prefix matching runs in both directions (entry-prefix-of-path and
//!   path-prefix-of-entry); the second direction over-excludes but is the
//!   documented behavior, so it is preserved rather than fixed

/// Decides whether a request path requires authentication.
///
/// Holds the exclusion list at construction time so per-request checks are
/// pure lookups with no configuration access.
#[derive(Debug, Clone, Default)]
pub struct PathGate {
    exclusions: Vec<String>,
}

impl PathGate {
    /// Create a gate from an exclusion list.
    ///
    /// Each entry is a literal path, a prefix ending in `/`, or a wildcard
    /// ending in `*`.
    pub fn new<I, S>(exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the given path requires authentication.
    pub fn requires_auth(&self, path: Option<&str>) -> bool {
        requires_auth(path, Some(self.exclusions.as_slice()))
    }

    /// The configured exclusion entries.
    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }
}

/// Returns true if `path` requires authentication given `exclusions`.
///
/// An absent path and an absent or empty exclusion list both require auth.
/// A path is exempt when it exactly equals an entry, when an entry is a
/// prefix of it, when it is a prefix of an entry, or when an entry ends in
/// `*` and the path starts with the entry minus that `*`.
pub fn requires_auth(path: Option<&str>, exclusions: Option<&[String]>) -> bool {
    let path = match path {
        Some(p) => p,
        None => return true,
    };

    let exclusions = match exclusions {
        Some(e) if !e.is_empty() => e,
        _ => return true,
    };

    if exclusions.iter().any(|e| e == path) {
        return false;
    }

    for excluded in exclusions {
        if excluded.starts_with(path) {
            return false;
        }
        if path.starts_with(excluded.as_str()) {
            return false;
        }
        if let Some(stem) = excluded.strip_suffix('*') {
            if path.starts_with(stem) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_absent_inputs_require_auth() {
        let exclusions = list(&["/api/v1/status"]);
        assert!(requires_auth(None, None));
        assert!(requires_auth(None, Some(exclusions.as_slice())));
        assert!(requires_auth(Some("/api/v1/status"), None));
        assert!(requires_auth(Some("/api/v1/status"), Some(&[])));
    }

    #[test]
    fn test_exact_match() {
        let exclusions = list(&["/api/v1/status"]);
        assert!(!requires_auth(
            Some("/api/v1/status"),
            Some(exclusions.as_slice())
        ));
    }

    #[test]
    fn test_wildcard_match() {
        let exclusions = list(&["/api/v1/users/*"]);
        assert!(!requires_auth(
            Some("/api/v1/users/55"),
            Some(exclusions.as_slice())
        ));
        assert!(requires_auth(
            Some("/api/v1/other"),
            Some(exclusions.as_slice())
        ));
    }

    #[test]
    fn test_prefix_match_both_directions() {
        let exclusions = list(&["/api/v1/status"]);
        // Entry is a prefix of the path.
        assert!(!requires_auth(
            Some("/api/v1/status/extra"),
            Some(exclusions.as_slice())
        ));
        // Path is a prefix of the entry.
        assert!(!requires_auth(Some("/api/v1"), Some(exclusions.as_slice())));
    }

    #[test]
    fn test_non_matching_path() {
        let exclusions = list(&["/api/v1/status/"]);
        assert!(requires_auth(Some("/home"), Some(exclusions.as_slice())));
    }

    #[test]
    fn test_gate_wraps_free_function() {
        let gate = PathGate::new(["/api/v1/status"]);
        assert!(!gate.requires_auth(Some("/api/v1/status")));
        assert!(gate.requires_auth(Some("/home")));

        let empty = PathGate::default();
        assert!(empty.requires_auth(Some("/api/v1/status")));
    }
}
