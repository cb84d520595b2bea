//! Centralized domain validation.
//!
//! All validation logic lives here, not scattered across entities.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::error::DomainError;

/// Shape filter for remote repository URLs.
///
/// Deliberately permissive: this accepts anything that *looks* like an
/// http(s) or git URL and leaves real validation to the remote tooling.
/// It is not a URL parser.
const URL_SHAPE: &str = r"^(https?|git)://[^\s/$.?#].[^\s]*$";

static URL_RE: OnceLock<Regex> = OnceLock::new();

/// `true` if `candidate` matches the permissive repository-URL shape.
pub fn is_valid_url(candidate: &str) -> bool {
    let re = URL_RE.get_or_init(|| Regex::new(URL_SHAPE).expect("URL_SHAPE is a valid pattern"));
    re.is_match(candidate)
}

/// Validate a candidate project name.
///
/// The name becomes a directory on the host, so it must be non-empty and
/// free of path separators, and must not hide itself as a dotfile.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_filter_accepts_common_shapes() {
        assert!(is_valid_url("https://x.y/z"));
        assert!(is_valid_url("http://x.y"));
        assert!(is_valid_url("git://x.y/z.git"));
        assert!(is_valid_url("https://github.com/stacksmith-dev/stacksmith.git"));
    }

    #[test]
    fn url_filter_rejects_non_urls() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("ftp://x.y"));
        assert!(!is_valid_url("x.y/z"));
        assert!(!is_valid_url("https:// x.y"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_project_name(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(validate_project_name(".hidden").is_err());
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["my-project", "my_app", "project123", "MyApp", "demo"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }
}
