use crate::error::{MdvarsError, Result};

// Longest first, so ".markdown" is not half-stripped by the ".md" rule.
const MARKDOWN_EXTENSIONS: &[&str] = &[".markdown", ".mdx", ".md"];

/// A document's identity within the configuration store: the group it belongs
/// to and its base name within that group.
///
/// Computed fresh per invocation from the document's path; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIdentity {
    pub group: String,
    pub name: String,
}

impl DocumentIdentity {
    /// Derive an identity from a path-like document identifier.
    ///
    /// The group is the first path segment after the `root_marker` segment;
    /// the name is the final segment with any recognized markdown extension
    /// removed. Extension matching is case-sensitive, like the token matching
    /// it feeds.
    ///
    /// A path without the marker, or with nothing after it, violates the
    /// host's contract and is the one condition this crate surfaces as an
    /// error.
    pub fn from_path(path: &str, root_marker: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let marker_pos = segments
            .iter()
            .position(|s| *s == root_marker)
            .ok_or_else(|| {
                MdvarsError::MalformedPath(format!("no '{}' segment in '{}'", root_marker, path))
            })?;

        let rest = &segments[marker_pos + 1..];
        let (group, last) = match rest {
            [] => {
                return Err(MdvarsError::MalformedPath(format!(
                    "nothing after '{}' segment in '{}'",
                    root_marker, path
                )))
            }
            [first, .., last] => (*first, *last),
            [only] => (*only, *only),
        };

        let name = strip_markdown_extension(last);
        if name.is_empty() {
            return Err(MdvarsError::MalformedPath(format!(
                "empty document name in '{}'",
                path
            )));
        }

        Ok(Self {
            group: group.to_string(),
            name: name.to_string(),
        })
    }
}

/// Remove a recognized markdown extension; other extensions are part of the
/// document name.
fn strip_markdown_extension(file_name: &str) -> &str {
    for ext in MARKDOWN_EXTENSIONS {
        if let Some(stripped) = file_name.strip_suffix(ext) {
            return stripped;
        }
    }
    file_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_path() {
        let id = DocumentIdentity::from_path("/docs/v2/pasta/recipes/intro.md", "v2").unwrap();
        assert_eq!(id.group, "pasta");
        assert_eq!(id.name, "intro");
    }

    #[test]
    fn test_group_is_segment_directly_after_marker() {
        let id = DocumentIdentity::from_path("/a/b/v2/bread/deep/nested/steps.mdx", "v2").unwrap();
        assert_eq!(id.group, "bread");
        assert_eq!(id.name, "steps");
    }

    #[test]
    fn test_document_directly_under_marker() {
        // Degenerate but legal: the single segment serves as both group
        // (extension intact) and name (extension stripped).
        let id = DocumentIdentity::from_path("/docs/v2/readme.md", "v2").unwrap();
        assert_eq!(id.group, "readme.md");
        assert_eq!(id.name, "readme");
    }

    #[test]
    fn test_extension_variants() {
        for (file, expected) in [
            ("intro.md", "intro"),
            ("intro.mdx", "intro"),
            ("intro.markdown", "intro"),
            ("intro.txt", "intro.txt"),
            ("intro", "intro"),
        ] {
            let path = format!("/v2/pasta/{}", file);
            let id = DocumentIdentity::from_path(&path, "v2").unwrap();
            assert_eq!(id.name, expected, "for {}", file);
        }
    }

    #[test]
    fn test_extension_stripping_is_case_sensitive() {
        let id = DocumentIdentity::from_path("/v2/pasta/intro.MD", "v2").unwrap();
        assert_eq!(id.name, "intro.MD");
    }

    #[test]
    fn test_dotted_name_keeps_inner_dots() {
        let id = DocumentIdentity::from_path("/v2/pasta/v1.2-notes.md", "v2").unwrap();
        assert_eq!(id.name, "v1.2-notes");
    }

    #[test]
    fn test_missing_marker_is_malformed() {
        let err = DocumentIdentity::from_path("/docs/v3/pasta/intro.md", "v2").unwrap_err();
        assert!(matches!(err, MdvarsError::MalformedPath(_)));
    }

    #[test]
    fn test_trailing_marker_is_malformed() {
        let err = DocumentIdentity::from_path("/docs/v2/", "v2").unwrap_err();
        assert!(matches!(err, MdvarsError::MalformedPath(_)));
    }

    #[test]
    fn test_bare_extension_is_malformed() {
        let err = DocumentIdentity::from_path("/v2/pasta/.md", "v2").unwrap_err();
        assert!(matches!(err, MdvarsError::MalformedPath(_)));
    }

    #[test]
    fn test_custom_marker() {
        let id = DocumentIdentity::from_path("/site/content/guides/setup.md", "content").unwrap();
        assert_eq!(id.group, "guides");
        assert_eq!(id.name, "setup");
    }
}
