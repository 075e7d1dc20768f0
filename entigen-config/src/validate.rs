//! Validation utilities for configuration values

use miette::SourceSpan;

/// Check that an output directory can be used in import specifiers.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn is_portable_dir(dir: &str) -> Option<&'static str> {
    if dir.trim().is_empty() {
        return Some("must not be empty (use \".\" for the project root)");
    }
    if dir.contains('\\') {
        return Some("must use '/' as path separator");
    }
    if dir.starts_with('/') {
        return Some("must be relative to output.root");
    }
    if escapes_root(dir) {
        return Some("must stay inside output.root");
    }
    None
}

/// Whether a `..` in `dir` climbs above the directory it is relative to.
fn escapes_root(dir: &str) -> bool {
    let mut depth = 0usize;
    for segment in dir.split('/') {
        match segment {
            "" | "." => {}
            ".." => match depth.checked_sub(1) {
                Some(parent) => depth = parent,
                None => return true,
            },
            _ => depth += 1,
        }
    }
    false
}

/// Find the span of a `key = value` assignment in the TOML source
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }
    // No fallback - better to have no span than point to wrong location
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_portable_dir() {
        assert!(is_portable_dir("src/entities").is_none());
        assert!(is_portable_dir(".").is_none());
        assert!(is_portable_dir("").is_some());
        assert!(is_portable_dir("src\\entities").is_some());
        assert!(is_portable_dir("/abs").is_some());
    }

    #[test]
    fn test_dirs_outside_root_are_rejected() {
        assert_eq!(is_portable_dir("../generated"), Some("must stay inside output.root"));
        assert!(is_portable_dir("src/../../models").is_some());
        assert!(is_portable_dir("src/../models").is_none());
        assert!(is_portable_dir("./src/entities/..").is_none());
    }

    #[test]
    fn test_find_key_span() {
        let src = "[output]\nentities = \"\"\n  models= \"m\"\n";
        let span = find_key_span(src, "entities").unwrap();
        assert_eq!((span.offset(), span.len()), (9, 8));
        let span = find_key_span(src, "models").unwrap();
        assert_eq!(span.offset(), 25);
        assert!(find_key_span(src, "ports").is_none());
    }
}
