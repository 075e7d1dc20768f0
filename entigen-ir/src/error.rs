use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the entity model exported by your schema reader with --model"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse entity model")]
    #[diagnostic(code(entigen::model::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(entigen::model::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|at| SourceSpan::from(at..at));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}

/// Convert a 1-based line/column pair to a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

/// Find the span of the first `"name": "<value>"` occurrence.
pub(crate) fn find_name_span(src: &str, value: &str) -> Option<SourceSpan> {
    let needle = format!("\"{value}\"");
    src.match_indices(&needle)
        .find(|(at, _)| src[..*at].trim_end().ends_with(':'))
        .map(|(at, m)| SourceSpan::from(at..at + m.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "[\n  {\n    oops\n";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 3, 5), Some(10));
        assert_eq!(offset_of(src, 0, 0), None);
    }

    #[test]
    fn test_find_name_span() {
        let src = r#"[{ "name": "user" }, { "name": "user" }]"#;
        let span = find_name_span(src, "user").unwrap();
        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), 6);
    }
}
