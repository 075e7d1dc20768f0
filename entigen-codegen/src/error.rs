use std::path::PathBuf;

use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal code generation errors.
///
/// Non-fatal problems (formatting failures, model lints, a missing template
/// override directory) are recorded as [`Diagnostic`](crate::pipeline::Diagnostic)s
/// instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    UnknownCaseStyle(#[from] entigen_core::UnknownCaseStyle),

    #[error("template '{template}' references unknown helper '{helper}'")]
    MissingHelper { template: String, helper: String },

    #[error("model validation failed with {0} error(s)")]
    Validation(usize),

    #[error("unknown artifact kind '{0}'")]
    UnknownArtifactKind(String),

    #[error("no built-in template for '{0}'")]
    MissingTemplate(String),

    #[error("template error")]
    Template(#[from] minijinja::Error),

    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
