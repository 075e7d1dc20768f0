//! Rendering, post-processing and writing of generated artifacts.
//!
//! This crate turns an entity [`Model`](entigen_ir::Model) and a set of
//! [`GenerationOptions`](entigen_config::GenerationOptions) into files. It is
//! language-agnostic; a language backend supplies the templates and the
//! formatter (e.g., `entigen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`artifact`] - The artifact kinds a run emits and how their files are named
//! - [`pipeline`] - Model lints and artifact selection (validate, plan)
//! - [`template`] - Template compilation and the helper set
//! - [`output`] - Import pruning, line endings, formatting and writing
//! - [`generation`] - The orchestrator and the backend traits
//! - [`testing`] - Test utilities (feature-gated)

pub mod artifact;
mod error;
pub mod generation;
pub mod output;
pub mod pipeline;
pub mod template;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use artifact::{ArtifactGroup, ArtifactKind, Naming};
pub use error::{Error, Result};
pub use generation::{
    Backend, GenerationReport, LanguageCodegen, Mode, Orchestrator, Outcome, PreviewFile,
};
pub use pipeline::{Diagnostic, Severity};
