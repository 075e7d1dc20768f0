//! Lint trait for model validation.

use entigen_ir::Model;

use crate::pipeline::Diagnostic;

/// A lint that checks the entity model for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the model and add any diagnostics.
    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>);
}
