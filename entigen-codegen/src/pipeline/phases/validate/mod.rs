//! Validate phase - runs lints on the entity model.

mod lint;
pub mod lints;

pub use lint::Lint;
pub use lints::{EmptyEntityLint, OwningSideLint, UnresolvedRelationLint};

use crate::{
    Error, Result, Severity,
    pipeline::{GenerationContext, Phase},
};

/// Phase that validates the model using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(EmptyEntityLint),
                Box::new(UnresolvedRelationLint),
                Box::new(OwningSideLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check model integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.model, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            return Err(Error::Validation(ctx.count(Severity::Error)));
        }

        Ok(())
    }
}
