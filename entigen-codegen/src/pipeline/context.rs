//! State shared by the pipeline phases of one run.

use entigen_config::GenerationOptions;
use entigen_ir::Model;

use super::{
    diagnostic::{Diagnostic, Severity},
    phases::Plan,
};

/// Options and model are fixed for the run; phases only add the plan and
/// diagnostics.
#[derive(Debug)]
pub struct GenerationContext {
    pub options: GenerationOptions,
    pub model: Model,
    /// Set by `PlanPhase`.
    pub plan: Option<Plan>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(options: GenerationOptions, model: Model) -> Self {
        Self {
            options,
            model,
            plan: None,
            diagnostics: Vec::new(),
        }
    }

    /// Number of diagnostics recorded with `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// The plan, or an empty one if `PlanPhase` hasn't run.
    pub fn plan(&self) -> Plan {
        self.plan.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context_has_empty_plan() {
        let ctx = GenerationContext::new(GenerationOptions::default(), Model::default());
        assert!(ctx.plan.is_none());
        assert!(ctx.plan().is_empty());
        assert!(!ctx.has_warnings());
    }

    #[test]
    fn test_counts_by_severity() {
        let mut ctx = GenerationContext::new(GenerationOptions::default(), Model::default());
        ctx.diagnostics
            .push(Diagnostic::error("validate", "relation targets unknown entity"));
        ctx.add_warning("plan", "nothing selected");
        ctx.add_warning("validate", "entity has no columns");

        assert!(ctx.has_errors());
        assert_eq!(ctx.count(Severity::Error), 1);
        assert_eq!(ctx.count(Severity::Warning), 2);
        assert_eq!(ctx.count(Severity::Info), 0);
    }
}
