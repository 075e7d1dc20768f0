//! Pipeline orchestrator.

use entigen_config::GenerationOptions;
use entigen_ir::Model;

use super::{
    GenerationContext, Phase,
    phases::{PlanPhase, ValidatePhase},
};
use crate::Result;

/// The generation pipeline.
///
/// Runs the built-in phases (validate, plan) followed by any user phases.
/// Rendering and writing happen afterwards, driven by the plan the pipeline
/// leaves in the context.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(options, model)?;
/// for kind in ctx.plan().kinds() {
///     // render and write
/// }
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to run a custom lint set.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints the model, collects diagnostics
    /// 2. PlanPhase - selects artifact kinds
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, options: GenerationOptions, model: Model) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(options, model);

        let builtin: [&dyn Phase; 2] = [&self.validate, &PlanPhase];
        for phase in builtin {
            self.run_phase(phase, &mut ctx)?;
        }
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        tracing::debug!(phase = phase.name(), "running phase");
        phase.run(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use entigen_ir::Entity;

    use super::*;
    use crate::ArtifactKind;

    struct CountingPhase {
        runs: Arc<AtomicUsize>,
    }

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "Counts how often it runs"
        }

        fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
            assert!(ctx.plan.is_some(), "user phases run after planning");
            self.runs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_pipeline_plans() {
        let mut options = GenerationOptions::default();
        options.generate.models = true;
        let model = Model::new(vec![Entity::new("user")]);

        let ctx = Pipeline::new().run(options, model).expect("pipeline should succeed");

        let plan = ctx.plan.expect("plan is populated");
        assert!(plan.kinds().contains(&ArtifactKind::Model));
        assert!(!plan.kinds().contains(&ArtifactKind::Entity));
    }

    #[test]
    fn test_pipeline_runs_user_phases() {
        let runs = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new().phase(CountingPhase { runs: runs.clone() });

        pipeline
            .run(GenerationOptions::default(), Model::default())
            .expect("pipeline should succeed");

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
