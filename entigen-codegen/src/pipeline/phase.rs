//! Pipeline phase trait.

use super::GenerationContext;
use crate::Result;

/// A phase in the generation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read the
/// options and model and add to the plan or the diagnostics.
///
/// Built-in phases:
/// - `ValidatePhase` - lints the entity model
/// - `PlanPhase` - selects the artifact kinds to emit
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
