//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the entity model and collects diagnostics
//! - [`PlanPhase`] - selects the artifact kinds a run emits

mod plan;
mod validate;

pub use plan::{NOTHING_SELECTED, Plan, PlanPhase};
pub use validate::{EmptyEntityLint, Lint, OwningSideLint, UnresolvedRelationLint, ValidatePhase};
