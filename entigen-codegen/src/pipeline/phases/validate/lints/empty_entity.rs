//! Lint for entities without columns.

use entigen_ir::Model;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about entities with no columns.
pub struct EmptyEntityLint;

impl Lint for EmptyEntityLint {
    fn name(&self) -> &'static str {
        "empty-entity"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        for entity in model.entities() {
            if entity.columns.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("entity '{}' has no columns", entity.name),
                    )
                    .at(&entity.name),
                );
            }
        }
    }
}
