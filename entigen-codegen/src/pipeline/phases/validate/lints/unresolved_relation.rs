//! Lint for relations whose target is not part of the model.

use entigen_ir::Model;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about relations pointing at unknown entities.
///
/// Generated imports for such a relation would name a file that is never
/// written.
pub struct UnresolvedRelationLint;

impl Lint for UnresolvedRelationLint {
    fn name(&self) -> &'static str {
        "unresolved-relation"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        for entity in model.entities() {
            for relation in &entity.relations {
                if !model.index().contains(&relation.related_table) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "relation '{}.{}' targets unknown entity '{}'",
                                entity.name, relation.field_name, relation.related_table
                            ),
                        )
                        .at(format!("{}.relations.{}", entity.name, relation.field_name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use entigen_ir::{Entity, Relation, RelationType};

    use super::*;

    #[test]
    fn test_unresolved_target() {
        let model = Model::new(vec![
            Entity::new("user")
                .relation(Relation::new(RelationType::ManyToOne, "organization", "organization"))
                .relation(Relation::new(RelationType::ManyToOne, "user", "manager")),
        ]);

        let mut diagnostics = Vec::new();
        UnresolvedRelationLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("user.relations.organization")
        );
    }
}
