//! Lint for bidirectional relations without exactly one owning side.

use entigen_ir::Model;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when both or neither side of a bidirectional relation are
/// marked as owning.
///
/// A pair is two relations naming each other through `relatedField`. Each pair
/// is reported once, at the side whose `entity.field` sorts first.
pub struct OwningSideLint;

impl Lint for OwningSideLint {
    fn name(&self) -> &'static str {
        "owning-side"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        for entity in model.entities() {
            for relation in &entity.relations {
                let Some(inverse_field) = &relation.related_field else {
                    continue;
                };
                let Some(target) = model.entity(&relation.related_table) else {
                    continue;
                };
                let Some(inverse) = target
                    .relations
                    .iter()
                    .find(|r| r.field_name == *inverse_field && r.related_table == entity.name)
                else {
                    continue;
                };

                let side = (entity.name.as_str(), relation.field_name.as_str());
                let other = (target.name.as_str(), inverse.field_name.as_str());
                if side >= other {
                    continue;
                }

                let owners = usize::from(relation.owner) + usize::from(inverse.owner);
                if owners != 1 {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "relations '{}.{}' and '{}.{}' have {owners} owning sides, expected exactly one",
                                side.0, side.1, other.0, other.1
                            ),
                        )
                        .at(format!("{}.relations.{}", side.0, side.1)),
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

    fn model(user_owns: bool, organization_owns: bool) -> Model {
        let mut to_organization =
            Relation::new(RelationType::ManyToOne, "organization", "organization").inverse("users");
        if user_owns {
            to_organization = to_organization.owner("organization_id", "id");
        }
        let mut to_users =
            Relation::new(RelationType::OneToMany, "user", "users").inverse("organization");
        to_users.owner = organization_owns;

        Model::new(vec![
            Entity::new("user").relation(to_organization),
            Entity::new("organization").relation(to_users),
        ])
    }

    fn check(model: &Model) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        OwningSideLint.check(model, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_single_owner() {
        assert!(check(&model(true, false)).is_empty());
        assert!(check(&model(false, true)).is_empty());
    }

    #[test]
    fn test_no_owner_reported_once() {
        let diagnostics = check(&model(false, false));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("0 owning sides"));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("organization.relations.users")
        );
    }

    #[test]
    fn test_two_owners() {
        let diagnostics = check(&model(true, true));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("2 owning sides"));
    }

    #[test]
    fn test_unidirectional_is_ignored() {
        let model = Model::new(vec![
            Entity::new("user")
                .relation(Relation::new(RelationType::ManyToOne, "organization", "organization")),
            Entity::new("organization"),
        ]);
        assert!(check(&model).is_empty());
    }
}
