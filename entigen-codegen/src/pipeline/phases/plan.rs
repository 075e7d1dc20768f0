//! Plan phase - decides which artifact kinds to emit.

use entigen_config::GenerationOptions;

use crate::{
    ArtifactGroup, ArtifactKind, Result,
    pipeline::{GenerationContext, Phase},
};

/// Message reported when no artifact group is selected.
pub const NOTHING_SELECTED: &str = "nothing selected to generate; set generate.all or one of \
     generate.entities, generate.models, generate.schemas, generate.repositories";

/// The artifact kinds of a run, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    kinds: Vec<ArtifactKind>,
}

impl Plan {
    /// Select kinds from the `[generate]` and `[features]` options.
    ///
    /// `all` selects every group whatever the individual flags say. When no
    /// group is selected the plan is empty, project configs included.
    pub fn new(options: &GenerationOptions) -> Self {
        if options.generate.nothing_selected() {
            return Self::default();
        }

        let kinds = ArtifactKind::ALL
            .into_iter()
            .filter(|kind| is_selected(*kind, options))
            .collect();
        Self { kinds }
    }

    pub fn kinds(&self) -> &[ArtifactKind] {
        &self.kinds
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

fn is_selected(kind: ArtifactKind, options: &GenerationOptions) -> bool {
    let generate = &options.generate;
    match kind.group() {
        ArtifactGroup::Configs => generate.configs,
        ArtifactGroup::Schemas => generate.schemas(),
        ArtifactGroup::Models => generate.models(),
        ArtifactGroup::Entities => {
            generate.entities() && (kind != ArtifactKind::Index || options.features.index_file)
        }
        ArtifactGroup::Repositories => generate.repositories(),
    }
}

/// Phase that computes the [`Plan`].
pub struct PlanPhase;

impl Phase for PlanPhase {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn description(&self) -> &'static str {
        "Select the artifact kinds to generate"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let plan = Plan::new(&ctx.options);
        if plan.is_empty() {
            ctx.add_warning(self.name(), NOTHING_SELECTED);
        }
        ctx.plan = Some(plan);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use entigen_ir::Model;

    use super::*;

    #[test]
    fn test_nothing_selected_writes_nothing() {
        let options = GenerationOptions::default();
        assert!(options.generate.configs);
        assert!(Plan::new(&options).is_empty());

        let mut ctx = GenerationContext::new(options, Model::default());
        PlanPhase.run(&mut ctx).unwrap();
        assert!(ctx.plan().is_empty());
        assert_eq!(ctx.count(crate::Severity::Warning), 1);
    }

    #[test]
    fn test_all_supersedes_flags() {
        let mut options = GenerationOptions::default();
        options.generate.all = true;
        options.generate.entities = false;
        options.generate.configs = false;

        let plan = Plan::new(&options);
        assert!(plan.kinds().contains(&ArtifactKind::Entity));
        assert!(plan.kinds().contains(&ArtifactKind::Schema));
        assert!(plan.kinds().contains(&ArtifactKind::RepositoryAdapter));
        assert!(!plan.kinds().contains(&ArtifactKind::Tsconfig));
        assert!(!plan.kinds().contains(&ArtifactKind::Index));
    }

    #[test]
    fn test_single_group() {
        let mut options = GenerationOptions::default();
        options.generate.models = true;

        let plan = Plan::new(&options);
        assert_eq!(
            plan.kinds(),
            &[
                ArtifactKind::Tsconfig,
                ArtifactKind::Ormconfig,
                ArtifactKind::Model
            ]
        );
    }

    #[test]
    fn test_index_needs_entities() {
        let mut options = GenerationOptions::default();
        options.features.index_file = true;
        options.generate.models = true;
        assert!(!Plan::new(&options).kinds().contains(&ArtifactKind::Index));

        options.generate.entities = true;
        assert!(Plan::new(&options).kinds().contains(&ArtifactKind::Index));
    }

    #[test]
    fn test_repositories_group_order() {
        let mut options = GenerationOptions::default();
        options.generate.repositories = true;
        options.generate.configs = false;

        assert_eq!(
            Plan::new(&options).kinds(),
            &[
                ArtifactKind::Repository,
                ArtifactKind::Dto,
                ArtifactKind::RepositoryPort,
                ArtifactKind::RepositoryAdapterBase,
                ArtifactKind::RepositoryAdapter,
            ]
        );
    }
}
