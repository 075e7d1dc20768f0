//! Built-in templates, compiled into the binary.

use entigen_codegen::{ArtifactKind, template::TemplateSet};

/// The TypeORM template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTemplates;

impl TemplateSet for TypeScriptTemplates {
    fn source(&self, kind: ArtifactKind) -> Option<&'static str> {
        let source = match kind {
            ArtifactKind::Tsconfig => include_str!("../templates/tsconfig.jinja"),
            ArtifactKind::Ormconfig => include_str!("../templates/ormconfig.jinja"),
            ArtifactKind::Schema => include_str!("../templates/entity-schema.jinja"),
            ArtifactKind::Model => include_str!("../templates/model.jinja"),
            ArtifactKind::Entity => include_str!("../templates/entity.jinja"),
            ArtifactKind::Index => include_str!("../templates/index.jinja"),
            ArtifactKind::Repository => include_str!("../templates/repository.jinja"),
            ArtifactKind::Dto => include_str!("../templates/generic-dtos.jinja"),
            ArtifactKind::RepositoryPort => include_str!("../templates/repository-port.jinja"),
            ArtifactKind::RepositoryAdapterBase => {
                include_str!("../templates/repository-adapter-base.jinja")
            }
            ArtifactKind::RepositoryAdapter => {
                include_str!("../templates/repository-adapter.jinja")
            }
        };
        Some(source)
    }
}

#[cfg(test)]
mod tests {
    use entigen_codegen::template::{HelperContext, TemplateEngine};
    use entigen_config::GenerationOptions;
    use entigen_ir::Model;

    use super::*;

    #[test]
    fn test_every_template_compiles() {
        let mut engine =
            TemplateEngine::new(HelperContext::new(GenerationOptions::default(), Model::default()));
        for kind in ArtifactKind::ALL {
            let source = TypeScriptTemplates.source(kind).expect("built-in template");
            engine
                .compile(kind, source)
                .unwrap_or_else(|err| panic!("{kind}: {err}"));
        }
    }
}
