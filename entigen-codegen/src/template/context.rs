use entigen_config::GenerationOptions;
use entigen_ir::{Entity, Model, RelationType};

use crate::{ArtifactKind, Naming};

/// Everything template helpers may read during a run.
///
/// Built once per run and shared by every helper closure; nothing in it
/// changes after construction.
#[derive(Debug, Clone)]
pub struct HelperContext {
    pub options: GenerationOptions,
    pub model: Model,
}

impl HelperContext {
    pub fn new(options: GenerationOptions, model: Model) -> Self {
        Self { options, model }
    }

    pub fn naming(&self) -> Naming<'_> {
        Naming::new(&self.options)
    }

    /// Look up an entity by name through the model's index.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.model.entity(name)
    }

    /// File name of `kind`'s artifact for the entity called `name`.
    ///
    /// Unknown names fall back to using the name itself as the base file
    /// name, so a dangling relation still yields a stable import path.
    pub fn entity_file(&self, name: &str, kind: ArtifactKind) -> String {
        let base = self
            .entity(name)
            .map_or(name, |entity| entity.file_name.as_str());
        self.naming().file_name(base, Some(kind))
    }

    /// Property type of a relation to `target`.
    ///
    /// To-many relations hold a sequence; lazy relations are wrapped in a
    /// promise.
    pub fn relation_type(&self, target: &str, relation_type: RelationType) -> String {
        let mut ty = target.to_string();
        if relation_type.is_array() {
            ty.push_str("[]");
        }
        if self.options.features.lazy {
            ty = format!("Promise<{ty}>");
        }
        ty
    }
}
