//! The fixed set of artifacts a run can emit.

use std::{fmt, str::FromStr};

use entigen_core::Overwrite;
use serde::Serialize;

use crate::{Error, output::FormatProfile};

/// Fields of the entity root context.
const ENTITY_FIELDS: &[&str] = &[
    "name", "fileName", "sqlName", "schema", "columns", "relations", "indices", "imports",
];

/// One kind of generated file.
///
/// Declaration order is generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ArtifactKind {
    /// `tsconfig.json` in the project root.
    Tsconfig,
    /// `ormconfig.json` in the project root.
    Ormconfig,
    /// `EntitySchema` descriptor per entity.
    Schema,
    /// Plain interface per entity.
    Model,
    /// Decorated TypeORM class per entity.
    Entity,
    /// Re-exports of every entity.
    Index,
    /// Generic `Repository<T>` port.
    Repository,
    /// Query and paging types shared by the repositories.
    Dto,
    /// Repository port per entity.
    RepositoryPort,
    /// Generic TypeORM repository adapter.
    RepositoryAdapterBase,
    /// TypeORM repository adapter per entity.
    RepositoryAdapter,
}

/// Selection group an artifact kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactGroup {
    Configs,
    Schemas,
    Models,
    Entities,
    Repositories,
}

impl ArtifactKind {
    /// All kinds in generation order.
    pub const ALL: [ArtifactKind; 11] = [
        ArtifactKind::Tsconfig,
        ArtifactKind::Ormconfig,
        ArtifactKind::Schema,
        ArtifactKind::Model,
        ArtifactKind::Entity,
        ArtifactKind::Index,
        ArtifactKind::Repository,
        ArtifactKind::Dto,
        ArtifactKind::RepositoryPort,
        ArtifactKind::RepositoryAdapterBase,
        ArtifactKind::RepositoryAdapter,
    ];

    /// Kind name as used by templates (`resolve_path('model', 'entity')`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Tsconfig => "tsconfig",
            ArtifactKind::Ormconfig => "ormconfig",
            ArtifactKind::Schema => "schema",
            ArtifactKind::Model => "model",
            ArtifactKind::Entity => "entity",
            ArtifactKind::Index => "index",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Dto => "dto",
            ArtifactKind::RepositoryPort => "repository-port",
            ArtifactKind::RepositoryAdapterBase => "repository-adapter-base",
            ArtifactKind::RepositoryAdapter => "repository-adapter",
        }
    }

    /// Name of the template rendering this kind.
    pub fn template_name(&self) -> &'static str {
        match self {
            ArtifactKind::Schema => "entity-schema",
            ArtifactKind::Dto => "generic-dtos",
            other => other.as_str(),
        }
    }

    pub fn group(&self) -> ArtifactGroup {
        match self {
            ArtifactKind::Tsconfig | ArtifactKind::Ormconfig => ArtifactGroup::Configs,
            ArtifactKind::Schema => ArtifactGroup::Schemas,
            ArtifactKind::Model => ArtifactGroup::Models,
            ArtifactKind::Entity | ArtifactKind::Index => ArtifactGroup::Entities,
            ArtifactKind::Repository
            | ArtifactKind::Dto
            | ArtifactKind::RepositoryPort
            | ArtifactKind::RepositoryAdapterBase
            | ArtifactKind::RepositoryAdapter => ArtifactGroup::Repositories,
        }
    }

    /// One file per entity, rendered with the entity as root context.
    pub fn is_per_entity(&self) -> bool {
        matches!(
            self,
            ArtifactKind::Schema
                | ArtifactKind::Model
                | ArtifactKind::Entity
                | ArtifactKind::RepositoryPort
                | ArtifactKind::RepositoryAdapter
        )
    }

    pub fn is_config(&self) -> bool {
        self.group() == ArtifactGroup::Configs
    }

    /// Prefix and suffix joined to the entity file name before casing.
    pub fn affixes(&self) -> (Option<&'static str>, Option<&'static str>) {
        match self {
            ArtifactKind::Schema => (None, Some("schema")),
            ArtifactKind::RepositoryPort => (None, Some("repository")),
            ArtifactKind::RepositoryAdapter => (Some("typeORM"), Some("repository")),
            _ => (None, None),
        }
    }

    /// Base name of a single-file kind, before casing.
    pub fn static_name(&self) -> Option<&'static str> {
        match self {
            ArtifactKind::Tsconfig => Some("tsconfig"),
            ArtifactKind::Ormconfig => Some("ormconfig"),
            ArtifactKind::Index => Some("index"),
            ArtifactKind::Repository => Some("repository"),
            ArtifactKind::Dto => Some("generic"),
            ArtifactKind::RepositoryAdapterBase => Some("typeORM-repository"),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        if self.is_config() { "json" } else { "ts" }
    }

    pub fn format_profile(&self) -> FormatProfile {
        if self.is_config() {
            FormatProfile::Data
        } else {
            FormatProfile::Source
        }
    }

    /// Only decorator-based artifacts carry a prunable import list.
    pub fn prunes_imports(&self) -> bool {
        matches!(self, ArtifactKind::Entity)
    }

    /// Write policy given the `missing_only` option.
    pub fn overwrite(&self, missing_only: bool) -> Overwrite {
        if missing_only || self.is_config() {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        }
    }

    /// Root context fields a template of this kind may reference.
    pub fn context_fields(&self) -> &'static [&'static str] {
        match self {
            kind if kind.is_per_entity() => ENTITY_FIELDS,
            ArtifactKind::Index => &["entities"],
            ArtifactKind::Ormconfig => &["connection"],
            _ => &[],
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ArtifactKind> for &'static str {
    fn from(kind: ArtifactKind) -> Self {
        kind.as_str()
    }
}

impl FromStr for ArtifactKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.template_name() == s)
            .ok_or_else(|| Error::UnknownArtifactKind(s.to_string()))
    }
}
