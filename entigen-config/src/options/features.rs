use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A boolean feature toggle readable from templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Wrap relation properties in `Promise<...>`.
    Lazy,
    /// Entities extend `BaseEntity`.
    ActiveRecord,
    /// Emit a partial-initializer constructor.
    Constructor,
    /// Emit `@RelationId` properties.
    RelationIds,
    /// Omit the database schema from `@Entity`.
    SkipSchema,
    /// Emit an index file re-exporting every entity.
    IndexFile,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Lazy,
        Feature::ActiveRecord,
        Feature::Constructor,
        Feature::RelationIds,
        Feature::SkipSchema,
        Feature::IndexFile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Lazy => "lazy",
            Feature::ActiveRecord => "active_record",
            Feature::Constructor => "constructor",
            Feature::RelationIds => "relation_ids",
            Feature::SkipSchema => "skip_schema",
            Feature::IndexFile => "index_file",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Feature::ALL.iter().map(Feature::as_str).collect();
                format!("unknown feature '{s}', expected one of: {}", known.join(", "))
            })
    }
}

/// Options of the `[features]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureOptions {
    pub lazy: bool,
    pub active_record: bool,
    pub constructor: bool,
    pub relation_ids: bool,
    pub skip_schema: bool,
    pub index_file: bool,
}

impl FeatureOptions {
    /// Whether `feature` is switched on.
    pub fn enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Lazy => self.lazy,
            Feature::ActiveRecord => self.active_record,
            Feature::Constructor => self.constructor,
            Feature::RelationIds => self.relation_ids,
            Feature::SkipSchema => self.skip_schema,
            Feature::IndexFile => self.index_file,
        }
    }
}
