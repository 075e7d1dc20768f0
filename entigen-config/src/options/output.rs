use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options of the `[output]` table.
///
/// Group directories are relative to `root`, may not climb above it, and are
/// written with `/` separators;
/// relative import paths between generated files are derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputOptions {
    /// Project root. Configuration artifacts are written here.
    pub root: PathBuf,
    pub schemas: String,
    pub models: String,
    pub entities: String,
    /// Repository ports (interfaces).
    pub ports: String,
    /// Repository adapters (TypeORM implementations).
    pub adapters: String,
    /// Shared query types.
    pub dtos: String,
    /// Directory of template overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            schemas: "schemas".to_string(),
            models: "models".to_string(),
            entities: "entities".to_string(),
            ports: "ports".to_string(),
            adapters: "typeorm".to_string(),
            dtos: "dtos".to_string(),
            templates: None,
        }
    }
}

impl OutputOptions {
    /// Group directories as `(key, value)` pairs.
    pub fn directories(&self) -> [(&'static str, &str); 6] {
        [
            ("schemas", self.schemas.as_str()),
            ("models", self.models.as_str()),
            ("entities", self.entities.as_str()),
            ("ports", self.ports.as_str()),
            ("adapters", self.adapters.as_str()),
            ("dtos", self.dtos.as_str()),
        ]
    }
}
