use serde::{Deserialize, Serialize};

/// Options of the `[generate]` table: which artifact groups a run emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Generate every artifact group, regardless of the individual flags.
    pub all: bool,
    pub entities: bool,
    pub models: bool,
    pub schemas: bool,
    /// Repository ports, adapters and their shared types.
    pub repositories: bool,
    /// Skip files that already exist.
    pub missing_only: bool,
    /// Create `tsconfig.json` and `ormconfig.json` when missing.
    pub configs: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            all: false,
            entities: false,
            models: false,
            schemas: false,
            repositories: false,
            missing_only: false,
            configs: true,
        }
    }
}

impl GenerateOptions {
    pub fn entities(&self) -> bool {
        self.all || self.entities
    }

    pub fn models(&self) -> bool {
        self.all || self.models
    }

    pub fn schemas(&self) -> bool {
        self.all || self.schemas
    }

    pub fn repositories(&self) -> bool {
        self.all || self.repositories
    }

    /// No artifact group is selected.
    pub fn nothing_selected(&self) -> bool {
        !(self.entities() || self.models() || self.schemas() || self.repositories())
    }
}
