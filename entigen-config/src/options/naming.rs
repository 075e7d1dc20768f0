use entigen_core::CaseStyle;
use serde::{Deserialize, Serialize};

/// Options of the `[naming]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingOptions {
    /// Case style of generated file names.
    pub file: CaseStyle,
    /// Case style of generated type names.
    pub entity: CaseStyle,
    /// Case style of generated property names.
    pub property: CaseStyle,
    /// Use plural file names (`users.ts` rather than `user.ts`).
    pub pluralize: bool,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            file: CaseStyle::Camel,
            entity: CaseStyle::Pascal,
            property: CaseStyle::Camel,
            pluralize: true,
        }
    }
}
