use serde::{Deserialize, Serialize};

/// Options of the `[format]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// External formatter reading stdin and writing stdout, e.g.
    /// `["prettier", "--parser", "{parser}"]`. `{parser}` is replaced with
    /// `typescript` or `json`. The built-in formatter is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}
