//! Generation options and their TOML representation.

mod connection;
mod features;
mod format;
mod generate;
mod naming;
mod output;
mod style;

pub use connection::ConnectionOptions;
pub use features::{Feature, FeatureOptions};
pub use format::FormatOptions;
pub use generate::GenerateOptions;
pub use naming::NamingOptions;
pub use output::OutputOptions;
use serde::{Deserialize, Serialize};
pub use style::{ExportType, LineEnding, StrictMode, StyleOptions, Visibility};

/// Root of entigen.toml.
///
/// Built once per run and read-only afterwards. Every table and key is
/// optional; omitted values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationOptions {
    pub output: OutputOptions,
    pub naming: NamingOptions,
    pub style: StyleOptions,
    pub features: FeatureOptions,
    pub generate: GenerateOptions,
    pub format: FormatOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionOptions>,
}
