//! Language-agnostic code generation traits.

use std::path::PathBuf;

use crate::{Result, output::Formatter, template::TemplateSet};

use super::GenerationReport;

/// A target language: its built-in templates and its formatter.
///
/// Implement this trait to add support for generating code in a new language.
pub trait Backend: Send + Sync {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// Built-in template sources.
    fn templates(&self) -> &dyn TemplateSet;

    /// Formatter used when no external formatter command is configured.
    fn formatter(&self) -> &dyn Formatter;
}

/// Trait for language-specific generators bound to one model and configuration.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render every planned file without writing to disk
    fn preview(&self) -> Result<GenerationReport>;

    /// Render and write every planned file
    fn generate(&self) -> Result<GenerationReport>;
}

/// A rendered file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path the file would be written to
    pub path: PathBuf,
    /// File content
    pub content: String,
}
