//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use entigen_ir::{Column, Entity, Generated, Model, Relation, RelationType};

use crate::{
    ArtifactKind, Error, Result,
    output::{FormatError, FormatProfile, Formatter},
    template::TemplateSet,
};

/// `user` belongs to an `organization`, which has many users.
pub fn user_and_organization() -> Model {
    let user = Entity::new("user")
        .column(Column::new("id", "number", "integer").generated(Generated::Increment))
        .column(Column::new("email", "string", "varchar"))
        .relation(
            Relation::new(RelationType::ManyToOne, "organization", "organization")
                .inverse("users")
                .owner("organization_id", "id"),
        );
    let organization = Entity::new("organization")
        .column(Column::new("id", "number", "integer").generated(Generated::Increment))
        .column(Column::new("name", "string", "varchar"))
        .relation(Relation::new(RelationType::OneToMany, "user", "users").inverse("organization"));

    Model::new(vec![user, organization])
}

/// One-line templates naming the kind and, for per-entity kinds, the entity.
pub struct StaticTemplates;

impl TemplateSet for StaticTemplates {
    fn source(&self, kind: ArtifactKind) -> Option<&'static str> {
        Some(match kind {
            ArtifactKind::Tsconfig => "{\"compilerOptions\": {}}",
            ArtifactKind::Ormconfig => "{\"type\": \"{{ connection.type }}\"}",
            ArtifactKind::Schema => "schema {{ entity_name(name) }}",
            ArtifactKind::Model => "model {{ entity_name(name) }}",
            ArtifactKind::Entity => "entity {{ entity_name(name) }}",
            ArtifactKind::Index => "{% for e in entities %}{{ e.name }};{% endfor %}",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Dto => "dto",
            ArtifactKind::RepositoryPort => "port {{ entity_name(name) }}",
            ArtifactKind::RepositoryAdapterBase => "adapter base",
            ArtifactKind::RepositoryAdapter => "adapter {{ entity_name(name) }}",
        })
    }
}

/// Formatter returning its input unchanged.
pub struct Verbatim;

impl Formatter for Verbatim {
    fn format(&self, text: &str, _profile: FormatProfile) -> std::result::Result<String, FormatError> {
        Ok(text.to_string())
    }
}

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code type-checks.
pub trait CompileChecker {
    /// Check that the project in the given directory type-checks.
    fn check(&self, dir: &Path) -> std::result::Result<(), CompileError>;
}

/// TypeScript checker using `tsc --noEmit`.
pub struct TypeScriptChecker;

impl CompileChecker for TypeScriptChecker {
    fn check(&self, dir: &Path) -> std::result::Result<(), CompileError> {
        let output = Command::new("npx")
            .args(["tsc", "--noEmit"])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run tsc: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "tsc --noEmit failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Generate into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new().map_err(|e| Error::io(std::env::temp_dir(), e))?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Read a generated file relative to `root`, panicking with the directory
/// listing when it is missing.
pub fn read_generated(root: &Path, relative: impl AsRef<Path>) -> String {
    let path = root.join(relative);
    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        let mut listing = String::new();
        for entry in walk(root) {
            listing.push_str(&format!("  {}\n", entry.display()));
        }
        panic!("failed to read {}: {e}\nGenerated files:\n{listing}", path.display())
    })
}

fn walk(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(walk(&path));
            } else {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}
