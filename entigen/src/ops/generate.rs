//! Generate operation - renders the model into the configured project.

use entigen_codegen_typescript::{Generator, LanguageCodegen};
use entigen_config::GenerationOptions;
use entigen_ir::Model;
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// With `dry_run` the rendered files are collected in the report instead of
/// being written.
pub fn generate(options: &GenerationOptions, model: &Model, dry_run: bool) -> Result<GenerateReport> {
    let generator = Generator::new(options, model);
    let result = if dry_run {
        generator.preview()
    } else {
        generator.generate()
    }
    .wrap_err("Failed to generate code")?;

    Ok(GenerateReport {
        root: options.output.root.clone(),
        entity_count: model.len(),
        dry_run,
        result,
    })
}

#[cfg(test)]
mod tests {
    use entigen_codegen::{Outcome, testing::user_and_organization};

    use super::*;

    #[test]
    fn test_generate_writes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = GenerationOptions::default();
        options.output.root = dir.path().to_path_buf();
        options.generate.entities = true;

        let report = generate(&options, &user_and_organization(), false).unwrap();

        assert_eq!(report.result.outcome, Outcome::Generated);
        assert_eq!(report.entity_count, 2);
        assert!(dir.path().join("entities").join("users.ts").is_file());
        assert!(dir.path().join("tsconfig.json").is_file());
    }

    #[test]
    fn test_dry_run_leaves_root_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = GenerationOptions::default();
        options.output.root = dir.path().to_path_buf();
        options.generate.all = true;

        let report = generate(&options, &user_and_organization(), true).unwrap();

        assert!(report.dry_run);
        assert!(!report.result.previews.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
