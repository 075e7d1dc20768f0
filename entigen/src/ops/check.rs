//! Check operation - model validation.

use std::path::Path;

use entigen_codegen::{
    Error, Severity,
    pipeline::{
        GenerationContext, Phase,
        phases::{PlanPhase, ValidatePhase},
    },
};
use entigen_config::GenerationOptions;
use entigen_ir::Model;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Lints the model and plans the run without rendering anything. Lint
/// errors end up in the report rather than failing the operation.
pub fn check(
    options: &GenerationOptions,
    model: &Model,
    config: String,
    model_path: &Path,
) -> Result<CheckReport> {
    let mut ctx = GenerationContext::new(options.clone(), model.clone());
    match ValidatePhase::new().run(&mut ctx) {
        Ok(()) | Err(Error::Validation(_)) => {}
        Err(err) => return Err(err).wrap_err("Validation failed"),
    }

    let mut kinds = Vec::new();
    if !ctx.has_errors() {
        PlanPhase.run(&mut ctx).wrap_err("Planning failed")?;
        kinds = ctx
            .plan()
            .kinds()
            .iter()
            .map(|kind| kind.as_str().to_string())
            .collect();
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config,
        model_path: model_path.to_path_buf(),
        entity_count: model.len(),
        kinds,
        errors,
        warnings,
        infos,
    })
}
