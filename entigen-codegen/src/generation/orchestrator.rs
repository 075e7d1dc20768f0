use entigen_config::GenerationOptions;
use entigen_core::{Overwrite, WriteResult};
use entigen_ir::Model;
use minijinja::{Value, context};
use serde::Serialize;

use super::{Backend, GenerationReport, Outcome, PreviewFile};
use crate::{
    ArtifactKind, Diagnostic, Naming, Result,
    output::{CommandFormatter, Formatter, OutputWriter, Target},
    pipeline::{GenerationContext, Pipeline},
    template::{HelperContext, TemplateEngine, template_source},
};

/// Whether rendered files are written or only collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    DryRun,
}

/// Top-level driver of a run.
///
/// Runs the pipeline, then renders every planned artifact: once per entity
/// in model order for per-entity kinds, once for static kinds. Each rendered
/// text goes through the [`OutputWriter`] and is written (or previewed)
/// before the next one is rendered.
pub struct Orchestrator<'a> {
    backend: &'a dyn Backend,
    pipeline: Pipeline,
}

/// Everything one artifact write needs besides its context.
struct Emitter<'a> {
    engine: &'a TemplateEngine,
    writer: OutputWriter<'a>,
    mode: Mode,
}

impl<'a> Orchestrator<'a> {
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self {
            backend,
            pipeline: Pipeline::new(),
        }
    }

    /// Use a custom pipeline, e.g. with a different lint set.
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn run(
        &self,
        options: &GenerationOptions,
        model: &Model,
        mode: Mode,
    ) -> Result<GenerationReport> {
        let GenerationContext {
            options,
            model,
            plan,
            mut diagnostics,
        } = self.pipeline.run(options.clone(), model.clone())?;
        let plan = plan.unwrap_or_default();

        for diagnostic in diagnostics.iter().filter(|d| d.severity.is_warning()) {
            tracing::warn!("{diagnostic}");
        }

        if plan.is_empty() {
            return Ok(GenerationReport::new(Outcome::NothingSelected, diagnostics));
        }

        let overrides = match options.output.templates.as_deref() {
            Some(dir) if !dir.is_dir() => {
                let diagnostic = Diagnostic::warning(
                    "templates",
                    format!(
                        "template directory '{}' does not exist, using built-in templates",
                        dir.display()
                    ),
                );
                tracing::warn!("{diagnostic}");
                diagnostics.push(diagnostic);
                None
            }
            other => other,
        };

        let mut engine = TemplateEngine::new(HelperContext::new(options.clone(), model.clone()));
        for &kind in plan.kinds() {
            let source = template_source(self.backend.templates(), overrides, kind)?;
            engine.compile(kind, source)?;
        }

        let command_formatter;
        let formatter: &dyn Formatter = match &options.format.command {
            Some(command) => {
                command_formatter = CommandFormatter::new(command.clone());
                &command_formatter
            }
            None => self.backend.formatter(),
        };

        let emitter = Emitter {
            engine: &engine,
            writer: OutputWriter::new(options.style.eol, formatter),
            mode,
        };
        let naming = Naming::new(&options);
        let root = options.output.root.as_path();
        let mut report = GenerationReport::new(Outcome::Generated, diagnostics);

        for &kind in plan.kinds() {
            let overwrite = kind.overwrite(options.generate.missing_only);

            if kind.is_per_entity() {
                for entity in model.entities() {
                    let file_name = naming.file_name(&entity.file_name, Some(kind));
                    let path = naming.target_path(root, kind, &file_name);
                    let target = Target {
                        kind,
                        entity: Some(entity.name.as_str()),
                        path: &path,
                    };
                    emitter.emit(&target, entity, overwrite, &mut report)?;
                }
                continue;
            }

            let Some(file_name) = naming.shared_file(kind) else {
                continue;
            };
            let path = naming.target_path(root, kind, &file_name);
            let target = Target {
                kind,
                entity: None,
                path: &path,
            };
            let context = static_context(kind, &options, &model);
            emitter.emit(&target, context, overwrite, &mut report)?;
        }

        Ok(report)
    }
}

impl Emitter<'_> {
    fn emit<S: Serialize>(
        &self,
        target: &Target<'_>,
        context: S,
        overwrite: Overwrite,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let path = target.path;
        if overwrite == Overwrite::IfMissing && path.exists() {
            skipped(target, report);
            return Ok(());
        }

        tracing::debug!(kind = %target.kind, entity = target.entity, "rendering");
        let raw = self.engine.render(target.kind, context)?;
        let processed = self.writer.process(&raw, target);
        if let Some(diagnostic) = processed.diagnostic {
            tracing::warn!("{diagnostic}");
            report.diagnostics.push(diagnostic);
        }

        match self.mode {
            Mode::DryRun => report.previews.push(PreviewFile {
                path: path.to_path_buf(),
                content: processed.text,
            }),
            Mode::Write => match self.writer.persist(path, &processed.text, overwrite)? {
                WriteResult::Written => {
                    tracing::info!(path = %path.display(), "wrote file");
                    report.written.push(path.to_path_buf());
                }
                WriteResult::Skipped => skipped(target, report),
            },
        }

        Ok(())
    }
}

/// Record a file left untouched. A kept project config is also a warning.
fn skipped(target: &Target<'_>, report: &mut GenerationReport) {
    let path = target.path;
    tracing::info!(path = %path.display(), "skipped existing file");
    if target.kind.is_config() {
        let diagnostic = Diagnostic::warning(
            "output",
            format!("skipped {}, file already exists", target.kind),
        )
        .at(path.display().to_string());
        tracing::warn!("{diagnostic}");
        report.diagnostics.push(diagnostic);
    }
    report.skipped.push(path.to_path_buf());
}

/// Root context of a static artifact.
fn static_context(kind: ArtifactKind, options: &GenerationOptions, model: &Model) -> Value {
    match kind {
        ArtifactKind::Index => context! { entities => model.entities() },
        ArtifactKind::Ormconfig => {
            context! { connection => options.connection.clone().unwrap_or_default() }
        }
        _ => context! {},
    }
}
