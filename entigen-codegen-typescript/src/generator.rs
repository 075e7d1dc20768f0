//! TypeScript code generator for TypeORM projects.

use entigen_codegen::{
    Backend, GenerationReport, LanguageCodegen, Mode, Orchestrator, Result, output::Formatter,
    template::TemplateSet,
};
use entigen_config::GenerationOptions;
use entigen_ir::Model;

use crate::{TypeScriptFormatter, TypeScriptTemplates};

/// The TypeScript language backend: built-in TypeORM templates and the
/// bracket-depth formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScript {
    templates: TypeScriptTemplates,
    formatter: TypeScriptFormatter,
}

impl Backend for TypeScript {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn templates(&self) -> &dyn TemplateSet {
        &self.templates
    }

    fn formatter(&self) -> &dyn Formatter {
        &self.formatter
    }
}

/// TypeScript code generator bound to one model and configuration.
pub struct Generator<'a> {
    options: &'a GenerationOptions,
    model: &'a Model,
    backend: TypeScript,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        self.backend.language()
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Result<GenerationReport> {
        self.run(Mode::DryRun)
    }

    fn generate(&self) -> Result<GenerationReport> {
        self.run(Mode::Write)
    }
}

impl<'a> Generator<'a> {
    pub fn new(options: &'a GenerationOptions, model: &'a Model) -> Self {
        Self {
            options,
            model,
            backend: TypeScript::default(),
        }
    }

    fn run(&self, mode: Mode) -> Result<GenerationReport> {
        Orchestrator::new(&self.backend).run(self.options, self.model, mode)
    }
}
