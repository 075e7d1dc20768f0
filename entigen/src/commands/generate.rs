use std::path::PathBuf;

use clap::Args;
use entigen_config::GenerationOptions;
use eyre::Result;

use super::{load_model, load_options};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to entigen.toml (defaults to ./entigen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Entity model JSON
    #[arg(short, long)]
    pub model: PathBuf,

    /// Project root (overrides output.root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Template override directory (overrides output.templates)
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Generate every artifact group
    #[arg(long)]
    pub all: bool,

    /// Generate TypeORM entity classes
    #[arg(long)]
    pub entities: bool,

    /// Generate plain model interfaces
    #[arg(long)]
    pub models: bool,

    /// Generate entity schemas
    #[arg(long)]
    pub schemas: bool,

    /// Generate repository ports and adapters
    #[arg(long)]
    pub repositories: bool,

    /// Only write files that don't exist yet
    #[arg(long)]
    pub missing_only: bool,

    /// Skip tsconfig.json and ormconfig.json
    #[arg(long)]
    pub no_configs: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut options = load_options(self.config.as_deref());
        self.apply(&mut options);
        let model = load_model(&self.model);

        let report = ops::generate(&options, &model, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Flags only ever switch things on; the config keeps whatever they don't name.
    fn apply(&self, options: &mut GenerationOptions) {
        if let Some(root) = &self.output {
            options.output.root = root.clone();
        }
        if let Some(templates) = &self.templates {
            options.output.templates = Some(templates.clone());
        }

        let generate = &mut options.generate;
        generate.all |= self.all;
        generate.entities |= self.entities;
        generate.models |= self.models;
        generate.schemas |= self.schemas;
        generate.repositories |= self.repositories;
        generate.missing_only |= self.missing_only;
        if self.no_configs {
            generate.configs = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::commands::Cli;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "entigen",
            "generate",
            "--model",
            "model.json",
            "--entities",
            "--no-configs",
            "-o",
            "out",
        ])
        .unwrap();
        let crate::commands::Commands::Generate(cmd) = &cli.command else {
            panic!("expected generate");
        };

        let mut options = super::GenerationOptions::default();
        options.generate.models = true;
        cmd.apply(&mut options);

        assert!(options.generate.entities);
        assert!(options.generate.models);
        assert!(!options.generate.configs);
        assert!(!options.generate.all);
        assert_eq!(options.output.root, std::path::PathBuf::from("out"));
    }
}
