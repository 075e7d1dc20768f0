mod check;
mod completions;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use entigen_config::GenerationOptions;
use entigen_ir::Model;
use eyre::Result;
use generate::GenerateCommand;

/// Config file read when `--config` is not given.
const DEFAULT_CONFIG: &str = "entigen.toml";

/// Extension trait for exiting on config and model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "entigen")]
#[command(version)]
#[command(about = "Generate TypeScript models, TypeORM entities and repositories from an entity model")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript sources from an entity model
    Generate(GenerateCommand),

    /// Validate entigen.toml and the entity model without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options from `config`, or from `./entigen.toml` when it exists, or the
/// defaults.
pub(crate) fn load_options(config: Option<&Path>) -> GenerationOptions {
    match config {
        Some(path) => GenerationOptions::from_file(path).unwrap_or_exit(),
        None if Path::new(DEFAULT_CONFIG).is_file() => {
            GenerationOptions::from_file(DEFAULT_CONFIG).unwrap_or_exit()
        }
        None => GenerationOptions::default(),
    }
}

pub(crate) fn load_model(path: &Path) -> Model {
    let model = Model::from_file(path).unwrap_or_exit();
    tracing::debug!(path = %path.display(), entities = model.len(), "loaded model");
    model
}

/// Label of the config source for reports.
pub(crate) fn config_label(config: Option<&Path>) -> String {
    match config {
        Some(path) => path.display().to_string(),
        None if Path::new(DEFAULT_CONFIG).is_file() => DEFAULT_CONFIG.to_string(),
        None => "default options".to_string(),
    }
}
