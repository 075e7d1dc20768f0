use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{config_label, load_model, load_options};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to entigen.toml (defaults to ./entigen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Entity model JSON
    #[arg(short, long)]
    pub model: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let options = load_options(self.config.as_deref());
        let model = load_model(&self.model);

        let config = config_label(self.config.as_deref());
        let report = ops::check(&options, &model, config, &self.model)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
