//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Error, GenerationOptions, Result,
    error::SourceContext,
    validate::{find_key_span, is_portable_dir},
};

impl FromStr for GenerationOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_options(s, "entigen.toml")
    }
}

impl GenerationOptions {
    /// Parse an entigen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_options(&content, &path.display().to_string())
    }

    /// Parse an entigen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_options(content, filename)
    }
}

/// Parse options from content with the given filename for error reporting.
pub fn parse_options(content: &str, filename: &str) -> Result<GenerationOptions> {
    let source_ctx = SourceContext::new(content, filename);
    let options: GenerationOptions =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_options(&options, &source_ctx)?;
    Ok(options)
}

/// Validate the options after parsing.
fn validate_options(options: &GenerationOptions, ctx: &SourceContext) -> Result<()> {
    for (key, dir) in options.output.directories() {
        if let Some(reason) = is_portable_dir(dir) {
            return Err(ctx.validation_error(
                format!("output.{key} {reason}"),
                find_key_span(ctx.src(), key),
            ));
        }
    }

    if let Some(command) = &options.format.command {
        if command.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(ctx.validation_error(
                "format.command must name a program",
                find_key_span(ctx.src(), "command"),
            ));
        }
    }

    Ok(())
}
