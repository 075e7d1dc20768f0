//! The formatter contract and an adapter for external formatter programs.

use std::{
    io::{self, ErrorKind, Write},
    process::{Command, Stdio},
    thread,
};

use thiserror::Error;

/// What kind of text a formatter receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatProfile {
    /// Program source.
    Source,
    /// Structured data such as JSON config files.
    Data,
}

impl FormatProfile {
    /// Parser name substituted for `{parser}` in formatter commands.
    pub fn parser(&self) -> &'static str {
        match self {
            FormatProfile::Source => "typescript",
            FormatProfile::Data => "json",
        }
    }
}

/// Why a formatter rejected its input.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unbalanced '{delimiter}' on line {line}")]
    Unbalanced { delimiter: char, line: usize },

    #[error("unterminated {0}")]
    Unterminated(&'static str),

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("formatter command is empty")]
    EmptyCommand,

    #[error("failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' failed: {message}")]
    Command { program: String, message: String },
}

/// Formats rendered text.
pub trait Formatter: Send + Sync {
    /// Format `text`, returning the formatted text or why it was rejected.
    fn format(&self, text: &str, profile: FormatProfile) -> Result<String, FormatError>;
}

/// Pipes text through an external program such as `prettier --stdin-filepath`.
///
/// The text is written to the program's stdin and its stdout is taken as the
/// result. `{parser}` in any argument is replaced with the profile's parser
/// name.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    command: Vec<String>,
}

impl CommandFormatter {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, text: &str, profile: FormatProfile) -> Result<String, FormatError> {
        let (program, args) = self.command.split_first().ok_or(FormatError::EmptyCommand)?;
        let spawn_error = |source| FormatError::Spawn {
            program: program.clone(),
            source,
        };

        let mut child = Command::new(program)
            .args(args.iter().map(|arg| arg.replace("{parser}", profile.parser())))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // stdin must be fed while stdout and stderr are drained
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(spawn_error)?;
        // A program that exits early is reported through its status.
        if let Err(source) = written {
            if source.kind() != ErrorKind::BrokenPipe {
                return Err(spawn_error(source));
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FormatError::Command {
                program: program.clone(),
                message: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| FormatError::Command {
            program: program.clone(),
            message: "output is not valid UTF-8".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command() {
        let formatter = CommandFormatter::new(Vec::new());
        let err = formatter.format("x", FormatProfile::Source).unwrap_err();
        assert!(matches!(err, FormatError::EmptyCommand));
    }

    #[test]
    fn test_missing_program() {
        let formatter = CommandFormatter::new(vec!["entigen-no-such-formatter".to_string()]);
        let err = formatter.format("x", FormatProfile::Data).unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_pipes_through_program() {
        let formatter = CommandFormatter::new(vec!["cat".to_string()]);
        let text = "export class User {}\n";
        assert_eq!(formatter.format(text, FormatProfile::Source).unwrap(), text);
    }

    #[cfg(unix)]
    #[test]
    fn test_input_larger_than_pipe_buffer() {
        let formatter = CommandFormatter::new(vec!["cat".to_string()]);
        let line = "export const value = 1;\n";
        let text = line.repeat((1 << 20) / line.len() + 1);
        assert!(text.len() > 1 << 20);

        let formatted = formatter.format(&text, FormatProfile::Source).unwrap();
        assert_eq!(formatted.len(), text.len());
        assert_eq!(formatted, text);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program() {
        let formatter = CommandFormatter::new(vec!["false".to_string()]);
        let err = formatter.format("x", FormatProfile::Source).unwrap_err();
        assert!(matches!(err, FormatError::Command { .. }));
    }
}
