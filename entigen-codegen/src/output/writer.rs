use std::path::Path;

use entigen_config::LineEnding;
use entigen_core::{File, Overwrite, WriteResult};

use super::{Formatter, convert_eol, prune_imports};
use crate::{ArtifactKind, Diagnostic, Error, Result};

/// The artifact a rendered text belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    pub kind: ArtifactKind,
    /// Entity the artifact was rendered for, if it is per-entity.
    pub entity: Option<&'a str>,
    pub path: &'a Path,
}

impl Target<'_> {
    /// What diagnostics about this artifact are attributed to.
    fn subject(&self) -> String {
        match self.entity {
            Some(entity) => format!("{} of entity '{entity}'", self.kind),
            None => self.kind.to_string(),
        }
    }
}

/// Post-processed text, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub text: String,
    /// Warning recorded when formatting failed.
    pub diagnostic: Option<Diagnostic>,
}

/// Turns rendered text into file contents and writes them.
pub struct OutputWriter<'a> {
    eol: LineEnding,
    formatter: &'a dyn Formatter,
}

impl<'a> OutputWriter<'a> {
    pub fn new(eol: LineEnding, formatter: &'a dyn Formatter) -> Self {
        Self { eol, formatter }
    }

    /// Prune imports, convert line endings, then format.
    ///
    /// Line endings are only rewritten when the configured terminator differs
    /// from the host's. A formatter failure keeps the unformatted text and
    /// returns a warning naming the artifact.
    pub fn process(&self, raw: &str, target: &Target<'_>) -> Processed {
        let mut text = if target.kind.prunes_imports() {
            prune_imports(raw)
        } else {
            raw.to_string()
        };

        if !self.eol.is_native() {
            text = convert_eol(&text, self.eol);
        }

        match self.formatter.format(&text, target.kind.format_profile()) {
            Ok(formatted) => Processed {
                text: formatted,
                diagnostic: None,
            },
            Err(err) => {
                let diagnostic = Diagnostic::warning(
                    "output",
                    format!("failed to format {}: {err}", target.subject()),
                )
                .at(target.path.display().to_string());
                Processed {
                    text,
                    diagnostic: Some(diagnostic),
                }
            }
        }
    }

    /// Write `text` to `path` under the given policy.
    pub fn persist(&self, path: &Path, text: &str, overwrite: Overwrite) -> Result<WriteResult> {
        File::new(path, text)
            .overwrite(overwrite)
            .write()
            .map_err(|source| Error::io(path, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{FormatError, FormatProfile};

    struct Verbatim;

    impl Formatter for Verbatim {
        fn format(
            &self,
            text: &str,
            _profile: FormatProfile,
        ) -> std::result::Result<String, FormatError> {
            Ok(text.to_string())
        }
    }

    struct Rejecting;

    impl Formatter for Rejecting {
        fn format(
            &self,
            _text: &str,
            _profile: FormatProfile,
        ) -> std::result::Result<String, FormatError> {
            Err(FormatError::Unbalanced {
                delimiter: '}',
                line: 3,
            })
        }
    }

    fn target(kind: ArtifactKind) -> Target<'static> {
        Target {
            kind,
            entity: Some("user"),
            path: Path::new("entities/User.ts"),
        }
    }

    #[test]
    fn test_prunes_only_entities() {
        let writer = OutputWriter::new(LineEnding::native(), &Verbatim);
        let raw = "import { Column, Entity } from 'typeorm';\n@Entity()\nexport class User {}\n";

        let entity = writer.process(raw, &target(ArtifactKind::Entity));
        assert_eq!(
            entity.text,
            "import { Entity } from 'typeorm';\n@Entity()\nexport class User {}\n"
        );

        let model = writer.process(raw, &target(ArtifactKind::Model));
        assert_eq!(model.text, raw);
    }

    #[test]
    fn test_converts_foreign_line_endings() {
        let foreign = match LineEnding::native() {
            LineEnding::Lf => LineEnding::Crlf,
            LineEnding::Crlf => LineEnding::Lf,
        };
        let writer = OutputWriter::new(foreign, &Verbatim);
        let processed = writer.process("a\nb\n", &target(ArtifactKind::Model));
        assert_eq!(processed.text, convert_eol("a\nb\n", foreign));
    }

    #[test]
    fn test_native_line_endings_untouched() {
        let writer = OutputWriter::new(LineEnding::native(), &Verbatim);
        let processed = writer.process("a\r\nb\n", &target(ArtifactKind::Model));
        assert_eq!(processed.text, "a\r\nb\n");
    }

    #[test]
    fn test_format_failure_keeps_text() {
        let writer = OutputWriter::new(LineEnding::native(), &Rejecting);
        let processed = writer.process("export class User {", &target(ArtifactKind::Model));

        assert_eq!(processed.text, "export class User {");
        let diagnostic = processed.diagnostic.expect("warning recorded");
        assert!(diagnostic.severity.is_warning());
        assert!(diagnostic.message.contains("entity 'user'"));
    }

    #[test]
    fn test_persist_if_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models").join("User.ts");
        let writer = OutputWriter::new(LineEnding::native(), &Verbatim);

        let first = writer.persist(&path, "first", Overwrite::IfMissing).unwrap();
        let second = writer.persist(&path, "second", Overwrite::IfMissing).unwrap();
        assert_eq!(first, WriteResult::Written);
        assert_eq!(second, WriteResult::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        writer.persist(&path, "third", Overwrite::Always).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "third");
    }
}
