//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Where the options came from.
    pub config: String,
    /// Path to the entity model.
    pub model_path: PathBuf,
    pub entity_count: usize,
    /// Artifact kinds a generate run would emit, in order.
    pub kinds: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!(
            "✓ {} is valid ({} entit{}, {})",
            self.model_path.display(),
            self.entity_count,
            if self.entity_count == 1 { "y" } else { "ies" },
            self.config
        ));

        if !self.kinds.is_empty() {
            out.newline();
            out.section("Would generate");
            for kind in &self.kinds {
                out.list_item(kind);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report() -> CheckReport {
        CheckReport {
            config: "entigen.toml".to_string(),
            model_path: PathBuf::from("model.json"),
            entity_count: 1,
            kinds: vec!["entity".to_string()],
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
        }
    }

    #[test]
    fn test_valid_report_lists_kinds() {
        let mut out = RecordingOutput::default();
        report().render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "✓ model.json is valid (1 entity, entigen.toml)".to_string(),
                String::new(),
                "Would generate:".to_string(),
                "  - entity".to_string(),
            ]
        );
    }

    #[test]
    fn test_errors_suppress_summary() {
        let mut report = report();
        report.errors.push("relation 'user.team' targets unknown entity 'team'".to_string());

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(out.lines[0], "error: relation 'user.team' targets unknown entity 'team'");
        assert_eq!(out.lines.len(), 2);
    }
}
