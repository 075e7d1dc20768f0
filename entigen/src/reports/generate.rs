//! Generate command report data structures.

use std::path::{Path, PathBuf};

use entigen_codegen::{GenerationReport, Outcome};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project root the run wrote into.
    pub root: PathBuf,
    pub entity_count: usize,
    /// Whether files were only previewed.
    pub dry_run: bool,
    pub result: GenerationReport,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in self.result.warnings() {
            match &diagnostic.location {
                Some(loc) => out.warning(&format!("{}\n  --> {}", diagnostic.message, loc)),
                None => out.warning(&diagnostic.message),
            }
        }

        if self.result.outcome == Outcome::NothingSelected {
            out.preformatted("Nothing generated.");
            return;
        }

        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }
    }
}

impl GenerateReport {
    fn relative<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }

    fn render_written(&self, out: &mut dyn Output) {
        let written = &self.result.written;
        let skipped = &self.result.skipped;

        if !written.is_empty() {
            out.section(&format!("Written ({})", written.len()));
            for path in written {
                out.added_item(&self.relative(path).to_string());
            }
        }

        if !skipped.is_empty() {
            if !written.is_empty() {
                out.newline();
            }
            out.section(&format!("Skipped, already present ({})", skipped.len()));
            for path in skipped {
                out.list_item(&self.relative(path).to_string());
            }
        }

        out.newline();
        out.key_value(
            "Generated",
            &format!(
                "{} file{} for {} entit{} in {}",
                written.len(),
                if written.len() == 1 { "" } else { "s" },
                self.entity_count,
                if self.entity_count == 1 { "y" } else { "ies" },
                self.root.display()
            ),
        );
    }

    fn render_preview(&self, out: &mut dyn Output) {
        let previews = &self.result.previews;
        for file in previews {
            out.divider(&self.relative(&file.path).to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", previews.len()));
    }
}
