use std::path::PathBuf;

use super::PreviewFile;
use crate::pipeline::Diagnostic;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The plan was rendered (files may still have been skipped).
    Generated,
    /// No artifact group was selected; nothing was rendered or written.
    NothingSelected,
}

/// Summary of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub outcome: Outcome,
    /// Files written, in generation order.
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Rendered files of a dry run.
    pub previews: Vec<PreviewFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    pub(crate) fn new(outcome: Outcome, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            outcome,
            written: Vec::new(),
            skipped: Vec::new(),
            previews: Vec::new(),
            diagnostics,
        }
    }

    /// Warning diagnostics of the run.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}
