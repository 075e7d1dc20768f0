//! Driving a run from plan to files.
//!
//! - [`Orchestrator`] - renders, post-processes and writes the planned artifacts
//! - [`Backend`] - a language's templates and formatter
//! - [`LanguageCodegen`] - a backend bound to one model and configuration
//! - [`GenerationReport`] - what a run wrote, skipped and reported

mod language;
mod orchestrator;
mod report;

pub use language::{Backend, LanguageCodegen, PreviewFile};
pub use orchestrator::{Mode, Orchestrator};
pub use report::{GenerationReport, Outcome};
