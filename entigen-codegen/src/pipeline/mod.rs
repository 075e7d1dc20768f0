//! Generation pipeline.
//!
//! This module provides a [`Pipeline`] that prepares a generation run. The
//! pipeline provides:
//!
//! - Explicit phase boundaries (validate → plan)
//! - Unified diagnostics collection
//! - Shared state via [`GenerationContext`]
//!
//! # Example
//!
//! ```ignore
//! use entigen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(options, model)?;
//!
//! for diag in ctx.diagnostics.iter().filter(|d| d.severity.is_warning()) {
//!     eprintln!("warning: {}", diag.message);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
