//! Configuration for the entigen generator.
//!
//! Parses `entigen.toml` into [`GenerationOptions`]. Every enumerated option
//! has a closed value set; an unknown value is reported as a parse error
//! pointing at the offending key instead of silently falling back to a
//! default.
//!
//! ```toml
//! [output]
//! root = "src"
//! entities = "domain/entities"
//!
//! [naming]
//! file = "pascal"
//! pluralize = false
//!
//! [generate]
//! entities = true
//! repositories = true
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod options;
mod parse;
mod validate;

pub use entigen_core::CaseStyle;
pub use error::{Error, Result, SourceContext};
pub use options::*;
pub use parse::parse_options;
