//! Core utilities and types for the entigen generator.
//!
//! This crate provides the naming engine (case conversion and English
//! inflection), relative import path computation, and the file write policy
//! shared by every code generation backend.

mod case;
mod file;
mod inflector;
mod path;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Naming
pub use case::{
    CaseStyle, UnknownCaseStyle, convert_case, to_camel_case, to_kebab_case, to_pascal_case,
    to_snake_case, upper_first,
};
pub use inflector::{pluralize, singularize};
// Paths
pub use path::{output_file, relative_import_path};
