//! TypeScript code generator for the entigen generator.
//!
//! This crate supplies the TypeORM templates and a formatter for the
//! language-agnostic orchestrator in `entigen-codegen`.
//!
//! # Usage
//!
//! ```ignore
//! use entigen_codegen_typescript::{Generator, LanguageCodegen};
//! use entigen_config::GenerationOptions;
//! use entigen_ir::Model;
//!
//! let options = GenerationOptions::from_file("entigen.toml")?;
//! let model = Model::from_file("model.json")?;
//! let generator = Generator::new(&options, &model);
//!
//! // Render without writing
//! let report = generator.preview()?;
//!
//! // Render and write below `output.root`
//! let report = generator.generate()?;
//! ```
//!
//! # Generated Output
//!
//! Per entity, depending on `[generate]`:
//!
//! - `schemas/<name>Schema.ts` - `EntitySchema` descriptor
//! - `models/<name>.ts` - plain interface
//! - `entities/<name>.ts` - decorated TypeORM class
//! - `ports/<name>Repository.ts` - repository port
//! - `typeorm/TypeORM<name>Repository.ts` - repository adapter
//!
//! Once per run: `tsconfig.json`, `ormconfig.json`, `entities/index.ts`,
//! `ports/repository.ts`, `dtos/generic.ts` and `typeorm/typeORMRepository.ts`.

mod formatter;
mod generator;
mod templates;

pub use entigen_codegen::{GenerationReport, LanguageCodegen, PreviewFile};
pub use formatter::TypeScriptFormatter;
pub use generator::{Generator, TypeScript};
pub use templates::TypeScriptTemplates;
