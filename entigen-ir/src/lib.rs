//! Entity model types for the entigen generator.
//!
//! This crate provides the normalized description of the entities a run
//! generates code for. The model is read from a JSON document produced by an
//! external schema reader and stays immutable for the duration of a run.
//!
//! # Architecture
//!
//! ```text
//! model.json → entigen-ir (Model, EntityIndex) → entigen-codegen → *.ts
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod entity;
mod error;
mod index;
mod model;
mod relation;

pub use entity::{Column, Entity, Generated, Index};
pub use error::{Error, Result};
pub use index::EntityIndex;
pub use model::Model;
pub use relation::{JoinColumn, JoinTable, Relation, RelationType};
