//! Template compilation and rendering.
//!
//! Templates are minijinja sources keyed by [`ArtifactKind`](crate::ArtifactKind).
//! Each run builds one [`TemplateEngine`] whose helpers close over that run's
//! [`HelperContext`].

mod context;
mod engine;
mod helpers;

pub use context::HelperContext;
pub use engine::{TEMPLATE_EXTENSION, TemplateEngine, TemplateSet, template_source};
pub use helpers::Helper;
