//! Artifact kinds and the naming policy deriving their file names and paths.

mod kind;
mod naming;

pub use kind::{ArtifactGroup, ArtifactKind};
pub use naming::Naming;
