//! Built-in lints for model validation.

mod empty_entity;
mod owning_side;
mod unresolved_relation;

pub use empty_entity::EmptyEntityLint;
pub use owning_side::OwningSideLint;
pub use unresolved_relation::UnresolvedRelationLint;
