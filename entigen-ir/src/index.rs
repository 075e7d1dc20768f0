use indexmap::IndexMap;

use crate::Entity;

/// Name to position lookup over an entity sequence.
///
/// Built once per run. When two entities share a name the first occurrence
/// wins; the sequence itself is never reordered or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    positions: IndexMap<String, usize>,
}

impl EntityIndex {
    pub fn new(entities: &[Entity]) -> Self {
        let mut positions = IndexMap::with_capacity(entities.len());
        for (position, entity) in entities.iter().enumerate() {
            positions.entry(entity.name.clone()).or_insert(position);
        }
        Self { positions }
    }

    /// Position of the entity named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Look up the entity named `name` in `entities`.
    pub fn resolve<'a>(&self, entities: &'a [Entity], name: &str) -> Option<&'a Entity> {
        self.position(name).and_then(|position| entities.get(position))
    }
}
