//! Loading the entity model from JSON.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    Entity, EntityIndex,
    error::{Error, Result, find_name_span},
};

/// The full entity model of a run together with its name index.
#[derive(Debug, Clone, Default)]
pub struct Model {
    entities: Vec<Entity>,
    index: EntityIndex,
}

/// Accepted document shapes: a bare array or `{ "entities": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Entities(Vec<Entity>),
    Wrapped { entities: Vec<Entity> },
}

impl Model {
    /// Build a model from entities, filling in derived defaults.
    pub fn new(mut entities: Vec<Entity>) -> Self {
        for entity in &mut entities {
            entity.normalize();
        }
        let index = EntityIndex::new(&entities);
        Self { entities, index }
    }

    /// Parse a model file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a model from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        // Parse twice so errors point at the offending location instead of the
        // untagged enum's generic message.
        let entities = match serde_json::from_str::<Document>(content) {
            Ok(Document::Entities(entities)) | Ok(Document::Wrapped { entities }) => entities,
            Err(_) => {
                let value: serde_json::Value = serde_json::from_str(content)
                    .map_err(|e| Error::parse(e, content, filename))?;
                let entities = match value {
                    serde_json::Value::Object(mut map) if map.contains_key("entities") => {
                        map.remove("entities").unwrap_or_default()
                    }
                    other => other,
                };
                serde_json::from_value::<Vec<Entity>>(entities)
                    .map_err(|e| Error::validation(e.to_string(), content, filename, None))?
            }
        };

        validate(&entities, content, filename)?;
        Ok(Self::new(entities))
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn index(&self) -> &EntityIndex {
        &self.index
    }

    /// Look up an entity by name (first occurrence wins).
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.index.resolve(&self.entities, name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "model.json")
    }
}

fn validate(entities: &[Entity], src: &str, filename: &str) -> Result<()> {
    for (position, entity) in entities.iter().enumerate() {
        if entity.name.trim().is_empty() {
            return Err(Error::validation(
                format!("entity #{position} has an empty name"),
                src,
                filename,
                None,
            ));
        }
        for column in &entity.columns {
            if column.name.trim().is_empty() {
                return Err(Error::validation(
                    format!("entity '{}' has a column with an empty name", entity.name),
                    src,
                    filename,
                    find_name_span(src, &entity.name),
                ));
            }
        }
        for relation in &entity.relations {
            if relation.field_name.trim().is_empty() {
                return Err(Error::validation(
                    format!(
                        "relation from '{}' to '{}' has an empty field name",
                        entity.name, relation.related_table
                    ),
                    src,
                    filename,
                    find_name_span(src, &entity.name),
                ));
            }
        }
    }
    Ok(())
}
