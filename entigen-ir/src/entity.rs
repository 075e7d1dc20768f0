//! Entities, columns and indices.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Relation;

/// One generated unit, typically a database table.
///
/// Serialized with camelCase keys; templates receive this shape as their root
/// context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Entity name as discovered (usually the table name).
    pub name: String,
    /// Base file name before pluralization and casing. Defaults to `name`.
    #[serde(default)]
    pub file_name: String,
    /// Table identifier in the store. Defaults to `name`.
    #[serde(default)]
    pub sql_name: String,
    /// Database schema the table lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub indices: Vec<Index>,
    /// Names of other entities referenced by this one.
    #[serde(default)]
    pub imports: BTreeSet<String>,
}

impl Entity {
    /// Create an entity with the given name and no members.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            file_name: name.clone(),
            sql_name: name.clone(),
            name,
            schema: None,
            columns: Vec::new(),
            relations: Vec::new(),
            indices: Vec::new(),
            imports: BTreeSet::new(),
        }
    }

    /// Add a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a relation, recording its target as a required import.
    pub fn relation(mut self, relation: Relation) -> Self {
        if relation.related_table != self.name {
            self.imports.insert(relation.related_table.clone());
        }
        self.relations.push(relation);
        self
    }

    /// Add an index.
    pub fn index(mut self, index: Index) -> Self {
        self.indices.push(index);
        self
    }

    /// Primary key columns in declaration order.
    pub fn primary_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.primary)
    }

    /// Fill in defaults that depend on other fields.
    ///
    /// Empty `fileName`/`sqlName` fall back to `name`, and an empty import set
    /// is derived from the relation targets.
    pub(crate) fn normalize(&mut self) {
        if self.file_name.is_empty() {
            self.file_name = self.name.clone();
        }
        if self.sql_name.is_empty() {
            self.sql_name = self.name.clone();
        }
        if self.imports.is_empty() {
            self.imports = self
                .relations
                .iter()
                .map(|r| r.related_table.clone())
                .filter(|target| *target != self.name)
                .collect();
        }
        for column in &mut self.columns {
            if column.db_name.is_empty() {
                column.db_name = column.name.clone();
            }
        }
    }
}

/// A column of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Raw property identifier.
    pub name: String,
    /// Column name in the store. Defaults to `name`.
    #[serde(default)]
    pub db_name: String,
    /// TypeScript type of the property.
    pub ts_type: String,
    /// Database column type.
    pub column_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<Generated>,
    /// Decorator options, rendered in insertion order.
    #[serde(default)]
    pub options: IndexMap<String, serde_json::Value>,
}

impl Column {
    pub fn new(
        name: impl Into<String>,
        ts_type: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            db_name: name.clone(),
            name,
            ts_type: ts_type.into(),
            column_type: column_type.into(),
            nullable: false,
            primary: false,
            generated: None,
            options: IndexMap::new(),
        }
    }

    /// Mark as primary key.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Mark as generated primary key.
    pub fn generated(mut self, strategy: Generated) -> Self {
        self.primary = true;
        self.generated = Some(strategy);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    /// Add a decorator option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Primary key generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generated {
    Increment,
    Uuid,
    Rowid,
}

/// A table index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RelationType;

    #[test]
    fn test_relation_records_import() {
        let entity = Entity::new("user")
            .relation(Relation::new(RelationType::ManyToOne, "organization", "organization"))
            .relation(Relation::new(RelationType::OneToMany, "user", "children"));

        assert_eq!(
            entity.imports.iter().collect::<Vec<_>>(),
            vec!["organization"]
        );
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let mut entity: Entity = serde_json::from_str(
            r#"{
                "name": "user",
                "columns": [{ "name": "id", "tsType": "number", "columnType": "int" }],
                "relations": [{
                    "relationType": "ManyToOne",
                    "relatedTable": "organization",
                    "fieldName": "organization"
                }]
            }"#,
        )
        .unwrap();

        entity.normalize();

        assert_eq!(entity.file_name, "user");
        assert_eq!(entity.sql_name, "user");
        assert_eq!(entity.columns[0].db_name, "id");
        assert!(entity.imports.contains("organization"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let entity = Entity::new("user").column(
            Column::new("id", "number", "int")
                .generated(Generated::Increment)
                .db_name("user_id"),
        );

        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["fileName"], "user");
        assert_eq!(value["columns"][0]["dbName"], "user_id");
        assert_eq!(value["columns"][0]["generated"], "increment");
        assert_eq!(value["columns"][0]["primary"], true);
    }

    #[test]
    fn test_primary_columns() {
        let entity = Entity::new("membership")
            .column(Column::new("userId", "number", "int").primary())
            .column(Column::new("role", "string", "varchar"))
            .column(Column::new("organizationId", "number", "int").primary());

        let names: Vec<_> = entity.primary_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["userId", "organizationId"]);
    }
}
