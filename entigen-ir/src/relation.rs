//! Relations between entities.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Cardinality of a relation, named after the TypeORM decorator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    #[serde(alias = "one-to-one")]
    OneToOne,
    #[serde(alias = "one-to-many")]
    OneToMany,
    #[serde(alias = "many-to-one")]
    ManyToOne,
    #[serde(alias = "many-to-many")]
    ManyToMany,
}

impl RelationType {
    /// Returns the decorator name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::OneToOne => "OneToOne",
            RelationType::OneToMany => "OneToMany",
            RelationType::ManyToOne => "ManyToOne",
            RelationType::ManyToMany => "ManyToMany",
        }
    }

    /// Whether the property holds a sequence of related entities.
    pub fn is_array(&self) -> bool {
        matches!(self, RelationType::OneToMany | RelationType::ManyToMany)
    }

    /// The relation type seen from the other side.
    pub fn inverse(&self) -> RelationType {
        match self {
            RelationType::OneToOne => RelationType::OneToOne,
            RelationType::OneToMany => RelationType::ManyToOne,
            RelationType::ManyToOne => RelationType::OneToMany,
            RelationType::ManyToMany => RelationType::ManyToMany,
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OneToOne" | "one-to-one" => Ok(RelationType::OneToOne),
            "OneToMany" | "one-to-many" => Ok(RelationType::OneToMany),
            "ManyToOne" | "many-to-one" => Ok(RelationType::ManyToOne),
            "ManyToMany" | "many-to-many" => Ok(RelationType::ManyToMany),
            _ => Err(format!(
                "unknown relation type '{s}' (expected OneToOne, OneToMany, ManyToOne or ManyToMany)"
            )),
        }
    }
}

/// A relation from one entity to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub relation_type: RelationType,
    /// Name of the related entity.
    pub related_table: String,
    /// Property name on the owning entity.
    pub field_name: String,
    /// Inverse property on the related entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_field: Option<String>,
    /// Whether this side owns the foreign key (or join table).
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub join_columns: Vec<JoinColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_table: Option<JoinTable>,
    /// TypeScript type of the generated `@RelationId` property.
    #[serde(default = "default_relation_id_type")]
    pub relation_id_type: String,
    /// Decorator options, rendered in insertion order.
    #[serde(default)]
    pub options: IndexMap<String, serde_json::Value>,
}

fn default_relation_id_type() -> String {
    "number".to_string()
}

impl Relation {
    pub fn new(
        relation_type: RelationType,
        related_table: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self {
            relation_type,
            related_table: related_table.into(),
            field_name: field_name.into(),
            related_field: None,
            owner: false,
            join_columns: Vec::new(),
            join_table: None,
            relation_id_type: default_relation_id_type(),
            options: IndexMap::new(),
        }
    }

    /// Set the inverse property name.
    pub fn inverse(mut self, related_field: impl Into<String>) -> Self {
        self.related_field = Some(related_field.into());
        self
    }

    /// Mark this side as owning, joined on `column` referencing `referenced`.
    pub fn owner(mut self, column: impl Into<String>, referenced: impl Into<String>) -> Self {
        self.owner = true;
        self.join_columns.push(JoinColumn {
            name: column.into(),
            referenced_column_name: referenced.into(),
        });
        self
    }

    /// Mark this side as owning a join table.
    pub fn join_table(mut self, join_table: JoinTable) -> Self {
        self.owner = true;
        self.join_table = Some(join_table);
        self
    }

    /// Add a decorator option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// A foreign key column of the owning side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinColumn {
    pub name: String,
    pub referenced_column_name: String,
}

/// The join table of an owning ManyToMany side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTable {
    pub name: String,
    #[serde(default)]
    pub join_columns: Vec<JoinColumn>,
    #[serde(default)]
    pub inverse_join_columns: Vec<JoinColumn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_array() {
        assert!(RelationType::OneToMany.is_array());
        assert!(RelationType::ManyToMany.is_array());
        assert!(!RelationType::ManyToOne.is_array());
        assert!(!RelationType::OneToOne.is_array());
    }

    #[test]
    fn test_inverse() {
        assert_eq!(RelationType::ManyToOne.inverse(), RelationType::OneToMany);
        assert_eq!(RelationType::OneToMany.inverse(), RelationType::ManyToOne);
        assert_eq!(RelationType::ManyToMany.inverse(), RelationType::ManyToMany);
    }

    #[test]
    fn test_parse_relation_type() {
        assert_eq!("ManyToOne".parse(), Ok(RelationType::ManyToOne));
        assert_eq!("one-to-many".parse(), Ok(RelationType::OneToMany));
        assert!("ManyToFew".parse::<RelationType>().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let relation: Relation = serde_json::from_str(
            r#"{ "relationType": "many-to-one", "relatedTable": "organization", "fieldName": "organization" }"#,
        )
        .unwrap();

        assert_eq!(relation.relation_type, RelationType::ManyToOne);
        assert_eq!(relation.relation_id_type, "number");
        assert!(!relation.owner);
        assert!(relation.join_columns.is_empty());
    }

    #[test]
    fn test_owner_builder() {
        let relation = Relation::new(RelationType::ManyToOne, "organization", "organization")
            .owner("organization_id", "id");

        assert!(relation.owner);
        assert_eq!(relation.join_columns[0].name, "organization_id");
        assert_eq!(relation.join_columns[0].referenced_column_name, "id");
    }
}
