//! Type definitions: one named type with its declared properties.

use serde::{Deserialize, Serialize};

use crate::types::{PropertyType, TypeCategory};

/// A property declared by a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Property name as stored in the bag (e.g. `qualifiedName`).
    pub name: String,

    /// Declared type.
    pub ty: PropertyType,

    /// Documentation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
        }
    }
}

/// A named metadata type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    /// Type name (e.g. `SchemaAttribute`).
    pub name: String,

    /// Entity, classification or relationship.
    pub category: TypeCategory,

    /// Direct supertype. `None` for a root type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_type: Option<String>,

    /// Properties declared by this type (not including inherited ones).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl TypeDef {
    fn new(name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            name: name.into(),
            category,
            super_type: None,
            properties: vec![],
            doc: None,
        }
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name, TypeCategory::Entity)
    }

    pub fn classification(name: impl Into<String>) -> Self {
        Self::new(name, TypeCategory::Classification)
    }

    pub fn relationship(name: impl Into<String>) -> Self {
        Self::new(name, TypeCategory::Relationship)
    }

    /// Set the direct supertype.
    pub fn extends(mut self, super_type: impl Into<String>) -> Self {
        self.super_type = Some(super_type.into());
        self
    }

    /// Declare a property.
    pub fn property(mut self, name: impl Into<String>, ty: PropertyType) -> Self {
        self.properties.push(PropertyDef::new(name, ty));
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Find a property declared directly on this type.
    pub fn declared(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let def = TypeDef::entity("SchemaAttribute")
            .extends("SchemaElement")
            .property("minCardinality", PropertyType::Int)
            .property("maxCardinality", PropertyType::Int);

        assert_eq!(def.category, TypeCategory::Entity);
        assert_eq!(def.super_type.as_deref(), Some("SchemaElement"));
        assert_eq!(def.properties.len(), 2);
        assert_eq!(def.declared("maxCardinality").unwrap().ty, PropertyType::Int);
        assert!(def.declared("qualifiedName").is_none());
    }

    #[test]
    fn deserialize_minimal() {
        let json = r#"{"name": "Team", "category": "entity", "superType": "ActorProfile"}"#;
        let def: TypeDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.name, "Team");
        assert_eq!(def.super_type.as_deref(), Some("ActorProfile"));
        assert!(def.properties.is_empty());
    }
}
