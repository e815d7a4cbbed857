//! Shared types used across all IR layers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of a single metadata property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    String,
    Int,
    Long,
    Boolean,
    Double,
    Date,
    /// A named enumeration (e.g. `DataItemSortOrder`).
    Enum(String),
    /// `array<inner>`
    Array(Box<PropertyType>),
    /// `map<string, inner>`
    Map(Box<PropertyType>),
}

impl PropertyType {
    /// `map<string, string>`, the shape of `additionalProperties`.
    pub fn string_map() -> Self {
        PropertyType::Map(Box::new(PropertyType::String))
    }

    /// `array<string>`
    pub fn string_array() -> Self {
        PropertyType::Array(Box::new(PropertyType::String))
    }

    /// Returns the element type if this is an array or map.
    pub fn element_type(&self) -> Option<&PropertyType> {
        match self {
            PropertyType::Array(inner) | PropertyType::Map(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns true for arrays and maps.
    pub fn is_collection(&self) -> bool {
        matches!(self, PropertyType::Array(_) | PropertyType::Map(_))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::String => f.write_str("string"),
            PropertyType::Int => f.write_str("int"),
            PropertyType::Long => f.write_str("long"),
            PropertyType::Boolean => f.write_str("boolean"),
            PropertyType::Double => f.write_str("double"),
            PropertyType::Date => f.write_str("date"),
            PropertyType::Enum(name) => write!(f, "enum<{}>", name),
            PropertyType::Array(inner) => write!(f, "array<{}>", inner),
            PropertyType::Map(inner) => write!(f, "map<string,{}>", inner),
        }
    }
}

/// Which kind of instance a type describes.
///
/// The three categories have independent type-name spaces and independent
/// bean shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeCategory {
    Entity,
    Classification,
    Relationship,
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCategory::Entity => f.write_str("entity"),
            TypeCategory::Classification => f.write_str("classification"),
            TypeCategory::Relationship => f.write_str("relationship"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_helpers() {
        let map = PropertyType::string_map();
        assert!(map.is_collection());
        assert_eq!(map.element_type(), Some(&PropertyType::String));

        assert!(!PropertyType::Int.is_collection());
        assert_eq!(PropertyType::Int.element_type(), None);
        assert!(PropertyType::string_array().is_collection());
    }

    #[test]
    fn display() {
        assert_eq!(PropertyType::string_map().to_string(), "map<string,string>");
        assert_eq!(
            PropertyType::Enum("DataItemSortOrder".into()).to_string(),
            "enum<DataItemSortOrder>"
        );
        assert_eq!(TypeCategory::Relationship.to_string(), "relationship");
    }

    #[test]
    fn serde_roundtrip() {
        let ty = PropertyType::Map(Box::new(PropertyType::Enum("Status".into())));
        let json = serde_json::to_string(&ty).unwrap();
        let back: PropertyType = serde_json::from_str(&json).unwrap();
        assert_eq!(ty, back);

        let json = serde_json::to_string(&PropertyType::Long).unwrap();
        assert_eq!(json, "\"long\"");
    }
}
