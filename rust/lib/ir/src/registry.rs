//! Type registry: validated set of type definitions.
//!
//! The registry answers lineage questions (`ancestors`, `is_type_of`) and
//! stamps instances with an [`ElementType`] so conversion code can test type
//! membership without holding on to the registry.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RegistryError;
use crate::typedef::{PropertyDef, TypeDef};
use crate::types::TypeCategory;

/// Anything that can be tested against a type name, including every
/// ancestor type it satisfies.
pub trait TypeDescriptor {
    /// The instance's own (most specific) type name.
    fn type_name(&self) -> &str;

    /// True if the instance is of `candidate` or one of its subtypes.
    fn is_type_of(&self, candidate: &str) -> bool;
}

/// Type information carried by an instance: its type name plus the names of
/// all supertypes, nearest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementType {
    pub type_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub super_type_names: Vec<String>,
}

impl ElementType {
    /// A type with no known supertypes.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            super_type_names: vec![],
        }
    }

    pub fn with_supertypes<I, S>(type_name: impl Into<String>, supers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            super_type_names: supers.into_iter().map(Into::into).collect(),
        }
    }

    /// Type name followed by supertypes, most specific first.
    pub fn lineage(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.type_name.as_str())
            .chain(self.super_type_names.iter().map(String::as_str))
    }
}

impl TypeDescriptor for ElementType {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn is_type_of(&self, candidate: &str) -> bool {
        self.type_name == candidate || self.super_type_names.iter().any(|s| s == candidate)
    }
}

/// A validated collection of type definitions.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: Vec<TypeDef>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Build a registry, rejecting duplicate types, unknown or cross-category
    /// supertypes, inheritance cycles and redeclared properties.
    pub fn new(types: Vec<TypeDef>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(types.len());
        for (i, def) in types.iter().enumerate() {
            if index.insert(def.name.clone(), i).is_some() {
                return Err(RegistryError::DuplicateType(def.name.clone()));
            }
        }

        let registry = Self { types, index };
        registry.check_supertypes()?;
        registry.check_cycles()?;
        registry.check_properties()?;

        debug!("type registry: {} types", registry.types.len());
        Ok(registry)
    }

    /// Parse a JSON array of type definitions.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let types: Vec<TypeDef> =
            serde_json::from_str(json).map_err(|e| RegistryError::Parse(e.to_string()))?;
        Self::new(types)
    }

    pub fn to_json(&self) -> Result<String, RegistryError> {
        serde_json::to_string_pretty(&self.types).map_err(|e| RegistryError::Parse(e.to_string()))
    }

    fn check_supertypes(&self) -> Result<(), RegistryError> {
        for def in &self.types {
            let Some(super_name) = &def.super_type else {
                continue;
            };
            let super_def = self.get(super_name).ok_or_else(|| RegistryError::UnknownSuperType {
                type_name: def.name.clone(),
                super_type: super_name.clone(),
            })?;
            if super_def.category != def.category {
                return Err(RegistryError::CategoryMismatch {
                    type_name: def.name.clone(),
                    category: def.category,
                    super_type: super_def.name.clone(),
                    super_category: super_def.category,
                });
            }
        }
        Ok(())
    }

    fn check_cycles(&self) -> Result<(), RegistryError> {
        for def in &self.types {
            let mut seen = HashSet::new();
            let mut current = def.super_type.as_deref();
            while let Some(name) = current {
                if name == def.name || !seen.insert(name) {
                    return Err(RegistryError::Cycle(def.name.clone()));
                }
                current = self.get(name).and_then(|d| d.super_type.as_deref());
            }
        }
        Ok(())
    }

    fn check_properties(&self) -> Result<(), RegistryError> {
        for def in &self.types {
            let mut names = HashSet::new();
            for ancestor in self.ancestors(&def.name) {
                for p in &ancestor.properties {
                    names.insert(p.name.as_str());
                }
            }
            for p in &def.properties {
                if !names.insert(p.name.as_str()) {
                    return Err(RegistryError::DuplicateProperty {
                        type_name: def.name.clone(),
                        property: p.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Get a type by name.
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All types in definition order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.iter()
    }

    /// All types of one category, in definition order.
    pub fn types_of(&self, category: TypeCategory) -> impl Iterator<Item = &TypeDef> {
        self.types.iter().filter(move |t| t.category == category)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Supertypes of `name`, nearest first. Empty for unknown or root types.
    pub fn ancestors(&self, name: &str) -> Vec<&TypeDef> {
        let mut result = Vec::new();
        let mut current = self.get(name).and_then(|d| d.super_type.as_deref());
        while let Some(super_name) = current {
            let Some(def) = self.get(super_name) else {
                break;
            };
            // Guard against cycles in registries that bypassed `new`.
            if result.len() > self.types.len() {
                break;
            }
            result.push(def);
            current = def.super_type.as_deref();
        }
        result
    }

    /// `name` followed by its supertypes, most specific first.
    pub fn lineage(&self, name: &str) -> Vec<&str> {
        let mut result = vec![];
        if let Some(def) = self.get(name) {
            result.push(def.name.as_str());
            result.extend(self.ancestors(name).into_iter().map(|d| d.name.as_str()));
        }
        result
    }

    /// True if `name` is `candidate` or one of its subtypes.
    pub fn is_type_of(&self, name: &str, candidate: &str) -> bool {
        self.lineage(name).contains(&candidate)
    }

    /// Declared plus inherited properties, root-most type first.
    pub fn all_properties(&self, name: &str) -> Vec<&PropertyDef> {
        let mut chain = self.lineage(name);
        chain.reverse();
        chain
            .into_iter()
            .filter_map(|n| self.get(n))
            .flat_map(|d| d.properties.iter())
            .collect()
    }

    /// Find a declared or inherited property.
    pub fn property(&self, type_name: &str, property: &str) -> Option<&PropertyDef> {
        self.all_properties(type_name)
            .into_iter()
            .find(|p| p.name == property)
    }

    /// Direct subtypes of `name`.
    pub fn subtypes(&self, name: &str) -> Vec<&TypeDef> {
        self.types
            .iter()
            .filter(|t| t.super_type.as_deref() == Some(name))
            .collect()
    }

    /// Stamp an instance type with its supertypes. `None` for unknown types.
    pub fn element_type(&self, name: &str) -> Option<ElementType> {
        let def = self.get(name)?;
        Some(ElementType::with_supertypes(
            def.name.clone(),
            self.ancestors(name).into_iter().map(|d| d.name.clone()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyType;

    fn sample() -> TypeRegistry {
        TypeRegistry::new(vec![
            TypeDef::entity("OpenMetadataRoot"),
            TypeDef::entity("Referenceable")
                .extends("OpenMetadataRoot")
                .property("qualifiedName", PropertyType::String),
            TypeDef::entity("SchemaElement")
                .extends("Referenceable")
                .property("isDeprecated", PropertyType::Boolean),
            TypeDef::entity("SchemaAttribute")
                .extends("SchemaElement")
                .property("minCardinality", PropertyType::Int),
            TypeDef::classification("Anchors").property("anchorGUID", PropertyType::String),
        ])
        .unwrap()
    }

    #[test]
    fn lineage_nearest_first() {
        let r = sample();
        assert_eq!(
            r.lineage("SchemaAttribute"),
            vec!["SchemaAttribute", "SchemaElement", "Referenceable", "OpenMetadataRoot"]
        );
        assert!(r.lineage("Unknown").is_empty());
        assert!(r.ancestors("OpenMetadataRoot").is_empty());
    }

    #[test]
    fn is_type_of() {
        let r = sample();
        assert!(r.is_type_of("SchemaAttribute", "Referenceable"));
        assert!(r.is_type_of("SchemaAttribute", "SchemaAttribute"));
        assert!(!r.is_type_of("Referenceable", "SchemaAttribute"));
        assert!(!r.is_type_of("Anchors", "Referenceable"));
    }

    #[test]
    fn all_properties_root_first() {
        let r = sample();
        let names: Vec<&str> = r
            .all_properties("SchemaAttribute")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["qualifiedName", "isDeprecated", "minCardinality"]);
        assert!(r.property("SchemaAttribute", "qualifiedName").is_some());
        assert!(r.property("Referenceable", "minCardinality").is_none());
    }

    #[test]
    fn element_type_stamp() {
        let r = sample();
        let et = r.element_type("SchemaAttribute").unwrap();
        assert_eq!(et.type_name, "SchemaAttribute");
        assert_eq!(
            et.super_type_names,
            vec!["SchemaElement", "Referenceable", "OpenMetadataRoot"]
        );
        assert!(et.is_type_of("Referenceable"));
        assert!(!et.is_type_of("Asset"));
        assert!(r.element_type("Nope").is_none());
    }

    #[test]
    fn subtypes() {
        let r = sample();
        let subs: Vec<&str> = r.subtypes("Referenceable").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(subs, vec!["SchemaElement"]);
    }

    #[test]
    fn rejects_duplicate_type() {
        let err = TypeRegistry::new(vec![TypeDef::entity("A"), TypeDef::entity("A")]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateType("A".into()));
    }

    #[test]
    fn rejects_unknown_supertype() {
        let err = TypeRegistry::new(vec![TypeDef::entity("A").extends("B")]).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownSuperType { .. }));
    }

    #[test]
    fn rejects_category_mismatch() {
        let err = TypeRegistry::new(vec![
            TypeDef::entity("A"),
            TypeDef::classification("B").extends("A"),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::CategoryMismatch { .. }));
    }

    #[test]
    fn rejects_cycle() {
        let err = TypeRegistry::new(vec![
            TypeDef::entity("A").extends("B"),
            TypeDef::entity("B").extends("A"),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::Cycle(_)));
    }

    #[test]
    fn rejects_inherited_redeclaration() {
        let err = TypeRegistry::new(vec![
            TypeDef::entity("A").property("name", PropertyType::String),
            TypeDef::entity("B").extends("A").property("name", PropertyType::String),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateProperty {
                type_name: "B".into(),
                property: "name".into(),
            }
        );
    }

    #[test]
    fn json_roundtrip() {
        let r = sample();
        let json = r.to_json().unwrap();
        let back = TypeRegistry::from_json(&json).unwrap();
        assert_eq!(back.len(), r.len());
        assert_eq!(back.lineage("SchemaAttribute"), r.lineage("SchemaAttribute"));
    }

    #[test]
    fn from_json_parse_error() {
        let err = TypeRegistry::from_json("{not json").unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }
}
