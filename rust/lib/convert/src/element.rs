//! Instances handed to the converter by the metadata repository.
//!
//! Each carries an [`ElementType`] (type name plus supertypes) so shape
//! resolution needs no registry. Instances read from JSON may list only
//! the type name; `resolve_lineage` fills in the supertypes.

use chrono::{DateTime, Utc};
use openmeta_ir::{ElementType, TypeDescriptor, TypeRegistry};
use openmeta_props::InstanceProperties;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    pub element_type: ElementType,

    #[serde(default)]
    pub properties: Option<InstanceProperties>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<ElementClassification>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
}

impl MetadataElement {
    pub fn new(element_type: ElementType, properties: InstanceProperties) -> Self {
        Self {
            guid: None,
            element_type,
            properties: Some(properties),
            classifications: Vec::new(),
            effective_from: None,
            effective_to: None,
        }
    }

    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    pub fn with_classification(mut self, classification: ElementClassification) -> Self {
        self.classifications.push(classification);
        self
    }

    /// Fill in supertypes from the registry for this element and its
    /// classifications.
    pub fn resolve_lineage(&mut self, registry: &TypeRegistry) {
        resolve(&mut self.element_type, registry);
        for classification in &mut self.classifications {
            classification.resolve_lineage(registry);
        }
    }
}

impl TypeDescriptor for MetadataElement {
    fn type_name(&self) -> &str {
        self.element_type.type_name()
    }

    fn is_type_of(&self, candidate: &str) -> bool {
        self.element_type.is_type_of(candidate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementClassification {
    pub classification_type: ElementType,

    #[serde(default)]
    pub properties: Option<InstanceProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
}

impl ElementClassification {
    pub fn new(classification_type: ElementType, properties: InstanceProperties) -> Self {
        Self {
            classification_type,
            properties: Some(properties),
            effective_from: None,
            effective_to: None,
        }
    }

    pub fn resolve_lineage(&mut self, registry: &TypeRegistry) {
        resolve(&mut self.classification_type, registry);
    }
}

impl TypeDescriptor for ElementClassification {
    fn type_name(&self) -> &str {
        self.classification_type.type_name()
    }

    fn is_type_of(&self, candidate: &str) -> bool {
        self.classification_type.is_type_of(candidate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRelationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    pub relationship_type: ElementType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end1_guid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end2_guid: Option<String>,

    #[serde(default)]
    pub properties: Option<InstanceProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
}

impl MetadataRelationship {
    pub fn new(relationship_type: ElementType, properties: InstanceProperties) -> Self {
        Self {
            guid: None,
            relationship_type,
            end1_guid: None,
            end2_guid: None,
            properties: Some(properties),
            effective_from: None,
            effective_to: None,
        }
    }

    pub fn between(mut self, end1_guid: impl Into<String>, end2_guid: impl Into<String>) -> Self {
        self.end1_guid = Some(end1_guid.into());
        self.end2_guid = Some(end2_guid.into());
        self
    }

    pub fn resolve_lineage(&mut self, registry: &TypeRegistry) {
        resolve(&mut self.relationship_type, registry);
    }
}

impl TypeDescriptor for MetadataRelationship {
    fn type_name(&self) -> &str {
        self.relationship_type.type_name()
    }

    fn is_type_of(&self, candidate: &str) -> bool {
        self.relationship_type.is_type_of(candidate)
    }
}

/// A relationship together with the element at its far end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedMetadataElement {
    pub relationship: MetadataRelationship,
    pub element: MetadataElement,
}

impl RelatedMetadataElement {
    pub fn resolve_lineage(&mut self, registry: &TypeRegistry) {
        self.relationship.resolve_lineage(registry);
        self.element.resolve_lineage(registry);
    }
}

// Explicit supertypes win; unknown types are left as they are.
fn resolve(element_type: &mut ElementType, registry: &TypeRegistry) {
    if !element_type.super_type_names.is_empty() {
        return;
    }
    if let Some(known) = registry.element_type(&element_type.type_name) {
        *element_type = known;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_ir::catalog;

    #[test]
    fn lineage_filled_from_registry() {
        let registry = catalog::open_metadata_types().unwrap();
        let mut element = MetadataElement::new(ElementType::named("DataFile"), InstanceProperties::new())
            .with_classification(ElementClassification::new(
                ElementType::named("Confidentiality"),
                InstanceProperties::new(),
            ));
        assert!(!element.is_type_of("Asset"));

        element.resolve_lineage(&registry);
        assert!(element.is_type_of("Asset"));
        assert!(element.classifications[0].is_type_of("GovernanceClassification"));
    }

    #[test]
    fn unknown_type_untouched() {
        let registry = catalog::open_metadata_types().unwrap();
        let mut rel = MetadataRelationship::new(ElementType::named("Mystery"), InstanceProperties::new());
        rel.resolve_lineage(&registry);
        assert_eq!(rel.relationship_type, ElementType::named("Mystery"));
    }

    #[test]
    fn json_with_absent_properties() {
        let element: MetadataElement =
            serde_json::from_str(r#"{"elementType": {"typeName": "Asset"}}"#).unwrap();
        assert_eq!(element.type_name(), "Asset");
        assert!(element.properties.is_none());
        assert!(element.classifications.is_empty());
    }
}
