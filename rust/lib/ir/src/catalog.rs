//! Built-in open metadata type catalog.
//!
//! Covers every type the converter has a bean shape for, plus a few
//! shape-less types (`ActorProfile`, `Team`) that resolve to their nearest
//! shaped ancestor.

use crate::error::RegistryError;
use crate::registry::TypeRegistry;
use crate::typedef::TypeDef;
use crate::types::PropertyType;
use crate::types::PropertyType::{Boolean, Date, Int, Long};

const STRING: PropertyType = PropertyType::String;

fn enumeration(name: &str) -> PropertyType {
    PropertyType::Enum(name.to_string())
}

fn map_of(inner: PropertyType) -> PropertyType {
    PropertyType::Map(Box::new(inner))
}

/// The built-in catalog as a validated registry.
pub fn open_metadata_types() -> Result<TypeRegistry, RegistryError> {
    let mut types = entity_types();
    types.extend(classification_types());
    types.extend(relationship_types());
    TypeRegistry::new(types)
}

pub fn entity_types() -> Vec<TypeDef> {
    vec![
        TypeDef::entity("OpenMetadataRoot").doc("Root of every entity type."),
        TypeDef::entity("Referenceable")
            .extends("OpenMetadataRoot")
            .property("qualifiedName", STRING)
            .property("displayName", STRING)
            .property("description", STRING)
            .property("additionalProperties", PropertyType::string_map()),
        // ── Assets ──
        TypeDef::entity("Asset")
            .extends("Referenceable")
            .property("deployedImplementationType", STRING)
            .property("resourceName", STRING),
        TypeDef::entity("DataSet")
            .extends("Asset")
            .property("formula", STRING)
            .property("formulaType", STRING),
        TypeDef::entity("DataStore")
            .extends("Asset")
            .property("pathName", STRING)
            .property("storeCreateTime", Date)
            .property("storeUpdateTime", Date)
            .property("encodingType", STRING)
            .property("encodingLanguage", STRING)
            .property("encodingDescription", STRING)
            .property("encodingProperties", PropertyType::string_map()),
        TypeDef::entity("DataFile")
            .extends("DataStore")
            .property("fileName", STRING)
            .property("fileType", STRING)
            .property("fileExtension", STRING)
            .property("fileSize", Long),
        TypeDef::entity("Process")
            .extends("Asset")
            .property("formula", STRING)
            .property("formulaType", STRING)
            .property("implementationLanguage", STRING),
        // ── Schemas ──
        TypeDef::entity("SchemaElement")
            .extends("Referenceable")
            .property("isDeprecated", Boolean),
        TypeDef::entity("SchemaType")
            .extends("SchemaElement")
            .property("versionNumber", STRING)
            .property("author", STRING)
            .property("usage", STRING)
            .property("encodingStandard", STRING)
            .property("namespace", STRING),
        TypeDef::entity("PrimitiveSchemaType")
            .extends("SchemaType")
            .property("dataType", STRING)
            .property("defaultValue", STRING),
        TypeDef::entity("LiteralSchemaType")
            .extends("SchemaType")
            .property("dataType", STRING)
            .property("fixedValue", STRING),
        TypeDef::entity("SchemaAttribute")
            .extends("SchemaElement")
            .property("position", Int)
            .property("minCardinality", Int)
            .property("maxCardinality", Int)
            .property("allowsDuplicateValues", Boolean)
            .property("orderedValues", Boolean)
            .property("sortOrder", enumeration("DataItemSortOrder"))
            .property("minimumLength", Int)
            .property("length", Int)
            .property("precision", Int)
            .property("isNullable", Boolean)
            .property("defaultValueOverride", STRING)
            .property("nativeClass", STRING)
            .property("aliases", PropertyType::string_array()),
        // ── Glossary ──
        TypeDef::entity("Glossary")
            .extends("Referenceable")
            .property("language", STRING)
            .property("usage", STRING),
        TypeDef::entity("GlossaryTerm")
            .extends("Referenceable")
            .property("summary", STRING)
            .property("examples", STRING)
            .property("abbreviation", STRING)
            .property("usage", STRING),
        // ── Actors ──
        TypeDef::entity("ActorProfile").extends("Referenceable"),
        TypeDef::entity("Team")
            .extends("ActorProfile")
            .property("teamType", STRING),
        TypeDef::entity("Person")
            .extends("ActorProfile")
            .property("fullName", STRING)
            .property("jobTitle", STRING)
            .property("courtesyTitle", STRING)
            .property("initials", STRING)
            .property("givenNames", STRING)
            .property("surname", STRING)
            .property("pronouns", STRING)
            .property("employeeNumber", STRING)
            .property("employeeType", STRING)
            .property("preferredLanguage", STRING)
            .property("residentCountry", STRING)
            .property("isPublic", Boolean),
        // ── Reference data and solutions ──
        TypeDef::entity("ValidValueDefinition")
            .extends("Referenceable")
            .property("category", STRING)
            .property("preferredValue", STRING)
            .property("dataType", STRING)
            .property("scope", STRING)
            .property("isCaseSensitive", Boolean),
        TypeDef::entity("SolutionPort")
            .extends("Referenceable")
            .property("direction", enumeration("SolutionPortDirection")),
        TypeDef::entity("Location")
            .extends("Referenceable")
            .property("identifier", STRING),
        // ── Annotations ──
        TypeDef::entity("Annotation")
            .extends("OpenMetadataRoot")
            .property("annotationType", STRING)
            .property("summary", STRING)
            .property("confidenceLevel", Int)
            .property("expression", STRING)
            .property("explanation", STRING)
            .property("analysisStep", STRING)
            .property("jsonProperties", STRING),
        TypeDef::entity("ResourceProfileAnnotation")
            .extends("Annotation")
            .property("length", Int)
            .property("inferredDataType", STRING)
            .property("inferredFormat", STRING)
            .property("inferredLength", Int)
            .property("inferredPrecision", Int)
            .property("inferredScale", Int)
            .property("profileProperties", PropertyType::string_map())
            .property("profileFlags", map_of(Boolean))
            .property("profileCounts", map_of(Long))
            .property("profileDoubles", map_of(PropertyType::Double))
            .property("profileDates", map_of(Date))
            .property("valueList", PropertyType::string_array())
            .property("valueCount", map_of(Int))
            .property("valueRangeFrom", STRING)
            .property("valueRangeTo", STRING)
            .property("averageValue", STRING),
    ]
}

pub fn classification_types() -> Vec<TypeDef> {
    vec![
        TypeDef::classification("GovernanceClassification")
            .property("status", enumeration("GovernanceClassificationStatus"))
            .property("confidence", Int)
            .property("steward", STRING)
            .property("stewardTypeName", STRING)
            .property("stewardPropertyName", STRING)
            .property("source", STRING)
            .property("notes", STRING)
            .property("levelIdentifier", Int),
        TypeDef::classification("Confidentiality").extends("GovernanceClassification"),
        TypeDef::classification("Criticality").extends("GovernanceClassification"),
        TypeDef::classification("Impact").extends("GovernanceClassification"),
        TypeDef::classification("Confidence").extends("GovernanceClassification"),
        TypeDef::classification("Retention")
            .extends("GovernanceClassification")
            .property("associatedGUID", STRING)
            .property("archiveAfter", Date)
            .property("deleteAfter", Date),
        TypeDef::classification("FixedLocation")
            .property("coordinates", STRING)
            .property("mapProjection", STRING)
            .property("postalAddress", STRING)
            .property("timezone", STRING),
        TypeDef::classification("Anchors")
            .property("anchorGUID", STRING)
            .property("anchorTypeName", STRING)
            .property("anchorDomainName", STRING)
            .property("anchorScopeGUID", STRING),
        TypeDef::classification("Template")
            .property("name", STRING)
            .property("description", STRING)
            .property("versionIdentifier", STRING)
            .property("additionalProperties", PropertyType::string_map()),
        TypeDef::classification("Memento")
            .property("archiveDate", Date)
            .property("archiveUser", STRING)
            .property("archiveProcess", STRING)
            .property("archiveService", STRING)
            .property("archiveMethod", STRING)
            .property("archiveProperties", PropertyType::string_map()),
    ]
}

pub fn relationship_types() -> Vec<TypeDef> {
    vec![
        TypeDef::relationship("LineageRelationship")
            .property("iscQualifiedName", STRING)
            .property("label", STRING)
            .property("description", STRING),
        TypeDef::relationship("DataFlow")
            .extends("LineageRelationship")
            .property("formula", STRING)
            .property("formulaType", STRING),
        TypeDef::relationship("ControlFlow")
            .extends("LineageRelationship")
            .property("guard", STRING)
            .property("mandatoryGuard", Boolean),
        TypeDef::relationship("ProcessCall")
            .extends("LineageRelationship")
            .property("formula", STRING)
            .property("formulaType", STRING)
            .property("lineNumber", Int),
        TypeDef::relationship("SemanticAssignment")
            .property("expression", STRING)
            .property("description", STRING)
            .property("status", enumeration("TermAssignmentStatus"))
            .property("confidence", Int)
            .property("createdBy", STRING)
            .property("steward", STRING)
            .property("stewardTypeName", STRING)
            .property("stewardPropertyName", STRING)
            .property("source", STRING)
            .property("notes", STRING),
        TypeDef::relationship("ResourceList")
            .property("resourceUse", STRING)
            .property("resourceUseDescription", STRING)
            .property("resourceUseProperties", PropertyType::string_map())
            .property("watchResource", Boolean),
        TypeDef::relationship("SolutionLinkingWire")
            .property("label", STRING)
            .property("description", STRING)
            .property("informationSupplyChainSegmentGUIDs", PropertyType::string_array()),
        TypeDef::relationship("SpecificationPropertyAssignment")
            .property("propertyName", enumeration("SpecificationPropertyType")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeDescriptor;
    use crate::types::TypeCategory;

    #[test]
    fn catalog_is_valid() {
        let registry = open_metadata_types().unwrap();
        assert!(registry.len() > 30);
        assert_eq!(registry.types_of(TypeCategory::Relationship).count(), 8);
    }

    #[test]
    fn deep_lineage() {
        let registry = open_metadata_types().unwrap();
        assert_eq!(
            registry.lineage("DataFile"),
            vec!["DataFile", "DataStore", "Asset", "Referenceable", "OpenMetadataRoot"]
        );
        let team = registry.element_type("Team").unwrap();
        assert!(team.is_type_of("ActorProfile"));
        assert!(team.is_type_of("Referenceable"));
    }

    #[test]
    fn inherited_referenceable_properties() {
        let registry = open_metadata_types().unwrap();
        assert!(registry.property("SchemaAttribute", "qualifiedName").is_some());
        assert!(registry.property("ResourceProfileAnnotation", "qualifiedName").is_none());
        assert_eq!(
            registry.property("ResourceProfileAnnotation", "profileCounts").unwrap().ty,
            map_of(Long)
        );
    }
}
