//! Relationship property sets.

use indexmap::IndexMap;
use openmeta_props::{Accessor, EnumAccessor};

use super::annotation::EXPRESSION;
use super::referenceable::{
    CONFIDENCE, DESCRIPTION, FORMULA, FORMULA_TYPE, LABEL, NOTES, SOURCE, STEWARD,
    STEWARD_PROPERTY_NAME, STEWARD_TYPE_NAME,
};
use crate::enums::{SpecificationPropertyType, TermAssignmentStatus};

pub const ISC_QUALIFIED_NAME: Accessor<Option<String>> = Accessor::optional("iscQualifiedName");

pub const GUARD: Accessor<Option<String>> = Accessor::optional("guard");
pub const MANDATORY_GUARD: Accessor<bool> = Accessor::new("mandatoryGuard", false);
pub const LINE_NUMBER: Accessor<i32> = Accessor::new("lineNumber", 0);

pub const TERM_ASSIGNMENT_STATUS: EnumAccessor<TermAssignmentStatus> = EnumAccessor::new("status");
pub const CREATED_BY: Accessor<Option<String>> = Accessor::optional("createdBy");

pub const RESOURCE_USE: Accessor<Option<String>> = Accessor::optional("resourceUse");
pub const RESOURCE_USE_DESCRIPTION: Accessor<Option<String>> =
    Accessor::optional("resourceUseDescription");
pub const RESOURCE_USE_PROPERTIES: Accessor<Option<IndexMap<String, String>>> =
    Accessor::optional("resourceUseProperties");
pub const WATCH_RESOURCE: Accessor<bool> = Accessor::new("watchResource", false);

pub const INFORMATION_SUPPLY_CHAIN_SEGMENT_GUIDS: Accessor<Option<Vec<String>>> =
    Accessor::optional("informationSupplyChainSegmentGUIDs");

/// Tag naming the role of a specification property assignment.
pub const SPECIFICATION_PROPERTY_NAME: EnumAccessor<SpecificationPropertyType> =
    EnumAccessor::new("propertyName");

property_set! {
    pub struct LineageRelationshipProperties {
        isc_qualified_name: Option<String> = ISC_QUALIFIED_NAME,
        label: Option<String> = LABEL,
        description: Option<String> = DESCRIPTION,
    }
}

property_set! {
    pub struct DataFlowProperties {
        formula: Option<String> = FORMULA,
        formula_type: Option<String> = FORMULA_TYPE,
    }
}

property_set! {
    pub struct ControlFlowProperties {
        guard: Option<String> = GUARD,
        mandatory_guard: bool = MANDATORY_GUARD,
    }
}

property_set! {
    pub struct ProcessCallProperties {
        formula: Option<String> = FORMULA,
        formula_type: Option<String> = FORMULA_TYPE,
        line_number: i32 = LINE_NUMBER,
    }
}

property_set! {
    pub struct SemanticAssignmentProperties {
        expression: Option<String> = EXPRESSION,
        description: Option<String> = DESCRIPTION,
        status: Option<TermAssignmentStatus> = TERM_ASSIGNMENT_STATUS,
        confidence: i32 = CONFIDENCE,
        created_by: Option<String> = CREATED_BY,
        steward: Option<String> = STEWARD,
        steward_type_name: Option<String> = STEWARD_TYPE_NAME,
        steward_property_name: Option<String> = STEWARD_PROPERTY_NAME,
        source: Option<String> = SOURCE,
        notes: Option<String> = NOTES,
    }
}

property_set! {
    pub struct ResourceListProperties {
        resource_use: Option<String> = RESOURCE_USE,
        resource_use_description: Option<String> = RESOURCE_USE_DESCRIPTION,
        resource_use_properties: Option<IndexMap<String, String>> = RESOURCE_USE_PROPERTIES,
        watch_resource: bool = WATCH_RESOURCE,
    }
}

property_set! {
    pub struct SolutionLinkingWireProperties {
        label: Option<String> = LABEL,
        description: Option<String> = DESCRIPTION,
        information_supply_chain_segment_guids: Option<Vec<String>> =
            INFORMATION_SUPPLY_CHAIN_SEGMENT_GUIDS,
    }
}

property_set! {
    pub struct SpecificationPropertyAssignmentProperties {
        property_name: Option<SpecificationPropertyType> = SPECIFICATION_PROPERTY_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_props::{InstanceProperties, PropertyValue};

    #[test]
    fn flags_default_off() {
        assert!(!ControlFlowProperties::default().mandatory_guard);
        assert!(!ResourceListProperties::default().watch_resource);
        assert_eq!(ProcessCallProperties::default().line_number, 0);
    }

    #[test]
    fn specification_tag_accepts_string_or_enum() {
        let props = InstanceProperties::new().with("propertyName", "supportedTemplates");
        assert_eq!(
            SPECIFICATION_PROPERTY_NAME.get(Some(&props)),
            Some(SpecificationPropertyType::SupportedTemplate)
        );
        let props = InstanceProperties::new()
            .with("propertyName", PropertyValue::Enum("producedGuards".into()));
        assert_eq!(
            SPECIFICATION_PROPERTY_NAME.get(Some(&props)),
            Some(SpecificationPropertyType::ProducedGuard)
        );
        assert_eq!(SPECIFICATION_PROPERTY_NAME.get(None), None);
    }
}
