//! Specification-property projection.
//!
//! A `SpecificationPropertyAssignment` relationship links an element to a
//! child whose `additionalProperties` describe one entry of the parent's
//! specification: a request parameter, a template, a guard and so on. The
//! relationship's `propertyName` says which kind. Each kind claims a fixed
//! set of keys; every other key is kept in `other_property_values`.
//! Primitive members are read as text; nested arrays and maps are kept as
//! JSON text.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use openmeta_ir::TypeDescriptor;
use openmeta_props::{InstanceProperties, PropertyValue};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::beans::referenceable::ADDITIONAL_PROPERTIES;
use crate::beans::relationship::SPECIFICATION_PROPERTY_NAME;
use crate::element::RelatedMetadataElement;
use crate::enums::SpecificationPropertyType;

pub const SPECIFICATION_PROPERTY_ASSIGNMENT: &str = "SpecificationPropertyAssignment";

/// Parameters, placeholders, replacement attributes and configuration
/// properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpecification {
    pub name: Option<String>,
    pub description: Option<String>,
    pub data_type: Option<String>,
    pub example: Option<String>,
    pub required: bool,
    pub other_property_values: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSpecification {
    pub name: Option<String>,
    pub description: Option<String>,
    pub type_name: Option<String>,
    pub required: bool,
    pub other_property_values: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTypeSpecification {
    pub name: Option<String>,
    pub description: Option<String>,
    pub other_property_values: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionTargetSpecification {
    pub name: Option<String>,
    pub description: Option<String>,
    pub type_name: Option<String>,
    pub deployed_implementation_type: Option<String>,
    pub required: bool,
    pub other_property_values: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStepSpecification {
    pub name: Option<String>,
    pub description: Option<String>,
    pub other_property_values: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardSpecification {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completion_status: Option<String>,
    pub other_property_values: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationTypeSpecification {
    pub name: Option<String>,
    pub description: Option<String>,
    pub analysis_step_name: Option<String>,
    pub type_name: Option<String>,
    pub other_property_values: IndexMap<String, String>,
}

/// One projected specification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SpecificationProperty {
    Parameter(ParameterSpecification),
    Template(TemplateSpecification),
    RequestType(RequestTypeSpecification),
    ActionTarget(ActionTargetSpecification),
    AnalysisStep(AnalysisStepSpecification),
    Guard(GuardSpecification),
    AnnotationType(AnnotationTypeSpecification),
}

impl SpecificationProperty {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Parameter(p) => p.name.as_deref(),
            Self::Template(p) => p.name.as_deref(),
            Self::RequestType(p) => p.name.as_deref(),
            Self::ActionTarget(p) => p.name.as_deref(),
            Self::AnalysisStep(p) => p.name.as_deref(),
            Self::Guard(p) => p.name.as_deref(),
            Self::AnnotationType(p) => p.name.as_deref(),
        }
    }

    pub fn other_property_values(&self) -> &IndexMap<String, String> {
        match self {
            Self::Parameter(p) => &p.other_property_values,
            Self::Template(p) => &p.other_property_values,
            Self::RequestType(p) => &p.other_property_values,
            Self::ActionTarget(p) => &p.other_property_values,
            Self::AnalysisStep(p) => &p.other_property_values,
            Self::Guard(p) => &p.other_property_values,
            Self::AnnotationType(p) => &p.other_property_values,
        }
    }
}

/// Strict flag rule: `true` only for the literal `true`, ignoring ASCII
/// case. `yes`, `1`, padded or malformed values are all `false`.
pub fn parse_required_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Project related elements into specification entries, grouped by kind
/// and kept in input order within a kind.
pub fn project_specification(
    related: &[RelatedMetadataElement],
) -> BTreeMap<SpecificationPropertyType, Vec<SpecificationProperty>> {
    let mut projected: BTreeMap<SpecificationPropertyType, Vec<SpecificationProperty>> =
        BTreeMap::new();

    for entry in related {
        let relationship = &entry.relationship;
        if !relationship.is_type_of(SPECIFICATION_PROPERTY_ASSIGNMENT) {
            debug!(
                "skipping '{}' relationship to '{}': not a specification property",
                relationship.type_name(),
                entry.element.type_name()
            );
            continue;
        }

        let Some(kind) = SPECIFICATION_PROPERTY_NAME.get(relationship.properties.as_ref()) else {
            debug!(
                "skipping specification property of '{}': missing or unknown propertyName",
                entry.element.type_name()
            );
            continue;
        };

        let values = additional_properties(entry.element.properties.as_ref());
        projected.entry(kind).or_default().push(project(kind, values));
    }

    projected
}

/// Read `additionalProperties` as text, member by member.
fn additional_properties(props: Option<&InstanceProperties>) -> IndexMap<String, String> {
    let Some(raw) = props.and_then(|p| p.get_map(ADDITIONAL_PROPERTIES.name())) else {
        return IndexMap::new();
    };
    raw.into_iter()
        .map(|(key, value)| {
            let text = value.render().unwrap_or_else(|| {
                debug!("additional property '{}' is a {}; kept as JSON", key, value.type_label());
                to_json(&value).to_string()
            });
            (key, text)
        })
        .collect()
}

fn to_json(value: &PropertyValue) -> JsonValue {
    match value {
        PropertyValue::Boolean(v) => JsonValue::Bool(*v),
        PropertyValue::Int(v) => JsonValue::from(*v),
        PropertyValue::Long(v) => JsonValue::from(*v),
        PropertyValue::Double(v) => JsonValue::from(*v),
        PropertyValue::Array(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        PropertyValue::Map(entries) => JsonValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
        other => JsonValue::String(other.render().unwrap_or_default()),
    }
}

/// Build one entry of `kind` from the target's additional properties.
pub fn project(
    kind: SpecificationPropertyType,
    mut values: IndexMap<String, String>,
) -> SpecificationProperty {
    use SpecificationPropertyType as K;

    let mut claim = |key: &str| values.shift_remove(key);
    let property = match kind {
        K::PlaceholderProperty
        | K::ReplacementAttribute
        | K::SupportedConfigurationProperty
        | K::SupportedRequestParameter
        | K::ProducedRequestParameter => SpecificationProperty::Parameter(ParameterSpecification {
            name: claim("name"),
            description: claim("description"),
            data_type: claim("dataType"),
            example: claim("example"),
            required: parse_required_flag(claim("required").as_deref()),
            other_property_values: IndexMap::new(),
        }),
        K::SupportedTemplate => SpecificationProperty::Template(TemplateSpecification {
            name: claim("name"),
            description: claim("description"),
            type_name: claim("typeName"),
            required: parse_required_flag(claim("required").as_deref()),
            other_property_values: IndexMap::new(),
        }),
        K::SupportedRequestType => SpecificationProperty::RequestType(RequestTypeSpecification {
            name: claim("name"),
            description: claim("description"),
            other_property_values: IndexMap::new(),
        }),
        K::SupportedActionTarget | K::ProducedActionTarget => {
            SpecificationProperty::ActionTarget(ActionTargetSpecification {
                name: claim("name"),
                description: claim("description"),
                type_name: claim("typeName"),
                deployed_implementation_type: claim("deployedImplementationType"),
                required: parse_required_flag(claim("required").as_deref()),
                other_property_values: IndexMap::new(),
            })
        }
        K::SupportedAnalysisStep => SpecificationProperty::AnalysisStep(AnalysisStepSpecification {
            name: claim("name"),
            description: claim("description"),
            other_property_values: IndexMap::new(),
        }),
        K::ProducedGuard => SpecificationProperty::Guard(GuardSpecification {
            name: claim("name"),
            description: claim("description"),
            completion_status: claim("completionStatus"),
            other_property_values: IndexMap::new(),
        }),
        K::ProducedAnnotationType => {
            SpecificationProperty::AnnotationType(AnnotationTypeSpecification {
                name: claim("name"),
                description: claim("description"),
                analysis_step_name: claim("analysisStepName"),
                type_name: claim("typeName"),
                other_property_values: IndexMap::new(),
            })
        }
    };

    with_other_values(property, values)
}

fn with_other_values(
    mut property: SpecificationProperty,
    values: IndexMap<String, String>,
) -> SpecificationProperty {
    let other = match &mut property {
        SpecificationProperty::Parameter(p) => &mut p.other_property_values,
        SpecificationProperty::Template(p) => &mut p.other_property_values,
        SpecificationProperty::RequestType(p) => &mut p.other_property_values,
        SpecificationProperty::ActionTarget(p) => &mut p.other_property_values,
        SpecificationProperty::AnalysisStep(p) => &mut p.other_property_values,
        SpecificationProperty::Guard(p) => &mut p.other_property_values,
        SpecificationProperty::AnnotationType(p) => &mut p.other_property_values,
    };
    *other = values;
    property
}
