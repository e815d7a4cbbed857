//! Relationship beans.

use openmeta_ir::{PropertyType, TypeCategory};
use openmeta_props::InstanceProperties;
use serde::{Deserialize, Serialize};

use crate::bean::Bean;
use crate::beans::relationship::{
    ControlFlowProperties, DataFlowProperties, LineageRelationshipProperties,
    ProcessCallProperties, ResourceListProperties, SemanticAssignmentProperties,
    SolutionLinkingWireProperties, SpecificationPropertyAssignmentProperties,
};
use crate::selector::{Shape, ShapeRow, ShapeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipShape {
    Relationship,
    LineageRelationship,
    DataFlow,
    ControlFlow,
    ProcessCall,
    SemanticAssignment,
    ResourceList,
    SolutionLinkingWire,
    SpecificationPropertyAssignment,
}

static RELATIONSHIP_SHAPES: ShapeTable<RelationshipShape> = {
    use RelationshipShape::*;
    ShapeTable {
        generic: Relationship,
        generic_type: "Relationship",
        rows: &[
            ShapeRow::new(LineageRelationship, "LineageRelationship", None),
            ShapeRow::new(DataFlow, "DataFlow", Some(LineageRelationship)),
            ShapeRow::new(ControlFlow, "ControlFlow", Some(LineageRelationship)),
            ShapeRow::new(ProcessCall, "ProcessCall", Some(LineageRelationship)),
            ShapeRow::new(SemanticAssignment, "SemanticAssignment", None),
            ShapeRow::new(ResourceList, "ResourceList", None),
            ShapeRow::new(SolutionLinkingWire, "SolutionLinkingWire", None),
            ShapeRow::new(
                SpecificationPropertyAssignment,
                "SpecificationPropertyAssignment",
                None,
            ),
        ],
    }
};

/// Relationship properties, one variant per shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all_fields = "camelCase")]
pub enum RelationshipProperties {
    Relationship,
    LineageRelationship {
        lineage: LineageRelationshipProperties,
    },
    DataFlow {
        lineage: LineageRelationshipProperties,
        data_flow: DataFlowProperties,
    },
    ControlFlow {
        lineage: LineageRelationshipProperties,
        control_flow: ControlFlowProperties,
    },
    ProcessCall {
        lineage: LineageRelationshipProperties,
        process_call: ProcessCallProperties,
    },
    SemanticAssignment {
        semantic_assignment: SemanticAssignmentProperties,
    },
    ResourceList {
        resource_list: ResourceListProperties,
    },
    SolutionLinkingWire {
        solution_linking_wire: SolutionLinkingWireProperties,
    },
    SpecificationPropertyAssignment {
        specification_property_assignment: SpecificationPropertyAssignmentProperties,
    },
}

impl RelationshipProperties {
    pub fn shape(&self) -> RelationshipShape {
        match self {
            Self::Relationship => RelationshipShape::Relationship,
            Self::LineageRelationship { .. } => RelationshipShape::LineageRelationship,
            Self::DataFlow { .. } => RelationshipShape::DataFlow,
            Self::ControlFlow { .. } => RelationshipShape::ControlFlow,
            Self::ProcessCall { .. } => RelationshipShape::ProcessCall,
            Self::SemanticAssignment { .. } => RelationshipShape::SemanticAssignment,
            Self::ResourceList { .. } => RelationshipShape::ResourceList,
            Self::SolutionLinkingWire { .. } => RelationshipShape::SolutionLinkingWire,
            Self::SpecificationPropertyAssignment { .. } => {
                RelationshipShape::SpecificationPropertyAssignment
            }
        }
    }

    pub fn lineage(&self) -> Option<&LineageRelationshipProperties> {
        match self {
            Self::LineageRelationship { lineage }
            | Self::DataFlow { lineage, .. }
            | Self::ControlFlow { lineage, .. }
            | Self::ProcessCall { lineage, .. } => Some(lineage),
            _ => None,
        }
    }
}

impl Shape for RelationshipShape {
    type Properties = RelationshipProperties;

    const CATEGORY: TypeCategory = TypeCategory::Relationship;

    fn table() -> &'static ShapeTable<Self> {
        &RELATIONSHIP_SHAPES
    }

    fn own_property_schema(self) -> Vec<(&'static str, PropertyType)> {
        match self {
            Self::Relationship => Vec::new(),
            Self::LineageRelationship => LineageRelationshipProperties::property_schema(),
            Self::DataFlow => DataFlowProperties::property_schema(),
            Self::ControlFlow => ControlFlowProperties::property_schema(),
            Self::ProcessCall => ProcessCallProperties::property_schema(),
            Self::SemanticAssignment => SemanticAssignmentProperties::property_schema(),
            Self::ResourceList => ResourceListProperties::property_schema(),
            Self::SolutionLinkingWire => SolutionLinkingWireProperties::property_schema(),
            Self::SpecificationPropertyAssignment => {
                SpecificationPropertyAssignmentProperties::property_schema()
            }
        }
    }

    fn remove_properties(self, props: &mut InstanceProperties) -> RelationshipProperties {
        use RelationshipProperties as P;
        match self {
            Self::Relationship => P::Relationship,
            Self::LineageRelationship => P::LineageRelationship {
                lineage: LineageRelationshipProperties::remove_from(props),
            },
            Self::DataFlow => P::DataFlow {
                lineage: LineageRelationshipProperties::remove_from(props),
                data_flow: DataFlowProperties::remove_from(props),
            },
            Self::ControlFlow => P::ControlFlow {
                lineage: LineageRelationshipProperties::remove_from(props),
                control_flow: ControlFlowProperties::remove_from(props),
            },
            Self::ProcessCall => P::ProcessCall {
                lineage: LineageRelationshipProperties::remove_from(props),
                process_call: ProcessCallProperties::remove_from(props),
            },
            Self::SemanticAssignment => P::SemanticAssignment {
                semantic_assignment: SemanticAssignmentProperties::remove_from(props),
            },
            Self::ResourceList => P::ResourceList {
                resource_list: ResourceListProperties::remove_from(props),
            },
            Self::SolutionLinkingWire => P::SolutionLinkingWire {
                solution_linking_wire: SolutionLinkingWireProperties::remove_from(props),
            },
            Self::SpecificationPropertyAssignment => P::SpecificationPropertyAssignment {
                specification_property_assignment:
                    SpecificationPropertyAssignmentProperties::remove_from(props),
            },
        }
    }
}

/// A converted relationship with the GUIDs of both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipBean {
    #[serde(flatten)]
    pub bean: Bean<RelationshipProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end1_guid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end2_guid: Option<String>,
}

impl RelationshipBean {
    pub fn shape(&self) -> RelationshipShape {
        self.bean.properties.shape()
    }
}
