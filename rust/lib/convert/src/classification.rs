//! Classification beans.

use openmeta_ir::{PropertyType, TypeCategory};
use openmeta_props::InstanceProperties;
use serde::{Deserialize, Serialize};

use crate::bean::Bean;
use crate::beans::classification::{
    AnchorsProperties, FixedLocationProperties, GovernanceClassificationProperties,
    MementoProperties, RetentionProperties, TemplateProperties,
};
use crate::selector::{Shape, ShapeRow, ShapeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationShape {
    Classification,
    GovernanceClassification,
    Confidentiality,
    Criticality,
    Impact,
    Confidence,
    Retention,
    FixedLocation,
    Anchors,
    Template,
    Memento,
}

static CLASSIFICATION_SHAPES: ShapeTable<ClassificationShape> = {
    use ClassificationShape::*;
    ShapeTable {
        generic: Classification,
        generic_type: "Classification",
        rows: &[
            ShapeRow::new(GovernanceClassification, "GovernanceClassification", None),
            ShapeRow::new(Confidentiality, "Confidentiality", Some(GovernanceClassification)),
            ShapeRow::new(Criticality, "Criticality", Some(GovernanceClassification)),
            ShapeRow::new(Impact, "Impact", Some(GovernanceClassification)),
            ShapeRow::new(Confidence, "Confidence", Some(GovernanceClassification)),
            ShapeRow::new(Retention, "Retention", Some(GovernanceClassification)),
            ShapeRow::new(FixedLocation, "FixedLocation", None),
            ShapeRow::new(Anchors, "Anchors", None),
            ShapeRow::new(Template, "Template", None),
            ShapeRow::new(Memento, "Memento", None),
        ],
    }
};

/// Classification properties, one variant per shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all_fields = "camelCase")]
pub enum ClassificationProperties {
    Classification,
    GovernanceClassification {
        governance: GovernanceClassificationProperties,
    },
    Confidentiality {
        governance: GovernanceClassificationProperties,
    },
    Criticality {
        governance: GovernanceClassificationProperties,
    },
    Impact {
        governance: GovernanceClassificationProperties,
    },
    Confidence {
        governance: GovernanceClassificationProperties,
    },
    Retention {
        governance: GovernanceClassificationProperties,
        retention: RetentionProperties,
    },
    FixedLocation {
        fixed_location: FixedLocationProperties,
    },
    Anchors {
        anchors: AnchorsProperties,
    },
    Template {
        template: TemplateProperties,
    },
    Memento {
        memento: MementoProperties,
    },
}

impl ClassificationProperties {
    pub fn shape(&self) -> ClassificationShape {
        match self {
            Self::Classification => ClassificationShape::Classification,
            Self::GovernanceClassification { .. } => ClassificationShape::GovernanceClassification,
            Self::Confidentiality { .. } => ClassificationShape::Confidentiality,
            Self::Criticality { .. } => ClassificationShape::Criticality,
            Self::Impact { .. } => ClassificationShape::Impact,
            Self::Confidence { .. } => ClassificationShape::Confidence,
            Self::Retention { .. } => ClassificationShape::Retention,
            Self::FixedLocation { .. } => ClassificationShape::FixedLocation,
            Self::Anchors { .. } => ClassificationShape::Anchors,
            Self::Template { .. } => ClassificationShape::Template,
            Self::Memento { .. } => ClassificationShape::Memento,
        }
    }

    /// Stewardship fields of any governance level classification.
    pub fn governance(&self) -> Option<&GovernanceClassificationProperties> {
        match self {
            Self::GovernanceClassification { governance }
            | Self::Confidentiality { governance }
            | Self::Criticality { governance }
            | Self::Impact { governance }
            | Self::Confidence { governance }
            | Self::Retention { governance, .. } => Some(governance),
            _ => None,
        }
    }
}

impl Shape for ClassificationShape {
    type Properties = ClassificationProperties;

    const CATEGORY: TypeCategory = TypeCategory::Classification;

    fn table() -> &'static ShapeTable<Self> {
        &CLASSIFICATION_SHAPES
    }

    fn own_property_schema(self) -> Vec<(&'static str, PropertyType)> {
        match self {
            Self::GovernanceClassification => GovernanceClassificationProperties::property_schema(),
            Self::Retention => RetentionProperties::property_schema(),
            Self::FixedLocation => FixedLocationProperties::property_schema(),
            Self::Anchors => AnchorsProperties::property_schema(),
            Self::Template => TemplateProperties::property_schema(),
            Self::Memento => MementoProperties::property_schema(),
            Self::Classification
            | Self::Confidentiality
            | Self::Criticality
            | Self::Impact
            | Self::Confidence => Vec::new(),
        }
    }

    fn remove_properties(self, props: &mut InstanceProperties) -> ClassificationProperties {
        use ClassificationProperties as P;
        match self {
            Self::Classification => P::Classification,
            Self::GovernanceClassification => P::GovernanceClassification {
                governance: GovernanceClassificationProperties::remove_from(props),
            },
            Self::Confidentiality => P::Confidentiality {
                governance: GovernanceClassificationProperties::remove_from(props),
            },
            Self::Criticality => P::Criticality {
                governance: GovernanceClassificationProperties::remove_from(props),
            },
            Self::Impact => P::Impact {
                governance: GovernanceClassificationProperties::remove_from(props),
            },
            Self::Confidence => P::Confidence {
                governance: GovernanceClassificationProperties::remove_from(props),
            },
            Self::Retention => P::Retention {
                governance: GovernanceClassificationProperties::remove_from(props),
                retention: RetentionProperties::remove_from(props),
            },
            Self::FixedLocation => P::FixedLocation {
                fixed_location: FixedLocationProperties::remove_from(props),
            },
            Self::Anchors => P::Anchors {
                anchors: AnchorsProperties::remove_from(props),
            },
            Self::Template => P::Template {
                template: TemplateProperties::remove_from(props),
            },
            Self::Memento => P::Memento {
                memento: MementoProperties::remove_from(props),
            },
        }
    }
}

pub type ClassificationBean = Bean<ClassificationProperties>;

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_ir::ElementType;

    #[test]
    fn governance_levels_share_fields() {
        let confidentiality =
            ElementType::with_supertypes("Confidentiality", ["GovernanceClassification"]);
        let shape = ClassificationShape::table().resolve(&confidentiality);
        assert_eq!(shape, ClassificationShape::Confidentiality);

        let mut props = InstanceProperties::new()
            .with("steward", "ops")
            .with("levelIdentifier", 3);
        let properties = shape.remove_properties(&mut props);
        let governance = properties.governance().unwrap();
        assert_eq!(governance.steward.as_deref(), Some("ops"));
        assert_eq!(governance.level_identifier, 3);
        assert!(props.is_empty());
    }

    #[test]
    fn plain_classification_is_generic() {
        let shape = ClassificationShape::table().resolve(&ElementType::named("Ownership"));
        assert_eq!(shape, ClassificationShape::Classification);
        assert!(shape.own_property_schema().is_empty());
    }
}
