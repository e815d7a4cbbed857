//! Entity beans.

use openmeta_ir::{PropertyType, TypeCategory};
use openmeta_props::InstanceProperties;
use serde::{Deserialize, Serialize};

use crate::bean::Bean;
use crate::beans::actor::PersonProperties;
use crate::beans::annotation::{AnnotationProperties, ResourceProfileAnnotationProperties};
use crate::beans::asset::{
    AssetProperties, DataFileProperties, DataSetProperties, DataStoreProperties,
    ProcessProperties,
};
use crate::beans::glossary::{GlossaryProperties, GlossaryTermProperties};
use crate::beans::reference::{
    LocationProperties, SolutionPortProperties, ValidValueDefinitionProperties,
};
use crate::beans::referenceable::ReferenceableProperties;
use crate::beans::schema::{
    LiteralSchemaTypeProperties, PrimitiveSchemaTypeProperties, SchemaAttributeProperties,
    SchemaElementProperties, SchemaTypeProperties,
};
use crate::classification::ClassificationBean;
use crate::selector::{Shape, ShapeRow, ShapeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityShape {
    OpenMetadataRoot,
    Referenceable,
    Asset,
    DataSet,
    DataStore,
    DataFile,
    Process,
    SchemaElement,
    SchemaType,
    PrimitiveSchemaType,
    LiteralSchemaType,
    SchemaAttribute,
    Glossary,
    GlossaryTerm,
    Person,
    ValidValueDefinition,
    SolutionPort,
    Location,
    Annotation,
    ResourceProfileAnnotation,
}

static ENTITY_SHAPES: ShapeTable<EntityShape> = {
    use EntityShape::*;
    ShapeTable {
        generic: OpenMetadataRoot,
        generic_type: "OpenMetadataRoot",
        rows: &[
            ShapeRow::new(Referenceable, "Referenceable", None),
            ShapeRow::new(Asset, "Asset", Some(Referenceable)),
            ShapeRow::new(DataSet, "DataSet", Some(Asset)),
            ShapeRow::new(DataStore, "DataStore", Some(Asset)),
            ShapeRow::new(DataFile, "DataFile", Some(DataStore)),
            ShapeRow::new(Process, "Process", Some(Asset)),
            ShapeRow::new(SchemaElement, "SchemaElement", Some(Referenceable)),
            ShapeRow::new(SchemaType, "SchemaType", Some(SchemaElement)),
            ShapeRow::new(PrimitiveSchemaType, "PrimitiveSchemaType", Some(SchemaType)),
            ShapeRow::new(LiteralSchemaType, "LiteralSchemaType", Some(SchemaType)),
            ShapeRow::new(SchemaAttribute, "SchemaAttribute", Some(SchemaElement)),
            ShapeRow::new(Glossary, "Glossary", Some(Referenceable)),
            ShapeRow::new(GlossaryTerm, "GlossaryTerm", Some(Referenceable)),
            ShapeRow::new(Person, "Person", Some(Referenceable)),
            ShapeRow::new(ValidValueDefinition, "ValidValueDefinition", Some(Referenceable)),
            ShapeRow::new(SolutionPort, "SolutionPort", Some(Referenceable)),
            ShapeRow::new(Location, "Location", Some(Referenceable)),
            ShapeRow::new(Annotation, "Annotation", None),
            ShapeRow::new(ResourceProfileAnnotation, "ResourceProfileAnnotation", Some(Annotation)),
        ],
    }
};

/// Entity properties, one variant per shape. Each variant holds the
/// property set of every level from the root down to the shape itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all_fields = "camelCase")]
pub enum EntityProperties {
    OpenMetadataRoot,
    Referenceable {
        referenceable: ReferenceableProperties,
    },
    Asset {
        referenceable: ReferenceableProperties,
        asset: AssetProperties,
    },
    DataSet {
        referenceable: ReferenceableProperties,
        asset: AssetProperties,
        data_set: DataSetProperties,
    },
    DataStore {
        referenceable: ReferenceableProperties,
        asset: AssetProperties,
        data_store: DataStoreProperties,
    },
    DataFile {
        referenceable: ReferenceableProperties,
        asset: AssetProperties,
        data_store: DataStoreProperties,
        data_file: DataFileProperties,
    },
    Process {
        referenceable: ReferenceableProperties,
        asset: AssetProperties,
        process: ProcessProperties,
    },
    SchemaElement {
        referenceable: ReferenceableProperties,
        schema_element: SchemaElementProperties,
    },
    SchemaType {
        referenceable: ReferenceableProperties,
        schema_element: SchemaElementProperties,
        schema_type: SchemaTypeProperties,
    },
    PrimitiveSchemaType {
        referenceable: ReferenceableProperties,
        schema_element: SchemaElementProperties,
        schema_type: SchemaTypeProperties,
        primitive_schema_type: PrimitiveSchemaTypeProperties,
    },
    LiteralSchemaType {
        referenceable: ReferenceableProperties,
        schema_element: SchemaElementProperties,
        schema_type: SchemaTypeProperties,
        literal_schema_type: LiteralSchemaTypeProperties,
    },
    SchemaAttribute {
        referenceable: ReferenceableProperties,
        schema_element: SchemaElementProperties,
        schema_attribute: SchemaAttributeProperties,
    },
    Glossary {
        referenceable: ReferenceableProperties,
        glossary: GlossaryProperties,
    },
    GlossaryTerm {
        referenceable: ReferenceableProperties,
        glossary_term: GlossaryTermProperties,
    },
    Person {
        referenceable: ReferenceableProperties,
        person: PersonProperties,
    },
    ValidValueDefinition {
        referenceable: ReferenceableProperties,
        valid_value_definition: ValidValueDefinitionProperties,
    },
    SolutionPort {
        referenceable: ReferenceableProperties,
        solution_port: SolutionPortProperties,
    },
    Location {
        referenceable: ReferenceableProperties,
        location: LocationProperties,
    },
    Annotation {
        annotation: AnnotationProperties,
    },
    ResourceProfileAnnotation {
        annotation: AnnotationProperties,
        resource_profile_annotation: ResourceProfileAnnotationProperties,
    },
}

impl EntityProperties {
    pub fn shape(&self) -> EntityShape {
        match self {
            Self::OpenMetadataRoot => EntityShape::OpenMetadataRoot,
            Self::Referenceable { .. } => EntityShape::Referenceable,
            Self::Asset { .. } => EntityShape::Asset,
            Self::DataSet { .. } => EntityShape::DataSet,
            Self::DataStore { .. } => EntityShape::DataStore,
            Self::DataFile { .. } => EntityShape::DataFile,
            Self::Process { .. } => EntityShape::Process,
            Self::SchemaElement { .. } => EntityShape::SchemaElement,
            Self::SchemaType { .. } => EntityShape::SchemaType,
            Self::PrimitiveSchemaType { .. } => EntityShape::PrimitiveSchemaType,
            Self::LiteralSchemaType { .. } => EntityShape::LiteralSchemaType,
            Self::SchemaAttribute { .. } => EntityShape::SchemaAttribute,
            Self::Glossary { .. } => EntityShape::Glossary,
            Self::GlossaryTerm { .. } => EntityShape::GlossaryTerm,
            Self::Person { .. } => EntityShape::Person,
            Self::ValidValueDefinition { .. } => EntityShape::ValidValueDefinition,
            Self::SolutionPort { .. } => EntityShape::SolutionPort,
            Self::Location { .. } => EntityShape::Location,
            Self::Annotation { .. } => EntityShape::Annotation,
            Self::ResourceProfileAnnotation { .. } => EntityShape::ResourceProfileAnnotation,
        }
    }

    /// Properties shared by every referenceable shape.
    pub fn referenceable(&self) -> Option<&ReferenceableProperties> {
        match self {
            Self::Referenceable { referenceable }
            | Self::Asset { referenceable, .. }
            | Self::DataSet { referenceable, .. }
            | Self::DataStore { referenceable, .. }
            | Self::DataFile { referenceable, .. }
            | Self::Process { referenceable, .. }
            | Self::SchemaElement { referenceable, .. }
            | Self::SchemaType { referenceable, .. }
            | Self::PrimitiveSchemaType { referenceable, .. }
            | Self::LiteralSchemaType { referenceable, .. }
            | Self::SchemaAttribute { referenceable, .. }
            | Self::Glossary { referenceable, .. }
            | Self::GlossaryTerm { referenceable, .. }
            | Self::Person { referenceable, .. }
            | Self::ValidValueDefinition { referenceable, .. }
            | Self::SolutionPort { referenceable, .. }
            | Self::Location { referenceable, .. } => Some(referenceable),
            Self::OpenMetadataRoot
            | Self::Annotation { .. }
            | Self::ResourceProfileAnnotation { .. } => None,
        }
    }
}

impl Shape for EntityShape {
    type Properties = EntityProperties;

    const CATEGORY: TypeCategory = TypeCategory::Entity;

    fn table() -> &'static ShapeTable<Self> {
        &ENTITY_SHAPES
    }

    fn own_property_schema(self) -> Vec<(&'static str, PropertyType)> {
        match self {
            Self::OpenMetadataRoot => Vec::new(),
            Self::Referenceable => ReferenceableProperties::property_schema(),
            Self::Asset => AssetProperties::property_schema(),
            Self::DataSet => DataSetProperties::property_schema(),
            Self::DataStore => DataStoreProperties::property_schema(),
            Self::DataFile => DataFileProperties::property_schema(),
            Self::Process => ProcessProperties::property_schema(),
            Self::SchemaElement => SchemaElementProperties::property_schema(),
            Self::SchemaType => SchemaTypeProperties::property_schema(),
            Self::PrimitiveSchemaType => PrimitiveSchemaTypeProperties::property_schema(),
            Self::LiteralSchemaType => LiteralSchemaTypeProperties::property_schema(),
            Self::SchemaAttribute => SchemaAttributeProperties::property_schema(),
            Self::Glossary => GlossaryProperties::property_schema(),
            Self::GlossaryTerm => GlossaryTermProperties::property_schema(),
            Self::Person => PersonProperties::property_schema(),
            Self::ValidValueDefinition => ValidValueDefinitionProperties::property_schema(),
            Self::SolutionPort => SolutionPortProperties::property_schema(),
            Self::Location => LocationProperties::property_schema(),
            Self::Annotation => AnnotationProperties::property_schema(),
            Self::ResourceProfileAnnotation => {
                ResourceProfileAnnotationProperties::property_schema()
            }
        }
    }

    fn remove_properties(self, props: &mut InstanceProperties) -> EntityProperties {
        use EntityProperties as P;
        match self {
            Self::OpenMetadataRoot => P::OpenMetadataRoot,
            Self::Referenceable => P::Referenceable {
                referenceable: ReferenceableProperties::remove_from(props),
            },
            Self::Asset => P::Asset {
                referenceable: ReferenceableProperties::remove_from(props),
                asset: AssetProperties::remove_from(props),
            },
            Self::DataSet => P::DataSet {
                referenceable: ReferenceableProperties::remove_from(props),
                asset: AssetProperties::remove_from(props),
                data_set: DataSetProperties::remove_from(props),
            },
            Self::DataStore => P::DataStore {
                referenceable: ReferenceableProperties::remove_from(props),
                asset: AssetProperties::remove_from(props),
                data_store: DataStoreProperties::remove_from(props),
            },
            Self::DataFile => P::DataFile {
                referenceable: ReferenceableProperties::remove_from(props),
                asset: AssetProperties::remove_from(props),
                data_store: DataStoreProperties::remove_from(props),
                data_file: DataFileProperties::remove_from(props),
            },
            Self::Process => P::Process {
                referenceable: ReferenceableProperties::remove_from(props),
                asset: AssetProperties::remove_from(props),
                process: ProcessProperties::remove_from(props),
            },
            Self::SchemaElement => P::SchemaElement {
                referenceable: ReferenceableProperties::remove_from(props),
                schema_element: SchemaElementProperties::remove_from(props),
            },
            Self::SchemaType => P::SchemaType {
                referenceable: ReferenceableProperties::remove_from(props),
                schema_element: SchemaElementProperties::remove_from(props),
                schema_type: SchemaTypeProperties::remove_from(props),
            },
            Self::PrimitiveSchemaType => P::PrimitiveSchemaType {
                referenceable: ReferenceableProperties::remove_from(props),
                schema_element: SchemaElementProperties::remove_from(props),
                schema_type: SchemaTypeProperties::remove_from(props),
                primitive_schema_type: PrimitiveSchemaTypeProperties::remove_from(props),
            },
            Self::LiteralSchemaType => P::LiteralSchemaType {
                referenceable: ReferenceableProperties::remove_from(props),
                schema_element: SchemaElementProperties::remove_from(props),
                schema_type: SchemaTypeProperties::remove_from(props),
                literal_schema_type: LiteralSchemaTypeProperties::remove_from(props),
            },
            Self::SchemaAttribute => P::SchemaAttribute {
                referenceable: ReferenceableProperties::remove_from(props),
                schema_element: SchemaElementProperties::remove_from(props),
                schema_attribute: SchemaAttributeProperties::remove_from(props),
            },
            Self::Glossary => P::Glossary {
                referenceable: ReferenceableProperties::remove_from(props),
                glossary: GlossaryProperties::remove_from(props),
            },
            Self::GlossaryTerm => P::GlossaryTerm {
                referenceable: ReferenceableProperties::remove_from(props),
                glossary_term: GlossaryTermProperties::remove_from(props),
            },
            Self::Person => P::Person {
                referenceable: ReferenceableProperties::remove_from(props),
                person: PersonProperties::remove_from(props),
            },
            Self::ValidValueDefinition => P::ValidValueDefinition {
                referenceable: ReferenceableProperties::remove_from(props),
                valid_value_definition: ValidValueDefinitionProperties::remove_from(props),
            },
            Self::SolutionPort => P::SolutionPort {
                referenceable: ReferenceableProperties::remove_from(props),
                solution_port: SolutionPortProperties::remove_from(props),
            },
            Self::Location => P::Location {
                referenceable: ReferenceableProperties::remove_from(props),
                location: LocationProperties::remove_from(props),
            },
            Self::Annotation => P::Annotation {
                annotation: AnnotationProperties::remove_from(props),
            },
            Self::ResourceProfileAnnotation => P::ResourceProfileAnnotation {
                annotation: AnnotationProperties::remove_from(props),
                resource_profile_annotation: ResourceProfileAnnotationProperties::remove_from(
                    props,
                ),
            },
        }
    }
}

/// A converted entity together with its converted classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBean {
    #[serde(flatten)]
    pub bean: Bean<EntityProperties>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<ClassificationBean>,
}

impl EntityBean {
    pub fn shape(&self) -> EntityShape {
        self.bean.properties.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_a_row() {
        let table = EntityShape::table();
        assert_eq!(table.rows.len(), 19);
        assert!(table.row(EntityShape::OpenMetadataRoot).is_none());
        assert_eq!(table.type_name(EntityShape::OpenMetadataRoot), "OpenMetadataRoot");
        assert_eq!(table.type_name(EntityShape::DataFile), "DataFile");
    }

    #[test]
    fn properties_report_their_shape() {
        let mut props = InstanceProperties::new();
        for row in EntityShape::table().rows {
            assert_eq!(row.shape.remove_properties(&mut props).shape(), row.shape);
        }
    }

    #[test]
    fn annotation_is_not_referenceable() {
        let mut props = InstanceProperties::new().with("qualifiedName", "q");
        let annotation = EntityShape::Annotation.remove_properties(&mut props);
        assert!(annotation.referenceable().is_none());
        assert!(props.contains("qualifiedName"));
    }
}
