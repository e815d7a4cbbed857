//! Converter: instance plus property bag in, typed bean out.
//!
//! For each instance the converter resolves a shape from the family's
//! [`ShapeTable`](crate::selector::ShapeTable), removes the property sets of
//! that shape and all its ancestors from a copy of the bag, and keeps
//! whatever is left as extended properties.

use indexmap::IndexMap;
use openmeta_ir::TypeDescriptor;
use openmeta_props::{InstanceProperties, PropertyValue};
use tracing::{debug, warn};

use crate::bean::Bean;
use crate::classification::{ClassificationBean, ClassificationShape};
use crate::config::{ConverterConfig, UnmappedLogLevel};
use crate::element::{ElementClassification, MetadataElement, MetadataRelationship};
use crate::entity::{EntityBean, EntityShape};
use crate::error::{ConvertError, Result};
use crate::relationship::{RelationshipBean, RelationshipShape};
use crate::selector::Shape;

#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert an element and every classification attached to it.
    ///
    /// `method_name` names the caller in the error raised when `element` is
    /// absent.
    pub fn entity_bean(
        &self,
        element: Option<&MetadataElement>,
        method_name: &str,
    ) -> Result<EntityBean> {
        let element =
            element.ok_or_else(|| self.missing("EntityBean", "MetadataElement", method_name))?;

        let classifications = element
            .classifications
            .iter()
            .map(|c| self.classification_bean(Some(c), method_name))
            .collect::<Result<Vec<_>>>()?;

        let (properties, extended_properties) =
            self.convert::<EntityShape>(element, element.properties.as_ref());

        Ok(EntityBean {
            bean: Bean {
                type_name: element.type_name().to_string(),
                guid: element.guid.clone(),
                effective_from: element.effective_from,
                effective_to: element.effective_to,
                properties,
                extended_properties,
            },
            classifications,
        })
    }

    pub fn classification_bean(
        &self,
        classification: Option<&ElementClassification>,
        method_name: &str,
    ) -> Result<ClassificationBean> {
        let classification = classification.ok_or_else(|| {
            self.missing("ClassificationBean", "ElementClassification", method_name)
        })?;

        let (properties, extended_properties) = self
            .convert::<ClassificationShape>(classification, classification.properties.as_ref());

        Ok(Bean {
            type_name: classification.type_name().to_string(),
            guid: None,
            effective_from: classification.effective_from,
            effective_to: classification.effective_to,
            properties,
            extended_properties,
        })
    }

    pub fn relationship_bean(
        &self,
        relationship: Option<&MetadataRelationship>,
        method_name: &str,
    ) -> Result<RelationshipBean> {
        let relationship = relationship.ok_or_else(|| {
            self.missing("RelationshipBean", "MetadataRelationship", method_name)
        })?;

        let (properties, extended_properties) = self
            .convert::<RelationshipShape>(relationship, relationship.properties.as_ref());

        Ok(RelationshipBean {
            bean: Bean {
                type_name: relationship.type_name().to_string(),
                guid: relationship.guid.clone(),
                effective_from: relationship.effective_from,
                effective_to: relationship.effective_to,
                properties,
                extended_properties,
            },
            end1_guid: relationship.end1_guid.clone(),
            end2_guid: relationship.end2_guid.clone(),
        })
    }

    /// Resolve the shape, consume its properties from a copy of the bag and
    /// return the rest. The caller's bag is never modified.
    fn convert<S: Shape>(
        &self,
        instance: &impl TypeDescriptor,
        props: Option<&InstanceProperties>,
    ) -> (S::Properties, IndexMap<String, PropertyValue>) {
        let shape = S::table().resolve(instance);
        debug!(
            "{}: resolved {} '{}' to shape {:?}",
            self.config.service_name,
            S::CATEGORY,
            instance.type_name(),
            shape
        );

        let mut bag = props.cloned().unwrap_or_default();
        let properties = shape.remove_properties(&mut bag);
        let unmapped = bag.take_remaining();
        if !unmapped.is_empty() {
            self.log_unmapped(instance.type_name(), &unmapped);
        }
        (properties, unmapped)
    }

    fn log_unmapped(&self, type_name: &str, unmapped: &IndexMap<String, PropertyValue>) {
        let names: Vec<&str> = unmapped.keys().map(String::as_str).collect();
        match self.config.unmapped_log_level {
            UnmappedLogLevel::Debug => debug!(
                "{}: '{}' has unmapped properties {:?}",
                self.config.service_name, type_name, names
            ),
            UnmappedLogLevel::Warn => warn!(
                "{}: '{}' has unmapped properties {:?}",
                self.config.service_name, type_name, names
            ),
        }
    }

    fn missing(&self, bean_type: &str, source_type: &str, method_name: &str) -> ConvertError {
        ConvertError::MissingMetadataInstance {
            bean_type: bean_type.to_string(),
            source_type: source_type.to_string(),
            service_name: self.config.service_name.clone(),
            method_name: method_name.to_string(),
        }
    }
}
