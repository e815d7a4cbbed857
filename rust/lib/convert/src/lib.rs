//! Property-bag to bean conversion for open metadata instances.
//!
//! - [`beans`]: const accessors grouped into one property set per type level
//! - [`selector`]: shape tables and most-specific-first resolution
//! - [`converter`]: entity, classification and relationship beans
//! - [`specification`]: projection of specification property assignments
//! - [`validate`]: shape tables cross-checked against a type registry

pub mod bean;
pub mod beans;
pub mod classification;
pub mod config;
pub mod converter;
pub mod element;
pub mod entity;
pub mod enums;
pub mod error;
pub mod relationship;
pub mod selector;
pub mod specification;
pub mod validate;

pub use bean::Bean;
pub use classification::{ClassificationBean, ClassificationProperties, ClassificationShape};
pub use config::{ConverterConfig, UnmappedLogLevel};
pub use converter::Converter;
pub use element::{
    ElementClassification, MetadataElement, MetadataRelationship, RelatedMetadataElement,
};
pub use entity::{EntityBean, EntityProperties, EntityShape};
pub use error::ConvertError;
pub use relationship::{RelationshipBean, RelationshipProperties, RelationshipShape};
pub use selector::{Shape, ShapeRow, ShapeTable};
pub use specification::{project_specification, SpecificationProperty};
pub use validate::{validate_shapes, ValidationError};
