//! Open metadata type schema IR.
//!
//! Data structures shared between:
//! - the property bag (declared property types for accessors)
//! - the bean converter (type lineage for shape resolution)
//! - the shape validator (cross-checks beans against the schema)
//!
//! Three layers:
//! 1. Types: property types and type categories
//! 2. TypeDef: one named type with its supertype and declared properties
//! 3. Registry: validated set of types, lineage and `is_type_of`

pub mod catalog;
pub mod error;
pub mod registry;
pub mod typedef;
pub mod types;

pub use error::RegistryError;
pub use registry::*;
pub use typedef::*;
pub use types::*;
