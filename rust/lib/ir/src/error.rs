use thiserror::Error;

use crate::types::TypeCategory;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("type '{0}' is defined more than once")]
    DuplicateType(String),

    #[error("type '{type_name}' extends unknown type '{super_type}'")]
    UnknownSuperType {
        type_name: String,
        super_type: String,
    },

    #[error("{category} type '{type_name}' cannot extend {super_category} type '{super_type}'")]
    CategoryMismatch {
        type_name: String,
        category: TypeCategory,
        super_type: String,
        super_category: TypeCategory,
    },

    #[error("type '{0}' is its own ancestor")]
    Cycle(String),

    #[error("type '{type_name}' redeclares property '{property}'")]
    DuplicateProperty { type_name: String, property: String },

    #[error("parse error: {0}")]
    Parse(String),
}
