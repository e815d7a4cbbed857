//! Cross-check the shape tables against a type registry.
//!
//! Catches a shape naming a type the registry doesn't know, a parent shape
//! that is not an ancestor in the registry, an accessor whose name or type
//! disagrees with the declared property, and a declared property no accessor
//! claims (which would silently end up in the extended properties).

use std::collections::HashSet;

use openmeta_ir::TypeRegistry;

use crate::classification::ClassificationShape;
use crate::entity::EntityShape;
use crate::relationship::RelationshipShape;
use crate::selector::Shape;

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    /// Which check produced the error (shape, accessor, coverage).
    pub layer: String,
    /// Which shape or shape property the error is about.
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:{}] {}", self.layer, self.context, self.message)
    }
}

/// Validate all three shape tables.
/// Returns all errors found (does not stop at first error).
pub fn validate_shapes(registry: &TypeRegistry) -> Vec<ValidationError> {
    let mut errors = validate_table::<EntityShape>(registry);
    errors.extend(validate_table::<ClassificationShape>(registry));
    errors.extend(validate_table::<RelationshipShape>(registry));
    errors
}

pub fn validate_table<S: Shape>(registry: &TypeRegistry) -> Vec<ValidationError> {
    let table = S::table();
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for row in table.rows {
        let ctx = format!("{:?}", row.shape);

        if !seen.insert(row.type_name) {
            errors.push(ValidationError {
                message: format!("type '{}' is mapped by more than one shape", row.type_name),
                layer: "shape".into(),
                context: ctx.clone(),
            });
        }

        let Some(def) = registry.get(row.type_name) else {
            errors.push(ValidationError {
                message: format!("type '{}' is not in the registry", row.type_name),
                layer: "shape".into(),
                context: ctx,
            });
            continue;
        };

        if def.category != S::CATEGORY {
            errors.push(ValidationError {
                message: format!(
                    "type '{}' is a {} type, expected {}",
                    row.type_name,
                    def.category,
                    S::CATEGORY
                ),
                layer: "shape".into(),
                context: ctx.clone(),
            });
        }

        if let Some(parent) = row.parent {
            let parent_type = table.type_name(parent);
            if table.row(parent).is_none() {
                errors.push(ValidationError {
                    message: format!("parent shape {:?} has no row", parent),
                    layer: "shape".into(),
                    context: ctx.clone(),
                });
            } else if !registry.lineage(row.type_name)[1..].contains(&parent_type) {
                errors.push(ValidationError {
                    message: format!(
                        "parent shape type '{}' is not an ancestor of '{}'",
                        parent_type, row.type_name
                    ),
                    layer: "shape".into(),
                    context: ctx.clone(),
                });
            }
        }

        for (name, ty) in row.shape.own_property_schema() {
            let pctx = format!("{}.{}", ctx, name);
            match registry.property(row.type_name, name) {
                None => errors.push(ValidationError {
                    message: format!(
                        "accessor '{}' is not a property of '{}' or its supertypes",
                        name, row.type_name
                    ),
                    layer: "accessor".into(),
                    context: pctx,
                }),
                Some(declared) if declared.ty != ty => errors.push(ValidationError {
                    message: format!(
                        "accessor reads {} but '{}' declares {}",
                        ty, name, declared.ty
                    ),
                    layer: "accessor".into(),
                    context: pctx,
                }),
                Some(_) => {}
            }
        }

        let claimed: HashSet<&str> = table.claimed_names(row.shape).into_iter().collect();
        for declared in registry.all_properties(row.type_name) {
            if !claimed.contains(declared.name.as_str()) {
                errors.push(ValidationError {
                    message: format!(
                        "declared property '{}' has no accessor",
                        declared.name
                    ),
                    layer: "coverage".into(),
                    context: ctx.clone(),
                });
            }
        }
    }

    errors
}
