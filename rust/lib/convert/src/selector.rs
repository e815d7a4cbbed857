//! Bean selector: most-specific-first shape resolution.
//!
//! Each bean family (entity, classification, relationship) declares a static
//! [`ShapeTable`]: one row per shape, naming the metadata type it maps and the
//! shape it refines. Resolution collects every row the instance is a type
//! of and keeps the deepest; ties go to the earlier row. An instance that
//! matches nothing gets the table's generic shape.

use std::fmt::Debug;

use openmeta_ir::{PropertyType, TypeCategory, TypeDescriptor};
use openmeta_props::InstanceProperties;

/// One known bean shape within a family.
pub trait Shape: Copy + Eq + Debug + Send + Sync + 'static {
    /// Tagged union of the per-shape property structs.
    type Properties;

    const CATEGORY: TypeCategory;

    fn table() -> &'static ShapeTable<Self>;

    /// Properties declared at this shape's own level, not its ancestors'.
    fn own_property_schema(self) -> Vec<(&'static str, PropertyType)>;

    /// Consume the properties of this shape and every ancestor shape.
    fn remove_properties(self, props: &mut InstanceProperties) -> Self::Properties;
}

#[derive(Debug, Clone, Copy)]
pub struct ShapeRow<S> {
    pub shape: S,
    pub type_name: &'static str,
    /// `None` refines the generic shape directly.
    pub parent: Option<S>,
}

impl<S> ShapeRow<S> {
    pub const fn new(shape: S, type_name: &'static str, parent: Option<S>) -> Self {
        Self {
            shape,
            type_name,
            parent,
        }
    }
}

#[derive(Debug)]
pub struct ShapeTable<S: 'static> {
    pub generic: S,
    pub generic_type: &'static str,
    pub rows: &'static [ShapeRow<S>],
}

impl<S: Shape> ShapeTable<S> {
    pub fn row(&self, shape: S) -> Option<&ShapeRow<S>> {
        self.rows.iter().find(|r| r.shape == shape)
    }

    pub fn type_name(&self, shape: S) -> &'static str {
        self.row(shape).map_or(self.generic_type, |r| r.type_name)
    }

    /// Pick the shape for an instance.
    pub fn resolve(&self, instance: &impl TypeDescriptor) -> S {
        let mut best: Option<(S, usize)> = None;
        for row in self.rows {
            if !instance.is_type_of(row.type_name) {
                continue;
            }
            let depth = self.depth(row.shape);
            if best.map_or(true, |(_, d)| depth > d) {
                best = Some((row.shape, depth));
            }
        }
        best.map_or(self.generic, |(shape, _)| shape)
    }

    /// Distance from the generic shape, which has depth 0.
    pub fn depth(&self, shape: S) -> usize {
        self.chain(shape).len() - 1
    }

    /// Generic shape first, `shape` last.
    pub fn chain(&self, shape: S) -> Vec<S> {
        let mut chain = vec![shape];
        let mut current = shape;
        // Bounded so a malformed table cannot loop.
        while chain.len() <= self.rows.len() {
            match self.row(current) {
                Some(row) => {
                    current = row.parent.unwrap_or(self.generic);
                    chain.push(current);
                }
                None => break,
            }
        }
        chain.reverse();
        chain
    }

    /// Every property name a bean of this shape claims.
    pub fn claimed_names(&self, shape: S) -> Vec<&'static str> {
        self.chain(shape)
            .into_iter()
            .flat_map(|s| s.own_property_schema())
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityShape;
    use crate::relationship::RelationshipShape;
    use openmeta_ir::ElementType;

    #[test]
    fn deepest_match_wins() {
        let table = EntityShape::table();
        let data_file = ElementType::with_supertypes(
            "DataFile",
            ["DataStore", "Asset", "Referenceable", "OpenMetadataRoot"],
        );
        assert_eq!(table.resolve(&data_file), EntityShape::DataFile);

        let data_store = ElementType::with_supertypes(
            "DataStore",
            ["Asset", "Referenceable", "OpenMetadataRoot"],
        );
        assert_eq!(table.resolve(&data_store), EntityShape::DataStore);
    }

    #[test]
    fn unknown_type_falls_back_to_generic() {
        assert_eq!(
            EntityShape::table().resolve(&ElementType::named("Mystery")),
            EntityShape::OpenMetadataRoot
        );
        assert_eq!(
            RelationshipShape::table().resolve(&ElementType::named("Mystery")),
            RelationshipShape::Relationship
        );
    }

    #[test]
    fn chain_runs_from_generic() {
        let table = EntityShape::table();
        assert_eq!(
            table.chain(EntityShape::SchemaAttribute),
            vec![
                EntityShape::OpenMetadataRoot,
                EntityShape::Referenceable,
                EntityShape::SchemaElement,
                EntityShape::SchemaAttribute,
            ]
        );
        assert_eq!(table.depth(EntityShape::OpenMetadataRoot), 0);
        assert_eq!(table.depth(EntityShape::Annotation), 1);
    }

    #[test]
    fn claimed_names_include_ancestors() {
        let names = EntityShape::table().claimed_names(EntityShape::DataFile);
        assert!(names.contains(&"qualifiedName"));
        assert!(names.contains(&"pathName"));
        assert!(names.contains(&"fileSize"));
        assert!(!names.contains(&"formula"));
    }
}
