use anyhow::Context;
use openmeta_convert::{
    Converter, ConverterConfig, ElementClassification, MetadataElement, MetadataRelationship,
};
use openmeta_ir::TypeRegistry;

use super::{print_json, read_input};
use crate::Kind;

const METHOD_NAME: &str = "convert";

pub fn run(
    registry: &TypeRegistry,
    config: &ConverterConfig,
    kind: Kind,
    input: &str,
) -> anyhow::Result<()> {
    let json = read_input(input)?;
    let converter = Converter::new(config.clone());

    match kind {
        Kind::Entity => {
            let mut element: MetadataElement =
                serde_json::from_str(&json).context("invalid element JSON")?;
            element.resolve_lineage(registry);
            print_json(&converter.entity_bean(Some(&element), METHOD_NAME)?)
        }
        Kind::Classification => {
            let mut classification: ElementClassification =
                serde_json::from_str(&json).context("invalid classification JSON")?;
            classification.resolve_lineage(registry);
            print_json(&converter.classification_bean(Some(&classification), METHOD_NAME)?)
        }
        Kind::Relationship => {
            let mut relationship: MetadataRelationship =
                serde_json::from_str(&json).context("invalid relationship JSON")?;
            relationship.resolve_lineage(registry);
            print_json(&converter.relationship_bean(Some(&relationship), METHOD_NAME)?)
        }
    }
}
