use anyhow::Context;
use openmeta_convert::{project_specification, RelatedMetadataElement};
use openmeta_ir::TypeRegistry;

use super::{print_json, read_input};

pub fn run(registry: &TypeRegistry, input: &str) -> anyhow::Result<()> {
    let json = read_input(input)?;
    let mut related: Vec<RelatedMetadataElement> =
        serde_json::from_str(&json).context("invalid related elements JSON")?;
    for entry in &mut related {
        entry.resolve_lineage(registry);
    }
    print_json(&project_specification(&related))
}
