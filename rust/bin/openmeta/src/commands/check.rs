use openmeta_convert::{
    validate_shapes, ClassificationShape, EntityShape, RelationshipShape, Shape,
};
use openmeta_ir::TypeRegistry;

pub fn run(registry: &TypeRegistry) -> anyhow::Result<()> {
    let errors = validate_shapes(registry);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{}", error);
        }
        anyhow::bail!("{} shape error(s).", errors.len());
    }

    println!(
        "ok: {} types, {} entity / {} classification / {} relationship shapes",
        registry.len(),
        EntityShape::table().rows.len(),
        ClassificationShape::table().rows.len(),
        RelationshipShape::table().rows.len()
    );
    Ok(())
}
