use openmeta_convert::{ClassificationShape, EntityShape, RelationshipShape, Shape};
use openmeta_ir::{TypeCategory, TypeDescriptor, TypeRegistry};

pub fn run(registry: &TypeRegistry, type_name: &str) -> anyhow::Result<()> {
    let Some(def) = registry.get(type_name) else {
        anyhow::bail!("Unknown type '{}'.", type_name);
    };
    let Some(element_type) = registry.element_type(type_name) else {
        anyhow::bail!("Unknown type '{}'.", type_name);
    };

    println!("type:     {} ({})", element_type.type_name(), def.category);
    println!("lineage:  {}", registry.lineage(type_name).join(" -> "));

    let (shape, claimed) = match def.category {
        TypeCategory::Entity => describe::<EntityShape>(&element_type),
        TypeCategory::Classification => describe::<ClassificationShape>(&element_type),
        TypeCategory::Relationship => describe::<RelationshipShape>(&element_type),
    };
    println!("shape:    {}", shape);
    println!("claims:   {}", claimed.join(", "));

    let unclaimed: Vec<&str> = registry
        .all_properties(type_name)
        .into_iter()
        .map(|p| p.name.as_str())
        .filter(|name| !claimed.iter().any(|c| c == name))
        .collect();
    if !unclaimed.is_empty() {
        println!("extended: {}", unclaimed.join(", "));
    }
    Ok(())
}

fn describe<S: Shape>(instance: &impl TypeDescriptor) -> (String, Vec<&'static str>) {
    let table = S::table();
    let shape = table.resolve(instance);
    (format!("{:?}", shape), table.claimed_names(shape))
}
