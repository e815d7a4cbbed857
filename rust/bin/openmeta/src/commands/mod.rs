pub mod check;
pub mod convert;
pub mod init;
pub mod resolve;
pub mod specification;

use std::io::Read;
use std::path::Path;

use openmeta_ir::{catalog, TypeRegistry};
use serde::Serialize;
use tracing::info;

/// Load the registry from JSON, or fall back to the built-in catalog.
pub fn load_registry(path: Option<&Path>) -> anyhow::Result<TypeRegistry> {
    let registry = match path {
        Some(path) => {
            info!("Loading type registry from {}", path.display());
            let json = std::fs::read_to_string(path)?;
            TypeRegistry::from_json(&json)?
        }
        None => catalog::open_metadata_types()?,
    };
    Ok(registry)
}

/// Read a file, or stdin for `-`.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(input)?)
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
