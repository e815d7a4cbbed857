use std::path::Path;

use crate::config::CliConfig;

/// Write the effective configuration to `path`.
pub fn run(config: &CliConfig, path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let Some(path) = path else {
        anyhow::bail!("init needs --config <path> to know where to write.");
    };
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite).", path.display());
    }
    config.save(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_effective_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openmeta.toml");
        let mut config = CliConfig::default();
        config.converter.service_name = "catalog-bridge".to_string();

        run(&config, Some(&path), false).unwrap();
        let back = CliConfig::load(&path).unwrap();
        assert_eq!(back.converter.service_name, "catalog-bridge");
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openmeta.toml");
        std::fs::write(&path, "types = \"keep.json\"\n").unwrap();

        let err = run(&CliConfig::default(), Some(&path), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(CliConfig::load(&path).unwrap().types.unwrap().to_str(), Some("keep.json"));

        run(&CliConfig::default(), Some(&path), true).unwrap();
        assert!(CliConfig::load(&path).unwrap().types.is_none());
    }

    #[test]
    fn needs_a_path() {
        assert!(run(&CliConfig::default(), None, false).is_err());
    }
}
