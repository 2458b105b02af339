//! Configuration and subject loading

use akhq_acl_mapper::directory::StaticSubject;
use akhq_acl_mapper::MapperConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration file layout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub mapper: MapperConfig,
}

impl CliConfig {
    /// Load configuration from TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read configuration file {}", path.as_ref().display()))?;

        let config: CliConfig = toml::from_str(&contents)
            .context("Failed to parse configuration file")?;

        config.mapper.validate().context("Invalid mapper configuration")?;

        Ok(config)
    }
}

/// Load a subject document (username plus groups with attributes) from JSON
pub fn load_subject<P: AsRef<Path>>(path: P) -> Result<StaticSubject> {
    let contents = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read subject file {}", path.as_ref().display()))?;

    serde_json::from_str(&contents).context("Failed to parse subject file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use akhq_acl_mapper::DirectorySubject;
    use std::io::Write;

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[mapper]
claim_name = "akhq"
include_in_lightweight_access_token = true
debug = true
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.mapper.claim_name(), Some("akhq"));
        assert!(config.mapper.include_in_lightweight_access_token);
        assert!(config.mapper.include_in_id_token);
        assert!(config.mapper.debug);
    }

    #[test]
    fn test_loaded_debug_flag_reaches_mapper() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mapper]\ndebug = true").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        let mapper = akhq_acl_mapper::AclMapper::new(config.mapper);

        assert!(mapper.config().debug);
        assert!(mapper.config().aggregator_config().debug);
    }

    #[test]
    fn test_load_config_rejects_invalid_claim_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mapper]\nclaim_name = \"akhq groups\"").unwrap();

        assert!(CliConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.mapper, MapperConfig::default());
    }

    #[test]
    fn test_load_subject() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"username": "alice", "groups": [{{"name": "team-a", "attributes": {{"topics-filter-regexp": ["^prod-.*"]}}}}]}}"#
        )
        .unwrap();

        let subject = load_subject(file.path()).unwrap();
        assert_eq!(subject.username(), "alice");
        assert_eq!(subject.groups().len(), 1);
    }

    #[test]
    fn test_missing_subject_file() {
        assert!(load_subject("/nonexistent/subject.json").is_err());
    }
}
