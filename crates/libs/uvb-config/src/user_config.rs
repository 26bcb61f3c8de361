//! Optional user configuration loaded from `uvb.toml`.

use crate::prelude::*;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// User-provided defaults from an optional TOML file.
///
/// Command-line flags always win over these values; every field is
/// optional and a missing file yields the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UvbUserConfig {
    /// Path to the build-tool executable.
    pub toolchain: Option<PathBuf>,
    /// Default parallel compilation jobs.
    pub jobs: Option<u32>,
    /// Wall-clock build timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl UvbUserConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(file_path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML string.
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// A file that exists but fails to parse is still an error; only a
    /// missing file is silently replaced by defaults.
    pub fn load_or_default(file_path: &Path) -> Result<Self> {
        if !file_path.exists() {
            debug!("No user config at {:?}, using defaults", file_path);
            return Ok(Self::default());
        }
        Self::from_file(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() -> Result<()> {
        let content = r#"
            # uvb user configuration
            toolchain = "C:/Keil_v5/UV4/UV4.exe"
            jobs = 4
            timeout_secs = 600
        "#;
        let config = UvbUserConfig::from_toml(content)?;
        assert_eq!(
            config.toolchain,
            Some(PathBuf::from("C:/Keil_v5/UV4/UV4.exe"))
        );
        assert_eq!(config.jobs, Some(4));
        assert_eq!(config.timeout_secs, Some(600));
        Ok(())
    }

    #[test]
    fn empty_file_is_all_defaults() -> Result<()> {
        let config = UvbUserConfig::from_toml("")?;
        assert_eq!(config, UvbUserConfig::default());
        Ok(())
    }

    #[test]
    fn missing_file_is_all_defaults() -> Result<()> {
        let config = UvbUserConfig::load_or_default(Path::new("does/not/exist.toml"))?;
        assert_eq!(config, UvbUserConfig::default());
        Ok(())
    }
}
