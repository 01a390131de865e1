use crate::args::OutputFormat;
use anyhow::{Context, Result};
use netview_engine::DEFAULT_MAX_COLUMN_WIDTH;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. NETVIEW_CONFIG environment variable (with tilde expansion)
/// 3. <user config dir>/netview/config.toml
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("NETVIEW_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("netview").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub max_column_width: Option<usize>,

    #[serde(default)]
    pub output: Option<OutputFormat>,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn max_column_width(&self, flag: Option<usize>) -> usize {
        flag.or(self.max_column_width)
            .unwrap_or(DEFAULT_MAX_COLUMN_WIDTH)
    }

    pub fn output(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_column_width(None), DEFAULT_MAX_COLUMN_WIDTH);
        assert_eq!(config.output(None), OutputFormat::Table);
    }

    #[test]
    fn test_missing_file_yields_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_and_flag_override() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "max_column_width = 30\noutput = \"json\"\n")?;

        let config = Config::load(Some(path.as_path()))?;
        assert_eq!(config.max_column_width(None), 30);
        assert_eq!(config.max_column_width(Some(12)), 12);
        assert_eq!(config.output(None), OutputFormat::Json);
        assert_eq!(config.output(Some(OutputFormat::Table)), OutputFormat::Table);
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "max_column_width = \"wide\"\n")?;

        assert!(Config::load_from(&path).is_err());
        Ok(())
    }
}
