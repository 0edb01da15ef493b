use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/u2p/config.toml`.
///
/// Both fields are fallbacks: a CLI flag always wins over the config value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct U2pConfig {
    /// Collection name used when `--name` is not given.
    #[serde(default)]
    pub default_name: Option<String>,
    /// Host override used when `--host` is not given (e.g. "{{base_url}}").
    #[serde(default)]
    pub default_host: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("u2p")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<U2pConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = U2pConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: U2pConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = U2pConfig::default();
        assert!(cfg.default_name.is_none());
        assert!(cfg.default_host.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = U2pConfig {
            default_name: Some("Team APIs".to_string()),
            default_host: Some("{{base_url}}".to_string()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: U2pConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.default_name.as_deref(), Some("Team APIs"));
        assert_eq!(parsed.default_host.as_deref(), Some("{{base_url}}"));
    }

    #[test]
    fn config_toml_partial() {
        let cfg: U2pConfig = toml::from_str("default_host = \"{{base_url}}\"\n").unwrap();
        assert!(cfg.default_name.is_none());
        assert_eq!(cfg.default_host.as_deref(), Some("{{base_url}}"));
    }

    #[test]
    fn config_toml_empty() {
        let cfg: U2pConfig = toml::from_str("").unwrap();
        assert!(cfg.default_name.is_none());
        assert!(cfg.default_host.is_none());
    }
}
