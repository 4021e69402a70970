use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/cinecat/config.toml`.
///
/// Presentation knobs only. The embed host allowlist is fixed in code and
/// cannot be widened from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinecatConfig {
    /// Default output format; `--json` on the command line overrides it.
    #[serde(default)]
    pub output: OutputFormat,
    /// Maximum genres listed on a detail view.
    #[serde(default = "default_detail_genre_limit")]
    pub detail_genre_limit: usize,
    /// Maximum genres listed on a catalog card.
    #[serde(default = "default_card_genre_limit")]
    pub card_genre_limit: usize,
}

fn default_detail_genre_limit() -> usize {
    6
}

fn default_card_genre_limit() -> usize {
    3
}

impl Default for CinecatConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            detail_genre_limit: default_detail_genre_limit(),
            card_genre_limit: default_card_genre_limit(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cinecat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CinecatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CinecatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CinecatConfig =
        toml::from_str(&data).with_context(|| format!("invalid config at {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CinecatConfig::default();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert_eq!(cfg.detail_genre_limit, 6);
        assert_eq!(cfg.card_genre_limit, 3);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CinecatConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CinecatConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.output, cfg.output);
        assert_eq!(parsed.detail_genre_limit, cfg.detail_genre_limit);
        assert_eq!(parsed.card_genre_limit, cfg.card_genre_limit);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            output = "json"
            detail_genre_limit = 10
            card_genre_limit = 1
        "#;
        let cfg: CinecatConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.detail_genre_limit, 10);
        assert_eq!(cfg.card_genre_limit, 1);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: CinecatConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert_eq!(cfg.detail_genre_limit, 6);
        assert_eq!(cfg.card_genre_limit, 3);
    }

    #[test]
    fn config_toml_rejects_unknown_output() {
        assert!(toml::from_str::<CinecatConfig>(r#"output = "yaml""#).is_err());
    }
}
