use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_heading_level() -> usize {
    3
}

/// Global configuration loaded from `~/.config/hardoc/config.toml`.
///
/// Every field has a default so a partial (or missing) file works; CLI flags
/// override whatever the file says.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardocConfig {
    /// Qualify view names with their module path in headings.
    #[serde(default)]
    pub include_view_module: bool,
    /// Skip requests whose path resolves to no route instead of aborting.
    #[serde(default)]
    pub skip_unresolved: bool,
    /// Markdown heading depth for endpoint sections.
    #[serde(default = "default_heading_level")]
    pub heading_level: usize,
}

impl Default for HardocConfig {
    fn default() -> Self {
        Self {
            include_view_module: false,
            skip_unresolved: false,
            heading_level: 3,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hardoc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HardocConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HardocConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HardocConfig = toml::from_str(&data)?;
    Ok(cfg)
}
