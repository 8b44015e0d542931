//! Configuration loading for the CLI: `guidegen.toml` on disk, defaults
//! when absent.

use std::{
  collections::BTreeMap,
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use guidegen_core::{
  config::GuidesConfig,
  coordinates::Coordinate,
  license::License,
};
use log::{debug, info};
use serde::Deserialize;

/// Starter configuration written by `guidegen init`.
const DEFAULT_CONFIG: &str = r#"# guidegen configuration.
# Every key is optional; omitted keys fall back to built-in defaults.

title         = "Guides"
home-page-url = "https://guides.example.io/latest/"
api-url       = "https://docs.micronaut.io/latest/api"
version       = "4.0.0"

# Directory of HTML templates overriding the embedded ones.
# templates-dir = "templates"

# Dependency coordinates referenced by @{key}Version@ placeholders.
[coordinates]
# log4j-core = { version = "2.23.1" }
"#;

/// Everything the generator needs from `guidegen.toml`: the engine
/// configuration plus the dependency-coordinate table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
  #[serde(flatten)]
  pub guides: GuidesConfig,

  /// Directory of HTML templates overriding the embedded ones.
  pub templates_dir: Option<PathBuf>,

  pub coordinates: BTreeMap<String, Coordinate>,
}

impl Config {
  /// Loads the configuration file, falling back to defaults when the file
  /// does not exist.
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      debug!(
        "No configuration file at {}, using defaults",
        path.display()
      );
      return Ok(Self::default());
    }
    let content = fs::read_to_string(path)
      .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content)
      .wrap_err_with(|| format!("Failed to parse {}", path.display()))
  }

  /// Writes the starter configuration file.
  pub fn write_default(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
    }
    fs::write(path, DEFAULT_CONFIG)
      .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    info!("Configuration file created: {}", path.display());
    Ok(())
  }

  /// Loads the license header named by the configuration; an unset path
  /// yields an empty license and disables line exclusion.
  pub fn load_license(&self) -> Result<License> {
    let Some(path) = &self.guides.license_path else {
      return Ok(License::default());
    };
    let content = fs::read_to_string(path)
      .wrap_err_with(|| format!("Failed to read license header {path}"))?;
    Ok(License::from_header(&content))
  }
}
