use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::geometry::{AreaMethod, PADDING, Region};
use crate::session::INITIAL_REGION;

fn default_padding() -> f64 {
    PADDING
}
fn default_initial_region() -> Region {
    INITIAL_REGION
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Degrees added to bounding-box spans
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub area_method: AreaMethod,
    /// Camera region shown before any polygon is selected
    #[serde(default = "default_initial_region")]
    pub initial_region: Region,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            area_method: AreaMethod::default(),
            initial_region: default_initial_region(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// First config file found on the search path that parses
    ///
    /// Files that exist but fail to parse are skipped and reported in the
    /// returned warning messages for the caller to log.
    pub fn load() -> (Option<Self>, Vec<String>) {
        Self::load_from(&get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> (Option<Self>, Vec<String>) {
        let mut warnings = Vec::new();

        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return (Some(config), warnings),
                    Err(e) => {
                        warnings.push(format!("Failed to parse config file {:?}: {}", path, e));
                    }
                }
            }
        }
        (None, warnings)
    }

    /// Read one explicit config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("mapdraw.toml"));
    paths.push(PathBuf::from(".mapdraw.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mapdraw").join("config.toml"));
        paths.push(config_dir.join("mapdraw.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mapdraw.toml"));
    }

    paths
}
