use anyhow::{Context, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// All computed paths used by awsprof
#[derive(Debug, Clone)]
pub struct Paths {
    /// ~/.aws/config, or whatever `--config` pointed at
    pub config_file: PathBuf,
}

impl Paths {
    pub fn new() -> Result<Self> {
        let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
        Ok(Self::from_home(base_dirs.home_dir()))
    }

    /// Lay out the standard `.aws` paths under the given home directory
    pub fn from_home(home: &Path) -> Self {
        Self {
            config_file: home.join(".aws").join("config"),
        }
    }

    /// Use an explicit config file; the home directory is never consulted
    pub fn with_config_file(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
        }
    }
}
