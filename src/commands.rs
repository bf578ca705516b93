//! High-level command orchestration for the CLI.
//!
//! `list` runs the whole pipeline: load the config, extract profiles, filter,
//! sort and render. `version` produces the `-v` output without touching any file.

use anyhow::Result;
use std::io::Write;

use crate::paths::Paths;
use crate::profiles::{filter_profiles, load_profiles, sort_profiles};
use crate::render::{Layout, render_profiles};

/// Build commit stamped in at compile time, if any
const COMMIT: Option<&str> = option_env!("AWSPROF_COMMIT");

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Substring matched against profile name and account number
    pub search: Option<String>,
    pub layout: Layout,
}

/// List profiles from the config file, writing rows to `out`
pub fn list<W: Write>(paths: &Paths, options: &ListOptions, out: &mut W) -> Result<()> {
    let profiles = load_profiles(&paths.config_file)?;
    let profiles = filter_profiles(profiles, options.search.as_deref().unwrap_or_default());
    let profiles = sort_profiles(profiles);

    render_profiles(&profiles, options.layout, out)
}

/// Version string printed by `-v`
pub fn version() -> String {
    format!("{}-{}", env!("CARGO_PKG_VERSION"), COMMIT.unwrap_or("unset"))
}
