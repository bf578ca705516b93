//! Test utilities shared across test modules

use crate::paths::Paths;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a Paths struct rooted at a temporary home directory
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    Paths::from_home(temp_dir.path())
}

/// Write `content` as `~/.aws/config` under the temporary home
pub fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
    let paths = setup_test_paths(temp_dir);
    if let Some(aws_dir) = paths.config_file.parent() {
        fs::create_dir_all(aws_dir).unwrap();
    }
    fs::write(&paths.config_file, content).unwrap();
    paths.config_file
}
