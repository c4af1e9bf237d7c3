//! Resolve the configuration directory for `combobox`.
//!
//! An environment override wins over the platform location provided by the
//! `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "combobox";

pub const CONFIG_DIR_ENV: &str = "COMBOBOX_CONFIG_DIR";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for combobox"))
}

/// Resolve an override directory from an environment variable. Empty values
/// count as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    (!value.is_empty()).then(|| PathBuf::from(value))
}

/// Return the directory holding the user's `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Path of the user-level configuration file.
pub fn config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}
