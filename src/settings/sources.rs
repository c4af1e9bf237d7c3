use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use combobox::app_dirs;

pub(super) const ENV_PREFIX: &str = "combobox";

/// Layer every settings source for one run. Later layers win:
/// default files, then `--config` files, then `COMBOBOX__*` variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let defaults = if cli.no_config {
        Vec::new()
    } else {
        default_config_files()
    };
    let optional = defaults.into_iter().map(|path| File::from(path).required(false));
    let explicit = cli.config.iter().map(|path| File::from(path.as_path()).required(true));

    let builder = optional
        .chain(explicit)
        .fold(Config::builder(), |builder, file| builder.add_source(file))
        .add_source(environment());

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("settings were already built"),
        other => other.into(),
    })
}

/// `COMBOBOX__BEHAVIOR__DEBOUNCE_MS=150` sets `behavior.debounce_ms`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Files read when `--no-config` is absent. A missing file is skipped.
/// `combobox.toml` in the working directory overrides `.combobox.toml`,
/// which overrides the per-user `config.toml`.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let user = app_dirs::config_file().ok();
    let project = env::current_dir()
        .ok()
        .into_iter()
        .flat_map(|dir| [dir.join(".combobox.toml"), dir.join("combobox.toml")]);

    user.into_iter().chain(project).collect()
}
