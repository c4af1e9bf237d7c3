use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod behavior;
mod fields;

use behavior::BehaviorSection;
use fields::FieldsSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    behavior: BehaviorSection,
    fields: FieldsSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.behavior.apply_cli_overrides(cli);
        self.fields.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let responsive = self.behavior.responsive.clone().unwrap_or_default();
        let sources = ConfigSources {
            max_count: detect_source(
                cli.max_count.is_some(),
                self.behavior.max_count.is_some(),
                "COMBOBOX__BEHAVIOR__MAX_COUNT",
                "--max-count",
                "behavior.max_count",
            ),
            debounce_ms: detect_source(
                cli.debounce_ms.is_some(),
                self.behavior.debounce_ms.is_some(),
                "COMBOBOX__BEHAVIOR__DEBOUNCE_MS",
                "--debounce-ms",
                "behavior.debounce_ms",
            ),
            fetch_timeout_ms: detect_source(
                cli.fetch_timeout_ms.is_some(),
                self.behavior.fetch_timeout_ms.is_some(),
                "COMBOBOX__BEHAVIOR__FETCH_TIMEOUT_MS",
                "--fetch-timeout-ms",
                "behavior.fetch_timeout_ms",
            ),
            mobile_max_count: detect_source(
                false,
                responsive.mobile.is_some(),
                "COMBOBOX__BEHAVIOR__RESPONSIVE__MOBILE__MAX_COUNT",
                "",
                "behavior.responsive.mobile.max_count",
            ),
            tablet_max_count: detect_source(
                false,
                responsive.tablet.is_some(),
                "COMBOBOX__BEHAVIOR__RESPONSIVE__TABLET__MAX_COUNT",
                "",
                "behavior.responsive.tablet.max_count",
            ),
            desktop_max_count: detect_source(
                false,
                responsive.desktop.is_some(),
                "COMBOBOX__BEHAVIOR__RESPONSIVE__DESKTOP__MAX_COUNT",
                "",
                "behavior.responsive.desktop.max_count",
            ),
        };

        let config = ResolvedConfig {
            file: cli.file.clone(),
            query: cli.query.clone().unwrap_or_default(),
            select: cli.select.clone(),
            select_all: cli.select_all,
            remote: cli.remote,
            viewport_width: cli.viewport_width,
            behavior: self.behavior.finalize(),
            fields: self.fields.finalize(),
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
