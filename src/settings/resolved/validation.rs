use combobox::BreakpointConfig;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

const MAX_DEBOUNCE_MS: u64 = 60_000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let behavior = &config.behavior;

	if behavior.max_count == Some(0) {
		return Err(ConfigError::invalid(
			"behavior.max_count",
			0,
			ConfigSources::or_key(&sources.max_count, "behavior.max_count"),
			"must be greater than zero",
		));
	}

	if behavior.fetch_timeout_ms == Some(0) {
		return Err(ConfigError::invalid(
			"behavior.fetch_timeout_ms",
			0,
			ConfigSources::or_key(&sources.fetch_timeout_ms, "behavior.fetch_timeout_ms"),
			"must be greater than zero",
		));
	}

	if behavior.debounce_ms > MAX_DEBOUNCE_MS {
		return Err(ConfigError::invalid(
			"behavior.debounce_ms",
			behavior.debounce_ms,
			ConfigSources::or_key(&sources.debounce_ms, "behavior.debounce_ms"),
			format!("must be at most {MAX_DEBOUNCE_MS}"),
		));
	}

	let responsive = [
		(
			&behavior.responsive.mobile,
			&sources.mobile_max_count,
			"behavior.responsive.mobile.max_count",
		),
		(
			&behavior.responsive.tablet,
			&sources.tablet_max_count,
			"behavior.responsive.tablet.max_count",
		),
		(
			&behavior.responsive.desktop,
			&sources.desktop_max_count,
			"behavior.responsive.desktop.max_count",
		),
	];
	for (breakpoint, source, key) in responsive {
		if let Some(BreakpointConfig { max_count: Some(0) }) = breakpoint {
			return Err(ConfigError::invalid(
				key,
				0,
				ConfigSources::or_key(source, key),
				"must be greater than zero",
			));
		}
	}

	Ok(())
}
