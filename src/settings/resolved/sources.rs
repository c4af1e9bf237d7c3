use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) max_count: Option<SettingSource>,
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) fetch_timeout_ms: Option<SettingSource>,
	pub(crate) mobile_max_count: Option<SettingSource>,
	pub(crate) tablet_max_count: Option<SettingSource>,
	pub(crate) desktop_max_count: Option<SettingSource>,
}

impl ConfigSources {
	/// Source recorded for a setting, or its config key when none was.
	pub(crate) fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
		source.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
