use std::path::PathBuf;

use combobox::{ComboboxConfig, JsonFields, Viewport};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Run-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub file: PathBuf,
	pub query: String,
	pub select: Vec<String>,
	pub select_all: bool,
	pub remote: bool,
	pub viewport_width: Option<u32>,
	pub behavior: ComboboxConfig,
	pub fields: JsonFields,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn viewport(&self) -> Option<Viewport> {
		self.viewport_width.map(Viewport::from_width)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
