use std::time::Duration;

use serde::Deserialize;

/// Debounce applied to search input when no value is configured.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Widths below this are treated as [`Viewport::Mobile`].
pub const TABLET_MIN_WIDTH: u32 = 640;
/// Widths at or above this are treated as [`Viewport::Desktop`].
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Behaviour switches and labels for a combobox.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
	/// Filter options by the search query.
	pub searchable: bool,
	/// Keep at most one selected option.
	pub single_select: bool,
	/// Re-selecting the selected option clears a single selection.
	pub allow_deselect: bool,
	/// Collapse options sharing a value key to their first occurrence.
	pub deduplicate_options: bool,
	/// Do not offer the "select all" action.
	pub hide_select_all: bool,
	/// Close the popup after every successful toggle.
	pub close_on_select: bool,
	/// Reject every selection change.
	pub disabled: bool,
	/// Delay between the last keystroke and a remote fetch.
	pub debounce_ms: u64,
	/// Shortest query (in characters) that is searched for.
	pub min_search_length: usize,
	/// What happens to fetched options when the query is too short.
	pub short_query: ShortQueryPolicy,
	/// Abort remote fetches that take longer than this. Unset means no limit.
	pub fetch_timeout_ms: Option<u64>,
	/// Badges shown before the rest fold into "+N more".
	pub max_count: Option<usize>,
	/// Per-viewport overrides for `max_count`.
	pub responsive: ResponsiveConfig,
	pub placeholder: String,
	pub empty_message: String,
	pub select_all_label: String,
}

impl Default for ComboboxConfig {
	fn default() -> Self {
		Self {
			searchable: true,
			single_select: false,
			allow_deselect: true,
			deduplicate_options: false,
			hide_select_all: false,
			close_on_select: false,
			disabled: false,
			debounce_ms: DEFAULT_DEBOUNCE_MS,
			min_search_length: 0,
			short_query: ShortQueryPolicy::default(),
			fetch_timeout_ms: None,
			max_count: None,
			responsive: ResponsiveConfig::default(),
			placeholder: "Select options".to_string(),
			empty_message: "No results found.".to_string(),
			select_all_label: "Select all".to_string(),
		}
	}
}

impl ComboboxConfig {
	#[must_use]
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	#[must_use]
	pub fn fetch_timeout(&self) -> Option<Duration> {
		self.fetch_timeout_ms.map(Duration::from_millis)
	}

	/// Badge limit for `viewport`, falling back to the base `max_count`.
	#[must_use]
	pub fn max_count_for(&self, viewport: Option<Viewport>) -> Option<usize> {
		viewport
			.and_then(|viewport| self.responsive.for_viewport(viewport))
			.and_then(|breakpoint| breakpoint.max_count)
			.or(self.max_count)
	}
}

/// Handling of remote options once the query drops below the minimum length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortQueryPolicy {
	/// Empty the option list.
	#[default]
	Clear,
	/// Leave the last fetched options in place.
	Keep,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponsiveConfig {
	pub mobile: Option<BreakpointConfig>,
	pub tablet: Option<BreakpointConfig>,
	pub desktop: Option<BreakpointConfig>,
}

impl ResponsiveConfig {
	#[must_use]
	pub fn for_viewport(&self, viewport: Viewport) -> Option<&BreakpointConfig> {
		match viewport {
			Viewport::Mobile => self.mobile.as_ref(),
			Viewport::Tablet => self.tablet.as_ref(),
			Viewport::Desktop => self.desktop.as_ref(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BreakpointConfig {
	pub max_count: Option<usize>,
}

/// Coarse width class of the surface the combobox is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
	Mobile,
	Tablet,
	Desktop,
}

impl Viewport {
	#[must_use]
	pub fn from_width(width: u32) -> Self {
		if width < TABLET_MIN_WIDTH {
			Self::Mobile
		} else if width < DESKTOP_MIN_WIDTH {
			Self::Tablet
		} else {
			Self::Desktop
		}
	}
}
