use std::time::Duration;

use crate::config::{ComboboxConfig, DEFAULT_DEBOUNCE_MS, ShortQueryPolicy};

/// Where the fetch state machine currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
	/// No timer pending and no request awaited.
	#[default]
	Idle,
	/// A query change is waiting out the debounce delay.
	Debouncing,
	/// The latest request has not completed yet.
	Fetching,
	/// The latest request failed.
	Error,
}

impl FetchPhase {
	/// Whether an event is still expected to move the machine forward.
	#[must_use]
	pub fn is_busy(self) -> bool {
		matches!(self, Self::Debouncing | Self::Fetching)
	}
}

/// Timing and gating for remote fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
	pub debounce: Duration,
	/// Queries shorter than this (in characters) are never sent.
	pub min_search_length: usize,
	pub short_query: ShortQueryPolicy,
	/// Upper bound for a single fetch. `None` waits indefinitely.
	pub timeout: Option<Duration>,
}

impl Default for FetchSettings {
	fn default() -> Self {
		Self {
			debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
			min_search_length: 0,
			short_query: ShortQueryPolicy::default(),
			timeout: None,
		}
	}
}

impl FetchSettings {
	#[must_use]
	pub fn from_config(config: &ComboboxConfig) -> Self {
		Self {
			debounce: config.debounce(),
			min_search_length: config.min_search_length,
			short_query: config.short_query,
			timeout: config.fetch_timeout(),
		}
	}
}
