use serde::Deserialize;

use combobox::{ComboboxConfig, ResponsiveConfig, ShortQueryPolicy};

use crate::cli::CliArgs;

use super::super::util::non_blank;

/// `[behavior]` values as read from config files and the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BehaviorSection {
    pub(super) searchable: Option<bool>,
    pub(super) single_select: Option<bool>,
    pub(super) allow_deselect: Option<bool>,
    pub(super) deduplicate_options: Option<bool>,
    pub(super) hide_select_all: Option<bool>,
    pub(super) close_on_select: Option<bool>,
    pub(super) disabled: Option<bool>,
    pub(super) debounce_ms: Option<u64>,
    pub(super) min_search_length: Option<usize>,
    pub(super) short_query: Option<ShortQueryPolicy>,
    pub(super) fetch_timeout_ms: Option<u64>,
    pub(super) max_count: Option<usize>,
    pub(super) responsive: Option<ResponsiveConfig>,
    pub(super) placeholder: Option<String>,
    pub(super) empty_message: Option<String>,
    pub(super) select_all_label: Option<String>,
}

impl BehaviorSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(value) = cli.searchable {
            self.searchable = Some(value);
        }
        if let Some(value) = cli.single_select {
            self.single_select = Some(value);
        }
        if let Some(value) = cli.allow_deselect {
            self.allow_deselect = Some(value);
        }
        if let Some(value) = cli.deduplicate {
            self.deduplicate_options = Some(value);
        }
        if let Some(value) = cli.debounce_ms {
            self.debounce_ms = Some(value);
        }
        if let Some(value) = cli.min_search_length {
            self.min_search_length = Some(value);
        }
        if let Some(value) = cli.short_query {
            self.short_query = Some(value.into());
        }
        if let Some(value) = cli.fetch_timeout_ms {
            self.fetch_timeout_ms = Some(value);
        }
        if let Some(value) = cli.max_count {
            self.max_count = Some(value);
        }
    }

    /// Fill unset values from [`ComboboxConfig::default`].
    pub(super) fn finalize(self) -> ComboboxConfig {
        let defaults = ComboboxConfig::default();
        ComboboxConfig {
            searchable: self.searchable.unwrap_or(defaults.searchable),
            single_select: self.single_select.unwrap_or(defaults.single_select),
            allow_deselect: self.allow_deselect.unwrap_or(defaults.allow_deselect),
            deduplicate_options: self
                .deduplicate_options
                .unwrap_or(defaults.deduplicate_options),
            hide_select_all: self.hide_select_all.unwrap_or(defaults.hide_select_all),
            close_on_select: self.close_on_select.unwrap_or(defaults.close_on_select),
            disabled: self.disabled.unwrap_or(defaults.disabled),
            debounce_ms: self.debounce_ms.unwrap_or(defaults.debounce_ms),
            min_search_length: self.min_search_length.unwrap_or(defaults.min_search_length),
            short_query: self.short_query.unwrap_or(defaults.short_query),
            fetch_timeout_ms: self.fetch_timeout_ms.or(defaults.fetch_timeout_ms),
            max_count: self.max_count.or(defaults.max_count),
            responsive: self.responsive.unwrap_or(defaults.responsive),
            placeholder: non_blank(self.placeholder).unwrap_or(defaults.placeholder),
            empty_message: non_blank(self.empty_message).unwrap_or(defaults.empty_message),
            select_all_label: non_blank(self.select_all_label)
                .unwrap_or(defaults.select_all_label),
        }
    }
}
