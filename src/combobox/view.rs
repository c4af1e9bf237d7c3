use combobox_option_api::OptionKey;

use crate::badges::BadgeView;
use crate::filter::VisibleOptions;

/// Everything a renderer needs to draw the combobox at one point in time.
#[derive(Debug)]
pub struct ComboboxView<'a, T> {
	pub query: &'a str,
	pub options: VisibleOptions<'a, T>,
	pub selected: Vec<&'a OptionKey>,
	pub badges: BadgeView,
	pub loading: bool,
	pub error: Option<&'a str>,
	pub open: bool,
	/// Shown in the trigger while nothing is selected.
	pub placeholder: Option<&'a str>,
	/// Shown in the list when nothing is visible and nothing is loading.
	pub empty_message: Option<&'a str>,
	/// `None` when the select-all row is hidden or unavailable.
	pub select_all: Option<SelectAllState<'a>>,
}

/// State of the select-all row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectAllState<'a> {
	pub label: &'a str,
	/// Every selectable visible option is selected.
	pub checked: bool,
}
