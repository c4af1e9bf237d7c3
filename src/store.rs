use combobox_option_api::OptionSet;
use log::debug;

use crate::selection::{Selection, SelectionMode};

/// Canonical state behind a combobox: the options (static or fetched), the
/// selection, the search query and the remote loading status.
#[derive(Debug, Clone)]
pub struct OptionStore<T> {
	options: OptionSet<T>,
	selection: Selection<T>,
	query: String,
	loading: bool,
	error: Option<String>,
}

impl<T: Clone> OptionStore<T> {
	#[must_use]
	pub fn new(options: OptionSet<T>, selection: Selection<T>) -> Self {
		Self {
			options,
			selection,
			query: String::new(),
			loading: false,
			error: None,
		}
	}

	#[must_use]
	pub fn empty(mode: SelectionMode) -> Self {
		Self::new(OptionSet::default(), Selection::new(mode))
	}

	pub fn options(&self) -> &OptionSet<T> {
		&self.options
	}

	/// Replace the options, as when the owner passes a new option list.
	pub fn set_options(&mut self, options: OptionSet<T>) {
		debug!(
			"options replaced: {} options, grouped: {}",
			options.len(),
			options.is_grouped()
		);
		self.options = options;
	}

	/// Store the result of a successful fetch and clear the loading status.
	pub fn apply_fetched(&mut self, options: Vec<T>) {
		self.set_options(OptionSet::Flat(options));
		self.loading = false;
		self.error = None;
	}

	pub fn clear_options(&mut self) {
		self.options = OptionSet::default();
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	/// Update the query. Returns `true` when it changed.
	pub fn set_query(&mut self, query: &str) -> bool {
		if self.query == query {
			return false;
		}
		self.query.clear();
		self.query.push_str(query);
		true
	}

	pub fn selection(&self) -> &Selection<T> {
		&self.selection
	}

	pub fn selection_mut(&mut self) -> &mut Selection<T> {
		&mut self.selection
	}

	pub fn replace_selection(&mut self, selection: Selection<T>) {
		self.selection = selection;
	}

	pub fn loading(&self) -> bool {
		self.loading
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn begin_loading(&mut self) {
		self.loading = true;
	}

	/// Stop loading without touching options or error, as when a pending
	/// request is abandoned.
	pub fn cancel_loading(&mut self) {
		self.loading = false;
	}

	/// Record a failed fetch. The current options are kept.
	pub fn fail(&mut self, message: impl Into<String>) {
		self.loading = false;
		self.error = Some(message.into());
	}
}
