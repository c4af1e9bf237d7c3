//! The combobox state owner.
//!
//! [`Combobox`] ties the option store, the filter engine, the selection rules
//! and the optional fetch controller together. Renderers feed it user input
//! and draw [`Combobox::view`].

mod builder;
mod view;

use combobox_option_api::{OptionAccessors, OptionKey, OptionSet};
use log::debug;

pub use builder::ComboboxBuilder;
pub use view::{ComboboxView, SelectAllState};

use crate::badges::BadgeView;
use crate::config::{ComboboxConfig, Viewport};
use crate::fetch::{FetchController, FetchPhase};
use crate::filter::{FilterOptions, VisibleOptions, visible_options};
use crate::selection::{Selection, SelectionValue};
use crate::store::OptionStore;

pub(crate) type ValueListener<T> = Box<dyn FnMut(&SelectionValue<T>) + Send>;

/// Who owns the selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
	/// The owner passes the value in and applies proposed changes itself.
	Controlled,
	/// The combobox commits changes itself.
	Uncontrolled,
}

pub struct Combobox<T> {
	config: ComboboxConfig,
	accessors: OptionAccessors<T>,
	store: OptionStore<T>,
	fetch: Option<FetchController<T>>,
	value_source: ValueSource,
	on_value_change: Option<ValueListener<T>>,
	open: bool,
	viewport: Option<Viewport>,
}

impl<T: Clone + Send + 'static> Combobox<T> {
	pub fn builder(accessors: OptionAccessors<T>) -> ComboboxBuilder<T> {
		ComboboxBuilder::new(accessors)
	}

	pub fn config(&self) -> &ComboboxConfig {
		&self.config
	}

	pub fn accessors(&self) -> &OptionAccessors<T> {
		&self.accessors
	}

	pub fn store(&self) -> &OptionStore<T> {
		&self.store
	}

	pub fn selection(&self) -> &Selection<T> {
		self.store.selection()
	}

	pub fn value_source(&self) -> ValueSource {
		self.value_source
	}

	/// Whether options come from a fetcher rather than a static list.
	pub fn is_remote(&self) -> bool {
		self.fetch.is_some()
	}

	pub fn fetch_phase(&self) -> Option<FetchPhase> {
		self.fetch.as_ref().map(FetchController::phase)
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn open(&mut self) {
		self.open = true;
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	pub fn toggle_open(&mut self) {
		self.open = !self.open;
	}

	pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
		self.viewport = viewport;
	}

	/// Update the search query. Remote comboboxes debounce a fetch, unless the
	/// combobox is not searchable.
	pub fn set_query(&mut self, query: &str) {
		if !self.store.set_query(query) || !self.config.searchable {
			return;
		}
		if let Some(fetch) = self.fetch.as_mut() {
			fetch.query_changed(query);
		}
	}

	/// Replace the static options.
	pub fn set_options(&mut self, options: OptionSet<T>) {
		self.store.set_options(options);
	}

	/// Apply an externally owned value. Does not notify the listener.
	pub fn set_value(&mut self, value: impl IntoIterator<Item = T>) {
		if self.store.selection_mut().set_values(value, &self.accessors) {
			debug!("value replaced by owner");
		}
	}

	/// Fetch options for the current query immediately, as on mount.
	/// Returns the request id, or `None` without a fetcher.
	pub fn load(&mut self) -> Option<u64> {
		let query = self.store.query().to_string();
		let fetch = self.fetch.as_mut()?;
		Some(fetch.fetch_now(&query, &mut self.store))
	}

	/// Apply queued fetch events without waiting.
	pub fn pump(&mut self) -> usize {
		match self.fetch.as_mut() {
			Some(fetch) => fetch.pump(&mut self.store),
			None => 0,
		}
	}

	/// Wait for the next fetch event and apply it.
	pub async fn step(&mut self) -> bool {
		match self.fetch.as_mut() {
			Some(fetch) => fetch.step(&mut self.store).await,
			None => false,
		}
	}

	/// Wait until no debounce timer is pending and the latest request has
	/// completed.
	pub async fn settle(&mut self) {
		if let Some(fetch) = self.fetch.as_mut() {
			fetch.settle(&mut self.store).await;
		}
	}

	/// Toggle the option identified by `key`.
	///
	/// The option is looked up in the current options first and then in the
	/// selection, so selected options that are no longer listed can still be
	/// deselected. Unknown keys, disabled options and a disabled combobox are
	/// ignored.
	pub fn toggle(&mut self, key: &OptionKey) -> bool {
		if self.config.disabled {
			return false;
		}
		let Some(option) = self
			.store
			.options()
			.find(key, &self.accessors)
			.or_else(|| self.store.selection().get(key))
			.cloned()
		else {
			return false;
		};

		let changed = self.commit(|selection, accessors| selection.toggle(&option, accessors));
		if changed && (self.config.close_on_select || self.config.single_select) {
			self.open = false;
		}
		changed
	}

	/// Select every visible, non-disabled option.
	pub fn select_all(&mut self) -> bool {
		if self.config.disabled {
			return false;
		}
		let visible: Vec<T> = self.visible().iter().cloned().collect();
		self.commit(|selection, accessors| selection.select_all(&visible, accessors))
	}

	/// Deselect everything, whatever the current query.
	pub fn clear_all(&mut self) -> bool {
		if self.config.disabled {
			return false;
		}
		self.commit(|selection, _| selection.clear())
	}

	/// Deselect one option, as from a badge's remove button.
	pub fn remove(&mut self, key: &OptionKey) -> bool {
		if self.config.disabled {
			return false;
		}
		self.commit(|selection, _| selection.remove(key))
	}

	/// Run one user action against the selection and notify the listener
	/// once if it changed anything.
	fn commit<F>(&mut self, mutate: F) -> bool
	where
		F: FnOnce(&mut Selection<T>, &OptionAccessors<T>) -> bool,
	{
		let value = match self.value_source {
			ValueSource::Uncontrolled => {
				let changed = mutate(self.store.selection_mut(), &self.accessors);
				changed.then(|| self.store.selection().value())
			}
			ValueSource::Controlled => {
				let mut proposed = self.store.selection().clone();
				let changed = mutate(&mut proposed, &self.accessors);
				changed.then(|| proposed.value())
			}
		};

		let Some(value) = value else {
			return false;
		};
		if let Some(listener) = self.on_value_change.as_mut() {
			listener(&value);
		}
		true
	}

	/// The options to display for the current query.
	pub fn visible(&self) -> VisibleOptions<'_, T> {
		visible_options(
			self.store.options(),
			self.store.query(),
			&self.accessors,
			FilterOptions::from_config(&self.config, self.is_remote()),
		)
	}

	pub fn badges(&self) -> BadgeView {
		BadgeView::build(
			self.store.selection(),
			&self.accessors,
			self.config.max_count_for(self.viewport),
		)
	}

	/// Snapshot the render model.
	pub fn view(&self) -> ComboboxView<'_, T> {
		let options = self.visible();
		let selection = self.store.selection();

		let select_all = (!self.config.hide_select_all && !self.config.single_select).then(|| {
			let mut selectable = options
				.iter()
				.filter(|option| !self.accessors.is_disabled(option))
				.peekable();
			let any = selectable.peek().is_some();
			let checked = any && selectable.all(|option| selection.contains(&self.accessors.key(option)));
			SelectAllState {
				label: self.config.select_all_label.as_str(),
				checked,
			}
		});

		let loading = self.store.loading();
		let empty_message = (options.is_empty() && !loading).then_some(self.config.empty_message.as_str());
		let placeholder = selection.is_empty().then_some(self.config.placeholder.as_str());

		ComboboxView {
			query: self.store.query(),
			selected: selection.keys().collect(),
			badges: self.badges(),
			loading,
			error: self.store.error(),
			open: self.open,
			placeholder,
			empty_message,
			select_all,
			options,
		}
	}
}

#[cfg(test)]
mod tests;
