use std::sync::Arc;

use combobox_option_api::{OptionAccessors, OptionSet};

use super::{Combobox, ValueListener, ValueSource};
use crate::config::{ComboboxConfig, Viewport};
use crate::fetch::{FetchController, FetchSettings, OptionFetcher};
use crate::selection::{Selection, SelectionMode, SelectionValue};
use crate::store::OptionStore;

/// Builder for [`Combobox`].
pub struct ComboboxBuilder<T> {
	accessors: OptionAccessors<T>,
	config: ComboboxConfig,
	options: OptionSet<T>,
	fetcher: Option<Arc<dyn OptionFetcher<T>>>,
	value_source: ValueSource,
	initial_value: Vec<T>,
	listener: Option<ValueListener<T>>,
	viewport: Option<Viewport>,
}

impl<T: Clone + Send + 'static> ComboboxBuilder<T> {
	pub(super) fn new(accessors: OptionAccessors<T>) -> Self {
		Self {
			accessors,
			config: ComboboxConfig::default(),
			options: OptionSet::default(),
			fetcher: None,
			value_source: ValueSource::Uncontrolled,
			initial_value: Vec::new(),
			listener: None,
			viewport: None,
		}
	}

	#[must_use]
	pub fn with_config(mut self, config: ComboboxConfig) -> Self {
		self.config = config;
		self
	}

	/// Static options, flat or grouped.
	#[must_use]
	pub fn with_options(mut self, options: impl Into<OptionSet<T>>) -> Self {
		self.options = options.into();
		self
	}

	/// Fetch options remotely as the query changes.
	#[must_use]
	pub fn with_fetcher(self, fetcher: impl OptionFetcher<T> + 'static) -> Self {
		self.with_shared_fetcher(Arc::new(fetcher))
	}

	#[must_use]
	pub fn with_shared_fetcher(mut self, fetcher: Arc<dyn OptionFetcher<T>>) -> Self {
		self.fetcher = Some(fetcher);
		self
	}

	/// Controlled value: user actions only propose changes through the
	/// value-change listener, and the owner applies them with
	/// [`Combobox::set_value`].
	#[must_use]
	pub fn with_value(mut self, value: impl IntoIterator<Item = T>) -> Self {
		self.value_source = ValueSource::Controlled;
		self.initial_value = value.into_iter().collect();
		self
	}

	/// Initial value of an uncontrolled combobox.
	#[must_use]
	pub fn with_default_value(mut self, value: impl IntoIterator<Item = T>) -> Self {
		self.value_source = ValueSource::Uncontrolled;
		self.initial_value = value.into_iter().collect();
		self
	}

	#[must_use]
	pub fn on_value_change<F>(mut self, listener: F) -> Self
	where
		F: FnMut(&SelectionValue<T>) + Send + 'static,
	{
		self.listener = Some(Box::new(listener));
		self
	}

	#[must_use]
	pub fn with_viewport(mut self, viewport: Viewport) -> Self {
		self.viewport = Some(viewport);
		self
	}

	/// Finish building. A fetcher requires a running Tokio runtime from this
	/// point on.
	pub fn build(self) -> Combobox<T> {
		let Self {
			accessors,
			config,
			options,
			fetcher,
			value_source,
			initial_value,
			listener,
			viewport,
		} = self;

		let mode = SelectionMode::from_config(&config);
		let selection = Selection::with_values(mode, initial_value, &accessors);
		let store = OptionStore::new(options, selection);
		let fetch = fetcher
			.map(|fetcher| FetchController::new(fetcher, FetchSettings::from_config(&config)));

		Combobox {
			config,
			accessors,
			store,
			fetch,
			value_source,
			on_value_change: listener,
			open: false,
			viewport,
		}
	}
}
