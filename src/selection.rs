use combobox_option_api::{OptionAccessors, OptionKey};
use indexmap::IndexMap;

use crate::config::ComboboxConfig;

/// How many options may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
	/// At most one option. Re-selecting it clears the selection when
	/// `allow_deselect` is set.
	Single { allow_deselect: bool },
	Multiple,
}

impl SelectionMode {
	#[must_use]
	pub fn from_config(config: &ComboboxConfig) -> Self {
		if config.single_select {
			Self::Single {
				allow_deselect: config.allow_deselect,
			}
		} else {
			Self::Multiple
		}
	}

	#[must_use]
	pub fn is_single(self) -> bool {
		matches!(self, Self::Single { .. })
	}
}

/// The selection as reported to value-change listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionValue<T> {
	Single(Option<T>),
	Multiple(Vec<T>),
}

/// Selected options keyed by their value key, in selection order.
///
/// The option itself is kept next to its key so badges can still be labelled
/// after the option disappears from the current (filtered or fetched) list.
#[derive(Debug, Clone)]
pub struct Selection<T> {
	mode: SelectionMode,
	selected: IndexMap<OptionKey, T>,
}

impl<T: Clone> Selection<T> {
	#[must_use]
	pub fn new(mode: SelectionMode) -> Self {
		Self {
			mode,
			selected: IndexMap::new(),
		}
	}

	/// Create a selection pre-populated with `values`.
	pub fn with_values<I>(mode: SelectionMode, values: I, accessors: &OptionAccessors<T>) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let mut selection = Self::new(mode);
		selection.set_values(values, accessors);
		selection
	}

	#[must_use]
	pub fn mode(&self) -> SelectionMode {
		self.mode
	}

	/// Replace the selection wholesale, as when an externally controlled
	/// value changes. In single mode only the first value is kept.
	///
	/// Returns `true` when the selected keys changed.
	pub fn set_values<I>(&mut self, values: I, accessors: &OptionAccessors<T>) -> bool
	where
		I: IntoIterator<Item = T>,
	{
		let mut next = IndexMap::new();
		for value in values {
			if self.mode.is_single() && !next.is_empty() {
				break;
			}
			next.entry(accessors.key(&value)).or_insert(value);
		}

		let changed = !next.keys().eq(self.selected.keys());
		self.selected = next;
		changed
	}

	/// Toggle `option`. Disabled options are left untouched.
	///
	/// Returns `true` when the selection changed.
	pub fn toggle(&mut self, option: &T, accessors: &OptionAccessors<T>) -> bool {
		if accessors.is_disabled(option) {
			return false;
		}

		let key = accessors.key(option);
		match self.mode {
			SelectionMode::Single { allow_deselect } => {
				if self.selected.contains_key(&key) {
					if !allow_deselect {
						return false;
					}
					self.selected.clear();
					return true;
				}
				self.selected.clear();
				self.selected.insert(key, option.clone());
				true
			}
			SelectionMode::Multiple => {
				if self.selected.shift_remove(&key).is_none() {
					self.selected.insert(key, option.clone());
				}
				true
			}
		}
	}

	/// Add every non-disabled option in `visible`. Does nothing in single
	/// mode.
	pub fn select_all<'a, I>(&mut self, visible: I, accessors: &OptionAccessors<T>) -> bool
	where
		I: IntoIterator<Item = &'a T>,
		T: 'a,
	{
		if self.mode.is_single() {
			return false;
		}

		let mut changed = false;
		for option in visible {
			if accessors.is_disabled(option) {
				continue;
			}
			let key = accessors.key(option);
			if !self.selected.contains_key(&key) {
				self.selected.insert(key, option.clone());
				changed = true;
			}
		}
		changed
	}

	/// Empty the selection. Returns `true` when anything was selected.
	pub fn clear(&mut self) -> bool {
		let changed = !self.selected.is_empty();
		self.selected.clear();
		changed
	}

	pub fn remove(&mut self, key: &OptionKey) -> bool {
		self.selected.shift_remove(key).is_some()
	}

	#[must_use]
	pub fn contains(&self, key: &OptionKey) -> bool {
		self.selected.contains_key(key)
	}

	#[must_use]
	pub fn get(&self, key: &OptionKey) -> Option<&T> {
		self.selected.get(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &OptionKey> {
		self.selected.keys()
	}

	pub fn values(&self) -> impl Iterator<Item = &T> {
		self.selected.values()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.selected.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.selected.is_empty()
	}

	/// Snapshot the selection in the shape matching the selection mode.
	#[must_use]
	pub fn value(&self) -> SelectionValue<T> {
		match self.mode {
			SelectionMode::Single { .. } => SelectionValue::Single(self.selected.values().next().cloned()),
			SelectionMode::Multiple => SelectionValue::Multiple(self.selected.values().cloned().collect()),
		}
	}
}
