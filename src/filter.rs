//! Derivation of the visible option list.
//!
//! [`visible_options`] is a pure function of the option set, the query and
//! the filter switches. Callers recompute it whenever any of them changes
//! instead of patching a previous result.

use std::collections::HashSet;

use combobox_option_api::{OptionAccessors, OptionSet};
use log::trace;

use crate::config::ComboboxConfig;

/// Switches that control how [`visible_options`] narrows the option set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
	/// Apply the query to option labels.
	pub match_query: bool,
	/// Keep only the first option for every value key.
	pub deduplicate: bool,
	/// Queries shorter than this (in characters) match everything.
	pub min_search_length: usize,
}

impl FilterOptions {
	/// Derive filter switches from a combobox configuration.
	///
	/// Remote option lists were already narrowed by the fetch collaborator,
	/// so the query is not applied to them a second time.
	#[must_use]
	pub fn from_config(config: &ComboboxConfig, remote: bool) -> Self {
		Self {
			match_query: config.searchable && !remote,
			deduplicate: config.deduplicate_options,
			min_search_length: config.min_search_length,
		}
	}
}

/// A group that still has options after filtering.
#[derive(Debug, PartialEq)]
pub struct VisibleGroup<'a, T> {
	pub group: &'a str,
	pub options: Vec<&'a T>,
}

/// Options to display, borrowing from the source [`OptionSet`] and keeping
/// its shape.
#[derive(Debug, PartialEq)]
pub enum VisibleOptions<'a, T> {
	Flat(Vec<&'a T>),
	Grouped(Vec<VisibleGroup<'a, T>>),
}

impl<'a, T> VisibleOptions<'a, T> {
	#[must_use]
	pub fn is_grouped(&self) -> bool {
		matches!(self, Self::Grouped(_))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			Self::Flat(options) => options.len(),
			Self::Grouped(groups) => groups.iter().map(|group| group.options.len()).sum(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterate the visible options in display order.
	pub fn iter(&self) -> Box<dyn Iterator<Item = &'a T> + '_> {
		match self {
			Self::Flat(options) => Box::new(options.iter().copied()),
			Self::Grouped(groups) => Box::new(
				groups
					.iter()
					.flat_map(|group| group.options.iter().copied()),
			),
		}
	}
}

/// Compute the options to display for `query`.
///
/// Matching is a case-insensitive substring test against each option's
/// label. Grouped sets are filtered per group and groups left without
/// options are dropped. Deduplication runs over the matching options in
/// encounter order, across group boundaries.
pub fn visible_options<'a, T>(
	options: &'a OptionSet<T>,
	query: &str,
	accessors: &OptionAccessors<T>,
	filter: FilterOptions,
) -> VisibleOptions<'a, T> {
	let needle = effective_needle(query, filter);
	let mut seen = HashSet::new();
	let mut keep = |option: &T| {
		if let Some(needle) = &needle
			&& !accessors.label(option).to_lowercase().contains(needle.as_str())
		{
			return false;
		}
		!filter.deduplicate || seen.insert(accessors.key(option))
	};

	let visible = match options {
		OptionSet::Flat(list) => VisibleOptions::Flat(list.iter().filter(|option| keep(*option)).collect()),
		OptionSet::Grouped(groups) => VisibleOptions::Grouped(
			groups
				.iter()
				.filter_map(|group| {
					let options: Vec<&T> =
						group.options.iter().filter(|option| keep(*option)).collect();
					(!options.is_empty()).then_some(VisibleGroup {
						group: group.group.as_str(),
						options,
					})
				})
				.collect(),
		),
	};

	trace!(
		"{} of {} options visible for query {query:?}",
		visible.len(),
		options.len()
	);
	visible
}

fn effective_needle(query: &str, filter: FilterOptions) -> Option<String> {
	if !filter.match_query || query.is_empty() {
		return None;
	}
	if query.chars().count() < filter.min_search_length {
		return None;
	}
	Some(query.to_lowercase())
}

#[cfg(test)]
mod tests {
	use combobox_option_api::{OptionGroup, OptionKey};

	use super::*;

	fn strings(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	fn searching() -> FilterOptions {
		FilterOptions {
			match_query: true,
			..FilterOptions::default()
		}
	}

	fn labels<T>(visible: &VisibleOptions<'_, T>, accessors: &OptionAccessors<T>) -> Vec<String> {
		visible.iter().map(|option| accessors.label(option)).collect()
	}

	#[test]
	fn substring_match_is_case_insensitive() {
		let set = OptionSet::Flat(strings(&["Apple", "Banana", "Cherry"]));
		let accessors = OptionAccessors::default();

		let visible = visible_options(&set, "an", &accessors, searching());
		assert_eq!(labels(&visible, &accessors), ["Banana"]);

		let visible = visible_options(&set, "CHER", &accessors, searching());
		assert_eq!(labels(&visible, &accessors), ["Cherry"]);
	}

	#[test]
	fn query_is_ignored_when_not_searchable() {
		let set = OptionSet::Flat(strings(&["Apple", "Banana", "Cherry"]));
		let accessors = OptionAccessors::default();

		let visible = visible_options(&set, "an", &accessors, FilterOptions::default());
		assert_eq!(visible.len(), 3);
	}

	#[test]
	fn empty_and_short_queries_match_everything() {
		let set = OptionSet::Flat(strings(&["Apple", "Banana", "Cherry"]));
		let accessors = OptionAccessors::default();
		let filter = FilterOptions {
			min_search_length: 3,
			..searching()
		};

		assert_eq!(visible_options(&set, "", &accessors, filter).len(), 3);
		assert_eq!(visible_options(&set, "an", &accessors, filter).len(), 3);
		assert_eq!(visible_options(&set, "ana", &accessors, filter).len(), 1);
	}

	#[test]
	fn empty_groups_are_dropped() {
		let set = OptionSet::Grouped(vec![
			OptionGroup::new("Fruit", strings(&["Apple", "Banana"])),
			OptionGroup::new("Veg", strings(&["Carrot"])),
		]);
		let accessors = OptionAccessors::default();
		let carrot = "Carrot".to_string();

		let visible = visible_options(&set, "Carrot", &accessors, searching());
		assert_eq!(
			visible,
			VisibleOptions::Grouped(vec![VisibleGroup {
				group: "Veg",
				options: vec![&carrot],
			}])
		);
	}

	#[test]
	fn every_visible_label_contains_the_query() {
		let set = OptionSet::Grouped(vec![
			OptionGroup::new("A", strings(&["Alpha", "alphabet", "Beta", "GAMMA"])),
			OptionGroup::new("B", strings(&["Delta", "epsilon", "Zeta", "eta"])),
		]);
		let accessors = OptionAccessors::default();

		for query in ["a", "ET", "pha", "mm", "x", "eta"] {
			let visible = visible_options(&set, query, &accessors, searching());
			for label in labels(&visible, &accessors) {
				assert!(
					label.to_lowercase().contains(&query.to_lowercase()),
					"{label} does not contain {query}"
				);
			}
		}
	}

	#[derive(Debug, PartialEq)]
	struct Tagged {
		id: i64,
		name: &'static str,
	}

	fn tagged_accessors() -> OptionAccessors<Tagged> {
		OptionAccessors::new(
			|option: &Tagged| option.name.to_string(),
			|option: &Tagged| OptionKey::Int(option.id),
		)
	}

	#[test]
	fn deduplication_keeps_first_occurrence_across_groups() {
		let set = OptionSet::Grouped(vec![
			OptionGroup::new(
				"Recent",
				vec![Tagged { id: 1, name: "One (recent)" }, Tagged { id: 2, name: "Two" }],
			),
			OptionGroup::new(
				"All",
				vec![
					Tagged { id: 1, name: "One" },
					Tagged { id: 2, name: "Two again" },
				],
			),
		]);
		let accessors = tagged_accessors();
		let filter = FilterOptions {
			deduplicate: true,
			..FilterOptions::default()
		};

		let visible = visible_options(&set, "", &accessors, filter);
		assert_eq!(labels(&visible, &accessors), ["One (recent)", "Two"]);
		let VisibleOptions::Grouped(groups) = visible else {
			panic!("expected grouped output");
		};
		assert_eq!(groups.len(), 1);
		assert_eq!(groups[0].group, "Recent");
	}

	#[test]
	fn deduplication_only_considers_matching_options() {
		let set = OptionSet::Flat(vec![
			Tagged { id: 7, name: "Seven" },
			Tagged { id: 7, name: "Sieben" },
		]);
		let accessors = tagged_accessors();
		let filter = FilterOptions {
			deduplicate: true,
			..searching()
		};

		let visible = visible_options(&set, "sieb", &accessors, filter);
		assert_eq!(labels(&visible, &accessors), ["Sieben"]);
	}

	#[test]
	fn duplicates_survive_without_deduplication() {
		let set = OptionSet::Flat(strings(&["Apple", "Apple"]));
		let accessors = OptionAccessors::default();
		assert_eq!(visible_options(&set, "", &accessors, searching()).len(), 2);
	}

	#[test]
	fn remote_lists_are_not_matched_locally() {
		let config = ComboboxConfig::default();
		assert!(FilterOptions::from_config(&config, false).match_query);
		assert!(!FilterOptions::from_config(&config, true).match_query);
	}
}
