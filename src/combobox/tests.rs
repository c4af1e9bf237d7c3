use std::sync::{Arc, Mutex};
use std::time::Duration;

use combobox_option_api::{OptionAccessors, OptionGroup, OptionKey, OptionSet};

use super::*;
use crate::config::{BreakpointConfig, ComboboxConfig, ResponsiveConfig, Viewport};
use crate::fetch::FetchPhase;
use crate::selection::SelectionValue;

#[derive(Debug, Clone, PartialEq)]
struct Fruit {
	id: i64,
	name: &'static str,
	sold_out: bool,
}

const fn fruit(id: i64, name: &'static str) -> Fruit {
	Fruit {
		id,
		name,
		sold_out: false,
	}
}

fn accessors() -> OptionAccessors<Fruit> {
	OptionAccessors::new(|fruit: &Fruit| fruit.name.to_string(), |fruit: &Fruit| OptionKey::Int(fruit.id))
		.with_disabled(|fruit: &Fruit| fruit.sold_out)
}

fn fruits() -> Vec<Fruit> {
	vec![
		fruit(1, "Apple"),
		fruit(2, "Apricot"),
		fruit(3, "Banana"),
		Fruit {
			sold_out: true,
			..fruit(4, "Blackberry")
		},
		fruit(5, "Cherry"),
	]
}

type Changes = Arc<Mutex<Vec<SelectionValue<Fruit>>>>;

fn recorder() -> (Changes, impl FnMut(&SelectionValue<Fruit>) + Send + 'static) {
	let changes: Changes = Arc::default();
	let sink = Arc::clone(&changes);
	(changes, move |value: &SelectionValue<Fruit>| {
		sink.lock().unwrap().push(value.clone())
	})
}

fn names(combobox: &Combobox<Fruit>) -> Vec<&'static str> {
	combobox.selection().values().map(|fruit| fruit.name).collect()
}

fn visible(combobox: &Combobox<Fruit>) -> Vec<&'static str> {
	combobox.visible().iter().map(|fruit| fruit.name).collect()
}

fn multi() -> Combobox<Fruit> {
	Combobox::builder(accessors()).with_options(fruits()).build()
}

#[test]
fn query_narrows_visible_options() {
	let mut combobox = multi();
	combobox.set_query("ap");
	assert_eq!(visible(&combobox), ["Apple", "Apricot"]);

	combobox.set_query("");
	assert_eq!(visible(&combobox).len(), 5);
}

#[test]
fn toggling_notifies_once_per_change() {
	let (changes, listener) = recorder();
	let mut combobox = Combobox::builder(accessors())
		.with_options(fruits())
		.on_value_change(listener)
		.build();

	assert!(combobox.toggle(&OptionKey::Int(3)));
	assert!(combobox.toggle(&OptionKey::Int(1)));
	assert_eq!(names(&combobox), ["Banana", "Apple"]);

	assert!(!combobox.toggle(&OptionKey::Int(4)));
	assert!(!combobox.toggle(&OptionKey::Int(99)));

	let changes = changes.lock().unwrap();
	assert_eq!(changes.len(), 2);
	assert_eq!(
		changes[1],
		SelectionValue::Multiple(vec![fruit(3, "Banana"), fruit(1, "Apple")])
	);
}

#[test]
fn select_all_only_touches_visible_options() {
	let (changes, listener) = recorder();
	let mut combobox = Combobox::builder(accessors())
		.with_options(fruits())
		.on_value_change(listener)
		.build();

	combobox.set_query("b");
	assert!(combobox.select_all());
	assert_eq!(names(&combobox), ["Banana"]);

	combobox.set_query("");
	assert_eq!(names(&combobox), ["Banana"]);
	assert!(!combobox.view().select_all.is_some_and(|state| state.checked));

	assert!(combobox.clear_all());
	assert!(combobox.selection().is_empty());
	assert!(!combobox.clear_all());
	assert_eq!(changes.lock().unwrap().len(), 2);
}

#[test]
fn select_all_row_is_checked_when_every_visible_option_is_selected() {
	let mut combobox = multi();
	combobox.set_query("ap");
	combobox.select_all();

	let view = combobox.view();
	let state = view.select_all.expect("select-all row");
	assert!(state.checked);
	assert_eq!(state.label, "Select all");
}

#[test]
fn selected_options_survive_being_filtered_out() {
	let mut combobox = multi();
	combobox.toggle(&OptionKey::Int(5));
	combobox.set_options(OptionSet::Flat(vec![fruit(1, "Apple")]));

	assert_eq!(names(&combobox), ["Cherry"]);
	assert!(combobox.remove(&OptionKey::Int(5)));
	assert!(combobox.selection().is_empty());
}

#[test]
fn single_select_replaces_and_closes() {
	let config = ComboboxConfig {
		single_select: true,
		..ComboboxConfig::default()
	};
	let (changes, listener) = recorder();
	let mut combobox = Combobox::builder(accessors())
		.with_config(config)
		.with_options(fruits())
		.on_value_change(listener)
		.build();

	combobox.open();
	combobox.toggle(&OptionKey::Int(1));
	assert!(!combobox.is_open());
	combobox.toggle(&OptionKey::Int(2));
	assert_eq!(names(&combobox), ["Apricot"]);
	assert!(combobox.view().select_all.is_none());

	assert_eq!(
		changes.lock().unwrap().last(),
		Some(&SelectionValue::Single(Some(fruit(2, "Apricot"))))
	);
}

#[test]
fn multi_select_stays_open_unless_configured() {
	let mut combobox = multi();
	combobox.open();
	combobox.toggle(&OptionKey::Int(1));
	assert!(combobox.is_open());

	let config = ComboboxConfig {
		close_on_select: true,
		..ComboboxConfig::default()
	};
	let mut closing = Combobox::builder(accessors())
		.with_config(config)
		.with_options(fruits())
		.build();
	closing.toggle_open();
	closing.toggle(&OptionKey::Int(1));
	assert!(!closing.is_open());
}

#[test]
fn controlled_value_waits_for_the_owner() {
	let (changes, listener) = recorder();
	let mut combobox = Combobox::builder(accessors())
		.with_options(fruits())
		.with_value([fruit(1, "Apple")])
		.on_value_change(listener)
		.build();
	assert_eq!(combobox.value_source(), ValueSource::Controlled);

	assert!(combobox.toggle(&OptionKey::Int(3)));
	assert_eq!(names(&combobox), ["Apple"]);

	let proposed = changes.lock().unwrap().last().cloned();
	let Some(SelectionValue::Multiple(proposed)) = proposed else {
		panic!("expected a multi-select proposal");
	};
	assert_eq!(proposed.len(), 2);

	combobox.set_value(proposed);
	assert_eq!(names(&combobox), ["Apple", "Banana"]);
	assert_eq!(changes.lock().unwrap().len(), 1);
}

#[test]
fn disabled_combobox_ignores_input() {
	let config = ComboboxConfig {
		disabled: true,
		..ComboboxConfig::default()
	};
	let mut combobox = Combobox::builder(accessors())
		.with_config(config)
		.with_options(fruits())
		.with_default_value([fruit(1, "Apple")])
		.build();

	assert!(!combobox.toggle(&OptionKey::Int(2)));
	assert!(!combobox.select_all());
	assert!(!combobox.remove(&OptionKey::Int(1)));
	assert!(!combobox.clear_all());
	assert_eq!(names(&combobox), ["Apple"]);
}

#[test]
fn view_reports_placeholder_and_empty_message() {
	let mut combobox = multi();
	let view = combobox.view();
	assert_eq!(view.placeholder, Some("Select options"));
	assert_eq!(view.empty_message, None);

	combobox.set_query("zzz");
	let view = combobox.view();
	assert!(view.options.is_empty());
	assert_eq!(view.empty_message, Some("No results found."));
	assert!(view.select_all.is_some_and(|state| !state.checked));
}

#[test]
fn grouped_options_dedupe_across_groups() {
	let config = ComboboxConfig {
		deduplicate_options: true,
		..ComboboxConfig::default()
	};
	let options = vec![
		OptionGroup::new("Favourites", vec![fruit(1, "Apple")]),
		OptionGroup::new("All", vec![fruit(1, "Apple"), fruit(3, "Banana")]),
	];
	let combobox = Combobox::builder(accessors())
		.with_config(config)
		.with_options(options)
		.build();

	let view = combobox.view();
	assert!(view.options.is_grouped());
	assert_eq!(view.options.len(), 2);
}

#[test]
fn badges_follow_the_viewport_limit() {
	let config = ComboboxConfig {
		max_count: Some(3),
		responsive: ResponsiveConfig {
			mobile: Some(BreakpointConfig { max_count: Some(1) }),
			..ResponsiveConfig::default()
		},
		..ComboboxConfig::default()
	};
	let mut combobox = Combobox::builder(accessors())
		.with_config(config)
		.with_options(fruits())
		.with_viewport(Viewport::Mobile)
		.build();
	combobox.set_query("a");
	combobox.select_all();

	let badges = combobox.badges();
	assert_eq!(badges.badges.len(), 1);
	assert_eq!(badges.overflow_label().as_deref(), Some("+2 more"));

	combobox.set_viewport(Some(Viewport::Desktop));
	assert_eq!(combobox.badges().badges.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn remote_options_replace_the_list_without_local_filtering() {
	let fetcher = |query: String| async move {
		tokio::time::sleep(Duration::from_millis(20)).await;
		Ok::<_, anyhow::Error>(vec![Fruit {
			id: 10,
			name: "Served",
			sold_out: query.is_empty(),
		}])
	};
	let mut combobox = Combobox::builder(accessors()).with_fetcher(fetcher).build();
	assert!(combobox.is_remote());

	assert!(combobox.load().is_some());
	assert!(combobox.view().loading);
	combobox.settle().await;
	assert_eq!(visible(&combobox), ["Served"]);

	combobox.set_query("zzz");
	assert_eq!(combobox.fetch_phase(), Some(FetchPhase::Debouncing));
	combobox.settle().await;

	assert_eq!(visible(&combobox), ["Served"]);
	assert!(combobox.toggle(&OptionKey::Int(10)));
	assert!(!combobox.view().loading);
}

#[tokio::test(start_paused = true)]
async fn unsearchable_remote_combobox_does_not_refetch_on_query() {
	let calls = Arc::new(Mutex::new(Vec::new()));
	let seen = Arc::clone(&calls);
	let fetcher = move |query: String| {
		seen.lock().unwrap().push(query);
		async move { Ok::<_, anyhow::Error>(vec![fruit(1, "Apple")]) }
	};
	let config = ComboboxConfig {
		searchable: false,
		..ComboboxConfig::default()
	};
	let mut combobox = Combobox::builder(accessors())
		.with_config(config)
		.with_fetcher(fetcher)
		.build();

	combobox.load();
	combobox.settle().await;
	combobox.set_query("ban");
	assert_eq!(combobox.fetch_phase(), Some(FetchPhase::Idle));
	combobox.settle().await;

	assert_eq!(*calls.lock().unwrap(), [String::new()]);
	assert_eq!(visible(&combobox), ["Apple"]);
}

#[test]
fn static_comboboxes_have_no_fetch_state() {
	let mut combobox = multi();
	assert_eq!(combobox.load(), None);
	assert_eq!(combobox.pump(), 0);
	assert_eq!(combobox.fetch_phase(), None);
}
