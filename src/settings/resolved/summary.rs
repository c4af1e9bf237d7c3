use combobox::ComboboxConfig;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Options file: {}", config.file.display());
	println!("  Source: {}", if config.remote { "remote" } else { "static" });
	if !config.query.is_empty() {
		println!("  Query: {}", config.query);
	}
	print_behavior(&config.behavior);
	match config.viewport() {
		Some(viewport) => println!("  Viewport: {viewport:?}"),
		None => println!("  Viewport: (none)"),
	}
	println!("  Label field: {}", field_or_self(config.fields.label.as_deref()));
	println!("  Value field: {}", field_or_self(config.fields.value.as_deref()));
	println!(
		"  Disabled field: {}",
		config.fields.disabled.as_deref().unwrap_or("(none)")
	);
}

fn print_behavior(behavior: &ComboboxConfig) {
	println!("  Searchable: {}", bool_to_word(behavior.searchable));
	println!("  Single select: {}", bool_to_word(behavior.single_select));
	println!("  Allow deselect: {}", bool_to_word(behavior.allow_deselect));
	println!(
		"  Deduplicate options: {}",
		bool_to_word(behavior.deduplicate_options)
	);
	println!("  Hide select all: {}", bool_to_word(behavior.hide_select_all));
	println!("  Close on select: {}", bool_to_word(behavior.close_on_select));
	println!("  Disabled: {}", bool_to_word(behavior.disabled));
	println!("  Debounce: {} ms", behavior.debounce_ms);
	println!("  Min search length: {}", behavior.min_search_length);
	println!("  Short query: {:?}", behavior.short_query);
	match behavior.fetch_timeout_ms {
		Some(timeout) => println!("  Fetch timeout: {timeout} ms"),
		None => println!("  Fetch timeout: none"),
	}
	match behavior.max_count {
		Some(count) => println!("  Max badges: {count}"),
		None => println!("  Max badges: unlimited"),
	}
	let breakpoints = [
		("mobile", &behavior.responsive.mobile),
		("tablet", &behavior.responsive.tablet),
		("desktop", &behavior.responsive.desktop),
	];
	for (name, breakpoint) in breakpoints {
		if let Some(count) = breakpoint.as_ref().and_then(|breakpoint| breakpoint.max_count) {
			println!("  Max badges ({name}): {count}");
		}
	}
}

fn field_or_self(field: Option<&str>) -> &str {
	field.unwrap_or("(whole option)")
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
