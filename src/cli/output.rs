use anyhow::Result;

use crate::workflow::SelectionOutcome;

/// Print the visible options as a checklist followed by the badge line.
pub(crate) fn print_plain(outcome: &SelectionOutcome) {
	print!("{}", format_plain(outcome));
}

pub(crate) fn format_plain(outcome: &SelectionOutcome) -> String {
	let mut lines = Vec::new();

	for group in &outcome.groups {
		let indent = match &group.group {
			Some(name) => {
				lines.push(format!("{name}:"));
				"  "
			}
			None => "",
		};
		for option in &group.options {
			let mark = if option.selected { "[x]" } else { "[ ]" };
			let suffix = if option.disabled { " (disabled)" } else { "" };
			lines.push(format!("{indent}{mark} {}{suffix}", option.label));
		}
	}
	if let Some(message) = &outcome.empty_message {
		lines.push(message.clone());
	}

	let mut badges: Vec<String> = outcome
		.badges
		.badges
		.iter()
		.map(|badge| badge.label.clone())
		.collect();
	if let Some(more) = outcome.badges.overflow_label() {
		badges.push(more);
	}
	if badges.is_empty() {
		lines.push("Selected: (none)".to_string());
	} else {
		lines.push(format!("Selected: {}", badges.join(", ")));
	}

	if let Some(error) = &outcome.error {
		lines.push(format!("Error: {error}"));
	}

	let mut text = lines.join("\n");
	text.push('\n');
	text
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SelectionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &SelectionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use combobox::{Badge, BadgeView, OptionKey};
	use serde_json::{Value, json};

	use super::*;
	use crate::workflow::{OutcomeGroup, OutcomeOption};

	fn outcome() -> SelectionOutcome {
		SelectionOutcome {
			query: "a".into(),
			grouped: true,
			groups: vec![OutcomeGroup {
				group: Some("Fruit".into()),
				options: vec![
					OutcomeOption {
						key: OptionKey::Int(1),
						label: "Apple".into(),
						selected: true,
						disabled: false,
					},
					OutcomeOption {
						key: OptionKey::from("banana"),
						label: "Banana".into(),
						selected: false,
						disabled: true,
					},
				],
			}],
			selected: vec![json!({"label": "Apple", "value": 1}), json!("Cherry")],
			badges: BadgeView {
				badges: vec![Badge {
					key: OptionKey::Int(1),
					label: "Apple".into(),
				}],
				overflow: 1,
			},
			empty_message: None,
			error: None,
		}
	}

	#[test]
	fn plain_format_lists_groups_and_badges() {
		let text = format_plain(&outcome());
		assert_eq!(
			text,
			"Fruit:\n  [x] Apple\n  [ ] Banana (disabled)\nSelected: Apple, +1 more\n"
		);
	}

	#[test]
	fn json_format_includes_keys_and_badges() {
		let json = format_outcome_json(&outcome()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["groups"][0]["options"][0]["key"], 1);
		assert_eq!(value["groups"][0]["options"][1]["key"], "banana");
		assert_eq!(value["badges"]["overflow"], 1);
		assert_eq!(value["selected"][1], "Cherry");
	}
}
