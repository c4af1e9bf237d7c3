use clap::{CommandFactory, FromArgMatches};

use super::options::ShortQueryArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_has_about_text() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["combobox", "options.json"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.select.is_empty());
	assert_eq!(parsed.single_select, None);
}

#[test]
fn boolean_flags_accept_bare_and_explicit_values() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec![
		"combobox",
		"options.json",
		"--single",
		"--searchable",
		"no",
		"--short-query",
		"keep",
		"-s",
		"a",
		"-s",
		"2",
	]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.single_select, Some(true));
	assert_eq!(parsed.searchable, Some(false));
	assert_eq!(parsed.short_query, Some(ShortQueryArg::Keep));
	assert_eq!(parsed.select, ["a", "2"]);
}

#[test]
fn file_argument_is_required() {
	let result = CliArgs::command().try_get_matches_from(vec!["combobox"]);
	assert!(result.is_err());
}
