use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ShortQueryArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `combobox` binary.
#[derive(Parser, Debug)]
#[command(
    name = "combobox",
    version,
    long_version = long_version(),
    about = "Filter and select options from a JSON option list",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "FILE",
        help = "JSON array of options or option groups (`-` reads stdin)"
    )]
    pub(crate) file: PathBuf,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "COMBOBOX_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Search query applied before selecting (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short = 's',
        long = "select",
        value_name = "KEY",
        action = ArgAction::Append,
        help = "Toggle the option with this value key, in order (default: none)"
    )]
    pub(crate) select: Vec<String>,
    #[arg(
        short = 'a',
        long = "select-all",
        help = "Select every visible option after toggling (default: disabled)"
    )]
    pub(crate) select_all: bool,
    #[arg(
        long = "single",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Allow only one selected option (default: disabled)"
    )]
    pub(crate) single_select: Option<bool>,
    #[arg(
        long = "allow-deselect",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Let single-select toggle its option off again (default: enabled)"
    )]
    pub(crate) allow_deselect: Option<bool>,
    #[arg(
        long = "dedupe",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Show only the first option for each value key (default: disabled)"
    )]
    pub(crate) deduplicate: Option<bool>,
    #[arg(
        long = "searchable",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Apply the query to option labels (default: enabled)"
    )]
    pub(crate) searchable: Option<bool>,
    #[arg(
        long = "min-search-length",
        value_name = "NUM",
        help = "Ignore queries shorter than this many characters (default: 0)"
    )]
    pub(crate) min_search_length: Option<usize>,
    #[arg(
        long = "short-query",
        value_enum,
        help = "Remote options when the query is too short (default: clear)"
    )]
    pub(crate) short_query: Option<ShortQueryArg>,
    #[arg(
        long = "debounce-ms",
        value_name = "MS",
        help = "Delay before a remote fetch is issued (default: 300)"
    )]
    pub(crate) debounce_ms: Option<u64>,
    #[arg(
        long = "fetch-timeout-ms",
        value_name = "MS",
        help = "Fail remote fetches that take longer than this (default: none)"
    )]
    pub(crate) fetch_timeout_ms: Option<u64>,
    #[arg(
        short = 'm',
        long = "max-count",
        value_name = "NUM",
        help = "Show at most this many badges (default: unlimited)"
    )]
    pub(crate) max_count: Option<usize>,
    #[arg(
        short = 'w',
        long = "viewport-width",
        value_name = "PX",
        help = "Viewport width used to pick a responsive badge limit (default: none)"
    )]
    pub(crate) viewport_width: Option<u32>,
    #[arg(
        long = "label-field",
        value_name = "NAME",
        help = "Object field holding the option label (default: label)"
    )]
    pub(crate) label_field: Option<String>,
    #[arg(
        long = "value-field",
        value_name = "NAME",
        help = "Object field holding the option value key (default: value)"
    )]
    pub(crate) value_field: Option<String>,
    #[arg(
        long = "disabled-field",
        value_name = "NAME",
        help = "Object field marking an option as disabled (default: disabled)"
    )]
    pub(crate) disabled_field: Option<String>,
    #[arg(
        short = 'r',
        long = "remote",
        help = "Serve FILE through the debounced fetch path (default: disabled)"
    )]
    pub(crate) remote: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
