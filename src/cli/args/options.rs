use clap::ValueEnum;

use combobox::ShortQueryPolicy;

/// What remote mode does with the option list when the query is too short.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ShortQueryArg {
    Clear,
    Keep,
}

impl From<ShortQueryArg> for ShortQueryPolicy {
    fn from(arg: ShortQueryArg) -> Self {
        match arg {
            ShortQueryArg::Clear => ShortQueryPolicy::Clear,
            ShortQueryArg::Keep => ShortQueryPolicy::Keep,
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
