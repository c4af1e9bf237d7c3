//! Process-wide logger setup for the `combobox` binary.
//!
//! The library only emits records through the `log` facade; embedders choose
//! their own logger.

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter, e.g. `combobox=debug`.
pub const LOG_ENV: &str = "COMBOBOX_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install an `env_logger` writing to stderr, filtered by [`LOG_ENV`].
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn initialize() {
	let env = Env::new().filter_or(LOG_ENV, DEFAULT_FILTER);
	let _ = Builder::from_env(env)
		.target(Target::Stderr)
		.format_timestamp(None)
		.try_init();
}
