//! Option normalization, filtering and selection for combobox widgets.
//!
//! The root module re-exports the types embedders need to drive a
//! [`Combobox`]: feed it queries and selection actions, then render its
//! [`ComboboxView`]. Option data and accessors live in the
//! `combobox-option-api` crate and are re-exported here.

pub mod app_dirs;
pub mod badges;
pub mod combobox;
pub mod config;
pub mod debounce;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod selection;
pub mod store;

pub use badges::{Badge, BadgeView};
pub use combobox::{Combobox, ComboboxBuilder, ComboboxView, SelectAllState, ValueSource};
pub use config::{BreakpointConfig, ComboboxConfig, ResponsiveConfig, ShortQueryPolicy, Viewport};
pub use debounce::Debouncer;
pub use fetch::{FetchController, FetchError, FetchEvent, FetchPhase, FetchSettings, OptionFetcher};
pub use filter::{FilterOptions, VisibleGroup, VisibleOptions, visible_options};
pub use selection::{Selection, SelectionMode, SelectionValue};
pub use store::OptionStore;

pub use combobox_option_api::{
	JsonFields, OptionAccessors, OptionDataError, OptionGroup, OptionKey, OptionSet, is_grouped,
	json_accessors,
};
