//! Shared option data types for the combobox core.
//!
//! Options are opaque application values. Everything the core needs to know
//! about them is derived through [`OptionAccessors`], and a list of options is
//! always either flat or grouped, see [`OptionSet`].

pub mod accessors;
pub mod error;
pub mod json;
pub mod key;
pub mod set;

pub use accessors::OptionAccessors;
pub use error::OptionDataError;
pub use json::{JsonFields, is_grouped, json_accessors};
pub use key::OptionKey;
pub use set::{OptionGroup, OptionSet};
