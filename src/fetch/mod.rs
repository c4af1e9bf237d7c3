//! Debounced, search-driven option fetching.
//!
//! [`FetchController`] owns the fetch state machine. Timers and fetch calls
//! run as Tokio tasks that only post [`FetchEvent`]s back to the controller;
//! every state transition happens when the owner applies those events.

mod controller;
mod phase;
mod source;

pub use controller::{FetchController, FetchEvent};
pub use phase::{FetchPhase, FetchSettings};
pub use source::{FetchError, OptionFetcher};
