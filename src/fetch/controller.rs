use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::phase::{FetchPhase, FetchSettings};
use super::source::{FetchError, OptionFetcher};
use crate::config::ShortQueryPolicy;
use crate::debounce::Debouncer;
use crate::store::OptionStore;

/// Messages posted by timer and fetch tasks back to the controller.
#[derive(Debug)]
pub enum FetchEvent<T> {
	/// The debounce delay for the query change numbered `revision` elapsed.
	DebounceElapsed { revision: u64, query: String },
	/// Request `request` finished.
	Completed {
		request: u64,
		query: String,
		outcome: Result<Vec<T>, FetchError>,
	},
}

/// Debounces query changes into fetches and applies only the latest
/// response.
///
/// Debouncing and staleness are tracked separately: the debouncer decides
/// *when* a request is issued, while request ids decide *which* response may
/// update the store. Responses are never cancelled at the transport level;
/// superseded ones are dropped when they arrive.
///
/// Requires a Tokio runtime.
pub struct FetchController<T> {
	fetcher: Arc<dyn OptionFetcher<T>>,
	settings: FetchSettings,
	debouncer: Debouncer<(u64, String)>,
	tx: UnboundedSender<FetchEvent<T>>,
	rx: UnboundedReceiver<FetchEvent<T>>,
	revision: u64,
	next_request_id: u64,
	latest_request: Option<u64>,
	phase: FetchPhase,
}

impl<T: Clone + Send + 'static> FetchController<T> {
	pub fn new(fetcher: Arc<dyn OptionFetcher<T>>, settings: FetchSettings) -> Self {
		let (tx, rx) = mpsc::unbounded_channel();
		let timer_tx = tx.clone();
		let debouncer = Debouncer::new(settings.debounce, move |(revision, query): (u64, String)| {
			let _ = timer_tx.send(FetchEvent::DebounceElapsed { revision, query });
		});

		Self {
			fetcher,
			settings,
			debouncer,
			tx,
			rx,
			revision: 0,
			next_request_id: 0,
			latest_request: None,
			phase: FetchPhase::Idle,
		}
	}

	pub fn phase(&self) -> FetchPhase {
		self.phase
	}

	pub fn settings(&self) -> &FetchSettings {
		&self.settings
	}

	/// Id of the request whose response is currently accepted.
	pub fn latest_request(&self) -> Option<u64> {
		self.latest_request
	}

	pub fn is_busy(&self) -> bool {
		self.phase.is_busy()
	}

	/// React to an edited query: restart the debounce timer and supersede any
	/// request still in flight.
	pub fn query_changed(&mut self, query: &str) {
		self.revision = self.revision.wrapping_add(1);
		self.latest_request = None;
		self.phase = FetchPhase::Debouncing;
		self.debouncer.call((self.revision, query.to_string()));
		debug!("query {query:?} debounced as revision {}", self.revision);
	}

	/// Issue a request for `query` right away, skipping the debounce delay
	/// and the minimum length gate.
	pub fn fetch_now(&mut self, query: &str, store: &mut OptionStore<T>) -> u64 {
		self.debouncer.cancel();
		self.revision = self.revision.wrapping_add(1);
		self.issue(query.to_string(), store)
	}

	fn issue(&mut self, query: String, store: &mut OptionStore<T>) -> u64 {
		self.next_request_id = self.next_request_id.saturating_add(1);
		let request = self.next_request_id;
		self.latest_request = Some(request);
		self.phase = FetchPhase::Fetching;
		store.begin_loading();
		debug!("issuing request {request} for {query:?}");

		let fetcher = Arc::clone(&self.fetcher);
		let tx = self.tx.clone();
		let timeout = self.settings.timeout;
		tokio::spawn(async move {
			let outcome = run_fetch(fetcher, query.clone(), timeout).await;
			let _ = tx.send(FetchEvent::Completed {
				request,
				query,
				outcome,
			});
		});

		request
	}

	/// Apply one event to the state machine and `store`.
	///
	/// Returns `false` when the event was stale and ignored.
	pub fn apply(&mut self, event: FetchEvent<T>, store: &mut OptionStore<T>) -> bool {
		match event {
			FetchEvent::DebounceElapsed { revision, query } => {
				if revision != self.revision {
					debug!("ignoring superseded timer for revision {revision}");
					return false;
				}
				if query.chars().count() < self.settings.min_search_length {
					debug!("query {query:?} below minimum length, not fetching");
					self.phase = FetchPhase::Idle;
					store.cancel_loading();
					if self.settings.short_query == ShortQueryPolicy::Clear {
						store.clear_options();
					}
					return true;
				}
				self.issue(query, store);
				true
			}
			FetchEvent::Completed {
				request,
				query,
				outcome,
			} => {
				if self.latest_request != Some(request) {
					debug!("discarding stale response {request} for {query:?}");
					return false;
				}
				match outcome {
					Ok(options) => {
						debug!("request {request} returned {} options", options.len());
						store.apply_fetched(options);
						self.phase = FetchPhase::Idle;
					}
					Err(err) => {
						warn!("request {request} for {query:?} failed: {err}");
						store.fail(err.to_string());
						self.phase = FetchPhase::Error;
					}
				}
				true
			}
		}
	}

	/// Apply every event that is already queued. Returns how many of them
	/// changed state.
	pub fn pump(&mut self, store: &mut OptionStore<T>) -> usize {
		let mut applied = 0;
		while let Ok(event) = self.rx.try_recv() {
			if self.apply(event, store) {
				applied += 1;
			}
		}
		applied
	}

	/// Wait for the next event and apply it.
	pub async fn step(&mut self, store: &mut OptionStore<T>) -> bool {
		match self.rx.recv().await {
			Some(event) => self.apply(event, store),
			None => false,
		}
	}

	/// Apply events until no timer is pending and no accepted request is in
	/// flight.
	pub async fn settle(&mut self, store: &mut OptionStore<T>) {
		while self.is_busy() {
			let Some(event) = self.rx.recv().await else {
				break;
			};
			self.apply(event, store);
		}
	}
}

/// Run one fetch in its own task. A panic inside the fetcher surfaces as
/// [`FetchError::Failed`].
async fn run_fetch<T: Send + 'static>(
	fetcher: Arc<dyn OptionFetcher<T>>,
	query: String,
	limit: Option<Duration>,
) -> Result<Vec<T>, FetchError> {
	let mut task = tokio::spawn(async move { fetcher.fetch(&query).await });
	let joined = match limit {
		Some(limit) => match tokio::time::timeout(limit, &mut task).await {
			Ok(joined) => joined,
			Err(_) => {
				task.abort();
				return Err(FetchError::TimedOut(limit));
			}
		},
		None => task.await,
	};

	match joined {
		Ok(result) => result.map_err(FetchError::from),
		Err(err) if err.is_panic() => Err(FetchError::Failed("fetch task panicked".to_string())),
		Err(_) => Err(FetchError::Failed("fetch task was cancelled".to_string())),
	}
}
