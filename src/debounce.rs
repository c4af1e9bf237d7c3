use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

type Action<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Trailing-edge debouncer backed by a single pending Tokio task.
///
/// Every [`call`](Self::call) cancels the previously scheduled, not yet fired
/// invocation and schedules a new one `delay` later with the latest
/// arguments. A cancelled invocation never runs. Nothing is returned to the
/// caller.
///
/// Must be used from within a Tokio runtime.
pub struct Debouncer<A> {
	delay: Duration,
	action: Action<A>,
	pending: Option<JoinHandle<()>>,
}

impl<A: Send + 'static> Debouncer<A> {
	pub fn new<F>(delay: Duration, action: F) -> Self
	where
		F: Fn(A) + Send + Sync + 'static,
	{
		Self {
			delay,
			action: Arc::new(action),
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Schedule `args` for delivery, replacing any pending invocation.
	pub fn call(&mut self, args: A) {
		self.cancel();
		let action = Arc::clone(&self.action);
		let delay = self.delay;
		self.pending = Some(tokio::spawn(async move {
			sleep(delay).await;
			action(args);
		}));
	}

	/// Drop the pending invocation, if any. Returns `true` when one was still
	/// waiting to fire.
	pub fn cancel(&mut self) -> bool {
		match self.pending.take() {
			Some(handle) if !handle.is_finished() => {
				handle.abort();
				true
			}
			_ => false,
		}
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending
			.as_ref()
			.is_some_and(|handle| !handle.is_finished())
	}
}

impl<A> Drop for Debouncer<A> {
	fn drop(&mut self) {
		if let Some(handle) = self.pending.take() {
			handle.abort();
		}
	}
}
