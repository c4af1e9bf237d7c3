use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// External asynchronous source of options for a query.
///
/// Implemented for any `Fn(String) -> impl Future<Output = anyhow::Result<Vec<T>>>`,
/// so closures can be used directly.
#[async_trait]
pub trait OptionFetcher<T>: Send + Sync {
	async fn fetch(&self, query: &str) -> anyhow::Result<Vec<T>>;
}

#[async_trait]
impl<T, F, Fut> OptionFetcher<T> for F
where
	T: Send + 'static,
	F: Fn(String) -> Fut + Send + Sync,
	Fut: Future<Output = anyhow::Result<Vec<T>>> + Send + 'static,
{
	async fn fetch(&self, query: &str) -> anyhow::Result<Vec<T>> {
		self(query.to_string()).await
	}
}

/// Why a fetch did not produce options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
	/// The fetch collaborator reported an error.
	#[error("{0}")]
	Failed(String),

	/// The fetch did not complete within the configured timeout.
	#[error("request timed out after {} ms", .0.as_millis())]
	TimedOut(Duration),
}

impl From<anyhow::Error> for FetchError {
	fn from(err: anyhow::Error) -> Self {
		Self::Failed(format!("{err:#}"))
	}
}
