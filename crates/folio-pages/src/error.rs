//! Error types for router operations.

use thiserror::Error;

/// Error type for router operations.
///
/// Only infrastructure failures surface here. Unknown paths and failed
/// article fetches are rendered as content instead.
#[derive(Debug, Error)]
pub enum RouterError {
	/// A DOM call failed or a browser global was unavailable.
	#[error("DOM error: {0}")]
	Dom(String),

	/// The content region element does not exist.
	#[error("content region not found: #{0}")]
	MissingRegion(String),

	/// Reading or writing the history stack failed.
	#[error("history error: {0}")]
	History(String),

	/// A link selector could not be parsed.
	#[error("invalid selector: {0}")]
	Selector(String),

	/// A link or article URL could not be resolved.
	#[error("invalid URL: {0}")]
	InvalidUrl(#[from] url::ParseError),

	/// Router settings could not be parsed.
	#[error("invalid router settings: {0}")]
	Settings(#[from] serde_json::Error),

	/// The article client could not be set up.
	#[error("article client: {0}")]
	Fetch(#[from] FetchError),
}

#[cfg(target_arch = "wasm32")]
impl RouterError {
	/// Wraps a thrown JS value.
	pub(crate) fn js(value: wasm_bindgen::JsValue) -> Self {
		Self::Dom(format!("{:?}", value))
	}
}

/// Error type for article retrieval.
///
/// The router folds every variant into the not-found page; the distinction is
/// kept for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
	/// The request could not be sent or no response arrived.
	#[error("network error: {0}")]
	Network(String),

	/// The response body could not be read.
	#[error("failed to read body: {0}")]
	Body(String),
}
