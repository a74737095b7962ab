//! Article retrieval.
//!
//! Articles are pre-rendered HTML fragments stored next to the site. The
//! router derives their URL from the identifier, fetches them, and renders
//! the body verbatim on a 200. Every other outcome renders the not-found
//! markup.

use async_trait::async_trait;
use url::Url;

use crate::error::{FetchError, RouterError};
use crate::settings::RouterSettings;
use crate::warn_log;

/// Status and body of an article response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body text.
	pub body: String,
}

impl ArticleResponse {
	/// Creates a response.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// Returns true for the only status treated as success.
	pub fn is_found(&self) -> bool {
		self.status == 200
	}
}

/// Something that can GET an article document.
///
/// Futures are not required to be `Send`: the router runs on a single
/// thread and the browser's fetch futures are not.
#[async_trait(?Send)]
pub trait ArticleSource {
	/// Requests the document at `url`.
	async fn get(&self, url: &Url) -> Result<ArticleResponse, FetchError>;
}

/// Fetches articles over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpArticleSource {
	client: reqwest::Client,
}

impl HttpArticleSource {
	/// Creates a source configured from `settings`.
	///
	/// The fetch timeout applies on native hosts; in the browser the fetch
	/// API's own limits apply.
	pub fn new(settings: &RouterSettings) -> Result<Self, FetchError> {
		#[allow(unused_mut)] // Only native builds configure the builder
		let mut builder = reqwest::Client::builder();

		#[cfg(not(target_arch = "wasm32"))]
		if let Some(timeout) = settings.fetch_timeout() {
			builder = builder.timeout(timeout);
		}
		#[cfg(target_arch = "wasm32")]
		let _ = settings;

		let client = builder
			.build()
			.map_err(|err| FetchError::Network(err.to_string()))?;
		Ok(Self { client })
	}

	/// Wraps an existing client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[async_trait(?Send)]
impl ArticleSource for HttpArticleSource {
	async fn get(&self, url: &Url) -> Result<ArticleResponse, FetchError> {
		let response = self
			.client
			.get(url.clone())
			.send()
			.await
			.map_err(|err| FetchError::Network(err.to_string()))?;

		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.map_err(|err| FetchError::Body(err.to_string()))?;

		Ok(ArticleResponse { status, body })
	}
}

/// Resolves the document URL for article `id`, relative to `current_path`.
///
/// With the default settings, `/articles/1` and id `1` give
/// `{origin}/articles/1.html`. The result is always on the configured
/// origin, unless `article_base` itself names another host.
pub fn article_url(
	settings: &RouterSettings,
	current_path: &str,
	id: &str,
) -> Result<Url, RouterError> {
	let page = settings.page_url(current_path)?;
	let relative = format!(
		"{}/{}{}",
		settings.article_base.trim_end_matches('/'),
		id,
		settings.article_suffix
	);
	Ok(page.join(&relative)?)
}

/// Fetches the article at `url` and returns the markup to render.
///
/// A 200 yields the body verbatim. Any other status and any transport
/// failure yield `settings.not_found_markup`; no retry is attempted.
pub async fn fetch_article<S>(source: &S, url: &Url, settings: &RouterSettings) -> String
where
	S: ArticleSource + ?Sized,
{
	match source.get(url).await {
		Ok(response) if response.is_found() => response.body,
		Ok(response) => {
			warn_log!("article {} returned status {}", url, response.status);
			settings.not_found_markup.clone()
		}
		Err(err) => {
			warn_log!("article {} could not be fetched: {}", url, err);
			settings.not_found_markup.clone()
		}
	}
}
