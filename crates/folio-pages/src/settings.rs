//! Router configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RouterError;

/// Markup shown when an article cannot be retrieved.
pub const NOT_FOUND_MARKUP: &str = "<center><h1>Article not found</center></h1>";

/// Settings for the site router.
///
/// Every field has a default matching the reference page shell, so a JSON
/// document only needs the keys it changes.
///
/// # Example
///
/// ```
/// use folio_pages::RouterSettings;
///
/// let settings = RouterSettings::from_json(r#"{ "content_region_id": "main" }"#).unwrap();
/// assert_eq!(settings.content_region_id, "main");
/// assert_eq!(settings.nav_selector, ".nav a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
	/// Id of the element whose inner markup is replaced on navigation.
	pub content_region_id: String,
	/// Links in the page shell that are intercepted at startup.
	pub nav_selector: String,
	/// Links inside rendered content that are intercepted after each render.
	pub content_link_selector: String,
	/// Directory of article documents, relative to the current page URL.
	pub article_base: String,
	/// Suffix appended to the article identifier.
	pub article_suffix: String,
	/// Markup rendered when an article fetch fails.
	pub not_found_markup: String,
	/// Origin used to resolve relative links and article URLs.
	///
	/// The browser launcher overrides this with `window.location.origin`.
	pub origin: String,
	/// Network timeout for article fetches, in seconds (native hosts only).
	pub fetch_timeout_secs: Option<u64>,
	/// Discard article responses that arrive after a newer navigation started.
	pub sequence_guard: bool,
	/// Push `/` instead of the requested path when no route label matches.
	pub canonicalize_unknown: bool,
}

impl Default for RouterSettings {
	fn default() -> Self {
		Self {
			content_region_id: "content".to_string(),
			nav_selector: ".nav a".to_string(),
			content_link_selector: folio_content::ENTRY_LINK_SELECTOR.to_string(),
			article_base: "../articles".to_string(),
			article_suffix: ".html".to_string(),
			not_found_markup: NOT_FOUND_MARKUP.to_string(),
			origin: "http://localhost/".to_string(),
			fetch_timeout_secs: Some(10),
			sequence_guard: true,
			canonicalize_unknown: false,
		}
	}
}

impl RouterSettings {
	/// Creates settings with default values.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from a JSON object; missing keys keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, RouterError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Sets the content region id.
	pub fn with_content_region_id(mut self, id: impl Into<String>) -> Self {
		self.content_region_id = id.into();
		self
	}

	/// Sets the origin.
	pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
		self.origin = origin.into();
		self
	}

	/// Sets the article location.
	pub fn with_article_base(mut self, base: impl Into<String>) -> Self {
		self.article_base = base.into();
		self
	}

	/// Enables or disables the superseded-response guard.
	pub fn with_sequence_guard(mut self, enabled: bool) -> Self {
		self.sequence_guard = enabled;
		self
	}

	/// Enables or disables URL canonicalization for unknown paths.
	pub fn with_canonicalize_unknown(mut self, enabled: bool) -> Self {
		self.canonicalize_unknown = enabled;
		self
	}

	/// Returns the fetch timeout, if any.
	pub fn fetch_timeout(&self) -> Option<Duration> {
		self.fetch_timeout_secs.map(Duration::from_secs)
	}

	/// Returns the URL of the page at `path` on the configured origin.
	///
	/// `path` is set as the path, never resolved as a reference, so a
	/// pathname like `//other.host/x` cannot change the host.
	pub fn page_url(&self, path: &str) -> Result<Url, RouterError> {
		let mut page = Url::parse(&self.origin)?;
		page.set_path(path);
		Ok(page)
	}
}
