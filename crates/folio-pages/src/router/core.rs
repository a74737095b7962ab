//! Core Router Implementation.
//!
//! This module provides the Router controller: link interception, history
//! updates and content dispatch.

use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;

use super::history::{History, HistoryEntry};
use super::resolve::{Route, RouteKind};
use super::table::navigation_intent;
use crate::error::RouterError;
use crate::fetch::{ArticleSource, article_url, fetch_article};
use crate::region::{ContentRegion, LinkHandler};
use crate::settings::RouterSettings;
use crate::{debug_log, error_log, info_log};

/// Outcome of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	/// The region now shows this route.
	Rendered(RouteKind),
	/// A newer dispatch started while this one was fetching; nothing was
	/// written.
	Superseded,
}

/// The site router.
///
/// Owns the history stack, the content region and the article source. All
/// methods run on one thread; the only suspension point is the article
/// fetch.
///
/// Within one navigation the order is fixed: history push, then content
/// dispatch, then region mutation. Across navigations each dispatch takes a
/// ticket from a generation counter, and a fetch that completes after a
/// newer dispatch started is discarded (unless `sequence_guard` is off).
///
/// # Example
///
/// ```ignore
/// use std::rc::Rc;
/// use folio_pages::{HttpArticleSource, MemoryHistory, MemoryRegion, Router, RouterSettings};
///
/// let settings = RouterSettings::default();
/// let router = Rc::new(Router::new(
/// 	MemoryHistory::new("/"),
/// 	MemoryRegion::new(r#"<nav class="nav"><a href="/blog">Blog</a></nav>"#),
/// 	HttpArticleSource::new(&settings)?,
/// 	settings,
/// ));
/// router.start().await?;
/// ```
pub struct Router<H, R, S> {
	history: H,
	region: R,
	source: S,
	settings: RouterSettings,
	generation: Cell<u64>,
}

impl<H, R, S> std::fmt::Debug for Router<H, R, S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("settings", &self.settings)
			.field("generation", &self.generation.get())
			.finish()
	}
}

impl<H, R, S> Router<H, R, S>
where
	H: History + 'static,
	R: ContentRegion + 'static,
	S: ArticleSource + 'static,
{
	/// Creates a router over the given handles.
	pub fn new(history: H, region: R, source: S, settings: RouterSettings) -> Self {
		Self {
			history,
			region,
			source,
			settings,
			generation: Cell::new(0),
		}
	}

	/// Returns the history handle.
	pub fn history(&self) -> &H {
		&self.history
	}

	/// Returns the content region handle.
	pub fn region(&self) -> &R {
		&self.region
	}

	/// Returns the article source.
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Returns the settings.
	pub fn settings(&self) -> &RouterSettings {
		&self.settings
	}

	/// Intercepts the shell navigation links, then dispatches the landing URL.
	pub async fn start(self: &Rc<Self>) -> Result<Dispatch, RouterError> {
		let bound = self
			.region
			.intercept_links(&self.settings.nav_selector, self.link_handler())?;
		debug_log!("intercepting {} navigation links", bound);

		self.dispatch().await
	}

	/// Builds the click-intercept-and-dispatch behavior for bound links.
	pub fn link_handler(self: &Rc<Self>) -> LinkHandler {
		let router = Rc::clone(self);
		Rc::new(move |href: String| {
			let router = Rc::clone(&router);
			async move {
				if let Err(err) = router.follow_link(&href).await {
					error_log!("navigation to {} failed: {}", href, err);
				}
			}
			.boxed_local()
		})
	}

	/// Navigates to the target of an intercepted link.
	///
	/// `href` may be absolute or relative to the current URL.
	pub async fn follow_link(self: &Rc<Self>, href: &str) -> Result<Dispatch, RouterError> {
		let path = self.resolve_link(href)?;
		self.navigate(&path).await
	}

	/// Resolves `href` against the current URL and returns its path.
	pub fn resolve_link(&self, href: &str) -> Result<String, RouterError> {
		let current = self.history.current_path()?;
		let url = self.settings.page_url(&current)?.join(href)?;
		Ok(url.path().to_string())
	}

	/// Records a history entry for `path` and dispatches it.
	pub async fn navigate(self: &Rc<Self>, path: &str) -> Result<Dispatch, RouterError> {
		let intent = navigation_intent(path, &self.settings);
		info_log!("navigating to {} ({})", intent.url, intent.title);
		self.history.push(&HistoryEntry::from(intent))?;

		self.dispatch().await
	}

	/// Handles the browser's back/forward signal.
	///
	/// The history has already moved; only the content needs to follow.
	pub async fn handle_pop(self: &Rc<Self>) -> Result<Dispatch, RouterError> {
		self.dispatch().await
	}

	/// Renders the current URL into the content region.
	pub async fn dispatch(self: &Rc<Self>) -> Result<Dispatch, RouterError> {
		let ticket = self.generation.get() + 1;
		self.generation.set(ticket);

		let path = self.history.current_path()?;
		let route = Route::resolve(&path);
		debug_log!("dispatch #{} for {} -> {:?}", ticket, path, route);

		let markup = match &route {
			Route::Home => folio_content::home(),
			Route::Portfolio => folio_content::portfolio(),
			Route::Blog => folio_content::blog(),
			Route::Article { id } => {
				let url = article_url(&self.settings, &path, id)?;
				let markup = fetch_article(&self.source, &url, &self.settings).await;

				if self.settings.sequence_guard && self.generation.get() != ticket {
					debug_log!("dispatch #{} superseded, dropping {}", ticket, url);
					return Ok(Dispatch::Superseded);
				}
				markup
			}
		};

		self.region.replace(&markup)?;
		self.attach()?;

		Ok(Dispatch::Rendered(route.kind()))
	}

	/// Binds link interception to links inserted by the last render.
	fn attach(self: &Rc<Self>) -> Result<usize, RouterError> {
		let bound = self
			.region
			.intercept_links(&self.settings.content_link_selector, self.link_handler())?;
		if bound > 0 {
			debug_log!("intercepting {} links in rendered content", bound);
		}
		Ok(bound)
	}
}
