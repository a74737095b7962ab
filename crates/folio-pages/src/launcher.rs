//! Browser entry point.
//!
//! [`ClientLauncher`] wires the router to the real page: `window.history`,
//! the content region element, `fetch`-backed article retrieval and the
//! `popstate` signal.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::RouterError;
use crate::fetch::HttpArticleSource;
use crate::region::DomRegion;
use crate::router::{BrowserHistory, Router};
use crate::settings::RouterSettings;
use crate::{error_log, info_log};

/// The router as assembled by [`ClientLauncher`].
pub type BrowserRouter = Router<BrowserHistory, DomRegion, HttpArticleSource>;

/// Builds and starts the router for the current page.
///
/// # Example
///
/// ```ignore
/// use folio_pages::{ClientLauncher, RouterSettings};
///
/// ClientLauncher::new(RouterSettings::default()).launch()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientLauncher {
	settings: RouterSettings,
}

impl ClientLauncher {
	/// Creates a launcher with the given settings.
	pub fn new(settings: RouterSettings) -> Self {
		Self { settings }
	}

	/// Assembles the router, listens for `popstate`, and dispatches the
	/// landing URL.
	///
	/// The initial dispatch runs on the local executor; this returns as soon
	/// as it has been spawned.
	pub fn launch(self) -> Result<Rc<BrowserRouter>, RouterError> {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		let window = web_sys::window().ok_or_else(|| RouterError::Dom("no window".to_string()))?;

		let mut settings = self.settings;
		settings.origin = window.location().origin().map_err(RouterError::js)?;

		let history = BrowserHistory::new()?;
		let region = DomRegion::from_id(&settings.content_region_id)?;
		let source = HttpArticleSource::new(&settings)?;
		let router = Rc::new(Router::new(history, region, source, settings));

		listen_popstate(&window, &router)?;

		let starting = Rc::clone(&router);
		wasm_bindgen_futures::spawn_local(async move {
			match starting.start().await {
				Ok(outcome) => info_log!("router started: {:?}", outcome),
				Err(err) => error_log!("router failed to start: {}", err),
			}
		});

		Ok(router)
	}
}

fn listen_popstate(window: &web_sys::Window, router: &Rc<BrowserRouter>) -> Result<(), RouterError> {
	let router = Rc::clone(router);
	let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
		let router = Rc::clone(&router);
		wasm_bindgen_futures::spawn_local(async move {
			if let Err(err) = router.handle_pop().await {
				error_log!("back/forward dispatch failed: {}", err);
			}
		});
	}) as Box<dyn FnMut(_)>);

	window
		.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
		.map_err(RouterError::js)?;

	closure.forget(); // Lives as long as the page
	Ok(())
}
