//! The content region: the single container whose markup the router owns.
//!
//! [`ContentRegion`] covers both things the router does to the page: replacing
//! the region's markup and intercepting clicks on in-site links. Link
//! selectors are evaluated against the whole document, so the same call binds
//! the shell navigation at startup and freshly rendered links afterwards.

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::RouterError;

/// Behavior attached to an intercepted link.
///
/// Receives the link's `href` and returns the navigation to run. The
/// future is spawned on the local executor by DOM-backed regions.
pub type LinkHandler = Rc<dyn Fn(String) -> LocalBoxFuture<'static, ()>>;

/// An owned handle to the page's content region.
pub trait ContentRegion {
	/// Replaces the region's inner markup.
	fn replace(&self, markup: &str) -> Result<(), RouterError>;

	/// Intercepts clicks on every anchor matching `selector`.
	///
	/// The default navigation is suppressed and `handler` runs instead.
	/// Returns the number of anchors bound.
	fn intercept_links(&self, selector: &str, handler: LinkHandler) -> Result<usize, RouterError>;
}

#[cfg(target_arch = "wasm32")]
type ClickListener = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>;

/// The DOM element identified by the configured region id.
///
/// Listeners on anchors inside the region are held until the next
/// [`replace`](ContentRegion::replace) removes those anchors. Listeners on
/// anchors outside it (the shell navigation) live as long as the page.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct DomRegion {
	document: web_sys::Document,
	element: web_sys::Element,
	listeners: Rc<std::cell::RefCell<Vec<ClickListener>>>,
}

#[cfg(target_arch = "wasm32")]
impl std::fmt::Debug for DomRegion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DomRegion")
			.field("id", &self.element.id())
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}

#[cfg(target_arch = "wasm32")]
impl DomRegion {
	/// Looks up the region element by id.
	pub fn from_id(id: &str) -> Result<Self, RouterError> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| RouterError::Dom("no document".to_string()))?;
		let element = document
			.get_element_by_id(id)
			.ok_or_else(|| RouterError::MissingRegion(id.to_string()))?;
		Ok(Self {
			document,
			element,
			listeners: Rc::default(),
		})
	}

	/// Returns the region's current inner markup.
	pub fn inner_html(&self) -> String {
		self.element.inner_html()
	}

	/// Returns how many listeners are held for links inside the region.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}
}

#[cfg(target_arch = "wasm32")]
impl ContentRegion for DomRegion {
	fn replace(&self, markup: &str) -> Result<(), RouterError> {
		self.element.set_inner_html(markup);
		// The anchors these listened on are gone
		self.listeners.borrow_mut().clear();
		Ok(())
	}

	fn intercept_links(&self, selector: &str, handler: LinkHandler) -> Result<usize, RouterError> {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::prelude::*;

		let nodes = self
			.document
			.query_selector_all(selector)
			.map_err(|err| RouterError::Selector(format!("{}: {:?}", selector, err)))?;

		let mut bound = 0;
		for index in 0..nodes.length() {
			let Some(anchor) = nodes
				.item(index)
				.and_then(|node| node.dyn_into::<web_sys::HtmlAnchorElement>().ok())
			else {
				continue;
			};

			let handler = Rc::clone(&handler);
			let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
				event.prevent_default();
				let href = event
					.current_target()
					.and_then(|target| target.dyn_into::<web_sys::HtmlAnchorElement>().ok())
					.map(|anchor| anchor.href())
					.unwrap_or_default();
				wasm_bindgen_futures::spawn_local(handler(href));
			}) as Box<dyn FnMut(_)>);

			anchor
				.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
				.map_err(RouterError::js)?;

			let node: &web_sys::Node = anchor.as_ref();
			if self.element.contains(Some(node)) {
				self.listeners.borrow_mut().push(closure);
			} else {
				closure.forget(); // Shell links live as long as the page
			}
			bound += 1;
		}

		Ok(bound)
	}
}

#[cfg(not(target_arch = "wasm32"))]
pub use memory::MemoryRegion;

#[cfg(not(target_arch = "wasm32"))]
mod memory {
	use std::cell::RefCell;
	use std::rc::Rc;

	use futures::future::LocalBoxFuture;
	use scraper::{Html, Selector};

	use super::{ContentRegion, LinkHandler};
	use crate::error::RouterError;

	struct Binding {
		href: String,
		handler: LinkHandler,
	}

	#[derive(Default)]
	struct RegionState {
		markup: String,
		shell_links: Vec<Binding>,
		region_links: Vec<Binding>,
		renders: usize,
	}

	/// An in-memory page: fixed shell markup plus a replaceable region.
	///
	/// Selectors are evaluated with `scraper`. Replacing the markup drops the
	/// bindings that pointed into the old markup, like the DOM drops listeners
	/// of removed nodes. [`click`](Self::click) plays the part of the user.
	pub struct MemoryRegion {
		shell: String,
		state: RefCell<RegionState>,
	}

	impl std::fmt::Debug for MemoryRegion {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			let state = self.state.borrow();
			f.debug_struct("MemoryRegion")
				.field("markup_len", &state.markup.len())
				.field("shell_links", &state.shell_links.len())
				.field("region_links", &state.region_links.len())
				.field("renders", &state.renders)
				.finish()
		}
	}

	impl MemoryRegion {
		/// Creates a region inside a page whose shell (navigation, header)
		/// is `shell`.
		pub fn new(shell: impl Into<String>) -> Self {
			Self {
				shell: shell.into(),
				state: RefCell::new(RegionState::default()),
			}
		}

		/// Returns the region's current inner markup.
		pub fn inner_html(&self) -> String {
			self.state.borrow().markup.clone()
		}

		/// Returns how many times the markup was replaced.
		pub fn render_count(&self) -> usize {
			self.state.borrow().renders
		}

		/// Returns the hrefs of intercepted links inside the region.
		pub fn region_links(&self) -> Vec<String> {
			self.state
				.borrow()
				.region_links
				.iter()
				.map(|binding| binding.href.clone())
				.collect()
		}

		/// Returns the hrefs of intercepted links in the shell.
		pub fn shell_links(&self) -> Vec<String> {
			self.state
				.borrow()
				.shell_links
				.iter()
				.map(|binding| binding.href.clone())
				.collect()
		}

		/// Clicks the intercepted link with the given `href`.
		///
		/// Returns the navigation future, or `None` if no intercepted link
		/// has that `href` (an unbound link would trigger a full page load).
		pub fn click(&self, href: &str) -> Option<LocalBoxFuture<'static, ()>> {
			let handler = {
				let state = self.state.borrow();
				state
					.region_links
					.iter()
					.chain(state.shell_links.iter())
					.find(|binding| binding.href == href)
					.map(|binding| Rc::clone(&binding.handler))?
			};
			Some(handler(href.to_string()))
		}
	}

	fn matching_hrefs(markup: &str, selector: &Selector) -> Vec<String> {
		Html::parse_fragment(markup)
			.select(selector)
			.filter_map(|element| element.value().attr("href"))
			.map(str::to_string)
			.collect()
	}

	impl ContentRegion for MemoryRegion {
		fn replace(&self, markup: &str) -> Result<(), RouterError> {
			let mut state = self.state.borrow_mut();
			state.markup = markup.to_string();
			state.region_links.clear();
			state.renders += 1;
			Ok(())
		}

		fn intercept_links(
			&self,
			selector: &str,
			handler: LinkHandler,
		) -> Result<usize, RouterError> {
			let parsed = Selector::parse(selector)
				.map_err(|err| RouterError::Selector(format!("{}: {:?}", selector, err)))?;

			let mut state = self.state.borrow_mut();
			let shell_hrefs = matching_hrefs(&self.shell, &parsed);
			let region_hrefs = matching_hrefs(&state.markup, &parsed);
			let bound = shell_hrefs.len() + region_hrefs.len();

			state
				.shell_links
				.extend(shell_hrefs.into_iter().map(|href| Binding {
					href,
					handler: Rc::clone(&handler),
				}));
			state
				.region_links
				.extend(region_hrefs.into_iter().map(|href| Binding {
					href,
					handler: Rc::clone(&handler),
				}));

			Ok(bound)
		}
	}

	#[cfg(test)]
	mod tests {
		use super::*;
		use futures::FutureExt;
		use rstest::rstest;
		use std::cell::RefCell;

		const SHELL: &str = r#"<nav class="nav"><a href="/">Home</a><a href="/portfolio">Portfolio</a><a href="/blog">Blog</a></nav>"#;

		fn recording_handler(log: Rc<RefCell<Vec<String>>>) -> LinkHandler {
			Rc::new(move |href: String| {
				let log = Rc::clone(&log);
				async move {
					log.borrow_mut().push(href);
				}
				.boxed_local()
			})
		}

		#[rstest]
		fn test_replace_sets_markup() {
			let region = MemoryRegion::new(SHELL);
			region.replace("<p>Hi</p>").unwrap();

			assert_eq!(region.inner_html(), "<p>Hi</p>");
			assert_eq!(region.render_count(), 1);
		}

		#[rstest]
		fn test_intercept_shell_links() {
			let region = MemoryRegion::new(SHELL);
			let log = Rc::new(RefCell::new(Vec::new()));

			let bound = region
				.intercept_links(".nav a", recording_handler(Rc::clone(&log)))
				.unwrap();

			assert_eq!(bound, 3);
			assert_eq!(region.shell_links(), vec!["/", "/portfolio", "/blog"]);
			assert!(region.region_links().is_empty());
		}

		#[rstest]
		fn test_replace_drops_region_bindings_only() {
			let region = MemoryRegion::new(SHELL);
			let log = Rc::new(RefCell::new(Vec::new()));
			region
				.intercept_links(".nav a", recording_handler(Rc::clone(&log)))
				.unwrap();
			region
				.replace(r#"<div class="article-box"><a href="articles/1">One</a></div>"#)
				.unwrap();
			region
				.intercept_links(".article-box a", recording_handler(Rc::clone(&log)))
				.unwrap();
			assert_eq!(region.region_links(), vec!["articles/1"]);

			region.replace("<p>gone</p>").unwrap();

			assert!(region.region_links().is_empty());
			assert_eq!(region.shell_links().len(), 3);
		}

		#[rstest]
		fn test_click_runs_handler() {
			let region = MemoryRegion::new(SHELL);
			let log = Rc::new(RefCell::new(Vec::new()));
			region
				.intercept_links(".nav a", recording_handler(Rc::clone(&log)))
				.unwrap();

			let navigation = region.click("/blog").expect("link is bound");
			futures::executor::block_on(navigation);

			assert_eq!(*log.borrow(), vec!["/blog".to_string()]);
		}

		#[rstest]
		fn test_click_unbound_link() {
			let region = MemoryRegion::new(SHELL);
			assert!(region.click("/blog").is_none());
		}

		#[rstest]
		fn test_invalid_selector() {
			let region = MemoryRegion::new(SHELL);
			let log = Rc::new(RefCell::new(Vec::new()));

			let result = region.intercept_links("a[", recording_handler(log));
			assert!(matches!(result, Err(RouterError::Selector(_))));
		}
	}
}
