//! Browser tests for the DOM-backed router handles.
//!
//! Run with: wasm-pack test --headless --chrome crates/folio-pages

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use folio_pages::{
	BrowserHistory, ContentRegion, DomRegion, History, HistoryEntry, LinkHandler, RouterError,
};
use futures::FutureExt;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str, inner: &str) -> web_sys::Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let element = document.create_element("div").unwrap();
	element.set_id(id);
	element.set_inner_html(inner);
	document.body().unwrap().append_child(&element).unwrap();
	element
}

#[wasm_bindgen_test]
fn test_dom_region_replace() {
	mount("region-replace", "<p>old</p>");
	let region = DomRegion::from_id("region-replace").unwrap();

	region.replace("<p>Hi</p>").unwrap();

	assert_eq!(region.inner_html(), "<p>Hi</p>");
}

#[wasm_bindgen_test]
fn test_dom_region_missing() {
	let result = DomRegion::from_id("no-such-region");
	assert!(matches!(result, Err(RouterError::MissingRegion(_))));
}

#[wasm_bindgen_test]
async fn test_dom_region_intercepts_clicks() {
	mount("region-links", "");
	let region = DomRegion::from_id("region-links").unwrap();
	region
		.replace(r#"<div class="article-box"><a id="entry-1" href="articles/1">One</a></div>"#)
		.unwrap();

	let clicked = Rc::new(RefCell::new(Vec::<String>::new()));
	let handler: LinkHandler = {
		let clicked = Rc::clone(&clicked);
		Rc::new(move |href: String| {
			let clicked = Rc::clone(&clicked);
			async move { clicked.borrow_mut().push(href) }.boxed_local()
		})
	};

	let bound = region
		.intercept_links("#region-links .article-box a", handler)
		.unwrap();
	assert_eq!(bound, 1);

	let anchor = web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.get_element_by_id("entry-1")
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap();
	anchor.click();

	// Let the spawned navigation run
	wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL))
		.await
		.unwrap();

	let clicked = clicked.borrow();
	assert_eq!(clicked.len(), 1);
	assert!(clicked[0].ends_with("/articles/1"));
}

#[wasm_bindgen_test]
fn test_dom_region_releases_listeners_on_replace() {
	mount(
		"shell-nav",
		r#"<nav class="listener-nav"><a href="/blog">Blog</a></nav>"#,
	);
	mount("region-listeners", "");
	let region = DomRegion::from_id("region-listeners").unwrap();
	let handler: LinkHandler = Rc::new(|_href: String| async {}.boxed_local());

	let shell = region
		.intercept_links(".listener-nav a", Rc::clone(&handler))
		.unwrap();
	assert_eq!(shell, 1);
	assert_eq!(region.listener_count(), 0);

	for _ in 0..3 {
		region
			.replace(r#"<div class="article-box"><a href="articles/1">One</a><a href="articles/2">Two</a></div>"#)
			.unwrap();
		let bound = region
			.intercept_links("#region-listeners .article-box a", Rc::clone(&handler))
			.unwrap();
		assert_eq!(bound, 2);
		assert_eq!(region.listener_count(), 2);
	}

	region.replace("<p>home</p>").unwrap();
	assert_eq!(region.listener_count(), 0);
}

#[wasm_bindgen_test]
fn test_browser_history_push() {
	let history = BrowserHistory::new().unwrap();

	history
		.push(&HistoryEntry::new("Blog", "/blog"))
		.unwrap();

	assert_eq!(history.current_path().unwrap(), "/blog");
}
