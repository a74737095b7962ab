//! # Folio
//!
//! Client-side router for a single-page personal site.
//!
//! The page shell (navigation bar, styles, an empty `#content` element) is
//! static. This crate, compiled to WebAssembly, intercepts in-site link
//! clicks, keeps the browser history in sync, and swaps the content region
//! between the home, portfolio, blog and article pages without reloading.
//!
//! ## Crates
//!
//! - [`pages`]: the router, history and region handles, article retrieval
//! - [`content`]: markup of the home, portfolio and blog pages
//!
//! ## Feature Flags
//!
//! - `panic-hook` - route Rust panics to the browser console
//! - `debug-routing` - per-dispatch debug logs (debug builds only)
//!
//! ## Browser usage
//!
//! ```js
//! import init, { start } from "./pkg/folio.js";
//!
//! await init();
//! start();
//! ```
//!
//! `start_with_settings` takes a JSON object with any of the
//! [`RouterSettings`](pages::RouterSettings) fields.

pub mod content;
pub mod pages;

#[cfg(target_arch = "wasm32")]
mod entry {
	use wasm_bindgen::prelude::*;

	use crate::pages::{ClientLauncher, RouterSettings};

	/// Starts the router with the default settings.
	#[wasm_bindgen]
	pub fn start() -> Result<(), JsValue> {
		launch(RouterSettings::default())
	}

	/// Starts the router with settings parsed from a JSON object.
	#[wasm_bindgen(js_name = startWithSettings)]
	pub fn start_with_settings(json: &str) -> Result<(), JsValue> {
		let settings =
			RouterSettings::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
		launch(settings)
	}

	fn launch(settings: RouterSettings) -> Result<(), JsValue> {
		ClientLauncher::new(settings)
			.launch()
			.map(|_| ())
			.map_err(|err| JsValue::from_str(&err.to_string()))
	}
}

#[cfg(target_arch = "wasm32")]
pub use entry::{start, start_with_settings};
