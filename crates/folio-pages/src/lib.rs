//! Folio Pages - client-side router for the folio personal site
//!
//! Intercepts in-site navigation, maps URL paths to page content, and swaps
//! the page's content region without a full reload. Compiles to WebAssembly
//! for the browser; the same router runs natively over in-memory handles for
//! tests.
//!
//! ## Architecture
//!
//! - [`router`]: route classification, history labelling and the [`Router`]
//!   controller
//! - [`region`]: the content region handle ([`ContentRegion`])
//! - [`fetch`]: article retrieval ([`ArticleSource`])
//! - [`settings`]: [`RouterSettings`]
//! - [`logging`]: `debug_log!` / `info_log!` / `warn_log!` / `error_log!`
//! - `launcher` (wasm32 only): [`ClientLauncher`], the browser entry point
//!
//! Page markup comes from `folio-content`.
//!
//! ## Example
//!
//! ```ignore
//! use folio_pages::{ClientLauncher, RouterSettings};
//!
//! // In a wasm_bindgen start function:
//! ClientLauncher::new(RouterSettings::default()).launch()?;
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod fetch;
pub mod logging;
pub mod region;
pub mod router;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod launcher;

pub use error::{FetchError, RouterError};
pub use fetch::{ArticleResponse, ArticleSource, HttpArticleSource, article_url, fetch_article};
#[cfg(target_arch = "wasm32")]
pub use launcher::{BrowserRouter, ClientLauncher};
#[cfg(target_arch = "wasm32")]
pub use region::DomRegion;
#[cfg(not(target_arch = "wasm32"))]
pub use region::MemoryRegion;
pub use region::{ContentRegion, LinkHandler};
#[cfg(target_arch = "wasm32")]
pub use router::BrowserHistory;
pub use router::{
	Dispatch, History, HistoryEntry, MemoryHistory, NavigationIntent, Route, RouteKind, Router,
	extract_id, navigation_intent,
};
pub use settings::{NOT_FOUND_MARKUP, RouterSettings};

// Logging macros are exported via #[macro_export]; they reach their backends
// through this module.
#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
