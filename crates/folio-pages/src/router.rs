//! Client-side routing.
//!
//! Two independent classifications run over every path:
//!
//! - [`Route::resolve`] decides which content is rendered.
//! - [`navigation_intent`] decides which history entry a click records.
//!
//! They can disagree (`/blog/extra` is labelled "Blog" but renders home).
//! [`Router`] drives both and owns the history, region and article source
//! handles.

mod core;
pub mod history;
mod resolve;
mod table;

pub use self::core::{Dispatch, Router};
pub use history::{History, HistoryEntry, MemoryHistory};
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use resolve::{Route, RouteKind, extract_id};
pub use table::{HOME_TITLE, NavigationIntent, ROUTE_TABLE, RouteDescriptor, navigation_intent};
