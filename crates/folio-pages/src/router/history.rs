//! History API integration.
//!
//! The router only ever appends entries and reads the current path back; the
//! state payload is always an empty object.

use std::cell::RefCell;

use crate::error::RouterError;

/// A history entry as recorded by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
	/// Entry title.
	pub title: String,
	/// Entry URL (a path).
	pub url: String,
}

impl HistoryEntry {
	/// Creates a new entry.
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			url: url.into(),
		}
	}
}

/// A history stack the router can push to and read the current path from.
pub trait History {
	/// Returns the path of the current entry.
	fn current_path(&self) -> Result<String, RouterError>;

	/// Appends `entry` and makes it current.
	fn push(&self, entry: &HistoryEntry) -> Result<(), RouterError>;
}

/// The browser's `window.history`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserHistory {
	window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl BrowserHistory {
	/// Binds to the global window.
	pub fn new() -> Result<Self, RouterError> {
		let window = web_sys::window().ok_or_else(|| RouterError::Dom("no window".to_string()))?;
		Ok(Self { window })
	}
}

#[cfg(target_arch = "wasm32")]
impl History for BrowserHistory {
	fn current_path(&self) -> Result<String, RouterError> {
		self.window.location().pathname().map_err(RouterError::js)
	}

	fn push(&self, entry: &HistoryEntry) -> Result<(), RouterError> {
		let history = self.window.history().map_err(RouterError::js)?;
		let state = js_sys::Object::new();
		history
			.push_state_with_url(&state, &entry.title, Some(&entry.url))
			.map_err(|err| RouterError::History(format!("{:?}", err)))
	}
}

#[derive(Debug)]
struct Stack {
	entries: Vec<HistoryEntry>,
	cursor: usize,
}

/// An in-memory history stack with browser-like back/forward semantics.
///
/// `back` and `forward` only move the cursor, as the browser does before it
/// fires `popstate`; the caller then runs [`Router::handle_pop`].
///
/// [`Router::handle_pop`]: crate::router::Router::handle_pop
#[derive(Debug)]
pub struct MemoryHistory {
	stack: RefCell<Stack>,
}

impl MemoryHistory {
	/// Creates a history whose only entry is the landing URL.
	pub fn new(landing_path: impl Into<String>) -> Self {
		Self {
			stack: RefCell::new(Stack {
				entries: vec![HistoryEntry::new("", landing_path)],
				cursor: 0,
			}),
		}
	}

	/// Moves one entry back; returns the new current path.
	pub fn back(&self) -> Option<String> {
		let mut stack = self.stack.borrow_mut();
		if stack.cursor == 0 {
			return None;
		}
		stack.cursor -= 1;
		Some(stack.entries[stack.cursor].url.clone())
	}

	/// Moves one entry forward; returns the new current path.
	pub fn forward(&self) -> Option<String> {
		let mut stack = self.stack.borrow_mut();
		if stack.cursor + 1 >= stack.entries.len() {
			return None;
		}
		stack.cursor += 1;
		Some(stack.entries[stack.cursor].url.clone())
	}

	/// Returns every entry, oldest first.
	pub fn entries(&self) -> Vec<HistoryEntry> {
		self.stack.borrow().entries.clone()
	}

	/// Returns the current entry.
	pub fn current(&self) -> HistoryEntry {
		let stack = self.stack.borrow();
		stack.entries[stack.cursor].clone()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.stack.borrow().entries.len()
	}

	/// Returns true if the stack holds no entries.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl History for MemoryHistory {
	fn current_path(&self) -> Result<String, RouterError> {
		Ok(self.current().url)
	}

	fn push(&self, entry: &HistoryEntry) -> Result<(), RouterError> {
		let mut stack = self.stack.borrow_mut();
		let next = stack.cursor + 1;
		stack.entries.truncate(next);
		stack.entries.push(entry.clone());
		stack.cursor = next;
		Ok(())
	}
}
