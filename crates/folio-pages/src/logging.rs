//! Logging abstraction layer for folio-pages
//!
//! The router logs through these macros so the same call sites work in the
//! browser and in native test hosts.
//!
//! | Macro | WASM | Non-WASM |
//! |-------|------|----------|
//! | `debug_log!` | `console.debug` (debug build + `debug-routing`) | `tracing::debug!` |
//! | `info_log!` | `console.info` (debug build) | `tracing::info!` |
//! | `warn_log!` | `console.warn` (debug build) | `tracing::warn!` |
//! | `error_log!` | `console.error` (debug build) | `tracing::error!` |
//!
//! Browser output is compiled out of release builds. Native output goes
//! through `tracing`, so whichever subscriber the host installs decides what
//! is kept.
//!
//! ## Example
//!
//! ```ignore
//! use folio_pages::{debug_log, info_log, warn_log};
//!
//! debug_log!("dispatch #{} for {}", ticket, path);
//! info_log!("navigating to {}", path);
//! warn_log!("article fetch failed: {}", err);
//! ```

/// Logs a debug message.
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-routing", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(all(
	target_arch = "wasm32",
	not(all(debug_assertions, feature = "debug-routing"))
))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs a debug message through `tracing`.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!($($arg)*);
	}};
}

/// Logs an info message.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message through `tracing`.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!($($arg)*);
	}};
}

/// Logs a warning message.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message through `tracing`.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!($($arg)*);
	}};
}

/// Logs an error message.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// No-op error_log in release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message through `tracing`.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!($($arg)*);
	}};
}
