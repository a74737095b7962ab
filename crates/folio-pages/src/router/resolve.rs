//! Content classification of a path.

/// The page a path renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	/// Landing page; also the fallback for every unrecognised path.
	Home,
	/// Exactly `/portfolio`.
	Portfolio,
	/// Exactly `/blog`.
	Blog,
	/// Any path containing `articles`.
	Article {
		/// Trailing path segment.
		id: String,
	},
}

/// [`Route`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
	/// See [`Route::Home`].
	Home,
	/// See [`Route::Portfolio`].
	Portfolio,
	/// See [`Route::Blog`].
	Blog,
	/// See [`Route::Article`].
	Article,
}

impl Route {
	/// Classifies `path`.
	///
	/// Exact matches are checked before the `articles` substring test, so
	/// `/portfolio/` and `/Blog` fall through to home.
	pub fn resolve(path: &str) -> Self {
		if path == "/portfolio" {
			Self::Portfolio
		} else if path == "/blog" {
			Self::Blog
		} else if path.contains("articles") {
			Self::Article {
				id: extract_id(path).to_string(),
			}
		} else {
			Self::Home
		}
	}

	/// Returns the route kind.
	pub fn kind(&self) -> RouteKind {
		match self {
			Self::Home => RouteKind::Home,
			Self::Portfolio => RouteKind::Portfolio,
			Self::Blog => RouteKind::Blog,
			Self::Article { .. } => RouteKind::Article,
		}
	}
}

/// Returns the last `/`-delimited segment of `path`.
///
/// No validation: `"/articles/"` yields `""` and the empty id goes on to the
/// fetch, which fails into the not-found page.
pub fn extract_id(path: &str) -> &str {
	path.rsplit('/').next().unwrap_or_default()
}
