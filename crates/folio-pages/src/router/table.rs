//! Route table and history labelling.

use crate::router::history::HistoryEntry;
use crate::settings::RouterSettings;

/// A title/path-segment pair used for history labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
	/// History entry title.
	pub title: &'static str,
	/// Segment tested by substring containment against the path.
	pub segment: &'static str,
}

/// Title recorded when no descriptor matches.
pub const HOME_TITLE: &str = "Home";

/// The routing table, in match order. Home is implicit.
pub const ROUTE_TABLE: &[RouteDescriptor] = &[
	RouteDescriptor {
		title: "Portfolio",
		segment: "portfolio",
	},
	RouteDescriptor {
		title: "Blog",
		segment: "blog",
	},
	RouteDescriptor {
		title: "Article",
		segment: "articles",
	},
];

/// The history entry a navigation will push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
	/// Entry title.
	pub title: String,
	/// Entry URL (a path).
	pub url: String,
}

impl From<NavigationIntent> for HistoryEntry {
	fn from(intent: NavigationIntent) -> Self {
		HistoryEntry::new(intent.title, intent.url)
	}
}

impl RouteDescriptor {
	/// Returns true if the segment occurs anywhere in `path`.
	pub fn matches(&self, path: &str) -> bool {
		path.contains(self.segment)
	}
}

/// Decides the history entry for a navigation to `path`.
///
/// The first descriptor whose segment occurs in `path` supplies the title.
/// Unmatched paths are labelled "Home"; their URL stays `path` unless
/// `canonicalize_unknown` is set, in which case it becomes `/`.
///
/// The label is not the content: `/xyz` is labelled "Home" and also renders
/// home, but `/blog/extra` is labelled "Blog" while rendering home.
pub fn navigation_intent(path: &str, settings: &RouterSettings) -> NavigationIntent {
	match ROUTE_TABLE.iter().find(|descriptor| descriptor.matches(path)) {
		Some(descriptor) => NavigationIntent {
			title: descriptor.title.to_string(),
			url: path.to_string(),
		},
		None => NavigationIntent {
			title: HOME_TITLE.to_string(),
			url: if settings.canonicalize_unknown {
				"/".to_string()
			} else {
				path.to_string()
			},
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/portfolio", "Portfolio", "/portfolio")]
	#[case("/blog", "Blog", "/blog")]
	#[case("/articles/1", "Article", "/articles/1")]
	#[case("/blog/extra", "Blog", "/blog/extra")]
	#[case("/xyz", "Home", "/xyz")]
	#[case("/", "Home", "/")]
	fn test_navigation_intent(#[case] path: &str, #[case] title: &str, #[case] url: &str) {
		let intent = navigation_intent(path, &RouterSettings::default());
		assert_eq!(intent.title, title);
		assert_eq!(intent.url, url);
	}

	#[rstest]
	fn test_first_match_wins() {
		// Both "portfolio" and "blog" occur; the table order decides.
		let intent = navigation_intent("/portfolio/blog", &RouterSettings::default());
		assert_eq!(intent.title, "Portfolio");
	}

	#[rstest]
	fn test_canonicalize_unknown() {
		let settings = RouterSettings::default().with_canonicalize_unknown(true);

		let intent = navigation_intent("/xyz", &settings);
		assert_eq!(intent.title, "Home");
		assert_eq!(intent.url, "/");

		// Recognised paths keep their URL.
		let intent = navigation_intent("/blog", &settings);
		assert_eq!(intent.url, "/blog");
	}

	#[rstest]
	fn test_segments_are_unique() {
		for (i, a) in ROUTE_TABLE.iter().enumerate() {
			for b in &ROUTE_TABLE[i + 1..] {
				assert_ne!(a.segment, b.segment);
			}
		}
	}

	#[rstest]
	fn test_intent_into_history_entry() {
		let entry: HistoryEntry = navigation_intent("/blog", &RouterSettings::default()).into();
		assert_eq!(entry.title, "Blog");
		assert_eq!(entry.url, "/blog");
	}
}
