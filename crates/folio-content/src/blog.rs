//! Blog index content.

use std::fmt::Write;

use crate::markup::html_escape;

/// Selector matching the in-site links the blog index inserts.
///
/// The router binds click interception to these after every render.
pub const ENTRY_LINK_SELECTOR: &str = ".article-box a";

/// An entry of the blog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleEntry {
	/// Article identifier; the link target is `articles/{id}`.
	pub id: &'static str,
	/// Display title.
	pub title: &'static str,
	/// Display date, free-form.
	pub date: &'static str,
}

impl ArticleEntry {
	/// Relative link to the article page.
	pub fn href(&self) -> String {
		format!("articles/{}", self.id)
	}
}

/// Published articles, newest first.
pub const ARTICLES: &[ArticleEntry] = &[ArticleEntry {
	id: "1",
	title: "Writing a WebSocket echo server in Rust: the handshake",
	date: "2025 April 21",
}];

/// Renders the blog index with one `.article-box` per entry of [`ARTICLES`].
pub fn blog() -> String {
	let mut out = String::from("<section id=\"blog-section\">\n<h1>Blog</h1>\n");
	for article in ARTICLES {
		out.push_str("<div class=\"article-box\">\n");
		let _ = writeln!(
			out,
			"\t<a href=\"{}\"><h3>{}</h3></a>",
			html_escape(&article.href()),
			html_escape(article.title)
		);
		let _ = writeln!(
			out,
			"\t<span class=\"article-date\">{}</span>",
			html_escape(article.date)
		);
		out.push_str("</div>\n");
	}
	out.push_str("</section>\n");
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use scraper::{Html, Selector};

	#[rstest]
	fn test_blog_has_one_entry_per_article() {
		let markup = blog();
		let html = Html::parse_fragment(&markup);
		let selector = Selector::parse(".article-box").unwrap();

		assert_eq!(html.select(&selector).count(), ARTICLES.len());
	}

	#[rstest]
	fn test_blog_entry_links_are_relative_article_paths() {
		let markup = blog();
		let html = Html::parse_fragment(&markup);
		let selector = Selector::parse(ENTRY_LINK_SELECTOR).unwrap();

		let hrefs: Vec<&str> = html
			.select(&selector)
			.filter_map(|el| el.value().attr("href"))
			.collect();

		assert_eq!(hrefs, vec!["articles/1"]);
	}

	#[rstest]
	fn test_blog_shows_dates() {
		let markup = blog();
		assert!(markup.contains("<span class=\"article-date\">2025 April 21</span>"));
	}

	#[rstest]
	fn test_article_entry_href() {
		let entry = ArticleEntry {
			id: "42",
			title: "t",
			date: "d",
		};
		assert_eq!(entry.href(), "articles/42");
	}
}
