//! Markup helpers shared by the content providers.

use std::fmt::Write;

/// Escapes text for use in HTML element content or double-quoted attributes.
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Appends `<ul class="{class}">` with one `<li>` per item.
pub(crate) fn push_list(out: &mut String, class: &str, items: &[&str]) {
	let _ = writeln!(out, "<ul class=\"{}\">", class);
	for item in items {
		let _ = writeln!(out, "\t<li>{}</li>", html_escape(item));
	}
	out.push_str("</ul>\n");
}
