//! Portfolio page content.

use std::fmt::Write;

use crate::markup::{html_escape, push_list};

/// A single portfolio entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
	/// Display title.
	pub title: &'static str,
	/// External repository URL.
	pub repository: &'static str,
	/// Screenshot path, relative to the site root.
	pub image: &'static str,
	/// Free-text description.
	pub description: &'static str,
	/// Skill tags, rendered in order.
	pub skills: &'static [&'static str],
}

/// Projects in display order.
pub const PROJECTS: &[Project] = &[
	Project {
		title: "Ping",
		repository: "https://github.com/eguefif/ping",
		image: "images/Screenshot from 2025-05-04 11-11-45.png",
		description: "This ping project was an opportunity to learn more about networking, the ICMP protocol, and the raw socket API. I also implemented a DNS resolver. This ping program can only ping an IP or a FQDN address. When the program ends, it displays statistics for the pings.",
		skills: &["C", "ICMP", "IP", "raw_socket"],
	},
	Project {
		title: "Webserver-rs",
		repository: "https://github.com/eguefif/ws-echoserver-rust",
		image: "images/webserver.png",
		description: "I love learning about networking. I'm always thrilled when I manage to make a protocol work with a regular client. In this case, I made a basic web server that handles chunked packets and compression. It takes a handler function as an argument and returns a Response. I use this library in my career manager program.",
		skills: &["HTTP", "parsing", "Rust", "binary data"],
	},
	Project {
		title: "WebSocket Echo Server",
		repository: "https://github.com/eguefif/ws-echoserver-rust",
		image: "images/websocket-rs.png",
		description: "This project is all about learning WebSocket. I learned about what an HTTP upgrade is. How the handshake is formed and basic framing. It was a good exercise to learn how to parse bytes in Rust. The client is not quite done, but the server is operational.",
		skills: &["websocket", "http", "rust", "thread", "parsing"],
	},
	Project {
		title: "GameBoy Emulator",
		repository: "https://github.com/eguefif/game_boy_emulator",
		image: "images/tetris.jpg",
		description: "This Game Boy emulator can run Tetris. This was not an easy project. There is no official documentation, but you have to gather a lot of resources yourself. It was an opportunity to learn by looking at other people's code and understanding the logic.",
		skills: &["Rust", "CPU architecture", "System Interrupt", "Low-level Rendering"],
	},
	Project {
		title: "Monkey Interpreter",
		repository: "https://github.com/eguefif/monkey_interpreter",
		image: "images/monkey.gif",
		description: "This project was made when I was reading the book 'Make a Monkey interpreter in Go. ' I did it in Rust. I've learned a lot about parsing and recursion. It was also an opportunity to learn about Rust smart pointers.",
		skills: &["Rust", "parsing"],
	},
	Project {
		title: "Marc-record-ex",
		repository: "https://github.com/demarque/marc-record-ex",
		image: "images/marc21.jpg",
		description: "I made this project for my work at Demarque. It binds a Marc record library written in Rust with an Elixir package. When I used this project in the parser, I had to optimize memory usage to avoid upgrading our pod. I use streaming techniques and find a way to make it work between the Rust bindings and Elixir code.",
		skills: &["Rust", "Rustler", "Elixir"],
	},
	Project {
		title: "Ray tracer",
		repository: "https://github.com/PelletierM/miniRT",
		image: "images/spheres.png",
		description: "This 42 project is all about Ray Tracing. I worked mainly on implementing different figures: sphere, plane, cylinder, and triangle. We optimized rendering by implementing a sample accumulator. We also took advantage of multithreading to render rays in batches.",
		skills: &["language C", "multithreading", "Ray Tracing"],
	},
];

/// Renders the portfolio page with one `.project-box` per entry of [`PROJECTS`].
pub fn portfolio() -> String {
	let mut out = String::from("<h1>My Portfolio</h1>\n<section id=\"portfolio\">\n");
	for project in PROJECTS {
		push_project(&mut out, project);
	}
	out.push_str("</section>\n");
	out
}

fn push_project(out: &mut String, project: &Project) {
	let title = html_escape(project.title);

	out.push_str("<div class=\"project-box\">\n");
	let _ = writeln!(out, "<h2 class=\"project-title\">{}</h2>", title);
	let _ = writeln!(
		out,
		"<a href=\"{}\" class=\"github-link\" target=\"_blank\">",
		html_escape(project.repository)
	);
	out.push_str("\t<img src=\"./images/github.svg\" alt=\"GitHub\" class=\"github-icon\" />\n");
	out.push_str("</a>\n");

	out.push_str("<div class=\"project-info\">\n");
	let _ = writeln!(
		out,
		"<img src=\"{}\" alt=\"{}\" class=\"project-img\">",
		html_escape(project.image),
		title
	);
	out.push_str("<div class=\"project-text\">\n");
	let _ = writeln!(
		out,
		"<div class=\"project-description\">{}</div>",
		html_escape(project.description)
	);
	push_list(out, "skills-list", project.skills);
	out.push_str("</div>\n</div>\n</div>\n");
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use scraper::{Html, Selector};

	fn select_count(markup: &str, selector: &str) -> usize {
		let html = Html::parse_fragment(markup);
		let selector = Selector::parse(selector).unwrap();
		html.select(&selector).count()
	}

	#[rstest]
	fn test_portfolio_has_one_box_per_project() {
		let markup = portfolio();

		assert_eq!(PROJECTS.len(), 7);
		assert_eq!(select_count(&markup, ".project-box"), PROJECTS.len());
	}

	#[rstest]
	fn test_portfolio_preserves_order() {
		let markup = portfolio();
		let html = Html::parse_fragment(&markup);
		let selector = Selector::parse(".project-title").unwrap();

		let titles: Vec<String> = html
			.select(&selector)
			.map(|el| el.text().collect::<String>())
			.collect();
		let expected: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();

		assert_eq!(titles, expected);
	}

	#[rstest]
	fn test_portfolio_skill_tags() {
		let markup = portfolio();
		let total: usize = PROJECTS.iter().map(|p| p.skills.len()).sum();

		assert_eq!(select_count(&markup, ".skills-list li"), total);
		assert_eq!(select_count(&markup, ".skills-list"), PROJECTS.len());
	}

	#[rstest]
	fn test_portfolio_repository_links_open_externally() {
		let markup = portfolio();
		let html = Html::parse_fragment(&markup);
		let selector = Selector::parse("a.github-link").unwrap();

		let hrefs: Vec<&str> = html
			.select(&selector)
			.filter_map(|el| el.value().attr("href"))
			.collect();

		assert_eq!(hrefs.len(), PROJECTS.len());
		assert!(hrefs.iter().all(|href| href.starts_with("https://")));
	}

	#[rstest]
	fn test_portfolio_is_deterministic() {
		assert_eq!(portfolio(), portfolio());
	}
}
