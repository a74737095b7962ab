//! Landing page content.

use std::fmt::Write;

use crate::markup::html_escape;

/// An external profile shown as an icon in the home page footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLink {
	/// Accessible label, also the `aria-label` of the anchor.
	pub label: &'static str,
	/// Absolute URL of the profile.
	pub url: &'static str,
	/// SVG path data for a 50x50 icon.
	pub icon_path: &'static str,
}

/// Profile links rendered in the footer, in display order.
pub const PROFILES: &[ProfileLink] = &[
	ProfileLink {
		label: "GitHub",
		url: "https://github.com/eguefif",
		icon_path: "M17.791,46.836C18.502,46.53,19,45.823,19,45v-5.4c0-0.197,0.016-0.402,0.041-0.61C19.027,38.994,19.014,38.997,19,39 c0,0-3,0-3.6,0c-1.5,0-2.8-0.6-3.4-1.8c-0.7-1.3-1-3.5-2.8-4.7C8.9,32.3,9.1,32,9.7,32c0.6,0.1,1.9,0.9,2.7,2c0.9,1.1,1.8,2,3.4,2 c2.487,0,3.82-0.125,4.622-0.555C21.356,34.056,22.649,33,24,33v-0.025c-5.668-0.182-9.289-2.066-10.975-4.975 c-3.665,0.042-6.856,0.405-8.677,0.707c-0.058-0.327-0.108-0.656-0.151-0.987c1.797-0.296,4.843-0.647,8.345-0.714 c-0.112-0.276-0.209-0.559-0.291-0.849c-3.511-0.178-6.541-0.039-8.187,0.097c-0.02-0.332-0.047-0.663-0.051-0.999 c1.649-0.135,4.597-0.27,8.018-0.111c-0.079-0.5-0.13-1.011-0.13-1.543c0-1.7,0.6-3.5,1.7-5c-0.5-1.7-1.2-5.3,0.2-6.6 c2.7,0,4.6,1.3,5.5,2.1C21,13.4,22.9,13,25,13s4,0.4,5.6,1.1c0.9-0.8,2.8-2.1,5.5-2.1c1.5,1.4,0.7,5,0.2,6.6c1.1,1.5,1.7,3.2,1.6,5 c0,0.484-0.045,0.951-0.11,1.409c3.499-0.172,6.527-0.034,8.204,0.102c-0.002,0.337-0.033,0.666-0.051,0.999 c-1.671-0.138-4.775-0.28-8.359-0.089c-0.089,0.336-0.197,0.663-0.325,0.98c3.546,0.046,6.665,0.389,8.548,0.689 c-0.043,0.332-0.093,0.661-0.151,0.987c-1.912-0.306-5.171-0.664-8.879-0.682C35.112,30.873,31.557,32.75,26,32.969V33 c2.6,0,5,3.9,5,6.6V45c0,0.823,0.498,1.53,1.209,1.836C41.37,43.804,48,35.164,48,25C48,12.318,37.683,2,25,2S2,12.318,2,25 C2,35.164,8.63,43.804,17.791,46.836z",
	},
	ProfileLink {
		label: "LinkedIn",
		url: "https://www.linkedin.com/in/eguefif",
		icon_path: "M41,4H9C6.24,4,4,6.24,4,9v32c0,2.76,2.24,5,5,5h32c2.76,0,5-2.24,5-5V9C46,6.24,43.76,4,41,4z M17,20v19h-6V20H17z M11,14.47c0-1.4,1.2-2.47,3-2.47s2.93,1.07,3,2.47c0,1.4-1.12,2.53-3,2.53C12.2,17,11,15.87,11,14.47z M39,39h-6c0,0,0-9.26,0-10 c0-2-1-4-3.5-4.04h-0.08C27,24.96,26,27.02,26,29c0,0.91,0,10,0,10h-6V20h6v2.56c0,0,1.93-2.56,5.81-2.56 c3.97,0,7.19,2.73,7.19,8.26V39z",
	},
];

const NAME: &str = "Emmanuel Guefif";
const ROLE: &str = "Junior full stack developer";
const PORTRAIT: &str = "./images/emmanuel.jpeg";

const BIO: &[&str] = &[
	"I used to program as a hobby while teaching as a profession. I don't teach anymore, but I still program, and I get paid for it. I am a lifelong learner and a curious man; programming is a great activity. I can learn about technology and my client's domain. I studied sociology, and I've learned about asking questions and trying to understand people. As a developer, I combined my technical and sociological skills to understand the problem at hand and find solutions.",
	"I like web development because it's the best way to solve people's problems. I also have a passion for low-level programming. When I finish a project, book, or article about it, it's like I've added a new piece to the big puzzle of computer systems. I love it!",
];

/// Renders the home page: title block, portrait, biography and footer.
pub fn home() -> String {
	let mut out = String::new();

	out.push_str("<section id=\"homepage\">\n");
	out.push_str("<div class=\"homepage-title\">\n");
	let _ = writeln!(out, "\t<h1>I am {}</h1>", html_escape(NAME));
	let _ = writeln!(out, "\t<h2>{}</h2>", html_escape(ROLE));
	out.push_str("</div>\n");

	out.push_str("<div class=\"homepage-container\">\n");
	let _ = writeln!(
		out,
		"\t<img src=\"{}\" alt=\"Your Picture\" class=\"homepage-img\">",
		PORTRAIT
	);
	out.push_str("\t<div class=\"homepage-text\">\n");
	for paragraph in BIO {
		let _ = writeln!(out, "\t\t<p>{}</p>", html_escape(paragraph));
	}
	out.push_str("\t</div>\n");
	out.push_str("</div>\n");

	push_footer(&mut out);
	out.push_str("</section>\n");
	out
}

fn push_footer(out: &mut String) {
	out.push_str("<footer>\n<div class=\"footer-icons\">\n");
	for profile in PROFILES {
		let _ = writeln!(
			out,
			"\t<a href=\"{}\" target=\"_blank\" aria-label=\"{}\">",
			profile.url,
			html_escape(profile.label)
		);
		let _ = writeln!(
			out,
			"\t\t<svg fill=\"#FFFFFF\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 50 50\" width=\"50px\" height=\"50px\"><path d=\"{}\"/></svg>",
			profile.icon_path
		);
		out.push_str("\t</a>\n");
	}
	out.push_str("</div>\n</footer>\n");
}
