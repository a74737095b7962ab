//! Folio Content - static markup for the personal site.
//!
//! Every page the router can show without a network round-trip is produced
//! here by a pure function:
//!
//! - [`home`]: biography plus a footer with external profile links
//! - [`portfolio`]: the project list (see [`PROJECTS`])
//! - [`blog`]: the article index (see [`ARTICLES`])
//!
//! The functions read nothing but the constant tables in this crate, so the
//! same call always returns the same string.
//!
//! ## Example
//!
//! ```
//! let markup = folio_content::portfolio();
//! assert_eq!(markup.matches("class=\"project-box\"").count(), folio_content::PROJECTS.len());
//! ```

#![warn(missing_docs)]

pub mod blog;
pub mod home;
pub mod markup;
pub mod portfolio;

pub use blog::{ARTICLES, ArticleEntry, ENTRY_LINK_SELECTOR, blog};
pub use home::{PROFILES, ProfileLink, home};
pub use markup::html_escape;
pub use portfolio::{PROJECTS, Project, portfolio};
