//! Client-side routing
//!
//! This module provides access to folio-pages: route classification,
//! history labelling, the content region and the [`Router`] controller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use folio::pages::{MemoryHistory, MemoryRegion, Router, RouterSettings};
//!
//! let router = Rc::new(Router::new(
//!     MemoryHistory::new("/"),
//!     MemoryRegion::new(r#"<nav class="nav"><a href="/blog">Blog</a></nav>"#),
//!     my_article_source,
//!     RouterSettings::default(),
//! ));
//! router.start().await?;
//! ```

pub use folio_pages::*;
