//! Page markup
//!
//! Re-exports folio-content: pure functions returning the markup of each
//! static page, and the tables they render.

pub use folio_content::*;
