//! Content Store
//!
//! Language-indexed portfolio data, loaded once and read-only afterwards.
//!
//! ## Sources
//! - Embedded default: `content/portfolio.json` (compiled in)
//! - Override: any JSON file with the same shape (`CONTENT_PATH`)

pub mod types;
pub mod store;

pub use types::*;
pub use store::{ContentError, ContentStore, ContentWarning};
