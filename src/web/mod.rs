//! HTML document shell around dispatcher output.

pub mod pages;

pub use pages::{render_document, LinkStyle};
