//! Page rendering
//!
//! Turns a `(Page, Language)` pair plus the content store into HTML markup.
//!
//! ## Layers
//! - `page`: the closed set of pages and their static title/glyph table
//! - `view_builder`: projects store records into `view_models` with text resolved
//! - `fragments`: stateless HTML renderers for the projected views
//! - `dispatcher`: the page switch tying the three together

pub mod markup;
pub mod page;
pub mod view_models;
pub mod view_builder;
pub mod fragments;
pub mod dispatcher;

pub use markup::{escape_html, Markup};
pub use page::{Page, UnknownPage};
pub use view_models::{Glyph, PageSection, PageView};
pub use view_builder::build_page_section;
pub use dispatcher::{
    render, render_game_page, render_not_found, render_page, render_section, NOT_FOUND_PLACEHOLDER,
};
