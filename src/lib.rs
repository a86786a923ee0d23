//! Portfolio Renderer
//!
//! Server-side rendering of a bilingual (English/Arabic) student portfolio.
//!
//! Structure:
//! - `content/`: the language-indexed content store (loaded once, read-only)
//! - `render/`: page dispatcher, view models and HTML fragments
//! - `game/`: the self-contained guess-the-achievement quiz
//! - `web/`, `api_server`: document shell and Axum host (feature `api`)

pub mod config;
pub mod content;
pub mod game;
pub mod render;

#[cfg(feature = "api")]
pub mod web;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use content::{ContentError, ContentStore, Language, LocalizedText};
pub use render::{render, render_page, Markup, Page};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
