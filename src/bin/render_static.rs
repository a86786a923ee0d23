//! Static Export
//!
//! Renders every page in every language to `{out_dir}/{lang}/{page}.html`.
//! Run with: cargo run --bin render_static -- [out_dir]

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use portfolio_renderer::render::render_page;
use portfolio_renderer::web::{render_document, LinkStyle};
use portfolio_renderer::{ContentStore, Language, Page, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_renderer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "dist".to_string()));

    let config = ServerConfig::from_env()?;
    let store = match &config.content_path {
        Some(path) => ContentStore::load(path)?,
        None => ContentStore::embedded()?,
    };

    let mut written = 0;
    for lang in Language::ALL {
        let lang_dir = out_dir.join(lang.code());
        fs::create_dir_all(&lang_dir)
            .with_context(|| format!("creating {}", lang_dir.display()))?;

        for page in Page::ALL {
            let content = render_page(page, lang, &store);
            let html = render_document(page.slug(), lang, &store, &content, LinkStyle::Static)?;
            let path = lang_dir.join(format!("{}.html", page.slug()));
            fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
            written += 1;
        }
    }

    tracing::info!("Wrote {} pages to {}", written, out_dir.display());
    Ok(())
}
