//! Page Dispatcher
//!
//! Main entry point for rendering one page of the portfolio.
//!
//! Public API (consumed by api_server.rs and the render_static binary):
//! - render(page_slug, lang, store) -> Markup   (unknown slug -> placeholder)
//! - render_page(page, lang, store) -> Markup   (exhaustive over `Page`)
//! - render_game_page(lang, store, game_html) -> Markup

use crate::content::{ContentStore, Language};
use crate::game;
use crate::render::fragments::*;
use crate::render::markup::Markup;
use crate::render::page::Page;
use crate::render::view_builder::build_page_section;
use crate::render::view_models::{PageSection, PageView};

/// Body shown for any page id outside `Page`. Identical in every language.
pub const NOT_FOUND_PLACEHOLDER: &str = "<div>Page not found</div>";

/// Render a page by its slug. Unknown slugs degrade to the placeholder.
pub fn render(page: &str, lang: Language, store: &ContentStore) -> Markup {
    match page.parse::<Page>() {
        Ok(page) => render_page(page, lang, store),
        Err(e) => {
            tracing::debug!("{}; rendering placeholder", e);
            render_not_found()
        }
    }
}

pub fn render_not_found() -> Markup {
    container(Markup::raw(NOT_FOUND_PLACEHOLDER))
}

pub fn render_page(page: Page, lang: Language, store: &ContentStore) -> Markup {
    tracing::debug!("Rendering page {} ({})", page, lang);
    container(render_section(&build_page_section(page, lang, store)))
}

/// Render an already-projected section.
pub fn render_section(page_section: &PageSection) -> Markup {
    let body = match &page_section.body {
        PageView::About(view) => about_card(view),
        PageView::Education(items) => timeline(items),
        PageView::Skills(skills) => {
            let mut grid = Markup::raw(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-8">"#);
            for skill in skills {
                grid.push(&skill_bar(&skill.name, skill.level));
            }
            grid.push_raw("</div>");
            grid
        }
        PageView::Volunteer(items) => timeline(items),
        PageView::Hobbies(cards) => hobby_grid(cards),
        PageView::Goals(goals) => goal_lists(goals),
        PageView::Gallery(items) => gallery_grid(items),
        PageView::Project(project) => project_card(project),
        PageView::Evaluations(items) => evaluation_list(items),
        PageView::Game => game::render_fresh(page_section.lang),
    };

    section(&page_section.title, page_section.glyph, &body)
}

/// Game page around a quiz state the host advanced itself.
pub fn render_game_page(lang: Language, store: &ContentStore, game_html: &Markup) -> Markup {
    let title = Page::Game.nav_label(&store.translations.nav).get(lang);
    container(section(title, Page::Game.glyph(), game_html))
}

fn container(content: Markup) -> Markup {
    let mut html = Markup::raw(r#"<div class="container mx-auto">"#);
    html.push(&content);
    html.push_raw("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_page_placeholder() {
        let store = ContentStore::embedded().unwrap();
        let en = render("contact", Language::En, &store);
        let ar = render("contact", Language::Ar, &store);
        assert_eq!(en, ar);
        assert!(en.as_str().contains(NOT_FOUND_PLACEHOLDER));
        assert_eq!(en, render_not_found());
    }

    #[test]
    fn test_slug_and_enum_agree() {
        let store = ContentStore::embedded().unwrap();
        for page in Page::ALL {
            assert_eq!(
                render(page.slug(), Language::En, &store),
                render_page(page, Language::En, &store)
            );
        }
    }

    #[test]
    fn test_game_page_embeds_fresh_quiz() {
        let store = ContentStore::embedded().unwrap();
        let html = render_page(Page::Game, Language::En, &store);
        assert!(html.as_str().contains("class=\"game"));
        assert!(html.as_str().contains("data-glyph=\"puzzle\""));
    }
}
