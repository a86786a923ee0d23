// Page shell for HTML rendering with Askama

use askama::Template;

use crate::content::{ContentStore, Language};
use crate::render::{Markup, Page};

/// How navigation links are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `/{lang}/{page}` routes served by the API server.
    Server,
    /// `../{lang}/{page}.html` files written by the static export.
    Static,
}

impl LinkStyle {
    fn href(&self, lang: Language, segment: &str) -> String {
        let segment = urlencoding::encode(segment);
        match self {
            LinkStyle::Server => format!("/{}/{}", lang.code(), segment),
            LinkStyle::Static => format!("../{}/{}.html", lang.code(), segment),
        }
    }
}

pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate<'a> {
    pub lang_code: &'a str,
    pub dir: &'a str,
    pub title: String,
    pub site_name: &'a str,
    pub home_href: String,
    pub nav: Vec<NavLink>,
    pub toggle_href: String,
    pub toggle_code: &'a str,
    pub toggle_label: &'a str,
    pub content: &'a str,
}

/// Wrap dispatcher output in the full document: nav, language toggle, `lang`/`dir`.
///
/// `current` is the raw page segment so the toggle keeps pointing at the same
/// (possibly unknown) page.
pub fn render_document(
    current: &str,
    lang: Language,
    store: &ContentStore,
    content: &Markup,
    style: LinkStyle,
) -> Result<String, askama::Error> {
    let nav_labels = &store.translations.nav;
    let active = current.parse::<Page>().ok();

    let nav = Page::ALL
        .iter()
        .map(|page| NavLink {
            href: style.href(lang, page.slug()),
            label: page.nav_label(nav_labels).get(lang).to_string(),
            active: active == Some(*page),
        })
        .collect();

    let title = match active {
        Some(page) => format!("{} | {}", page.nav_label(nav_labels).get(lang), store.student.name),
        None => store.student.name.clone(),
    };

    let other = lang.toggled();
    let template = LayoutTemplate {
        lang_code: lang.code(),
        dir: lang.dir(),
        title,
        site_name: &store.student.name,
        home_href: style.href(lang, Page::About.slug()),
        nav,
        toggle_href: style.href(other, current),
        toggle_code: other.code(),
        toggle_label: other.native_name(),
        content: content.as_str(),
    };

    template.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_document_marks_active_page_and_direction() {
        let store = ContentStore::embedded().unwrap();
        let content = render::render("skills", Language::Ar, &store);
        let html = render_document("skills", Language::Ar, &store, &content, LinkStyle::Server).unwrap();

        assert!(html.contains("<html lang=\"ar\" dir=\"rtl\">"));
        assert!(html.contains("href=\"/en/skills\""));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("style=\"width: 90%\""));
    }

    #[test]
    fn test_static_links() {
        let store = ContentStore::embedded().unwrap();
        let content = render::render("goals", Language::En, &store);
        let html = render_document("goals", Language::En, &store, &content, LinkStyle::Static).unwrap();

        assert!(html.contains("href=\"../en/about.html\""));
        assert!(html.contains("href=\"../ar/goals.html\""));
    }

    #[test]
    fn test_unknown_segment_is_encoded_in_toggle() {
        let store = ContentStore::embedded().unwrap();
        let content = render::render_not_found();
        let html = render_document("a b", Language::En, &store, &content, LinkStyle::Server).unwrap();

        assert!(html.contains("href=\"/ar/a%20b\""));
        assert!(!html.contains("aria-current"));
        assert!(html.contains(render::NOT_FOUND_PLACEHOLDER));
    }
}
