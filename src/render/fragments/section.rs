//! Section wrapper: heading with glyph, then the body.

use crate::render::markup::{escape_html, Markup};
use crate::render::view_models::Glyph;

pub fn section(title: &str, glyph: Glyph, body: &Markup) -> Markup {
    let mut html = Markup::raw(r#"<section class="mb-16 animate-fade-in">"#);
    html.push_raw(r#"<div class="flex items-center gap-4 mb-8"><div class="text-amber-500 w-10 h-10">"#);
    html.push(&glyph.render("w-10 h-10"));
    html.push_raw(&format!(
        r#"</div><h2 class="text-3xl md:text-4xl font-black text-white border-b-2 border-amber-500 pb-2">{}</h2></div>"#,
        escape_html(title)
    ));
    html.push(body);
    html.push_raw("</section>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_wraps_body() {
        let html = section("Skills & More", Glyph::Sparkles, &Markup::raw("<p>body</p>"));
        let s = html.as_str();
        assert!(s.starts_with("<section"));
        assert!(s.contains("Skills &amp; More</h2>"));
        assert!(s.contains("data-glyph=\"sparkles\""));
        assert!(s.ends_with("<p>body</p></section>"));
    }
}
