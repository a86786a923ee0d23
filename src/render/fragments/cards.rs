//! Card grids and lists: about, hobbies, goals, gallery, project, evaluations.

use crate::render::markup::{escape_html, Markup};
use crate::render::view_models::*;

pub fn about_card(view: &AboutView) -> Markup {
    Markup::raw(format!(
        concat!(
            r#"<div class="flex flex-col md:flex-row items-center gap-8 text-center md:text-start rtl:md:text-right">"#,
            r#"<img src="{photo}" alt="{name}" class="w-48 h-48 rounded-full border-4 border-amber-500 object-cover shadow-lg">"#,
            r#"<div class="flex-1">"#,
            r#"<h2 class="text-4xl font-black text-amber-500">{name}</h2>"#,
            r#"<p class="text-xl text-amber-300 mt-1">{grade} @ {school}</p>"#,
            r#"<p class="mt-4 text-lg text-amber-200 leading-relaxed">{about}</p>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        photo = escape_html(&view.photo_url),
        name = escape_html(&view.name),
        grade = escape_html(&view.grade),
        school = escape_html(&view.school),
        about = escape_html(&view.about),
    ))
}

/// Unknown icon tags were projected to `None`; those cards get an empty icon slot.
pub fn hobby_grid(cards: &[HobbyCard]) -> Markup {
    let mut html = Markup::raw(
        r#"<div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6 text-center">"#,
    );
    for card in cards {
        html.push_raw(&format!(
            r#"<div class="bg-teal-800 p-6 rounded-lg border border-teal-700 hover:border-amber-500 hover:scale-105 transition-all duration-300" data-id="{}"><div class="w-16 h-16 mx-auto text-amber-500">"#,
            escape_html(&card.id)
        ));
        if let Some(glyph) = card.glyph {
            html.push(&glyph.render("w-16 h-16"));
        }
        html.push_raw(&format!(
            r#"</div><h3 class="mt-4 text-xl font-bold">{}</h3></div>"#,
            escape_html(&card.name)
        ));
    }
    html.push_raw("</div>");
    html
}

pub fn goal_lists(view: &GoalsView) -> Markup {
    let mut html = Markup::raw(r#"<div class="grid grid-cols-1 lg:grid-cols-2 gap-10">"#);
    html.push(&goal_column(
        "short-term",
        &view.short_term_heading,
        &view.short_term,
        "text-emerald-400",
    ));
    html.push(&goal_column(
        "long-term",
        &view.long_term_heading,
        &view.long_term,
        "text-cyan-400",
    ));
    html.push_raw("</div>");
    html
}

fn goal_column(kind: &str, heading: &str, goals: &[GoalItem], check_color: &str) -> Markup {
    let mut html = Markup::raw(format!(r#"<div data-goals="{}">"#, kind));
    html.push_raw(r#"<h3 class="text-2xl font-bold text-amber-500 mb-4 flex items-center gap-2">"#);
    html.push(&Glyph::Target.render("w-6 h-6"));
    html.push_raw(&format!(" {}</h3>", escape_html(heading)));
    html.push_raw(r#"<ul class="space-y-3">"#);
    for goal in goals {
        html.push_raw(&format!(
            r#"<li class="flex items-start gap-3 p-3 bg-teal-800 rounded-md" data-id="{}">"#,
            escape_html(&goal.id)
        ));
        html.push(&Glyph::Check.render(&format!("w-6 h-6 {} mt-1 flex-shrink-0", check_color)));
        html.push_raw(&format!("<span>{}</span></li>", escape_html(&goal.text)));
    }
    html.push_raw("</ul></div>");
    html
}

pub fn gallery_grid(items: &[GalleryItem]) -> Markup {
    let mut html = Markup::raw(r#"<div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">"#);
    for item in items {
        html.push_raw(&format!(
            concat!(
                r#"<figure class="bg-teal-800 rounded-lg overflow-hidden border border-teal-700" data-id="{id}">"#,
                r#"<img src="{url}" alt="{caption}" class="w-full h-48 object-cover" loading="lazy">"#,
                r#"<figcaption class="p-4 text-amber-200">{caption}</figcaption>"#,
                r#"</figure>"#,
            ),
            id = escape_html(&item.id),
            url = escape_html(&item.url),
            caption = escape_html(&item.caption),
        ));
    }
    html.push_raw("</div>");
    html
}

/// `details_html` is trusted Markdown output and inserted unescaped.
pub fn project_card(view: &ProjectView) -> Markup {
    Markup::raw(format!(
        concat!(
            r#"<div class="bg-teal-800 rounded-lg overflow-hidden shadow-lg border border-teal-700">"#,
            r#"<img src="{image}" alt="{title}" class="w-full h-64 md:h-96 object-cover">"#,
            r#"<div class="p-8">"#,
            r#"<h2 class="text-4xl font-black text-amber-500 mb-2">{title}</h2>"#,
            r#"<p class="text-lg text-amber-300 mb-6">{description}</p>"#,
            r#"<div class="prose prose-invert max-w-none text-amber-200">{details}</div>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        image = escape_html(&view.image_url),
        title = escape_html(&view.title),
        description = escape_html(&view.description),
        details = view.details_html,
    ))
}

pub fn evaluation_list(items: &[EvaluationView]) -> Markup {
    let mut html = Markup::raw(r#"<div class="space-y-8">"#);
    for item in items {
        html.push_raw(&format!(
            concat!(
                r#"<blockquote class="bg-teal-800 p-6 rounded-lg border-l-4 border-amber-500 rtl:border-l-0 rtl:border-r-4" data-id="{id}">"#,
                r#"<p class="text-lg italic text-amber-200">&quot;{comment}&quot;</p>"#,
                r#"<footer class="mt-4">"#,
                r#"<p class="font-bold text-white">{author}</p>"#,
                r#"<p class="text-sm text-amber-300">{role}</p>"#,
                r#"</footer>"#,
                r#"</blockquote>"#,
            ),
            id = escape_html(&item.id),
            comment = escape_html(&item.comment),
            author = escape_html(&item.author),
            role = escape_html(&item.role),
        ));
    }
    html.push_raw("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hobby(id: &str, glyph: Option<Glyph>) -> HobbyCard {
        HobbyCard {
            id: id.to_string(),
            name: id.to_string(),
            glyph,
        }
    }

    #[test]
    fn test_hobby_grid_single_glyph_per_card() {
        let html = hobby_grid(&[hobby("football", Some(Glyph::Football))]);
        let s = html.as_str();
        assert_eq!(s.matches("data-glyph=").count(), 1);
        assert!(s.contains("data-glyph=\"football\""));
    }

    #[test]
    fn test_hobby_grid_without_glyph() {
        let html = hobby_grid(&[hobby("swimming", None)]);
        let s = html.as_str();
        assert!(!s.contains("<svg"));
        assert!(s.contains(">swimming</h3>"));
    }

    #[test]
    fn test_goal_lists_headings_and_items() {
        let view = GoalsView {
            short_term_heading: "Short-Term Goals".to_string(),
            short_term: vec![GoalItem {
                id: "g1".to_string(),
                text: "Learn X".to_string(),
            }],
            long_term_heading: "Long-Term Goals".to_string(),
            long_term: vec![],
        };
        let html = goal_lists(&view);
        let s = html.as_str();
        assert_eq!(s.matches("<li ").count(), 1);
        assert!(s.find("Short-Term Goals").unwrap() < s.find("Learn X").unwrap());
        assert!(s.find("Learn X").unwrap() < s.find("Long-Term Goals").unwrap());
    }

    #[test]
    fn test_evaluation_quotes_comment() {
        let html = evaluation_list(&[EvaluationView {
            id: "e1".to_string(),
            author: "Ms. Huda".to_string(),
            role: "Coach".to_string(),
            comment: "Great <work>".to_string(),
        }]);
        assert!(html.as_str().contains("&quot;Great &lt;work&gt;&quot;"));
        assert!(html.as_str().contains(">Ms. Huda</p>"));
    }

    #[test]
    fn test_project_details_not_escaped() {
        let html = project_card(&ProjectView {
            title: "Rover".to_string(),
            description: "Small robot".to_string(),
            details_html: "<p><strong>Fast</strong></p>".to_string(),
            image_url: "https://example.com/rover.png".to_string(),
        });
        assert!(html.as_str().contains("<p><strong>Fast</strong></p>"));
        assert!(html.as_str().contains("src=\"https://example.com/rover.png\""));
    }
}
