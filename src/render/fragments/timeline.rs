//! Vertical timeline with a rail, used for education and volunteer work.
//!
//! An absent or empty description emits no element at all.

use crate::render::markup::{escape_html, Markup};
use crate::render::view_models::TimelineItem;

pub fn timeline(items: &[TimelineItem]) -> Markup {
    let mut html = Markup::raw(
        r#"<div class="relative border-l-2 border-amber-500 rtl:border-l-0 rtl:border-r-2 ml-4 rtl:ml-0 rtl:mr-4 space-y-12">"#,
    );

    for item in items {
        html.push_raw(&format!(
            r#"<div class="pl-8 rtl:pl-0 rtl:pr-8 relative" data-id="{}">"#,
            escape_html(&item.id)
        ));
        html.push_raw(r#"<div class="absolute -left-2.5 rtl:-left-auto rtl:-right-2.5 top-1 w-5 h-5 bg-teal-900 border-2 border-amber-500 rounded-full"></div>"#);
        html.push_raw(&format!(
            r#"<time class="mb-1 text-sm font-normal leading-none text-amber-300">{}</time>"#,
            escape_html(&item.period)
        ));
        html.push_raw(&format!(
            r#"<h3 class="text-xl font-semibold text-white">{}</h3>"#,
            escape_html(&item.title)
        ));
        html.push_raw(&format!(
            r#"<h4 class="text-md font-medium text-amber-300">{}</h4>"#,
            escape_html(&item.subtitle)
        ));
        if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
            html.push_raw(&format!(
                r#"<p class="mt-2 text-base font-normal text-amber-200">{}</p>"#,
                escape_html(description)
            ));
        }
        html.push_raw("</div>");
    }

    html.push_raw("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, description: Option<&str>) -> TimelineItem {
        TimelineItem {
            id: id.to_string(),
            title: format!("{} title", id),
            subtitle: format!("{} subtitle", id),
            period: "2020 - 2021".to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_items_in_order() {
        let html = timeline(&[item("b", None), item("a", None), item("c", None)]);
        let s = html.as_str();
        let b = s.find("b title").unwrap();
        let a = s.find("a title").unwrap();
        let c = s.find("c title").unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn test_missing_description_omitted() {
        let html = timeline(&[item("a", Some("Helped out")), item("b", None)]);
        let s = html.as_str();
        assert_eq!(s.matches("<p ").count(), 1);
        assert!(s.contains(">Helped out</p>"));
    }

    #[test]
    fn test_empty_description_omitted() {
        let html = timeline(&[item("a", Some(""))]);
        assert!(!html.as_str().contains("<p "));
    }
}
