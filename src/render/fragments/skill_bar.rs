//! Skill meter.
//!
//! The fill width is the level as authored; out-of-range values are not clamped.

use crate::render::markup::{escape_html, Markup};

pub fn skill_bar(name: &str, level: i32) -> Markup {
    Markup::raw(format!(
        concat!(
            r#"<div class="w-full">"#,
            r#"<div class="flex justify-between mb-1">"#,
            r#"<span class="text-base font-medium text-amber-300">{name}</span>"#,
            r#"<span class="text-sm font-medium text-amber-500">{level}%</span>"#,
            r#"</div>"#,
            r#"<div class="w-full bg-teal-700 rounded-full h-4">"#,
            r#"<div class="bg-amber-500 h-4 rounded-full" style="width: {level}%"></div>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        name = escape_html(name),
        level = level,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_matches_level() {
        let html = skill_bar("Mathematics", 75);
        assert!(html.as_str().contains("style=\"width: 75%\""));
        assert!(html.as_str().contains(">75%</span>"));
        assert!(html.as_str().contains(">Mathematics</span>"));
    }

    #[test]
    fn test_level_not_clamped() {
        assert!(skill_bar("Overflow", 130).as_str().contains("width: 130%"));
        assert!(skill_bar("Negative", -5).as_str().contains("width: -5%"));
    }
}
