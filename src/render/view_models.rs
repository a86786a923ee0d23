//! View Models for page rendering
//!
//! Projected, language-resolved shapes handed to the fragments.
//! Also serialized as-is by the JSON endpoint.

use serde::Serialize;

use crate::content::{HobbyIcon, Language};
use crate::render::markup::Markup;
use crate::render::page::Page;

/// Inline SVG glyphs used by section headers, cards and lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    User,
    Education,
    Sparkles,
    Heart,
    Flag,
    Rocket,
    Gallery,
    Project,
    Star,
    Puzzle,
    Check,
    Target,
    Football,
    Calculator,
    Book,
    Code,
    Chess,
}

impl Glyph {
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::User => "user",
            Glyph::Education => "education",
            Glyph::Sparkles => "sparkles",
            Glyph::Heart => "heart",
            Glyph::Flag => "flag",
            Glyph::Rocket => "rocket",
            Glyph::Gallery => "gallery",
            Glyph::Project => "project",
            Glyph::Star => "star",
            Glyph::Puzzle => "puzzle",
            Glyph::Check => "check",
            Glyph::Target => "target",
            Glyph::Football => "football",
            Glyph::Calculator => "calculator",
            Glyph::Book => "book",
            Glyph::Code => "code",
            Glyph::Chess => "chess",
        }
    }

    pub fn svg_path(&self) -> &'static str {
        match self {
            Glyph::User => r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
            Glyph::Education => r#"<path d="M22 10 12 5 2 10l10 5 10-5Z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#,
            Glyph::Sparkles => r#"<path d="M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2Z"/><path d="M5 3v4"/><path d="M3 5h4"/>"#,
            Glyph::Heart => r#"<path d="M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7Z"/>"#,
            Glyph::Flag => r#"<path d="M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1z"/><path d="M4 22v-7"/>"#,
            Glyph::Rocket => r#"<path d="M4.5 16.5c-1.5 1.3-2 5-2 5s3.7-.5 5-2c.7-.8.7-2.1-.1-2.9a2.2 2.2 0 0 0-2.9-.1Z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.9A12.9 12.9 0 0 1 22 2c0 2.7-.8 7.5-6 11a22.4 22.4 0 0 1-4 2Z"/>"#,
            Glyph::Gallery => r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.1-3.1a2 2 0 0 0-2.8 0L6 21"/>"#,
            Glyph::Project => r#"<path d="M2 7h20v14H2z"/><path d="M16 7V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v2"/>"#,
            Glyph::Star => r#"<path d="m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1Z"/>"#,
            Glyph::Puzzle => r#"<path d="M19.4 14.6a2.5 2.5 0 1 0 0-5H18V6a2 2 0 0 0-2-2h-3.6v1.4a2.5 2.5 0 1 1-5 0V4H4v4h1.4a2.5 2.5 0 1 1 0 5H4v7h7v-1.4a2.5 2.5 0 1 1 5 0V20h2v-5.4Z"/>"#,
            Glyph::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            Glyph::Target => r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#,
            Glyph::Football => r#"<circle cx="12" cy="12" r="10"/><path d="m12 7 4 3-1.5 5h-5L8 10Z"/><path d="M12 2v5"/><path d="m16 10 5-1.5"/><path d="m8 10-5-1.5"/>"#,
            Glyph::Calculator => r#"<rect x="4" y="2" width="16" height="20" rx="2"/><path d="M8 6h8"/><path d="M8 14h.01"/><path d="M12 14h.01"/><path d="M16 14h.01"/><path d="M8 18h.01"/><path d="M12 18h.01"/><path d="M16 18h.01"/>"#,
            Glyph::Book => r#"<path d="M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"/>"#,
            Glyph::Code => r#"<path d="m16 18 6-6-6-6"/><path d="m8 6-6 6 6 6"/>"#,
            Glyph::Chess => r#"<path d="M8 16l-1.5 4h11L16 16"/><path d="M9 16c0-3 1-5 1-7a2 2 0 1 1 4 0c0 2 1 4 1 7"/><path d="M10 5h4"/><path d="M12 3v4"/>"#,
        }
    }

    /// Inline SVG element. `data-glyph` names the glyph for styling hooks.
    pub fn render(&self, class: &str) -> Markup {
        Markup::raw(format!(
            r#"<svg data-glyph="{}" class="{}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.name(),
            class,
            self.svg_path()
        ))
    }
}

impl From<HobbyIcon> for Glyph {
    fn from(icon: HobbyIcon) -> Self {
        match icon {
            HobbyIcon::Football => Glyph::Football,
            HobbyIcon::Calculator => Glyph::Calculator,
            HobbyIcon::Book => Glyph::Book,
            HobbyIcon::Code => Glyph::Code,
            HobbyIcon::Chess => Glyph::Chess,
        }
    }
}

// ============================================================================
// Page envelope
// ============================================================================

/// One resolved page: header data plus the projected body.
#[derive(Debug, Clone, Serialize)]
pub struct PageSection {
    pub page: Page,
    pub lang: Language,
    pub title: String,
    pub glyph: Glyph,
    pub body: PageView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum PageView {
    About(AboutView),
    Education(Vec<TimelineItem>),
    Skills(Vec<SkillView>),
    Volunteer(Vec<TimelineItem>),
    Hobbies(Vec<HobbyCard>),
    Goals(GoalsView),
    Gallery(Vec<GalleryItem>),
    Project(ProjectView),
    Evaluations(Vec<EvaluationView>),
    /// The mini-game renders itself; nothing is projected from the store.
    Game,
}

// ============================================================================
// Bodies
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct AboutView {
    pub name: String,
    pub grade: String,
    pub school: String,
    pub about: String,
    pub photo_url: String,
}

/// Shared shape for education and volunteer entries.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct TimelineItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct SkillView {
    pub id: String,
    pub name: String,
    pub level: i32,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct HobbyCard {
    pub id: String,
    pub name: String,
    pub glyph: Option<Glyph>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GoalItem {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GoalsView {
    pub short_term_heading: String,
    pub short_term: Vec<GoalItem>,
    pub long_term_heading: String,
    pub long_term: Vec<GoalItem>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ProjectView {
    pub title: String,
    pub description: String,
    /// Markdown details already converted to HTML.
    pub details_html: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct EvaluationView {
    pub id: String,
    pub author: String,
    pub role: String,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_render_is_tagged() {
        let svg = Glyph::Football.render("w-6 h-6");
        assert!(svg.as_str().starts_with("<svg data-glyph=\"football\""));
        assert!(svg.as_str().contains("class=\"w-6 h-6\""));
        assert!(svg.as_str().ends_with("</svg>"));
    }

    #[test]
    fn test_hobby_icon_maps_to_matching_glyph() {
        for icon in HobbyIcon::ALL {
            assert_eq!(Glyph::from(icon).name(), icon.tag());
        }
    }
}
