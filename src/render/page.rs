//! The closed set of portfolio pages.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::content::{LocalizedText, NavLabels};
use crate::render::view_models::Glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    About,
    Education,
    Skills,
    Volunteer,
    Hobbies,
    Goals,
    Gallery,
    Project,
    Evaluations,
    Game,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 10] = [
        Page::About,
        Page::Education,
        Page::Skills,
        Page::Volunteer,
        Page::Hobbies,
        Page::Goals,
        Page::Gallery,
        Page::Project,
        Page::Evaluations,
        Page::Game,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::About => "about",
            Page::Education => "education",
            Page::Skills => "skills",
            Page::Volunteer => "volunteer",
            Page::Hobbies => "hobbies",
            Page::Goals => "goals",
            Page::Gallery => "gallery",
            Page::Project => "project",
            Page::Evaluations => "evaluations",
            Page::Game => "game",
        }
    }

    /// Section header glyph.
    pub fn glyph(&self) -> Glyph {
        match self {
            Page::About => Glyph::User,
            Page::Education => Glyph::Education,
            Page::Skills => Glyph::Sparkles,
            Page::Volunteer => Glyph::Heart,
            Page::Hobbies => Glyph::Flag,
            Page::Goals => Glyph::Rocket,
            Page::Gallery => Glyph::Gallery,
            Page::Project => Glyph::Project,
            Page::Evaluations => Glyph::Star,
            Page::Game => Glyph::Puzzle,
        }
    }

    /// Section title, also used as the navigation label.
    pub fn nav_label<'a>(&self, nav: &'a NavLabels) -> &'a LocalizedText {
        match self {
            Page::About => &nav.about,
            Page::Education => &nav.education,
            Page::Skills => &nav.skills,
            Page::Volunteer => &nav.volunteer,
            Page::Hobbies => &nav.hobbies,
            Page::Goals => &nav.goals,
            Page::Gallery => &nav.gallery,
            Page::Project => &nav.project,
            Page::Evaluations => &nav.evaluations,
            Page::Game => &nav.game,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}
