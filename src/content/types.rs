//! Shared data types for the portfolio content.
//!
//! Every displayed field is a `LocalizedText` with one entry per supported
//! language. The struct has no optional fields, so a JSON document missing a
//! translation fails to deserialize instead of rendering a blank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// Label shown on the language toggle (in the language itself).
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// The language the toggle switches to.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// A string with one variant per supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub grade: LocalizedText,
    pub school: String,
    pub about: LocalizedText,
    pub photo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    pub degree: LocalizedText,
    pub institution: LocalizedText,
    pub years: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerEntry {
    pub id: String,
    pub role: LocalizedText,
    pub organization: LocalizedText,
    pub years: String,
    #[serde(default)]
    pub description: Option<LocalizedText>,
}

/// Proficiency percentage. Expected in [0, 100] but passed through as authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub name: LocalizedText,
    pub level: i32,
}

/// Hobby card. `icon` is a free tag; only the five known tags get a glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HobbyEntry {
    pub id: String,
    pub name: LocalizedText,
    pub icon: String,
}

impl HobbyEntry {
    pub fn icon_kind(&self) -> Option<HobbyIcon> {
        HobbyIcon::from_tag(&self.icon)
    }
}

/// The closed set of hobby icon tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HobbyIcon {
    Football,
    Calculator,
    Book,
    Code,
    Chess,
}

impl HobbyIcon {
    pub const ALL: [HobbyIcon; 5] = [
        HobbyIcon::Football,
        HobbyIcon::Calculator,
        HobbyIcon::Book,
        HobbyIcon::Code,
        HobbyIcon::Chess,
    ];

    /// Exact, case-sensitive match against the known tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "football" => Some(HobbyIcon::Football),
            "calculator" => Some(HobbyIcon::Calculator),
            "book" => Some(HobbyIcon::Book),
            "code" => Some(HobbyIcon::Code),
            "chess" => Some(HobbyIcon::Chess),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            HobbyIcon::Football => "football",
            HobbyIcon::Calculator => "calculator",
            HobbyIcon::Book => "book",
            HobbyIcon::Code => "code",
            HobbyIcon::Chess => "chess",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalEntry {
    pub id: String,
    pub text: LocalizedText,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Goals {
    pub short_term: Vec<GoalEntry>,
    pub long_term: Vec<GoalEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationEntry {
    pub id: String,
    pub author: String,
    pub role: LocalizedText,
    pub comment: LocalizedText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub caption: LocalizedText,
}

/// Singleton project showcase. `details` is Markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub details: LocalizedText,
    pub image_url: String,
}

// ============================================================================
// UI chrome
// ============================================================================

/// Navigation labels, one per page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLabels {
    pub about: LocalizedText,
    pub education: LocalizedText,
    pub skills: LocalizedText,
    pub volunteer: LocalizedText,
    pub hobbies: LocalizedText,
    pub goals: LocalizedText,
    pub gallery: LocalizedText,
    pub project: LocalizedText,
    pub evaluations: LocalizedText,
    pub game: LocalizedText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translations {
    pub nav: NavLabels,
    pub short_term_goals: LocalizedText,
    pub long_term_goals: LocalizedText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("ar".parse::<Language>(), Ok(Language::Ar));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.toggled(), Language::Ar);
    }

    #[test]
    fn test_localized_text_requires_every_language() {
        let ok: Result<LocalizedText, _> =
            serde_json::from_str(r#"{"en": "Chess", "ar": "الشطرنج"}"#);
        assert_eq!(ok.unwrap().get(Language::Ar), "الشطرنج");

        let missing: Result<LocalizedText, _> = serde_json::from_str(r#"{"en": "Chess"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_hobby_icon_tags_are_exact() {
        for icon in HobbyIcon::ALL {
            assert_eq!(HobbyIcon::from_tag(icon.tag()), Some(icon));
        }
        assert_eq!(HobbyIcon::from_tag("Football"), None);
        assert_eq!(HobbyIcon::from_tag("swimming"), None);
    }
}
