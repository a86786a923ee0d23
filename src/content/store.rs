//! Content Store
//!
//! Owns every record the dispatcher renders. Loaded once (embedded JSON or a
//! file on disk) and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::types::*;

/// Compiled-in default content.
const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Authoring anomalies the renderer tolerates. Reported at load time only.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentWarning {
    SkillLevelOutOfRange { id: String, level: i32 },
    UnknownHobbyIcon { id: String, tag: String },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::SkillLevelOutOfRange { id, level } => {
                write!(f, "skill '{}' has level {} outside 0-100", id, level)
            }
            ContentWarning::UnknownHobbyIcon { id, tag } => {
                write!(f, "hobby '{}' uses unknown icon tag '{}'", id, tag)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore {
    pub student: StudentInfo,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub volunteer_work: Vec<VolunteerEntry>,
    pub hobbies: Vec<HobbyEntry>,
    pub goals: Goals,
    pub gallery: Vec<GalleryImage>,
    pub featured_project: FeaturedProject,
    pub evaluations: Vec<EvaluationEntry>,
    pub translations: Translations,
}

impl ContentStore {
    /// Parse a store from JSON and check record ids.
    ///
    /// Tolerated anomalies (see [`ContentStore::validate`]) are logged, not rejected.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let store: ContentStore = serde_json::from_str(json)?;
        store.check_unique_ids()?;

        for warning in store.validate() {
            tracing::warn!("Content warning: {}", warning);
        }

        Ok(store)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        tracing::info!("Loaded content from {}", path.display());
        Ok(store)
    }

    /// The compiled-in portfolio.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json_str(EMBEDDED_CONTENT)
    }

    /// Report out-of-range skill levels and unknown hobby icon tags.
    pub fn validate(&self) -> Vec<ContentWarning> {
        let skills = self
            .skills
            .iter()
            .filter(|s| !(0..=100).contains(&s.level))
            .map(|s| ContentWarning::SkillLevelOutOfRange {
                id: s.id.clone(),
                level: s.level,
            });

        let hobbies = self
            .hobbies
            .iter()
            .filter(|h| h.icon_kind().is_none())
            .map(|h| ContentWarning::UnknownHobbyIcon {
                id: h.id.clone(),
                tag: h.icon.clone(),
            });

        skills.chain(hobbies).collect()
    }

    /// Ids key the rendered list items, so they must be unique per collection.
    fn check_unique_ids(&self) -> Result<(), ContentError> {
        check_ids("education", self.education.iter().map(|e| e.id.as_str()))?;
        check_ids("skills", self.skills.iter().map(|e| e.id.as_str()))?;
        check_ids("volunteer_work", self.volunteer_work.iter().map(|e| e.id.as_str()))?;
        check_ids("hobbies", self.hobbies.iter().map(|e| e.id.as_str()))?;
        check_ids(
            "goals",
            self.goals
                .short_term
                .iter()
                .chain(&self.goals.long_term)
                .map(|e| e.id.as_str()),
        )?;
        check_ids("gallery", self.gallery.iter().map(|e| e.id.as_str()))?;
        check_ids("evaluations", self.evaluations.iter().map(|e| e.id.as_str()))?;
        Ok(())
    }
}

fn check_ids<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::Invalid(format!(
                "duplicate id '{}' in {}",
                id, collection
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let store = ContentStore::embedded().unwrap();
        assert!(!store.student.name.is_empty());
        assert!(!store.skills.is_empty());
        assert!(!store.goals.short_term.is_empty());
        assert!(store.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_tolerated_anomalies() {
        let mut store = ContentStore::embedded().unwrap();
        store.skills[0].level = 120;
        store.hobbies[0].icon = "swimming".to_string();

        let warnings = store.validate();
        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            warnings[0],
            ContentWarning::SkillLevelOutOfRange { level: 120, .. }
        ));
        assert!(matches!(
            &warnings[1],
            ContentWarning::UnknownHobbyIcon { tag, .. } if tag == "swimming"
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut store = ContentStore::embedded().unwrap();
        let dup = store.skills[0].clone();
        store.skills.push(dup);
        let json = serde_json::to_string(&store).unwrap();

        let err = ContentStore::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn test_missing_translation_is_parse_error() {
        let store = ContentStore::embedded().unwrap();
        let mut value = serde_json::to_value(&store).unwrap();
        value["skills"][0]["name"]
            .as_object_mut()
            .unwrap()
            .remove("ar");

        let err = ContentStore::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ContentStore::load("/nonexistent/portfolio.json").unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
