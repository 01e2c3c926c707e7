use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DashboardError;

pub const APP_NAME: &str = "smartclass360";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubjectSetting {
    pub name: String,
    pub default_score: u8,
}

impl SubjectSetting {
    pub fn new(name: impl Into<String>, default_score: u8) -> Self {
        Self {
            name: name.into(),
            default_score,
        }
    }
}

/// Subject schema and slider bounds, stored with confy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub subjects: Vec<SubjectSetting>,
    pub min_score: u8,
    pub max_score: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            subjects: vec![
                SubjectSetting::new("Python", 70),
                SubjectSetting::new("TypeScript", 75),
                SubjectSetting::new("Next.js", 80),
            ],
            min_score: 0,
            max_score: 100,
        }
    }
}

impl Settings {
    /// Loads the named profile (or the default one), creating it on first run.
    pub fn load(profile: Option<&str>) -> Result<Self, DashboardError> {
        let settings: Settings = confy::load(APP_NAME, profile)?;
        info!(
            profile = profile.unwrap_or("default"),
            subjects = settings.subjects.len(),
            "settings loaded"
        );
        Ok(settings)
    }

    pub fn with_subjects(mut self, subjects: Vec<SubjectSetting>) -> Self {
        if !subjects.is_empty() {
            self.subjects = subjects;
        }
        self
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.min_score >= self.max_score {
            return Err(DashboardError::ScoreBounds {
                min: self.min_score,
                max: self.max_score,
            });
        }
        if self.subjects.is_empty() {
            return Err(DashboardError::NoSubjects);
        }
        let mut seen = HashSet::new();
        for subject in &self.subjects {
            if subject.name.trim().is_empty() {
                return Err(DashboardError::EmptySubject);
            }
            if !seen.insert(subject.name.as_str()) {
                return Err(DashboardError::DuplicateSubject(subject.name.clone()));
            }
            if !(self.min_score..=self.max_score).contains(&subject.default_score) {
                return Err(DashboardError::DefaultOutOfBounds {
                    subject: subject.name.clone(),
                    score: subject.default_score,
                    min: self.min_score,
                    max: self.max_score,
                });
            }
        }
        Ok(())
    }

    pub fn subject_names(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.name.as_str())
    }
}

/// Parses a `--subject` flag: `NAME` or `NAME=SCORE`.
pub fn parse_subject(raw: &str) -> Result<SubjectSetting, DashboardError> {
    let syntax = || DashboardError::SubjectSyntax(raw.to_string());
    let (name, score) = match raw.split_once('=') {
        Some((name, score)) => (name.trim(), score.trim().parse::<u8>().map_err(|_| syntax())?),
        None => (raw.trim(), 50),
    };
    if name.is_empty() {
        return Err(syntax());
    }
    Ok(SubjectSetting::new(name, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_dashboard() {
        let settings = Settings::default();
        let names: Vec<&str> = settings.subject_names().collect();
        assert_eq!(names, ["Python", "TypeScript", "Next.js"]);
        let defaults: Vec<u8> = settings.subjects.iter().map(|s| s.default_score).collect();
        assert_eq!(defaults, [70, 75, 80]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_empty_subject_list() {
        let settings = Settings {
            subjects: Vec::new(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(DashboardError::NoSubjects)));
    }

    #[test]
    fn rejects_duplicate_subjects() {
        let settings = Settings::default().with_subjects(vec![
            SubjectSetting::new("Math", 50),
            SubjectSetting::new("Math", 60),
        ]);
        assert!(matches!(
            settings.validate(),
            Err(DashboardError::DuplicateSubject(name)) if name == "Math"
        ));
    }

    #[test]
    fn rejects_inverted_bounds_and_stray_defaults() {
        let inverted = Settings {
            min_score: 100,
            max_score: 0,
            ..Settings::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(DashboardError::ScoreBounds { min: 100, max: 0 })
        ));

        let narrow = Settings {
            min_score: 0,
            max_score: 10,
            ..Settings::default()
        };
        assert!(matches!(
            narrow.validate(),
            Err(DashboardError::DefaultOutOfBounds { score: 70, .. })
        ));
    }

    #[test]
    fn empty_override_keeps_configured_subjects() {
        let settings = Settings::default().with_subjects(Vec::new());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn parses_subject_flags() {
        assert_eq!(parse_subject("Rust=90").unwrap(), SubjectSetting::new("Rust", 90));
        assert_eq!(parse_subject(" Go ").unwrap(), SubjectSetting::new("Go", 50));
        assert!(parse_subject("=40").is_err());
        assert!(parse_subject("Rust=high").is_err());
        assert!(parse_subject("Rust=300").is_err());
    }
}
