//! Learning-track payloads as produced by the track generator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonProgress {
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp_reward: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<LessonProgress>,
}

impl Lesson {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn is_completed(&self) -> bool {
        self.progress.as_ref().is_some_and(|p| p.completed)
    }
}

/// A grouping of lessons within a track. Displayed as a chapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Level {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Level {
    pub fn with_lessons(title: impl Into<String>, lessons: Vec<Lesson>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            lessons,
        }
    }
}

/// Every level generated for one era.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    #[serde(default)]
    pub era: String,
    #[serde(default)]
    pub levels: Vec<Level>,
}

impl Track {
    pub fn new(era: impl Into<String>, levels: Vec<Level>) -> Self {
        Self {
            era: era.into(),
            levels,
        }
    }

    /// True when at least one level carries at least one lesson.
    pub fn has_lessons(&self) -> bool {
        self.levels.iter().any(|level| !level.lessons.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_payload_decodes_with_defaults() {
        let raw = r#"{ "levels": [ { "title": "Exile" }, { "lessons": [ { "id": "a", "title": "A" } ] } ] }"#;
        let track: Track = serde_json::from_str(raw).unwrap();
        assert_eq!(track.era, "");
        assert_eq!(track.levels.len(), 2);
        assert!(track.levels[0].lessons.is_empty());
        assert_eq!(track.levels[1].lessons[0].xp_reward, None);
        assert!(track.has_lessons());
    }

    #[test]
    fn empty_levels_do_not_count_as_content() {
        let track = Track::new("china", vec![Level::default(), Level::default()]);
        assert!(!track.has_lessons());
        assert!(!Track::default().has_lessons());
    }

    #[test]
    fn completion_requires_progress_flag() {
        let mut lesson = Lesson::new("l1", "Lesson");
        assert!(!lesson.is_completed());
        lesson.progress = Some(LessonProgress { completed: false });
        assert!(!lesson.is_completed());
        lesson.progress = Some(LessonProgress { completed: true });
        assert!(lesson.is_completed());
    }
}
