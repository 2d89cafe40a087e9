//! Projection of a fetched learning track into the chapter list the learning
//! path renders.
//!
//! Every lesson that is not completed is shown as `Current`: the path runs in
//! unlock-all mode, so `Locked` exists for the component's styling but is
//! never produced here.

use std::ops::Range;

use api::{LessonProgress, Track};
use serde::Serialize;

pub const DEFAULT_LESSON_XP: u32 = 50;
pub const DEFAULT_CHAPTER_TITLE: &str = "Chapter";
pub const LESSON_EMOJI: &str = "📖";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    Completed,
    Current,
    Locked,
}

impl LessonStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Completed => "path-node--completed",
            Self::Current => "path-node--current",
            Self::Locked => "path-node--locked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonView {
    pub id: String,
    pub title: String,
    pub xp: u32,
    pub status: LessonStatus,
    pub description: Option<String>,
    pub emoji: &'static str,
    pub progress: Option<LessonProgress>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterView {
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonView>,
}

/// Display model for one track.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathProjection {
    pub chapters: Vec<ChapterView>,
    /// Flattened position of the lesson the mascot sits on.
    pub mascot_index: Option<usize>,
}

impl PathProjection {
    pub fn lesson_count(&self) -> usize {
        self.chapters.iter().map(|ch| ch.lessons.len()).sum()
    }

    pub fn lessons(&self) -> impl Iterator<Item = &LessonView> {
        self.chapters.iter().flat_map(|ch| ch.lessons.iter())
    }

    /// Lesson at a flattened node position.
    pub fn lesson_at(&self, flat_index: usize) -> Option<&LessonView> {
        self.lessons().nth(flat_index)
    }

    /// Flattened index range covered by each chapter, in chapter order.
    pub fn chapter_ranges(&self) -> Vec<Range<usize>> {
        let mut start = 0;
        self.chapters
            .iter()
            .map(|ch| {
                let range = start..start + ch.lessons.len();
                start = range.end;
                range
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

pub fn project(track: &Track) -> PathProjection {
    let chapters: Vec<ChapterView> = track
        .levels
        .iter()
        .map(|level| ChapterView {
            title: level
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_CHAPTER_TITLE.to_string()),
            description: level.description.clone().unwrap_or_default(),
            lessons: level
                .lessons
                .iter()
                .map(|lesson| LessonView {
                    id: lesson.id.clone(),
                    title: lesson.title.clone(),
                    xp: lesson.xp_reward.unwrap_or(DEFAULT_LESSON_XP),
                    status: if lesson.is_completed() {
                        LessonStatus::Completed
                    } else {
                        LessonStatus::Current
                    },
                    description: lesson.description.clone(),
                    emoji: LESSON_EMOJI,
                    progress: lesson.progress.clone(),
                    year: lesson.year,
                })
                .collect(),
        })
        .filter(|chapter| !chapter.lessons.is_empty())
        .collect();

    let mascot_index = chapters
        .iter()
        .flat_map(|ch| ch.lessons.iter())
        .position(|lesson| lesson.status == LessonStatus::Current);

    PathProjection {
        chapters,
        mascot_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Lesson, Level};

    fn lesson(id: &str, completed: Option<bool>) -> Lesson {
        Lesson {
            progress: completed.map(|completed| LessonProgress { completed }),
            ..Lesson::new(id, id.to_uppercase())
        }
    }

    fn track(levels: Vec<Level>) -> Track {
        Track::new("jewish", levels)
    }

    #[test]
    fn empty_track_projects_to_nothing() {
        let projection = project(&Track::default());
        assert!(projection.is_empty());
        assert_eq!(projection.mascot_index, None);
        assert!(projection.chapter_ranges().is_empty());
    }

    #[test]
    fn chapter_and_lesson_order_is_preserved() {
        let t = track(vec![
            Level::with_lessons("One", vec![lesson("a", None), lesson("b", None)]),
            Level::with_lessons("Two", vec![lesson("c", None)]),
            Level::with_lessons("Three", vec![lesson("d", None), lesson("e", None)]),
        ]);
        let projection = project(&t);
        let titles: Vec<&str> = projection.chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["One", "Two", "Three"]);
        let ids: Vec<&str> = projection.lessons().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
        assert_eq!(projection.lesson_count(), 5);
    }

    #[test]
    fn status_follows_completion_and_never_locks() {
        let t = track(vec![Level::with_lessons(
            "Mixed",
            vec![
                lesson("done", Some(true)),
                lesson("started", Some(false)),
                lesson("fresh", None),
            ],
        )]);
        let statuses: Vec<LessonStatus> = project(&t).lessons().map(|l| l.status).collect();
        assert_eq!(
            statuses,
            [
                LessonStatus::Completed,
                LessonStatus::Current,
                LessonStatus::Current
            ]
        );
    }

    #[test]
    fn empty_levels_are_dropped() {
        let t = track(vec![
            Level::default(),
            Level::with_lessons("Kept", vec![lesson("l1", None)]),
        ]);
        let projection = project(&t);
        assert_eq!(projection.chapters.len(), 1);
        assert_eq!(projection.chapters[0].title, "Kept");
        assert_eq!(projection.chapters[0].lessons[0].id, "l1");
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let mut l = lesson("l1", None);
        l.year = Some(-586);
        let t = track(vec![Level {
            title: None,
            description: None,
            lessons: vec![l],
        }]);
        let projection = project(&t);
        let chapter = &projection.chapters[0];
        assert_eq!(chapter.title, "Chapter");
        assert_eq!(chapter.description, "");
        let view = &chapter.lessons[0];
        assert_eq!(view.xp, 50);
        assert_eq!(view.emoji, "📖");
        assert_eq!(view.year, Some(-586));
        assert_eq!(view.progress, None);
    }

    #[test]
    fn explicit_xp_is_kept() {
        let mut l = lesson("l1", None);
        l.xp_reward = Some(120);
        let projection = project(&track(vec![Level::with_lessons("x", vec![l])]));
        assert_eq!(projection.chapters[0].lessons[0].xp, 120);
    }

    #[test]
    fn mascot_sits_on_first_current_lesson() {
        let t = track(vec![
            Level::with_lessons("A", vec![lesson("a1", Some(true))]),
            Level::with_lessons("B", vec![lesson("b1", None), lesson("b2", None)]),
        ]);
        let projection = project(&t);
        assert_eq!(projection.mascot_index, Some(1));
        assert_eq!(projection.lesson_at(1).map(|l| l.id.as_str()), Some("b1"));
    }

    #[test]
    fn mascot_index_skips_dropped_chapters() {
        let t = track(vec![
            Level::with_lessons("A", vec![lesson("a1", Some(true)), lesson("a2", Some(true))]),
            Level::default(),
            Level::with_lessons("C", vec![lesson("c1", None)]),
        ]);
        assert_eq!(project(&t).mascot_index, Some(2));
    }

    #[test]
    fn all_completed_has_no_mascot() {
        let t = track(vec![Level::with_lessons(
            "A",
            vec![lesson("a1", Some(true)), lesson("a2", Some(true))],
        )]);
        let projection = project(&t);
        assert_eq!(projection.mascot_index, None);
    }

    #[test]
    fn chapter_ranges_map_nodes_back_to_lessons() {
        let t = track(vec![
            Level::with_lessons("A", vec![lesson("a1", None), lesson("a2", None)]),
            Level::default(),
            Level::with_lessons("C", vec![lesson("c1", None)]),
        ]);
        let projection = project(&t);
        let ranges = projection.chapter_ranges();
        assert_eq!(ranges, vec![0..2, 2..3]);

        let ids: Vec<Vec<&str>> = ranges
            .into_iter()
            .map(|range| {
                range
                    .filter_map(|idx| projection.lesson_at(idx))
                    .map(|l| l.id.as_str())
                    .collect()
            })
            .collect();
        assert_eq!(ids, vec![vec!["a1", "a2"], vec!["c1"]]);
        assert!(projection.lesson_at(3).is_none());
    }

    #[test]
    fn projection_is_idempotent() {
        let t = track(vec![
            Level::with_lessons("A", vec![lesson("a1", Some(true)), lesson("a2", None)]),
            Level::default(),
        ]);
        assert_eq!(project(&t), project(&t));
    }
}
