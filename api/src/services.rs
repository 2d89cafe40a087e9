use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::{ApiError, LessonProgress, Track};

/// Produces the learning track for an era.
pub trait TrackSource {
    fn fetch_track(&self, era: &str) -> impl Future<Output = Result<Track, ApiError>>;
}

/// Loads a user's lesson progress ahead of track generation.
pub trait ProgressSource {
    fn fetch_user_progress(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<ProgressSnapshot, ApiError>>;
}

/// Saves the era a signed-in user last picked.
pub trait PreferenceSink {
    fn persist_preferred_era(
        &self,
        user_id: &str,
        era: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub user_id: String,
    #[serde(default)]
    pub completed_lessons: BTreeSet<String>,
}

impl ProgressSnapshot {
    pub fn completed_count(&self) -> usize {
        self.completed_lessons.len()
    }

    /// Mark every lesson of `track` recorded here as completed. Progress the
    /// track already carries is left alone.
    pub fn apply_to(&self, track: &mut Track) {
        let lessons = track.levels.iter_mut().flat_map(|level| level.lessons.iter_mut());
        for lesson in lessons.filter(|l| self.completed_lessons.contains(&l.id)) {
            lesson.progress = Some(LessonProgress { completed: true });
        }
    }
}

/// In-process progress ledger shared between the lesson and home views.
#[derive(Debug, Clone, Default)]
pub struct LocalProgress {
    inner: Arc<RwLock<HashMap<String, BTreeSet<String>>>>,
}

impl LocalProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_completed(&self, user_id: &str, lesson_id: &str) -> Result<(), ApiError> {
        let mut ledger = self
            .inner
            .write()
            .map_err(|_| ApiError::Storage("progress ledger poisoned".into()))?;
        ledger
            .entry(user_id.to_string())
            .or_default()
            .insert(lesson_id.to_string());
        Ok(())
    }

    fn snapshot(&self, user_id: &str) -> Result<ProgressSnapshot, ApiError> {
        let ledger = self
            .inner
            .read()
            .map_err(|_| ApiError::Storage("progress ledger poisoned".into()))?;
        Ok(ProgressSnapshot {
            user_id: user_id.to_string(),
            completed_lessons: ledger.get(user_id).cloned().unwrap_or_default(),
        })
    }
}

impl ProgressSource for LocalProgress {
    async fn fetch_user_progress(&self, user_id: &str) -> Result<ProgressSnapshot, ApiError> {
        self.snapshot(user_id)
    }
}
