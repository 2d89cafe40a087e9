//! Home-screen session flow: what the page loads for a given viewer and era,
//! how era changes are persisted, and where lesson/map navigation leads.
//!
//! The page component owns the reactive state (selected era, loading flag,
//! last outcome); everything here takes that state as arguments so it can be
//! driven from tests without a renderer.

use api::{PreferenceSink, ProgressSource, TrackSource};
use tracing::{debug, warn};

use super::era::{candidate_eras, EraCode};
use super::fallback::{select_era, CancellationToken, SelectError};
use super::projector::{project, PathProjection};

/// The signed-in user, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: String,
}

impl Viewer {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeRequest {
    pub viewer: Option<Viewer>,
    pub era: EraCode,
}

/// A loaded learning path ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSnapshot {
    /// Era actually shown (differs from the request when a fallback kicked in).
    pub era: EraCode,
    pub used_fallback: bool,
    pub projection: PathProjection,
}

/// Load the learning path for `request.era`, falling back through the catalog
/// when it has no lessons.
///
/// Progress is fetched first for signed-in viewers and folded into the accepted
/// track; a failure there is logged and does not stop the track from loading.
pub async fn load_home<T, P>(
    request: &HomeRequest,
    tracks: &T,
    progress: &P,
    cancel: &CancellationToken,
) -> Result<HomeSnapshot, SelectError>
where
    T: TrackSource,
    P: ProgressSource,
{
    let mut completed = None;
    if let Some(viewer) = &request.viewer {
        match progress.fetch_user_progress(&viewer.user_id).await {
            Ok(snapshot) => {
                debug!(
                    user = %viewer.user_id,
                    completed = snapshot.completed_count(),
                    "loaded lesson progress"
                );
                completed = Some(snapshot);
            }
            Err(err) => warn!(user = %viewer.user_id, error = %err, "progress fetch failed"),
        }
    }

    let mut selection = select_era(&request.era, &candidate_eras(), tracks, cancel).await?;
    if let Some(snapshot) = &completed {
        snapshot.apply_to(&mut selection.track);
    }
    Ok(HomeSnapshot {
        projection: project(&selection.track),
        era: selection.era,
        used_fallback: selection.used_fallback,
    })
}

/// What the home page should render.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeDisplay {
    SignedOut,
    Loading,
    /// Every era came back empty; distinct from `Loading` so the page can show
    /// an explicit empty state with a retry.
    NoContent,
    Path(HomeSnapshot),
}

impl HomeDisplay {
    pub fn resolve(
        viewer: Option<&Viewer>,
        outcome: Option<&Result<HomeSnapshot, SelectError>>,
    ) -> Self {
        if viewer.is_none() {
            return Self::SignedOut;
        }
        match outcome {
            None | Some(Err(SelectError::Cancelled)) => Self::Loading,
            Some(Err(SelectError::NoContentAvailable)) => Self::NoContent,
            Some(Ok(snapshot)) => Self::Path(snapshot.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Non-blocking toast shown after an era change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

/// Persist an era choice for signed-in viewers. The caller switches eras
/// regardless of the returned notice.
pub async fn change_era<P: PreferenceSink>(
    viewer: Option<&Viewer>,
    era: &EraCode,
    prefs: &P,
) -> Notice {
    let Some(viewer) = viewer else {
        return Notice::new(NoticeKind::Info, "Sign in to save your preferences");
    };

    match prefs
        .persist_preferred_era(&viewer.user_id, era.as_str())
        .await
    {
        Ok(()) => Notice::new(
            NoticeKind::Success,
            format!("Now exploring {}!", era.display_name()),
        ),
        Err(err) => {
            warn!(user = %viewer.user_id, era = %era, error = %err, "failed to save preferred era");
            Notice::new(
                NoticeKind::Error,
                format!("Couldn't save your era preference: {err}"),
            )
        }
    }
}

/// One step of the home page's era carousel (arrow buttons and keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraStep {
    Prev,
    Next,
}

impl EraStep {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }

    /// Step from the era the user picked, not the fallback on screen, so the
    /// carousel can pass over eras without lessons.
    pub fn apply(self, selected: &EraCode) -> EraCode {
        match self {
            Self::Prev => selected.prev(),
            Self::Next => selected.next(),
        }
    }
}

pub fn lesson_path(lesson_id: &str) -> String {
    format!("/lesson/{lesson_id}")
}

pub fn map_path(era: Option<&EraCode>) -> String {
    match era {
        Some(era) => format!("/historical-map/{era}"),
        None => "/historical-map/list".to_string(),
    }
}
