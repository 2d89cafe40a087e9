//! Platform-agnostic home-screen logic: era catalog, track projection,
//! fallback selection and the session flow tying them to the collaborators.

pub mod era;
pub mod fallback;
pub mod projector;
pub mod session;
pub mod storage;

pub use era::{EraCode, EraOption, ERA_OPTIONS};
pub use fallback::{select_era, CancellationToken, EraSelection, SelectError};
pub use projector::{project, ChapterView, LessonStatus, LessonView, PathProjection};
pub use session::{EraStep, HomeDisplay, HomeSnapshot, Notice, NoticeKind, Viewer};
