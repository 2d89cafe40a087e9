//! Backend collaborators for Chronopath: the learning-track wire model, the
//! embedded era catalog, and the progress/preference services the home screen
//! talks to.

mod catalog;
mod error;
pub mod model;
mod services;

pub use catalog::EmbeddedCatalog;
pub use error::ApiError;
pub use model::{Lesson, LessonProgress, Level, Track};
pub use services::{LocalProgress, PreferenceSink, ProgressSnapshot, ProgressSource, TrackSource};
