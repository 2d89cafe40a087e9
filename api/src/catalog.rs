//! Track generator backed by the catalog compiled into the binary.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Level, Track};
use crate::{ApiError, TrackSource};

const EMBEDDED_TRACKS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/tracks.json"));

/// Era code -> ordered levels, decoded once from `data/tracks.json`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedCatalog {
    tracks: HashMap<String, Vec<Level>>,
}

impl EmbeddedCatalog {
    pub fn load() -> Result<Self, ApiError> {
        Self::from_json(EMBEDDED_TRACKS)
    }

    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        let tracks: HashMap<String, Vec<Level>> = serde_json::from_str(raw)?;
        Ok(Self { tracks })
    }

    /// Synchronous lookup used by the async `TrackSource` impl.
    pub fn generate(&self, era: &str) -> Result<Track, ApiError> {
        let levels = self
            .tracks
            .get(era)
            .ok_or_else(|| ApiError::DataUnavailable {
                era: era.to_string(),
            })?;
        debug!(era, levels = levels.len(), "generated track");
        Ok(Track::new(era, levels.clone()))
    }
}

impl TrackSource for EmbeddedCatalog {
    async fn fetch_track(&self, era: &str) -> Result<Track, ApiError> {
        self.generate(era)
    }
}
