/// Failures surfaced by the backend collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No track has been generated for the requested era.
    #[error("no track data available for era `{era}`")]
    DataUnavailable { era: String },

    /// Track or progress payload could not be decoded.
    #[error("failed to decode payload: {0}")]
    Decode(String),

    /// Local preference storage failed (read, write or serialise).
    #[error("storage error: {0}")]
    Storage(String),

    /// The remote service could not be reached.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
