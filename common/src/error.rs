use thiserror::Error;

#[derive(Debug, Error)]
pub enum LimitsError {
    #[error("WebSocket message limit must be positive")]
    ZeroWebsocketLimit,

    #[error("HTTP request limit must be positive")]
    ZeroHttpLimit,

    #[error("Envelope reserve {reserve} does not fit under encoded limit {encoded}")]
    EnvelopeExceedsEncoded { encoded: usize, reserve: usize },
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Unknown run state: {0}")]
    UnknownRunState(String),
}
