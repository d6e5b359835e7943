use thiserror::Error;

pub type Result<T> = std::result::Result<T, EventBusError>;

#[derive(Debug, Error)]
pub enum EventBusError {
    /// Connection refused, timed out, or the body could not be sent.
    #[error("could not reach event bus: {0}")]
    Network(String),

    /// The bus answered with a non-2xx status.
    #[error("event bus rejected event with {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid event bus client settings: {0}")]
    Client(String),
}

impl From<reqwest::Error> for EventBusError {
    fn from(err: reqwest::Error) -> Self {
        EventBusError::Network(err.to_string())
    }
}
