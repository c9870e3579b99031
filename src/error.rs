//! Error types for the host-facing API
//!
//! Viewer systems never fail outward: binding misses, load failures and
//! missing materials degrade the picture instead. The errors here are the
//! ones a host can observe while talking to a viewer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// The viewer was torn down and no longer listens for host events
    #[error("viewer is no longer listening for events")]
    Detached,

    /// A host event or settings payload was not valid JSON for its type
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// A settings file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings decoded but violate a limit
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type ViewerResult<T> = Result<T, ViewerError>;
