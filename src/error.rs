//! Error types for the IR transmission pipeline

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Transmit error: {0}")]
    Transmit(#[from] TransmitError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IR code not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// IR code decoding errors
///
/// Raised by the Pronto-Hex codec and by [`crate::signal::CanonicalSignal::new`].
/// The resolver swallows these and falls through to the next source shape;
/// malformed protocol strings are reported as `None` rather than an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Too few tokens: expected at least 4, got {0}")]
    TooFewTokens(usize),

    #[error("Invalid token (expected 1-4 hex digits): {0:?}")]
    InvalidToken(String),

    #[error("Carrier frequency is zero")]
    ZeroCarrier,

    #[error("Pulse pattern is empty")]
    EmptyPattern,
}

/// Transmission backend errors
#[derive(Error, Debug)]
pub enum TransmitError {
    #[error("No audio output device: {0}")]
    NoOutputDevice(String),

    #[error("Failed to open audio stream: {0}")]
    Stream(String),

    #[error("Failed to spawn playback worker: {0}")]
    WorkerSpawn(String),

    #[error("IR hardware write failed: {0}")]
    Hardware(String),

    #[error("Serial port error: {0}")]
    Serial(String),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;
