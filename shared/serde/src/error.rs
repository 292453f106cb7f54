use thiserror::Error;

/// Returned when a read runs past the end of the buffer or meets a value
/// that cannot be decoded into the requested type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to deserialize value from bit stream")]
pub struct SerdeErr;
