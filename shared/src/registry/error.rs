use thiserror::Error;

use crate::HostType;

/// Errors that can occur during registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Every identifier for this role has been handed out
    #[error("Traveling item id space exhausted for {host_type:?} registry")]
    IdSpaceExhausted { host_type: HostType },

    /// The handle no longer refers to a live item
    #[error("Arena handle {index}:{generation} does not refer to a live item")]
    StaleHandle { index: u32, generation: u32 },
}
