use thiserror::Error;

use crate::RegistryError;

/// Errors returned by operations on an authoritative traveling item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelingItemError {
    /// Fluid containers are atomic and can never be split
    #[error("Can't split up a fluid container (item kind {item_id})")]
    Unsupported { item_id: u32 },

    /// Asked to keep more items than the stack holds, or a negative amount
    #[error("Cannot keep {requested} items out of a stack of {available}")]
    InvalidSplitQuantity { requested: i32, available: i32 },

    /// Registry could not satisfy the operation
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}
