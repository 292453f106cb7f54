use thiserror::Error;

use crate::{sync::SubStateKind, NodeAddress};

/// Errors that can occur while decoding or applying sync messages. Any of
/// these means the peers are out of sync; the message is dropped whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The envelope (node address) could not be read
    #[error("Malformed state message envelope")]
    MalformedEnvelope,

    /// A length prefix was missing or claimed more bytes than were sent
    #[error("Truncated {kind:?} state block in message")]
    TruncatedBlock { kind: SubStateKind },

    /// A sub-state block was framed correctly but its contents did not parse.
    /// Blocks applied before this one stay applied.
    #[error("Malformed {kind:?} state for node {address}, node state is now undefined")]
    MalformedSubState {
        address: NodeAddress,
        kind: SubStateKind,
    },

    /// An item-level message failed to decode
    #[error("Malformed {message} message")]
    MalformedItemMessage { message: &'static str },
}
