mod client_state;
mod error;
mod item_messages;
mod pipe_state_message;
mod pipe_state_world;

pub use client_state::ClientState;
pub use error::SyncError;
pub use item_messages::{ItemContentMessage, ItemContentRequest, ItemPositionMessage};
pub use pipe_state_message::{ApplyOutcome, PipeStateMessage, SubStateKind};
pub use pipe_state_world::{PipeStateSource, PipeStateTarget, StateSourceWorld, StateTargetWorld};
