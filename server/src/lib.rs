//! # Conveyor Server
//! The authoritative side of a conveyor network. Hands items off to the
//! world when they leave a pipe and keeps observers in sync with the state
//! of every pipe & the items travelling through it.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod shared {
    pub use conveyor_shared::{
        BitReader, BitWrite, Direction, HostType, ItemStack, NodeAddress, Serde, SerdeErr,
        StreamWriter, TravelConfig, TravelingItemId,
    };
}

mod external_entity;
mod item_sync_sender;
mod server_config;
mod state_sync_sender;

pub use external_entity::{exit_offset, ExternalEntity, ToExternalEntity};
pub use item_sync_sender::{spawn_item, ItemSyncSender};
pub use server_config::ServerConfig;
pub use state_sync_sender::PipeStateSender;
