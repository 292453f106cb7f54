//! # Conveyor Client
//! The observing side of a conveyor network. Restores pipe state sent by
//! the server and mirrors the items travelling through observed pipes.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod shared {
    pub use conveyor_shared::{
        BitReader, BitWrite, Direction, HostType, ItemStack, NodeAddress, Serde, SerdeErr,
        TravelConfig, TravelingItemId,
    };
}

mod client_config;
mod item_sync_receiver;
mod state_sync_receiver;

pub use client_config::ClientConfig;
pub use item_sync_receiver::ItemSyncReceiver;
pub use state_sync_receiver::PipeStateReceiver;
