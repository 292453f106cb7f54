//! # Conveyor Shared
//! Routing model, traveling-item registry & pipe state sync shared between
//! conveyor-server & conveyor-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use conveyor_serde::{BitReader, BitWrite, Serde, SerdeErr, StreamWriter};

mod config;
mod direction;
mod item;
mod node_address;
mod types;

pub mod registry;
pub mod routing;
pub mod sync;
pub mod traveling;

pub use config::{TravelConfig, DEFAULT_ITEM_SPEED, DEFAULT_SNAP_THRESHOLD};
pub use direction::Direction;
pub use item::{FluidIdentifier, FluidStack, ItemIdentifier, ItemStack};
pub use node_address::NodeAddress;
pub use registry::{
    ArenaHandle, ForceKeepList, ForceKeepOwner, IdAllocator, ItemArena, RegistryError,
    RoleRegistry, TravelingItemRef, TravelingItemRegistry,
};
pub use routing::{
    DistanceTracker, ReliableFluidTransport, ReliableTransport, RoutedPipe, Router,
    RouterDirectory, RouterIdentity, RoutingInformation, RoutingRecord, SharedDistanceTracker,
    TransportMode,
};
pub use sync::{
    ApplyOutcome, ClientState, ItemContentMessage, ItemContentRequest, ItemPositionMessage,
    PipeStateMessage, PipeStateSource, PipeStateTarget, StateSourceWorld, StateTargetWorld,
    SubStateKind, SyncError,
};
pub use traveling::{
    ArrivalOutcome, ContainerRef, HostTravelingItem, RemoteTravelingItem, TransportSurface,
    TravelingItem, TravelingItemError, TravelingItemRecord, TravelingItemState,
};
pub use types::{HostType, RouterId, Tick, TravelingItemId};
