mod error;
mod force_keep;
mod id_allocator;
mod item_arena;
mod role_registry;
mod traveling_item_registry;

pub use error::RegistryError;
pub use force_keep::{ForceKeepList, ForceKeepOwner};
pub use id_allocator::IdAllocator;
pub use item_arena::{ArenaHandle, ItemArena};
pub use role_registry::RoleRegistry;
pub use traveling_item_registry::{TravelingItemRef, TravelingItemRegistry};
