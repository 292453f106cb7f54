use std::collections::HashSet;

use log::debug;

use crate::{
    registry::{ArenaHandle, ForceKeepList, ForceKeepOwner, RegistryError, RoleRegistry},
    traveling::{
        HostTravelingItem, RemoteTravelingItem, TransportSurface, TravelingItem,
        TravelingItemError,
    },
    Direction, HostType, TravelingItemId,
};

/// Borrowed view of an item from either role
#[derive(Clone, Copy, Debug)]
pub enum TravelingItemRef<'a> {
    Host(&'a HostTravelingItem),
    Remote(&'a RemoteTravelingItem),
}

impl<'a> TravelingItemRef<'a> {
    pub fn as_item(&self) -> &'a dyn TravelingItem {
        match self {
            TravelingItemRef::Host(item) => *item as &dyn TravelingItem,
            TravelingItemRef::Remote(item) => *item as &dyn TravelingItem,
        }
    }

    pub fn id(&self) -> TravelingItemId {
        self.as_item().id()
    }

    pub fn host_type(&self) -> HostType {
        match self {
            TravelingItemRef::Host(_) => HostType::Server,
            TravelingItemRef::Remote(_) => HostType::Client,
        }
    }
}

/// Identifier allocation & tracking for every traveling item of a process.
///
/// The authoritative (`Server`) and observer (`Client`) sides are fully
/// disjoint: separate id counters, separate arenas. Pins are shared, keyed
/// only by id, so a pin protects an id in both roles.
pub struct TravelingItemRegistry {
    host: RoleRegistry<HostTravelingItem>,
    remote: RoleRegistry<RemoteTravelingItem>,
    force_keep: ForceKeepList,
    remote_known_ids: HashSet<TravelingItemId>,
}

impl TravelingItemRegistry {
    pub fn new() -> Self {
        Self {
            host: RoleRegistry::new(HostType::Server),
            remote: RoleRegistry::new(HostType::Client),
            force_keep: ForceKeepList::new(),
            remote_known_ids: HashSet::new(),
        }
    }

    pub fn host(&self) -> &RoleRegistry<HostTravelingItem> {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut RoleRegistry<HostTravelingItem> {
        &mut self.host
    }

    pub fn remote(&self) -> &RoleRegistry<RemoteTravelingItem> {
        &self.remote
    }

    pub fn remote_mut(&mut self) -> &mut RoleRegistry<RemoteTravelingItem> {
        &mut self.remote
    }

    // Ids

    pub fn try_allocate_id(
        &mut self,
        host_type: HostType,
    ) -> Result<TravelingItemId, RegistryError> {
        match host_type {
            HostType::Server => self.host.try_allocate_id(),
            HostType::Client => self.remote.try_allocate_id(),
        }
    }

    /// # Panics
    /// Panics if the id space of `host_type` is exhausted
    pub fn allocate_id(&mut self, host_type: HostType) -> TravelingItemId {
        match host_type {
            HostType::Server => self.host.allocate_id(),
            HostType::Client => self.remote.allocate_id(),
        }
    }

    // Tracking

    pub fn register_host(&mut self, item: HostTravelingItem) -> ArenaHandle {
        self.host.register(item)
    }

    pub fn register_remote(&mut self, item: RemoteTravelingItem) -> ArenaHandle {
        self.remote.register(item)
    }

    pub fn lookup(
        &self,
        id: &TravelingItemId,
        host_type: HostType,
    ) -> Option<TravelingItemRef<'_>> {
        match host_type {
            HostType::Server => self.host.lookup(id).map(TravelingItemRef::Host),
            HostType::Client => self.remote.lookup(id).map(TravelingItemRef::Remote),
        }
    }

    pub fn release_host(&mut self, handle: &ArenaHandle) -> Option<HostTravelingItem> {
        self.host.release(handle, &self.force_keep)
    }

    pub fn release_remote(&mut self, handle: &ArenaHandle) -> Option<RemoteTravelingItem> {
        self.remote.release(handle, &self.force_keep)
    }

    /// Splits an authoritative item, see `RoleRegistry::split`
    pub fn split_host(
        &mut self,
        handle: &ArenaHandle,
        items_to_keep: i32,
        direction: Direction,
        surface: &mut dyn TransportSurface,
    ) -> Result<TravelingItemId, TravelingItemError> {
        self.host.split(handle, items_to_keep, direction, surface)
    }

    /// Drops stale id entries in both roles
    pub fn sweep(&mut self) -> usize {
        self.host.sweep() + self.remote.sweep()
    }

    // Pins

    pub fn force_keep(&mut self, id: TravelingItemId, owner: ForceKeepOwner) {
        self.force_keep.pin(id, owner);
    }

    /// Removes a pin. Once an id has no pins left, items with that id whose
    /// holders already released them are reclaimed.
    pub fn release_force_keep(&mut self, id: TravelingItemId, owner: ForceKeepOwner) {
        if !self.force_keep.unpin(id, owner) {
            return;
        }
        let reclaimed = self.host.reclaim_unpinned(id, &self.force_keep)
            + self.remote.reclaim_unpinned(id, &self.force_keep);
        if reclaimed > 0 {
            debug!("Reclaimed {} traveling item(s) for unpinned id {:?}", reclaimed, id);
        }
    }

    pub fn is_force_kept(&self, id: &TravelingItemId) -> bool {
        self.force_keep.is_pinned(*id)
    }

    pub fn force_keep_count(&self) -> usize {
        self.force_keep.len()
    }

    // Observer knowledge

    /// Records that the observer holds the contents of `id`. Returns false
    /// if it already did.
    pub fn mark_known(&mut self, id: TravelingItemId) -> bool {
        self.remote_known_ids.insert(id)
    }

    pub fn is_known(&self, id: &TravelingItemId) -> bool {
        self.remote_known_ids.contains(id)
    }

    pub fn forget_known(&mut self, id: &TravelingItemId) -> bool {
        self.remote_known_ids.remove(id)
    }
}

impl Default for TravelingItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
