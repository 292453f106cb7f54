use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    registry::{ArenaHandle, ForceKeepList, IdAllocator, ItemArena, RegistryError},
    traveling::{HostTravelingItem, TransportSurface, TravelingItem, TravelingItemError},
    Direction, HostType, TravelingItemId,
};

/// Tracks the live items of one role. Items live in a generation-checked
/// arena; the id map is pruned lazily, so lookups must tolerate entries
/// whose handle has gone stale.
pub struct RoleRegistry<T: TravelingItem> {
    ids: IdAllocator,
    arena: ItemArena<T>,
    handles: HashMap<TravelingItemId, ArenaHandle>,
    // released by their holder while pinned, keyed to the id they were pinned
    // under; a later split re-keys the item but not its pins
    retained: HashMap<ArenaHandle, TravelingItemId>,
}

impl<T: TravelingItem> RoleRegistry<T> {
    pub fn new(host_type: HostType) -> Self {
        Self {
            ids: IdAllocator::new(host_type),
            arena: ItemArena::new(),
            handles: HashMap::new(),
            retained: HashMap::new(),
        }
    }

    pub fn host_type(&self) -> HostType {
        self.ids.host_type()
    }

    pub fn try_allocate_id(&mut self) -> Result<TravelingItemId, RegistryError> {
        self.ids.try_allocate()
    }

    /// # Panics
    /// Panics if the id space is exhausted
    pub fn allocate_id(&mut self) -> TravelingItemId {
        self.ids.allocate()
    }

    /// Starts tracking `item`. If an item with the same id is already live,
    /// nothing changes and the existing handle is returned.
    pub fn register(&mut self, item: T) -> ArenaHandle {
        let id = item.id();
        if let Some(handle) = self.live_handle(&id) {
            warn!(
                "{:?} registry: traveling item {:?} is already registered",
                self.host_type(),
                id
            );
            return handle;
        }

        let handle = self.arena.insert(item);
        self.handles.insert(id, handle);
        handle
    }

    fn live_handle(&self, id: &TravelingItemId) -> Option<ArenaHandle> {
        self.handles
            .get(id)
            .copied()
            .filter(|handle| self.arena.contains(handle))
    }

    pub fn handle_of(&self, id: &TravelingItemId) -> Option<ArenaHandle> {
        self.live_handle(id)
    }

    /// A miss is normal: the item may already have finished its journey
    pub fn lookup(&self, id: &TravelingItemId) -> Option<&T> {
        let handle = self.handles.get(id)?;
        self.arena.get(handle)
    }

    pub fn lookup_mut(&mut self, id: &TravelingItemId) -> Option<&mut T> {
        let handle = self.handles.get(id)?;
        self.arena.get_mut(handle)
    }

    pub fn get(&self, handle: &ArenaHandle) -> Option<&T> {
        self.arena.get(handle)
    }

    pub fn get_mut(&mut self, handle: &ArenaHandle) -> Option<&mut T> {
        self.arena.get_mut(handle)
    }

    pub fn contains(&self, id: &TravelingItemId) -> bool {
        self.live_handle(id).is_some()
    }

    /// The holder is done with the item. Pinned items stay live until their
    /// last pin goes away; everything else is reclaimed & returned.
    pub fn release(&mut self, handle: &ArenaHandle, pins: &ForceKeepList) -> Option<T> {
        let id = self.arena.get(handle)?.id();
        if pins.is_pinned(id) {
            self.retained.insert(*handle, id);
            return None;
        }

        self.retained.remove(handle);
        let item = self.arena.remove(handle)?;
        debug!("{:?} registry: reclaimed traveling item {:?}", self.host_type(), id);
        Some(item)
    }

    /// Reclaims released items that were only kept alive by pins on `id`,
    /// including ones split to a new id since. Returns how many were
    /// reclaimed.
    pub fn reclaim_unpinned(&mut self, id: TravelingItemId, pins: &ForceKeepList) -> usize {
        if pins.is_pinned(id) {
            return 0;
        }

        let handles: Vec<ArenaHandle> = self
            .retained
            .iter()
            .filter(|(_, pinned_as)| **pinned_as == id)
            .map(|(handle, _)| *handle)
            .collect();

        let mut reclaimed = 0;
        for handle in &handles {
            self.retained.remove(handle);
            let Some(item) = self.arena.get(handle) else {
                continue;
            };
            // pinned again under the id it was split to
            if pins.is_pinned(item.id()) {
                self.retained.insert(*handle, item.id());
                continue;
            }
            self.arena.remove(handle);
            reclaimed += 1;
        }
        reclaimed
    }

    /// Drops id entries whose item has been reclaimed. Returns how many were
    /// dropped.
    pub fn sweep(&mut self) -> usize {
        let before = self.handles.len();
        let arena = &self.arena;
        self.handles.retain(|_, handle| arena.contains(handle));
        before - self.handles.len()
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of id entries, including ones not yet swept
    pub fn tracked_ids(&self) -> usize {
        self.handles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArenaHandle, &T)> {
        self.arena.iter()
    }
}

impl RoleRegistry<HostTravelingItem> {
    /// Splits the item behind `handle`, see `HostTravelingItem::split`. The
    /// item keeps its handle but is re-keyed under its new id; the old id is
    /// abandoned.
    pub fn split(
        &mut self,
        handle: &ArenaHandle,
        items_to_keep: i32,
        direction: Direction,
        surface: &mut dyn TransportSurface,
    ) -> Result<TravelingItemId, TravelingItemError> {
        let item = self
            .arena
            .get_mut(handle)
            .ok_or(RegistryError::StaleHandle {
                index: handle.index(),
                generation: handle.generation(),
            })?;
        let old_id = item.id();

        let split_id = item.split(items_to_keep, direction, &mut self.ids, surface)?;
        let new_id = item.id();

        self.handles.remove(&old_id);
        self.handles.insert(new_id, *handle);

        Ok(split_id)
    }
}
