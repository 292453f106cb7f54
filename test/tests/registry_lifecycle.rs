//! Registration, lookup, force-keep pins & reclamation of traveling items.

use proptest::prelude::*;

use conveyor_shared::{
    Direction, ForceKeepOwner, HostTravelingItem, HostType, RemoteTravelingItem, TravelingItem,
    TravelingItemRegistry,
};
use conveyor_test::{cobblestone, TestSurface};

#[test]
fn double_registration_is_a_no_op() {
    let mut registry = TravelingItemRegistry::new();
    let id = registry.allocate_id(HostType::Server);

    let first = registry.register_host(HostTravelingItem::new(id, cobblestone(3)));
    let second = registry.register_host(HostTravelingItem::new(id, cobblestone(60)));

    assert_eq!(first, second);
    assert_eq!(registry.host().len(), 1);
    let live = registry.lookup(&id, HostType::Server).unwrap();
    assert_eq!(live.as_item().stack().unwrap().quantity, 3);
}

#[test]
fn ids_are_unique_per_role() {
    let mut registry = TravelingItemRegistry::new();

    let server: Vec<_> = (0..5).map(|_| registry.allocate_id(HostType::Server)).collect();
    let client = registry.allocate_id(HostType::Client);

    assert!(server.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(client, server[0]);
    assert!(registry.lookup(&server[0], HostType::Client).is_none());
}

#[test]
fn released_items_are_gone() {
    let mut registry = TravelingItemRegistry::new();
    let id = registry.allocate_id(HostType::Client);
    let handle = registry.register_remote(RemoteTravelingItem::new(
        id,
        0.5,
        Direction::Down,
        Direction::Up,
    ));

    let released = registry.release_remote(&handle);

    assert_eq!(released.map(|item| item.id()), Some(id));
    assert!(registry.lookup(&id, HostType::Client).is_none());
    assert_eq!(registry.sweep(), 1);
    assert_eq!(registry.sweep(), 0);
}

#[test]
fn pinned_item_outlives_its_release() {
    let mut registry = TravelingItemRegistry::new();
    let id = registry.allocate_id(HostType::Server);
    let handle = registry.register_host(HostTravelingItem::new(id, cobblestone(1)));
    let routing = ForceKeepOwner(1);
    let rendering = ForceKeepOwner(2);

    registry.force_keep(id, routing);
    registry.force_keep(id, rendering);
    assert!(registry.release_host(&handle).is_none());
    assert!(registry.lookup(&id, HostType::Server).is_some());

    registry.release_force_keep(id, routing);
    assert!(registry.lookup(&id, HostType::Server).is_some());

    registry.release_force_keep(id, rendering);
    assert!(registry.lookup(&id, HostType::Server).is_none());
    assert_eq!(registry.force_keep_count(), 0);
}

#[test]
fn releasing_a_missing_pin_does_nothing() {
    let mut registry = TravelingItemRegistry::new();
    let id = registry.allocate_id(HostType::Server);
    registry.register_host(HostTravelingItem::new(id, cobblestone(1)));

    registry.release_force_keep(id, ForceKeepOwner(77));

    assert!(registry.lookup(&id, HostType::Server).is_some());
    assert!(!registry.is_force_kept(&id));
}

#[test]
fn pinning_while_held_keeps_item_registered() {
    let mut registry = TravelingItemRegistry::new();
    let id = registry.allocate_id(HostType::Server);
    let handle = registry.register_host(HostTravelingItem::new(id, cobblestone(1)));

    registry.force_keep(id, ForceKeepOwner(1));
    registry.release_force_keep(id, ForceKeepOwner(1));

    // the holder never let go, so nothing was reclaimed
    assert!(registry.host().get(&handle).is_some());
    assert!(registry.release_host(&handle).is_some());
}

#[test]
fn pinned_item_split_after_release_is_reclaimed_by_its_old_pin() {
    let mut registry = TravelingItemRegistry::new();
    let id = registry.allocate_id(HostType::Server);
    let handle = registry.register_host(HostTravelingItem::new(id, cobblestone(10)));
    let mut surface = TestSurface::new();

    registry.force_keep(id, ForceKeepOwner(1));
    assert!(registry.release_host(&handle).is_none());
    registry
        .split_host(&handle, 4, Direction::East, &mut surface)
        .unwrap();
    let new_id = registry.host().get(&handle).unwrap().id();
    assert_ne!(new_id, id);

    registry.release_force_keep(id, ForceKeepOwner(1));

    assert_eq!(registry.host().len(), 0);
    assert!(registry.lookup(&new_id, HostType::Server).is_none());
    assert_eq!(registry.force_keep_count(), 0);
}

#[test]
fn split_item_pinned_under_its_new_id_waits_for_that_pin() {
    let mut registry = TravelingItemRegistry::new();
    let id = registry.allocate_id(HostType::Server);
    let handle = registry.register_host(HostTravelingItem::new(id, cobblestone(10)));
    let mut surface = TestSurface::new();

    registry.force_keep(id, ForceKeepOwner(1));
    registry.release_host(&handle);
    registry
        .split_host(&handle, 4, Direction::East, &mut surface)
        .unwrap();
    let new_id = registry.host().get(&handle).unwrap().id();
    registry.force_keep(new_id, ForceKeepOwner(2));

    registry.release_force_keep(id, ForceKeepOwner(1));
    assert!(registry.lookup(&new_id, HostType::Server).is_some());

    registry.release_force_keep(new_id, ForceKeepOwner(2));
    assert_eq!(registry.host().len(), 0);
}

proptest! {
    /// However pins are stacked, once every (id, owner) pair is released
    /// the list is empty again
    #[test]
    fn prop_force_keep_nets_to_zero(owners in prop::collection::vec(0u64..4, 0..20)) {
        let mut registry = TravelingItemRegistry::new();
        let id = registry.allocate_id(HostType::Server);
        let handle = registry.register_host(HostTravelingItem::new(id, cobblestone(1)));

        for owner in &owners {
            registry.force_keep(id, ForceKeepOwner(*owner));
        }
        registry.release_host(&handle);
        for owner in &owners {
            registry.release_force_keep(id, ForceKeepOwner(*owner));
        }

        prop_assert_eq!(registry.force_keep_count(), 0);
        prop_assert!(registry.lookup(&id, HostType::Server).is_none());
    }
}
