//! Saving & restoring authoritative items through their serde records.

use conveyor_shared::{
    Direction, HostTravelingItem, RouterId, RouterIdentity, TransportMode, TravelingItem,
    TravelingItemId, TravelingItemRecord,
};
use conveyor_test::{cobblestone, TestRouterDirectory};

#[test]
fn record_round_trips_through_json() {
    let mut routers = TestRouterDirectory::new();
    routers.add(5, "abc");
    routers.add(9, "def");

    let mut item = HostTravelingItem::new(TravelingItemId::new(40), cobblestone(12));
    item.set_position(0.75);
    item.set_speed(0.03);
    item.set_input(Direction::South);
    item.set_output(Direction::Up);
    item.set_destination(RouterId::new(9), &routers);
    item.clear_destination(&mut routers);
    item.set_destination(RouterId::new(5), &routers);
    item.set_buffer_counter(2);
    item.set_do_not_buffer(true);
    item.set_transport_mode(TransportMode::Active);

    let json = serde_json::to_string(&item.to_record()).unwrap();
    let record: TravelingItemRecord = serde_json::from_str(&json).unwrap();
    let restored = HostTravelingItem::from_record(TravelingItemId::new(41), record);

    assert_eq!(restored.id(), TravelingItemId::new(41));
    assert_eq!(restored.position(), 0.75);
    assert_eq!(restored.speed(), 0.03);
    assert_eq!(restored.input(), Direction::South);
    assert_eq!(restored.output(), Direction::Up);
    assert_eq!(restored.stack(), Some(&cobblestone(12)));
    assert_eq!(restored.destination(), Some(RouterId::new(5)));
    assert_eq!(
        restored.destination_identity(),
        Some(&RouterIdentity::from("abc"))
    );
    assert_eq!(restored.jam_list(), &[RouterId::new(9)]);
    assert_eq!(restored.buffer_counter(), 2);
    assert!(restored.do_not_buffer());
    assert!(!restored.arrived());
    assert_eq!(restored.transport_mode(), TransportMode::Active);
    assert_eq!(restored.to_record(), item.to_record());
}

#[test]
fn record_fields_are_flat_and_named() {
    let item = HostTravelingItem::new(TravelingItemId::new(1), cobblestone(1));

    let value = serde_json::to_value(item.to_record()).unwrap();

    assert_eq!(value["position"], 0.0);
    assert_eq!(value["input"], 6);
    assert_eq!(value["destination"], -1);
    assert!(value["jam_list"].as_array().unwrap().is_empty());
}

#[test]
fn missing_optional_fields_default() {
    let json = r#"{
        "position": 0.5,
        "speed": 0.01,
        "input": 0,
        "output": 99,
        "item": {"item": {"item_id": 4, "damage": 0}, "quantity": 3},
        "destination": -1
    }"#;

    let record: TravelingItemRecord = serde_json::from_str(json).unwrap();
    let item = HostTravelingItem::from_record(TravelingItemId::new(2), record);

    assert_eq!(item.output(), Direction::Unknown);
    assert_eq!(item.destination(), None);
    assert!(item.jam_list().is_empty());
    assert_eq!(item.transport_mode(), TransportMode::Unknown);
    assert_eq!(item.stack(), Some(&cobblestone(3)));
}
