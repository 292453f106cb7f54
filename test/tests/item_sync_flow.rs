//! Item-level sync: the server announces motion, the client mirrors items,
//! asks for contents it doesn't know until they arrive and fills them in.

use conveyor_client::{ClientConfig, ItemSyncReceiver};
use conveyor_server::{spawn_item, ItemSyncSender, ServerConfig};
use conveyor_shared::{
    ContainerRef, Direction, HostType, ItemContentMessage, ItemContentRequest,
    ItemPositionMessage, NodeAddress, TravelingItem, TravelingItemRegistry,
};
use conveyor_test::cobblestone;

#[test]
fn observer_learns_position_then_contents() {
    let server_config = ServerConfig::default();
    let mut server_items = TravelingItemRegistry::new();
    let mut client_items = TravelingItemRegistry::new();
    let mut sender = ItemSyncSender::new();
    let receiver = ItemSyncReceiver::new(&ClientConfig::default());

    let handle = spawn_item(&mut server_items, cobblestone(24), &server_config.travel);
    let item = server_items.host_mut().get_mut(&handle).unwrap();
    item.set_container(Some(ContainerRef::new(
        NodeAddress::new(-4, 12, 30),
        HostType::Server,
    )));
    item.set_input(Direction::West);
    item.set_output(Direction::East);
    item.set_position(0.4);
    let id = item.id();
    sender.announce(server_items.host().get(&handle).unwrap());

    // over the wire and back
    let packets: Vec<Vec<u8>> = sender
        .drain_positions()
        .iter()
        .map(ItemPositionMessage::to_bytes)
        .collect();
    let positions: Vec<ItemPositionMessage> = packets
        .iter()
        .map(|bytes| ItemPositionMessage::from_bytes(bytes).unwrap())
        .collect();

    let request = receiver.receive_positions(&mut client_items, &positions);
    assert_eq!(request.item_ids, vec![id]);

    let mirrored = client_items.remote().lookup(&id).unwrap();
    assert_eq!(mirrored.position(), 0.4);
    assert_eq!(mirrored.output(), Direction::East);
    assert_eq!(mirrored.stack(), None);

    let request = ItemContentRequest::from_bytes(&request.to_bytes()).unwrap();
    let answers = sender.answer(&server_items, &request);
    for answer in &answers {
        let answer = ItemContentMessage::from_bytes(&answer.to_bytes()).unwrap();
        assert!(receiver.receive_content(&mut client_items, &answer));
    }

    let mirrored = client_items.remote().lookup(&id).unwrap();
    assert_eq!(mirrored.stack(), Some(&cobblestone(24)));

    // later reports only move the mirror
    sender.announce(server_items.host().get(&handle).unwrap());
    let request = receiver.receive_positions(&mut client_items, &sender.drain_positions());
    assert!(request.is_empty());
}

#[test]
fn lost_content_request_is_sent_again() {
    let server_config = ServerConfig::default();
    let mut server_items = TravelingItemRegistry::new();
    let mut client_items = TravelingItemRegistry::new();
    let mut sender = ItemSyncSender::new();
    let receiver = ItemSyncReceiver::new(&ClientConfig::default());

    let handle = spawn_item(&mut server_items, cobblestone(7), &server_config.travel);
    let item = server_items.host_mut().get_mut(&handle).unwrap();
    item.set_container(Some(ContainerRef::new(
        NodeAddress::new(3, 3, 3),
        HostType::Server,
    )));
    let id = item.id();

    sender.announce(server_items.host().get(&handle).unwrap());
    let dropped = receiver.receive_positions(&mut client_items, &sender.drain_positions());
    assert_eq!(dropped.item_ids, vec![id]);

    sender.announce(server_items.host().get(&handle).unwrap());
    let request = receiver.receive_positions(&mut client_items, &sender.drain_positions());
    assert_eq!(request.item_ids, vec![id]);

    for answer in sender.answer(&server_items, &request) {
        assert!(receiver.receive_content(&mut client_items, &answer));
    }
    let mirrored = client_items.remote().lookup(&id).unwrap();
    assert_eq!(mirrored.stack(), Some(&cobblestone(7)));
    assert!(client_items.is_known(&id));
}

#[test]
fn small_drift_is_left_to_interpolation() {
    let receiver = ItemSyncReceiver::new(&ClientConfig::default());
    let mut client_items = TravelingItemRegistry::new();
    let mut report = ItemPositionMessage {
        address: NodeAddress::new(0, 0, 0),
        item_id: conveyor_shared::TravelingItemId::new(3),
        position: 0.5,
        speed: 0.01,
        input: Direction::Down,
        output: Direction::Up,
    };
    receiver.receive_position(&mut client_items, &report);

    report.position = 0.6;
    report.output = Direction::North;
    receiver.receive_position(&mut client_items, &report);

    let mirrored = client_items.remote().lookup(&report.item_id).unwrap();
    assert_eq!(mirrored.position(), 0.5);
    assert_eq!(mirrored.output(), Direction::North);
}

#[test]
fn content_for_departed_items_is_ignored() {
    let mut server_items = TravelingItemRegistry::new();
    let handle = spawn_item(
        &mut server_items,
        cobblestone(1),
        &ServerConfig::default().travel,
    );
    let id = server_items.host().get(&handle).unwrap().id();
    server_items.release_host(&handle);

    let answers = ItemSyncSender::new().answer(
        &server_items,
        &ItemContentRequest { item_ids: vec![id] },
    );

    assert!(answers.is_empty());
}
