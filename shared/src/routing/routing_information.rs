use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    routing::{Router, RouterDirectory, RouterIdentity, SharedDistanceTracker, TransportMode},
    ItemStack, RouterId,
};

/// Everything the routing authority knows about where an item is headed and
/// what happened to it along the way.
#[derive(Clone)]
pub struct RoutingInformation {
    item: ItemStack,
    destination: Option<RouterId>,
    destination_identity: Option<RouterIdentity>,
    jam_list: Vec<RouterId>,
    do_not_buffer: bool,
    arrived: bool,
    transport_mode: TransportMode,
    buffer_counter: u32,
    distance_tracker: Option<SharedDistanceTracker>,
}

impl RoutingInformation {
    pub fn new(item: ItemStack) -> Self {
        Self {
            item,
            destination: None,
            destination_identity: None,
            jam_list: Vec::new(),
            do_not_buffer: false,
            arrived: false,
            transport_mode: TransportMode::Unknown,
            buffer_counter: 0,
            distance_tracker: None,
        }
    }

    pub fn item(&self) -> &ItemStack {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut ItemStack {
        &mut self.item
    }

    pub fn set_item(&mut self, item: ItemStack) {
        self.item = item;
    }

    // Destination

    pub fn destination(&self) -> Option<RouterId> {
        self.destination
    }

    pub fn destination_identity(&self) -> Option<&RouterIdentity> {
        self.destination_identity.as_ref()
    }

    /// Points the item at `destination`, snapshotting the identity of the
    /// router currently registered under that id.
    pub fn set_destination(&mut self, destination: RouterId, routers: &dyn RouterDirectory) {
        self.destination = Some(destination);
        self.destination_identity = routers
            .router(destination)
            .map(|router| router.identity().clone());
    }

    /// Forgets the destination, recording it in the jam list if one was set.
    /// Buffer counter & jam list survive the reset. Returns the destination
    /// that was cleared.
    pub fn clear_destination(&mut self) -> Option<RouterId> {
        let previous = self.destination.take();
        if let Some(destination) = previous {
            self.jam_list.push(destination);
        }

        self.destination_identity = None;
        self.do_not_buffer = false;
        self.arrived = false;
        self.transport_mode = TransportMode::Unknown;

        previous
    }

    /// Repairs `destination` after routers have been renumbered, using the
    /// stored identity as the source of truth.
    pub fn check_identity_consistency(&mut self, routers: &dyn RouterDirectory) {
        let consistent = match (self.destination, &self.destination_identity) {
            (Some(destination), Some(identity)) => routers
                .router(destination)
                .is_some_and(|router| router.identity() == identity),
            _ => false,
        };
        if consistent {
            return;
        }

        self.destination = self
            .destination_identity
            .as_ref()
            .and_then(|identity| routers.resolve_by_identity(identity));
    }

    // Jam list

    pub fn jam_list(&self) -> &[RouterId] {
        &self.jam_list
    }

    pub fn add_to_jam_list(&mut self, router: &dyn Router) {
        self.jam_list.push(router.simple_id());
    }

    // Flags

    pub fn do_not_buffer(&self) -> bool {
        self.do_not_buffer
    }

    pub fn set_do_not_buffer(&mut self, do_not_buffer: bool) {
        self.do_not_buffer = do_not_buffer;
    }

    pub fn arrived(&self) -> bool {
        self.arrived
    }

    pub fn set_arrived(&mut self, arrived: bool) {
        self.arrived = arrived;
    }

    pub fn transport_mode(&self) -> TransportMode {
        self.transport_mode
    }

    pub fn set_transport_mode(&mut self, transport_mode: TransportMode) {
        self.transport_mode = transport_mode;
    }

    pub fn buffer_counter(&self) -> u32 {
        self.buffer_counter
    }

    pub fn set_buffer_counter(&mut self, buffer_counter: u32) {
        self.buffer_counter = buffer_counter;
    }

    pub fn distance_tracker(&self) -> Option<&SharedDistanceTracker> {
        self.distance_tracker.as_ref()
    }

    pub fn set_distance_tracker(&mut self, tracker: Option<SharedDistanceTracker>) {
        self.distance_tracker = tracker;
    }

    // Persistence

    pub fn to_record(&self) -> RoutingRecord {
        RoutingRecord {
            item: self.item,
            destination: RouterId::to_raw(self.destination),
            destination_identity: self
                .destination_identity
                .as_ref()
                .map(|identity| identity.as_str().to_string()),
            jam_list: self.jam_list.iter().map(RouterId::value).collect(),
            do_not_buffer: self.do_not_buffer,
            arrived: self.arrived,
            transport_mode: self.transport_mode,
            buffer_counter: self.buffer_counter,
        }
    }

    /// The distance tracker is a live collaborator and is never persisted
    pub fn from_record(record: RoutingRecord) -> Self {
        Self {
            item: record.item,
            destination: RouterId::from_raw(record.destination),
            destination_identity: record.destination_identity.map(RouterIdentity::from),
            jam_list: record
                .jam_list
                .into_iter()
                .filter_map(|raw| {
                    let id = RouterId::try_new(raw);
                    if id.is_none() {
                        warn!("Dropping out of range router id {} from jam list", raw);
                    }
                    id
                })
                .collect(),
            do_not_buffer: record.do_not_buffer,
            arrived: record.arrived,
            transport_mode: record.transport_mode,
            buffer_counter: record.buffer_counter,
            distance_tracker: None,
        }
    }
}

impl fmt::Debug for RoutingInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingInformation")
            .field("item", &self.item)
            .field("destination", &self.destination)
            .field("destination_identity", &self.destination_identity)
            .field("jam_list", &self.jam_list)
            .field("do_not_buffer", &self.do_not_buffer)
            .field("arrived", &self.arrived)
            .field("transport_mode", &self.transport_mode)
            .field("buffer_counter", &self.buffer_counter)
            .field("has_distance_tracker", &self.distance_tracker.is_some())
            .finish()
    }
}

/// Named-field persisted form of `RoutingInformation`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingRecord {
    pub item: ItemStack,
    /// `-1` when no destination is set
    pub destination: i32,
    #[serde(default)]
    pub destination_identity: Option<String>,
    #[serde(default)]
    pub jam_list: Vec<u32>,
    #[serde(default)]
    pub do_not_buffer: bool,
    #[serde(default)]
    pub arrived: bool,
    #[serde(default)]
    pub transport_mode: TransportMode,
    #[serde(default)]
    pub buffer_counter: u32,
}
