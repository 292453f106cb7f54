use log::debug;

use crate::{
    registry::IdAllocator,
    routing::{
        Router, RouterDirectory, RouterIdentity, RoutingInformation, SharedDistanceTracker,
        TransportMode,
    },
    traveling::{
        TransportSurface, TravelingItem, TravelingItemError, TravelingItemRecord,
        TravelingItemState,
    },
    Direction, ItemStack, NodeAddress, RouterId, TravelingItemId,
};

/// What happened when an item reached the end of its journey
#[derive(Debug)]
pub enum ArrivalOutcome {
    /// The stack was handed to the target inventory
    Inserted,
    /// The target can't take it, the item is handed back to the caller
    Refused(HostTravelingItem),
}

/// Authoritative traveling item. Owns the routing information for the stack
/// it carries; only the authoritative side mutates routing state.
#[derive(Clone, Debug)]
pub struct HostTravelingItem {
    state: TravelingItemState,
    info: RoutingInformation,
}

impl HostTravelingItem {
    pub fn new(id: TravelingItemId, stack: ItemStack) -> Self {
        Self::with_info(id, RoutingInformation::new(stack))
    }

    pub fn with_info(id: TravelingItemId, info: RoutingInformation) -> Self {
        Self {
            state: TravelingItemState::new(id),
            info,
        }
    }

    pub fn from_record(id: TravelingItemId, record: TravelingItemRecord) -> Self {
        let mut state = TravelingItemState::with_motion(
            id,
            record.position,
            Direction::from_ordinal(record.input),
            Direction::from_ordinal(record.output),
        );
        state.speed = record.speed;

        Self {
            state,
            info: RoutingInformation::from_record(record.routing),
        }
    }

    pub fn to_record(&self) -> TravelingItemRecord {
        TravelingItemRecord {
            position: self.state.position,
            speed: self.state.speed,
            input: i32::from(self.state.input.ordinal()),
            output: i32::from(self.state.output.ordinal()),
            routing: self.info.to_record(),
        }
    }

    pub fn info(&self) -> &RoutingInformation {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut RoutingInformation {
        &mut self.info
    }

    pub fn set_information(&mut self, info: RoutingInformation) {
        self.info = info;
    }

    /// Loss reporting & entity conversion only happen on the authoritative
    /// side. An item not hosted anywhere yet is treated as authoritative.
    pub fn in_authoritative_context(&self) -> bool {
        self.state
            .container
            .map_or(true, |container| container.host_type.is_authoritative())
    }

    // Destination

    pub fn destination(&self) -> Option<RouterId> {
        self.info.destination()
    }

    pub fn destination_identity(&self) -> Option<&RouterIdentity> {
        self.info.destination_identity()
    }

    pub fn set_destination(&mut self, destination: RouterId, routers: &dyn RouterDirectory) {
        self.info.set_destination(destination, routers);
    }

    /// Drops the current destination. The destination's pipe is told the
    /// item was lost and the destination goes into the jam list.
    pub fn clear_destination(&mut self, routers: &mut dyn RouterDirectory) {
        if self.info.destination().is_some() {
            self.item_was_lost(routers);
        }
        if let Some(destination) = self.info.clear_destination() {
            debug!(
                "Traveling item {:?} lost destination {:?}",
                self.state.id, destination
            );
        }
    }

    /// Notifies the destination's pipe that this item will not arrive
    pub fn item_was_lost(&self, routers: &mut dyn RouterDirectory) {
        if !self.in_authoritative_context() {
            return;
        }
        let Some(destination) = self.info.destination() else {
            return;
        };
        if !routers.is_router(destination) {
            return;
        }
        let Some(router) = routers.router_mut(destination) else {
            return;
        };
        let Some(pipe) = router.pipe_mut() else {
            return;
        };

        if let Some(reliable) = pipe.reliable_transport() {
            reliable.item_lost(*self.info.item());
        }
        if let Some(reliable) = pipe.reliable_fluid_transport() {
            if let Some(fluid) = self.info.item().item.fluid {
                reliable.fluid_lost(fluid.fluid, fluid.amount);
            }
        }
    }

    pub fn check_identity_consistency(&mut self, routers: &dyn RouterDirectory) {
        self.info.check_identity_consistency(routers);
    }

    /// Asks the destination's pipe to re-evaluate this item
    pub fn refresh_destination_information(&self, routers: &mut dyn RouterDirectory) {
        let Some(destination) = self.info.destination() else {
            return;
        };
        if let Some(pipe) = routers
            .router_mut(destination)
            .and_then(|router| router.pipe_mut())
        {
            pipe.refresh_item(&self.info);
        }
    }

    // Routing state

    pub fn jam_list(&self) -> &[RouterId] {
        self.info.jam_list()
    }

    pub fn add_to_jam_list(&mut self, router: &dyn Router) {
        self.info.add_to_jam_list(router);
    }

    pub fn do_not_buffer(&self) -> bool {
        self.info.do_not_buffer()
    }

    pub fn set_do_not_buffer(&mut self, do_not_buffer: bool) {
        self.info.set_do_not_buffer(do_not_buffer);
    }

    pub fn arrived(&self) -> bool {
        self.info.arrived()
    }

    pub fn set_arrived(&mut self, arrived: bool) {
        self.info.set_arrived(arrived);
    }

    pub fn transport_mode(&self) -> TransportMode {
        self.info.transport_mode()
    }

    pub fn set_transport_mode(&mut self, transport_mode: TransportMode) {
        self.info.set_transport_mode(transport_mode);
    }

    pub fn buffer_counter(&self) -> u32 {
        self.info.buffer_counter()
    }

    pub fn set_buffer_counter(&mut self, buffer_counter: u32) {
        self.info.set_buffer_counter(buffer_counter);
    }

    pub fn distance_tracker(&self) -> Option<&SharedDistanceTracker> {
        self.info.distance_tracker()
    }

    pub fn set_distance_tracker(&mut self, tracker: Option<SharedDistanceTracker>) {
        self.info.set_distance_tracker(tracker);
    }

    // Splitting

    /// Keeps `items_to_keep` in this item and sends the remainder off as a
    /// brand-new item through `direction` of the hosting surface.
    ///
    /// Both halves get fresh ids: this item is re-identified so the two
    /// can never share one. A remainder of zero still produces an item,
    /// which reports itself as corrupted. Returns the id of the new item.
    pub fn split(
        &mut self,
        items_to_keep: i32,
        direction: Direction,
        ids: &mut IdAllocator,
        surface: &mut dyn TransportSurface,
    ) -> Result<TravelingItemId, TravelingItemError> {
        let stack = *self.info.item();
        if stack.item.is_fluid_container() {
            return Err(TravelingItemError::Unsupported {
                item_id: stack.item.item_id,
            });
        }
        if items_to_keep < 0 || items_to_keep > stack.quantity {
            return Err(TravelingItemError::InvalidSplitQuantity {
                requested: items_to_keep,
                available: stack.quantity,
            });
        }

        let own_id = ids.try_allocate()?;
        let split_id = ids.try_allocate()?;

        let remainder = ItemStack::new(stack.item, stack.quantity - items_to_keep);
        self.info.item_mut().quantity = items_to_keep;
        self.state.id = own_id;

        let mut split_item = HostTravelingItem::new(split_id, remainder);
        split_item.set_speed(self.speed());
        split_item.set_transport_mode(self.transport_mode());

        surface.inject_split_item(split_item, direction);

        Ok(split_id)
    }

    // Arrival

    /// Hands the carried stack to `target` if the surface treats it as an
    /// inventory, marking the item arrived & notifying its distance tracker.
    pub fn deliver_to(
        mut self,
        target: &NodeAddress,
        surface: &mut dyn TransportSurface,
    ) -> ArrivalOutcome {
        if !surface.is_item_exitable(self.info.item()) || !surface.is_inventory_like(target) {
            return ArrivalOutcome::Refused(self);
        }

        self.info.set_arrived(true);
        if let Some(tracker) = self.info.distance_tracker() {
            if let Ok(mut tracker) = tracker.write() {
                tracker.set_destination_reached();
            }
        }

        let stack = *self.info.item();
        surface.insert_into_inventory(stack, &self.info, target);
        ArrivalOutcome::Inserted
    }
}

impl TravelingItem for HostTravelingItem {
    fn state(&self) -> &TravelingItemState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TravelingItemState {
        &mut self.state
    }

    fn stack(&self) -> Option<&ItemStack> {
        Some(self.info.item())
    }

    fn is_corrupted(&self) -> bool {
        self.info.item().is_empty()
    }
}
