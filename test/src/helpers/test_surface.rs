use std::collections::HashSet;

use conveyor_shared::{
    Direction, HostTravelingItem, ItemStack, NodeAddress, RouterId, RoutingInformation,
    TransportSurface,
};

/// Transport surface that keeps whatever it is handed
#[derive(Default)]
pub struct TestSurface {
    pub injected: Vec<(HostTravelingItem, Direction)>,
    pub inventories: HashSet<NodeAddress>,
    pub inserted: Vec<(ItemStack, Option<RouterId>, NodeAddress)>,
}

impl TestSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(address: NodeAddress) -> Self {
        let mut surface = Self::new();
        surface.inventories.insert(address);
        surface
    }
}

impl TransportSurface for TestSurface {
    fn inject_split_item(&mut self, item: HostTravelingItem, direction: Direction) {
        self.injected.push((item, direction));
    }

    fn is_inventory_like(&self, target: &NodeAddress) -> bool {
        self.inventories.contains(target)
    }

    fn insert_into_inventory(
        &mut self,
        stack: ItemStack,
        info: &RoutingInformation,
        target: &NodeAddress,
    ) {
        self.inserted.push((stack, info.destination(), *target));
    }
}
