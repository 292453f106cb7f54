use crate::{
    routing::RoutingInformation, traveling::HostTravelingItem, Direction, ItemStack, NodeAddress,
};

/// The node-local transport logic hosting authoritative items. It decides
/// entry & exit eligibility; the core only calls back into it.
pub trait TransportSurface {
    /// Takes ownership of an item split off from one this surface hosts
    fn inject_split_item(&mut self, item: HostTravelingItem, direction: Direction);

    /// Whether `target` stores stacks rather than transporting them
    fn is_inventory_like(&self, target: &NodeAddress) -> bool;

    fn is_item_exitable(&self, _stack: &ItemStack) -> bool {
        true
    }

    fn insert_into_inventory(
        &mut self,
        stack: ItemStack,
        info: &RoutingInformation,
        target: &NodeAddress,
    );
}
