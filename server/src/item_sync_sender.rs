use log::debug;

use conveyor_shared::{
    ArenaHandle, HostTravelingItem, HostType, ItemContentMessage, ItemContentRequest,
    ItemPositionMessage, ItemStack, TravelConfig, TravelingItem, TravelingItemRegistry,
};

/// Allocates an authoritative id for `stack` & registers the new item,
/// moving at the configured default speed
pub fn spawn_item(
    registry: &mut TravelingItemRegistry,
    stack: ItemStack,
    travel: &TravelConfig,
) -> ArenaHandle {
    let id = registry.allocate_id(HostType::Server);
    let mut item = HostTravelingItem::new(id, stack);
    item.set_speed(travel.default_speed);
    registry.register_host(item)
}

/// Outgoing item-level sync: positions are pushed as items move, contents
/// are only sent when an observer asks for them
#[derive(Default)]
pub struct ItemSyncSender {
    outgoing: Vec<ItemPositionMessage>,
}

impl ItemSyncSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the item's current motion. Items not inside a node have
    /// nothing to report and are skipped.
    pub fn announce(&mut self, item: &HostTravelingItem) -> bool {
        let Some(container) = item.container() else {
            return false;
        };
        self.outgoing.push(ItemPositionMessage {
            address: container.address,
            item_id: item.id(),
            position: item.position(),
            speed: item.speed(),
            input: item.input(),
            output: item.output(),
        });
        true
    }

    pub fn drain_positions(&mut self) -> Vec<ItemPositionMessage> {
        std::mem::take(&mut self.outgoing)
    }

    /// Answers with the contents of every requested item still alive on
    /// this side. Ids that are gone are silently dropped; the observer will
    /// forget them once they stop moving.
    pub fn answer(
        &self,
        registry: &TravelingItemRegistry,
        request: &ItemContentRequest,
    ) -> Vec<ItemContentMessage> {
        request
            .item_ids
            .iter()
            .filter_map(|id| {
                let Some(item) = registry.host().lookup(id) else {
                    debug!("Content requested for unknown item {:?}", id);
                    return None;
                };
                Some(ItemContentMessage {
                    item_id: *id,
                    stack: item.stack().copied(),
                })
            })
            .collect()
    }
}
