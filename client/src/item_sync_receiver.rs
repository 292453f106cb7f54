use log::debug;

use conveyor_shared::{
    ContainerRef, HostType, ItemContentMessage, ItemContentRequest, ItemPositionMessage,
    RemoteTravelingItem, TravelingItem, TravelingItemId, TravelingItemRegistry,
};

use crate::ClientConfig;

/// Mirrors authoritative items into the observer registry. An id counts as
/// known once its contents arrive; until then every position report for it
/// asks again, since requests & answers may be lost on the way.
pub struct ItemSyncReceiver {
    snap_threshold: f32,
}

impl ItemSyncReceiver {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            snap_threshold: config.travel.snap_threshold,
        }
    }

    /// Returns true while the item's contents have not arrived & should be
    /// (re)requested
    pub fn receive_position(
        &self,
        registry: &mut TravelingItemRegistry,
        message: &ItemPositionMessage,
    ) -> bool {
        let container = Some(ContainerRef::new(message.address, HostType::Client));

        if let Some(item) = registry.remote_mut().lookup_mut(&message.item_id) {
            item.update_information(
                message.input,
                message.output,
                message.speed,
                message.position,
                self.snap_threshold,
            );
            item.set_container(container);
        } else {
            let mut item = RemoteTravelingItem::new(
                message.item_id,
                message.position,
                message.input,
                message.output,
            );
            item.set_speed(message.speed);
            item.set_container(container);
            registry.register_remote(item);
        }

        !registry.is_known(&message.item_id)
    }

    /// Applies a batch of position reports & gathers the ids worth asking
    /// the server about
    pub fn receive_positions(
        &self,
        registry: &mut TravelingItemRegistry,
        messages: &[ItemPositionMessage],
    ) -> ItemContentRequest {
        let mut item_ids = Vec::new();
        for message in messages {
            if self.receive_position(registry, message) && !item_ids.contains(&message.item_id) {
                item_ids.push(message.item_id);
            }
        }
        ItemContentRequest { item_ids }
    }

    /// Returns false if the item is no longer mirrored here
    pub fn receive_content(
        &self,
        registry: &mut TravelingItemRegistry,
        message: &ItemContentMessage,
    ) -> bool {
        let Some(item) = registry.remote_mut().lookup_mut(&message.item_id) else {
            debug!("Content for {:?} arrived after it left", message.item_id);
            return false;
        };
        if let Some(stack) = message.stack {
            item.set_stack(stack);
        }
        registry.mark_known(message.item_id);
        true
    }

    /// The item left observed space: stop mirroring it and forget that its
    /// contents were known
    pub fn item_left(
        &self,
        registry: &mut TravelingItemRegistry,
        id: TravelingItemId,
    ) -> Option<RemoteTravelingItem> {
        registry.forget_known(&id);
        let handle = registry.remote().handle_of(&id)?;
        registry.release_remote(&handle)
    }
}
