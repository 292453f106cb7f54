use std::collections::HashSet;

use log::debug;

use conveyor_shared::{NodeAddress, PipeStateMessage, StateSourceWorld};

/// Coalesces state changes per node & produces one full snapshot per dirty
/// node when flushed. Nodes are flushed in the order they first became
/// dirty.
#[derive(Default)]
pub struct PipeStateSender {
    dirty_order: Vec<NodeAddress>,
    dirty: HashSet<NodeAddress>,
}

impl PipeStateSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the node was already waiting to be sent
    pub fn mark_dirty(&mut self, address: NodeAddress) -> bool {
        if !self.dirty.insert(address) {
            return false;
        }
        self.dirty_order.push(address);
        true
    }

    pub fn is_dirty(&self, address: &NodeAddress) -> bool {
        self.dirty.contains(address)
    }

    pub fn pending(&self) -> usize {
        self.dirty_order.len()
    }

    /// Snapshots every dirty node that still exists & clears the dirty set
    pub fn collect(&mut self, world: &dyn StateSourceWorld) -> Vec<PipeStateMessage> {
        self.dirty.clear();
        let mut messages = Vec::with_capacity(self.dirty_order.len());
        for address in self.dirty_order.drain(..) {
            let Some(source) = world.pipe_state_source(&address) else {
                debug!("Node {} removed before its state was sent", address);
                continue;
            };
            messages.push(PipeStateMessage::capture(address, source));
        }
        messages
    }

    pub fn collect_bytes(&mut self, world: &dyn StateSourceWorld) -> Vec<Vec<u8>> {
        self.collect(world)
            .iter()
            .map(PipeStateMessage::to_bytes)
            .collect()
    }
}
