use std::collections::HashSet;

use log::{debug, warn};

use conveyor_shared::{ApplyOutcome, NodeAddress, PipeStateMessage, StateTargetWorld, SyncError};

/// Applies incoming pipe state snapshots. A node whose snapshot failed to
/// apply is flagged corrupted until a later snapshot for it succeeds.
#[derive(Default)]
pub struct PipeStateReceiver {
    corrupted: HashSet<NodeAddress>,
}

impl PipeStateReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes & applies one message as it came off the wire
    pub fn receive(
        &mut self,
        bytes: &[u8],
        world: &mut dyn StateTargetWorld,
    ) -> Result<ApplyOutcome, SyncError> {
        let message = PipeStateMessage::from_bytes(bytes).map_err(|error| {
            warn!("Dropping undecodable pipe state message: {}", error);
            error
        })?;
        self.apply(&message, world)
    }

    pub fn apply(
        &mut self,
        message: &PipeStateMessage,
        world: &mut dyn StateTargetWorld,
    ) -> Result<ApplyOutcome, SyncError> {
        let address = *message.address();
        match message.apply(world) {
            Ok(ApplyOutcome::Applied) => {
                self.corrupted.remove(&address);
                Ok(ApplyOutcome::Applied)
            }
            Ok(ApplyOutcome::NodeVanished) => {
                debug!("State for {} arrived after the node was removed", address);
                self.corrupted.remove(&address);
                Ok(ApplyOutcome::NodeVanished)
            }
            Err(error) => {
                warn!("{}", error);
                self.corrupted.insert(address);
                Err(error)
            }
        }
    }

    pub fn is_corrupted(&self, address: &NodeAddress) -> bool {
        self.corrupted.contains(address)
    }

    pub fn corrupted_nodes(&self) -> impl Iterator<Item = &NodeAddress> {
        self.corrupted.iter()
    }
}
