use crate::{HostType, NodeAddress};

/// Back-reference from an item to the node currently hosting it. The item
/// never owns its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerRef {
    pub address: NodeAddress,
    pub host_type: HostType,
}

impl ContainerRef {
    pub fn new(address: NodeAddress, host_type: HostType) -> Self {
        Self { address, host_type }
    }
}
