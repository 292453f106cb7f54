use crate::{sync::ClientState, NodeAddress};

/// Authoritative node exposing the four sub-states that make up its synced
/// state
pub trait PipeStateSource {
    fn render_state(&self) -> &dyn ClientState;
    fn core_state(&self) -> &dyn ClientState;
    fn plugin_state(&self) -> &dyn ClientState;
    fn pipe_state(&self) -> &dyn ClientState;
}

/// Observer node that restores the four sub-states
pub trait PipeStateTarget {
    fn render_state_mut(&mut self) -> &mut dyn ClientState;
    fn core_state_mut(&mut self) -> &mut dyn ClientState;
    fn plugin_state_mut(&mut self) -> &mut dyn ClientState;
    fn pipe_state_mut(&mut self) -> &mut dyn ClientState;

    /// Runs after render, core & plugin state are restored and before pipe
    /// state is
    fn after_state_updated(&mut self) {}
}

pub trait StateSourceWorld {
    fn pipe_state_source(&self, address: &NodeAddress) -> Option<&dyn PipeStateSource>;
}

pub trait StateTargetWorld {
    fn pipe_state_target(&mut self, address: &NodeAddress) -> Option<&mut dyn PipeStateTarget>;
}
