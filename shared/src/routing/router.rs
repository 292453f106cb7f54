use std::fmt;

use crate::{FluidIdentifier, ItemStack, RouterId, RoutingInformation};

/// Renumbering-resistant identity of a router. Survives the router being
/// re-registered under a new `RouterId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouterIdentity(String);

impl RouterIdentity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouterIdentity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RouterIdentity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RouterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup service for routers, owned by the routing authority
pub trait RouterDirectory {
    fn router(&self, id: RouterId) -> Option<&dyn Router>;
    fn router_mut(&mut self, id: RouterId) -> Option<&mut dyn Router>;
    fn resolve_by_identity(&self, identity: &RouterIdentity) -> Option<RouterId>;

    fn is_router(&self, id: RouterId) -> bool {
        self.router(id).is_some()
    }
}

pub trait Router {
    fn identity(&self) -> &RouterIdentity;
    fn simple_id(&self) -> RouterId;

    /// The pipe this router is bound to, if any
    fn pipe_mut(&mut self) -> Option<&mut dyn RoutedPipe> {
        None
    }
}

/// Pipe bound to a router. Capabilities are opt-in: a pipe that wants to
/// hear about lost deliveries returns itself from the matching accessor.
pub trait RoutedPipe {
    fn reliable_transport(&mut self) -> Option<&mut dyn ReliableTransport> {
        None
    }

    fn reliable_fluid_transport(&mut self) -> Option<&mut dyn ReliableFluidTransport> {
        None
    }

    /// Called when an item heading here wants the pipe to re-evaluate it
    fn refresh_item(&mut self, _info: &RoutingInformation) {}
}

pub trait ReliableTransport {
    fn item_lost(&mut self, stack: ItemStack);
}

pub trait ReliableFluidTransport {
    fn fluid_lost(&mut self, fluid: FluidIdentifier, amount: u32);
}
