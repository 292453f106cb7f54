use std::collections::HashMap;

use conveyor_shared::{
    FluidIdentifier, ItemStack, ReliableFluidTransport, ReliableTransport, RoutedPipe, Router,
    RouterDirectory, RouterId, RouterIdentity, RoutingInformation,
};

/// Pipe that records every callback the core makes into it
#[derive(Default)]
pub struct TestPipe {
    pub reliable: bool,
    pub reliable_fluid: bool,
    pub lost_items: Vec<ItemStack>,
    pub lost_fluids: Vec<(FluidIdentifier, u32)>,
    pub refreshed: Vec<Option<RouterId>>,
}

impl TestPipe {
    pub fn reliable() -> Self {
        Self {
            reliable: true,
            reliable_fluid: true,
            ..Self::default()
        }
    }
}

impl RoutedPipe for TestPipe {
    fn reliable_transport(&mut self) -> Option<&mut dyn ReliableTransport> {
        if !self.reliable {
            return None;
        }
        Some(self as &mut dyn ReliableTransport)
    }

    fn reliable_fluid_transport(&mut self) -> Option<&mut dyn ReliableFluidTransport> {
        if !self.reliable_fluid {
            return None;
        }
        Some(self as &mut dyn ReliableFluidTransport)
    }

    fn refresh_item(&mut self, info: &RoutingInformation) {
        self.refreshed.push(info.destination());
    }
}

impl ReliableTransport for TestPipe {
    fn item_lost(&mut self, stack: ItemStack) {
        self.lost_items.push(stack);
    }
}

impl ReliableFluidTransport for TestPipe {
    fn fluid_lost(&mut self, fluid: FluidIdentifier, amount: u32) {
        self.lost_fluids.push((fluid, amount));
    }
}

pub struct TestRouter {
    identity: RouterIdentity,
    id: RouterId,
    pub pipe: Option<TestPipe>,
}

impl Router for TestRouter {
    fn identity(&self) -> &RouterIdentity {
        &self.identity
    }

    fn simple_id(&self) -> RouterId {
        self.id
    }

    fn pipe_mut(&mut self) -> Option<&mut dyn RoutedPipe> {
        self.pipe.as_mut().map(|pipe| pipe as &mut dyn RoutedPipe)
    }
}

/// In-memory router table. Routers can be renumbered to exercise identity
/// repair.
#[derive(Default)]
pub struct TestRouterDirectory {
    routers: HashMap<RouterId, TestRouter>,
}

impl TestRouterDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a router bound to a reliable pipe
    pub fn add(&mut self, id: u32, identity: &str) -> &mut TestRouter {
        let id = RouterId::new(id);
        self.routers.insert(
            id,
            TestRouter {
                identity: RouterIdentity::from(identity),
                id,
                pipe: Some(TestPipe::reliable()),
            },
        );
        self.routers.get_mut(&id).expect("router was just inserted")
    }

    pub fn remove(&mut self, id: u32) -> Option<TestRouter> {
        self.routers.remove(&RouterId::new(id))
    }

    /// Moves the router at `from` to `to`, keeping its identity & pipe
    pub fn renumber(&mut self, from: u32, to: u32) {
        if let Some(mut router) = self.remove(from) {
            router.id = RouterId::new(to);
            self.routers.insert(router.id, router);
        }
    }

    pub fn pipe(&self, id: u32) -> Option<&TestPipe> {
        self.routers.get(&RouterId::new(id))?.pipe.as_ref()
    }
}

impl RouterDirectory for TestRouterDirectory {
    fn router(&self, id: RouterId) -> Option<&dyn Router> {
        self.routers.get(&id).map(|router| router as &dyn Router)
    }

    fn router_mut(&mut self, id: RouterId) -> Option<&mut dyn Router> {
        self.routers.get_mut(&id).map(|router| router as &mut dyn Router)
    }

    fn resolve_by_identity(&self, identity: &RouterIdentity) -> Option<RouterId> {
        self.routers
            .values()
            .find(|router| router.identity == *identity)
            .map(|router| router.id)
    }
}
