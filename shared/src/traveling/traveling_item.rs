use std::collections::HashSet;

use crate::{
    traveling::ContainerRef, Direction, ItemStack, Tick, TravelingItemId, DEFAULT_ITEM_SPEED,
};

/// State common to both the authoritative & observer variants
#[derive(Clone, Debug)]
pub struct TravelingItemState {
    pub(crate) id: TravelingItemId,
    pub(crate) position: f32,
    pub(crate) speed: f32,
    pub(crate) input: Direction,
    pub(crate) output: Direction,
    pub(crate) container: Option<ContainerRef>,
    pub(crate) blacklist: HashSet<Direction>,
    pub(crate) last_ticked: Option<Tick>,
}

impl TravelingItemState {
    pub fn new(id: TravelingItemId) -> Self {
        Self {
            id,
            position: 0.0,
            speed: DEFAULT_ITEM_SPEED,
            input: Direction::Unknown,
            output: Direction::Unknown,
            container: None,
            blacklist: HashSet::new(),
            last_ticked: None,
        }
    }

    pub fn with_motion(
        id: TravelingItemId,
        position: f32,
        input: Direction,
        output: Direction,
    ) -> Self {
        Self {
            position,
            input,
            output,
            ..Self::new(id)
        }
    }
}

/// Capabilities shared by every traveling item, consumed polymorphically by
/// the tick loop
pub trait TravelingItem {
    fn state(&self) -> &TravelingItemState;
    fn state_mut(&mut self) -> &mut TravelingItemState;

    /// Item kind & quantity this item carries, if known
    fn stack(&self) -> Option<&ItemStack>;

    fn is_corrupted(&self) -> bool {
        false
    }

    fn id(&self) -> TravelingItemId {
        self.state().id
    }

    fn position(&self) -> f32 {
        self.state().position
    }

    fn set_position(&mut self, position: f32) {
        self.state_mut().position = position;
    }

    fn speed(&self) -> f32 {
        self.state().speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.state_mut().speed = speed;
    }

    fn input(&self) -> Direction {
        self.state().input
    }

    fn set_input(&mut self, input: Direction) {
        self.state_mut().input = input;
    }

    fn output(&self) -> Direction {
        self.state().output
    }

    fn set_output(&mut self, output: Direction) {
        self.state_mut().output = output;
    }

    fn container(&self) -> Option<&ContainerRef> {
        self.state().container.as_ref()
    }

    fn set_container(&mut self, container: Option<ContainerRef>) {
        self.state_mut().container = container;
    }

    fn blacklist(&self) -> &HashSet<Direction> {
        &self.state().blacklist
    }

    fn blacklist_mut(&mut self) -> &mut HashSet<Direction> {
        &mut self.state_mut().blacklist
    }

    fn last_ticked(&self) -> Option<Tick> {
        self.state().last_ticked
    }

    /// Moves the item one tick along its segment and returns the new
    /// position. Ticking twice within the same tick is a no-op.
    fn advance(&mut self, tick: Tick) -> f32 {
        let state = self.state_mut();
        if state.last_ticked != Some(tick) {
            state.last_ticked = Some(tick);
            state.position += state.speed;
        }
        state.position
    }
}
