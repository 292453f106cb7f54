use crate::{
    traveling::{TravelingItem, TravelingItemState},
    Direction, ItemStack, TravelingItemId,
};

/// Observer-side traveling item. Mirrors what the authority reported and
/// interpolates in between.
#[derive(Clone, Debug)]
pub struct RemoteTravelingItem {
    state: TravelingItemState,
    stack: Option<ItemStack>,
}

impl RemoteTravelingItem {
    pub fn new(id: TravelingItemId, position: f32, input: Direction, output: Direction) -> Self {
        Self {
            state: TravelingItemState::with_motion(id, position, input, output),
            stack: None,
        }
    }

    pub fn with_stack(id: TravelingItemId, stack: ItemStack) -> Self {
        Self {
            state: TravelingItemState::new(id),
            stack: Some(stack),
        }
    }

    pub fn set_stack(&mut self, stack: ItemStack) {
        self.stack = Some(stack);
    }

    /// Applies an authoritative position report. Direction & speed always
    /// follow the report; position only snaps when local interpolation has
    /// drifted more than `snap_threshold` away, counting a lap across the
    /// segment boundary as no drift.
    pub fn update_information(
        &mut self,
        input: Direction,
        output: Direction,
        speed: f32,
        position: f32,
        snap_threshold: f32,
    ) {
        self.state.input = input;
        self.state.output = output;
        self.state.speed = speed;

        let local = self.state.position;
        if (position - local).abs() > snap_threshold
            && ((position + 1.0) - local).abs() > snap_threshold
        {
            self.state.position = position;
        }
    }
}

impl TravelingItem for RemoteTravelingItem {
    fn state(&self) -> &TravelingItemState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TravelingItemState {
        &mut self.state
    }

    fn stack(&self) -> Option<&ItemStack> {
        self.stack.as_ref()
    }
}
