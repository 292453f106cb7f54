use std::sync::{Arc, RwLock};

/// Cost accumulator owned by whoever requested the item; the item only
/// reports progress into it.
pub trait DistanceTracker: Send + Sync {
    fn set_current_distance_to_target(&mut self, distance: u32);
    fn current_distance_to_target(&self) -> u32;
    fn set_destination_reached(&mut self);
    fn is_destination_reached(&self) -> bool;
}

pub type SharedDistanceTracker = Arc<RwLock<dyn DistanceTracker>>;
