use std::default::Default;

/// Speed an item starts with when nothing else set it
pub const DEFAULT_ITEM_SPEED: f32 = 0.01;
/// Observer positions further than this from the authority's are snapped
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.3;

/// Contains Config properties which govern how items move & leave the
/// transport network
#[derive(Clone, Debug, PartialEq)]
pub struct TravelConfig {
    /// Speed given to newly created items
    pub default_speed: f32,
    /// How far an observer may drift from a reported position before it is
    /// corrected outright
    pub snap_threshold: f32,
    /// Velocity every exiting item gets along its output direction
    pub exit_base_velocity: f32,
    /// Multiplier applied to the item's speed on top of `exit_base_velocity`
    pub exit_speed_factor: f32,
    /// Lower bound of the random jitter added to exit velocity
    pub exit_jitter_min: f32,
    /// Upper bound of the random jitter added to exit velocity
    pub exit_jitter_max: f32,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            default_speed: DEFAULT_ITEM_SPEED,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            exit_base_velocity: 0.1,
            exit_speed_factor: 2.0,
            exit_jitter_min: 0.01,
            exit_jitter_max: 0.02,
        }
    }
}
