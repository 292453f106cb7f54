use std::default::Default;

use conveyor_shared::TravelConfig;

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ClientConfig {
    /// Shared with the server so interpolation matches what it simulates
    pub travel: TravelConfig,
}
