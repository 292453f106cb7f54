use std::default::Default;

use conveyor_shared::TravelConfig;

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// How items move through & leave the network
    pub travel: TravelConfig,
    /// Seed for exit jitter. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl ServerConfig {
    pub fn rng(&self) -> fastrand::Rng {
        match self.rng_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            travel: TravelConfig::default(),
            rng_seed: None,
        }
    }
}
