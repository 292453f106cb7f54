use serde::{Deserialize, Serialize};

use crate::routing::RoutingRecord;

/// Persisted form of an authoritative traveling item. Directions are stored
/// as ordinals; routing fields sit next to the motion fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelingItemRecord {
    pub position: f32,
    pub speed: f32,
    pub input: i32,
    pub output: i32,
    #[serde(flatten)]
    pub routing: RoutingRecord,
}
