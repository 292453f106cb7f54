mod distance_tracker;
mod router;
mod routing_information;
mod transport_mode;

pub use distance_tracker::{DistanceTracker, SharedDistanceTracker};
pub use router::{
    ReliableFluidTransport, ReliableTransport, RoutedPipe, Router, RouterDirectory, RouterIdentity,
};
pub use routing_information::{RoutingInformation, RoutingRecord};
pub use transport_mode::TransportMode;
