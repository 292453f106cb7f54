mod container;
mod error;
mod host_traveling_item;
mod record;
mod remote_traveling_item;
mod transport_surface;
mod traveling_item;

pub use container::ContainerRef;
pub use error::TravelingItemError;
pub use host_traveling_item::{ArrivalOutcome, HostTravelingItem};
pub use record::TravelingItemRecord;
pub use remote_traveling_item::RemoteTravelingItem;
pub use transport_surface::TransportSurface;
pub use traveling_item::{TravelingItem, TravelingItemState};
