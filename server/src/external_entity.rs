use std::f64::consts::TAU;

use log::debug;

use conveyor_shared::{
    Direction, HostTravelingItem, HostType, ItemStack, TravelConfig, TravelingItem,
};

/// An item that has left the transport network and now lives loose in the
/// surrounding world
#[derive(Clone, Debug, PartialEq)]
pub struct ExternalEntity {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub stack: ItemStack,
}

/// Where, relative to the node's origin corner, an item leaving through
/// `direction` appears. Down, North & West reach slightly past the node
/// boundary so that flooring the coordinate lands in the neighbour.
pub fn exit_offset(direction: Direction) -> [f64; 3] {
    match direction {
        Direction::Down => [0.0, -0.251, 0.0],
        Direction::Up => [0.0, 0.75, 0.0],
        Direction::North => [0.0, 0.0, -0.501],
        Direction::South => [0.0, 0.0, 0.5],
        Direction::West => [-0.501, 0.0, 0.0],
        Direction::East => [0.5, 0.0, 0.0],
        Direction::Unknown => [0.0, 0.0, 0.0],
    }
}

pub trait ToExternalEntity {
    /// Converts an item leaving the network into a world entity. Only the
    /// authority spawns entities; observers, unplaced items, empty stacks &
    /// fluid containers yield `None`.
    fn to_external_entity(
        &self,
        config: &TravelConfig,
        rng: &mut fastrand::Rng,
    ) -> Option<ExternalEntity>;
}

impl ToExternalEntity for HostTravelingItem {
    fn to_external_entity(
        &self,
        config: &TravelConfig,
        rng: &mut fastrand::Rng,
    ) -> Option<ExternalEntity> {
        let container = self.container()?;
        if container.host_type != HostType::Server {
            return None;
        }

        let stack = *self.stack()?;
        if stack.quantity <= 0 {
            return None;
        }
        if stack.item.is_fluid_container() {
            // fluid containers are consumed on exit, never dropped loose
            debug!("Fluid container {:?} consumed on exit", self.id());
            return None;
        }

        let output = self.output();
        let origin = container.address;
        let offset = exit_offset(output);
        let position = [
            f64::from(origin.x) + offset[0],
            f64::from(origin.y) + offset[1],
            f64::from(origin.z) + offset[2],
        ];

        let magnitude = f64::from(config.exit_base_velocity)
            + f64::from(self.speed()) * f64::from(config.exit_speed_factor);
        let (dx, dy, dz) = output.offset();
        let spread = f64::from(config.exit_jitter_max - config.exit_jitter_min);
        let scale = rng.f64() * spread - f64::from(config.exit_jitter_max);
        let velocity = [
            gaussian(rng) * scale + f64::from(dx) * magnitude,
            gaussian(rng) * scale + f64::from(dy) * magnitude,
            gaussian(rng) * scale + f64::from(dz) * magnitude,
        ];

        Some(ExternalEntity {
            position,
            velocity,
            stack,
        })
    }
}

// Box-Muller, standard normal
fn gaussian(rng: &mut fastrand::Rng) -> f64 {
    let u1 = 1.0 - rng.f64();
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}
