use crate::{registry::RegistryError, HostType, TravelingItemId};

/// Monotonic id source for one role. Ids start at 1 and are never handed
/// out twice.
#[derive(Debug)]
pub struct IdAllocator {
    host_type: HostType,
    last_id: u32,
}

impl IdAllocator {
    pub fn new(host_type: HostType) -> Self {
        Self {
            host_type,
            last_id: 0,
        }
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    /// Try to allocate the next id, returning an error once the id space is
    /// used up
    pub fn try_allocate(&mut self) -> Result<TravelingItemId, RegistryError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or(RegistryError::IdSpaceExhausted {
                host_type: self.host_type,
            })?;
        self.last_id = next;
        Ok(TravelingItemId::new(next))
    }

    /// Allocate the next id
    ///
    /// # Panics
    /// Panics if the id space is exhausted
    pub fn allocate(&mut self) -> TravelingItemId {
        self.try_allocate()
            .expect("traveling item id space exhausted")
    }

    /// Resumes allocation after `last_id`, so ids held by reloaded items are
    /// not handed out again
    pub fn starting_after(host_type: HostType, last_id: u32) -> Self {
        Self { host_type, last_id }
    }
}
