use crate::TravelingItemId;

/// Opaque token identifying whoever pinned an item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ForceKeepOwner(pub u64);

/// Explicit pins that keep released items alive until the pinning operation
/// is done with them. Each (id, owner) pair counts once no matter how often
/// it is pinned.
#[derive(Debug, Default)]
pub struct ForceKeepList {
    entries: Vec<(TravelingItemId, ForceKeepOwner)>,
}

impl ForceKeepList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns false if this owner already pinned the id
    pub fn pin(&mut self, id: TravelingItemId, owner: ForceKeepOwner) -> bool {
        if self.entries.contains(&(id, owner)) {
            return false;
        }
        self.entries.push((id, owner));
        true
    }

    /// Returns false if there was no such pin
    pub fn unpin(&mut self, id: TravelingItemId, owner: ForceKeepOwner) -> bool {
        let Some(index) = self.entries.iter().position(|entry| *entry == (id, owner)) else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    pub fn is_pinned(&self, id: TravelingItemId) -> bool {
        self.entries.iter().any(|(pinned, _)| *pinned == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
