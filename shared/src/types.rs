use conveyor_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// Which side of the sync a piece of state lives on: the authoritative
/// simulation (`Server`) or a passive observer (`Client`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Server,
    Client,
}

impl HostType {
    pub fn is_authoritative(self) -> bool {
        self == HostType::Server
    }
}

/// Identifier handed out to a traveling item by its role's registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TravelingItemId(u32);

impl TravelingItemId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Serde for TravelingItemId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self(u32::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        self.0.bit_length()
    }
}

/// Numeric id of a router. Routers may be renumbered, see `RouterIdentity`
/// for the stable counterpart. Ids never exceed `RouterId::MAX` so that they
/// always fit the persisted `i32` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouterId(u32);

impl RouterId {
    pub const MAX: u32 = i32::MAX.unsigned_abs();

    pub fn try_new(value: u32) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// # Panics
    /// Panics if `value` is above `RouterId::MAX`
    pub fn new(value: u32) -> Self {
        Self::try_new(value).expect("router id does not fit the persisted i32 form")
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Persisted form, where "no router" is `-1`
    pub fn to_raw(id: Option<RouterId>) -> i32 {
        match id {
            Some(id) => id.0 as i32,
            None => -1,
        }
    }

    pub fn from_raw(raw: i32) -> Option<RouterId> {
        Some(RouterId(raw.try_into().ok()?))
    }
}

pub type Tick = u32;
