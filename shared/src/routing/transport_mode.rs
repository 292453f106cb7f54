use serde::{Deserialize, Serialize};

use conveyor_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// How the routing authority intends an item to be handled at its
/// destination
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransportMode {
    #[default]
    Unknown,
    Default,
    Passive,
    Active,
}

impl TransportMode {
    pub fn ordinal(self) -> u8 {
        match self {
            TransportMode::Unknown => 0,
            TransportMode::Default => 1,
            TransportMode::Passive => 2,
            TransportMode::Active => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(TransportMode::Unknown),
            1 => Some(TransportMode::Default),
            2 => Some(TransportMode::Passive),
            3 => Some(TransportMode::Active),
            _ => None,
        }
    }
}

impl Serde for TransportMode {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.ordinal().ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        TransportMode::from_ordinal(u8::de(reader)?).ok_or(SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        8
    }
}
