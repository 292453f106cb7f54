use std::fmt;

use conveyor_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// Integer coordinates of a node. This is the addressing scheme of the
/// surrounding transport envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeAddress {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl NodeAddress {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Serde for NodeAddress {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.x.ser(writer);
        self.y.ser(writer);
        self.z.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            x: i32::de(reader)?,
            y: i32::de(reader)?,
            z: i32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        96
    }
}
