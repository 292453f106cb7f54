use conveyor_serde::{BitReader, BitWrite, Serde, SerdeErr, StreamWriter};

use crate::{sync::SyncError, Direction, ItemStack, NodeAddress, TravelingItemId};

fn encode<T: Serde>(message: &T) -> Vec<u8> {
    let mut writer = StreamWriter::for_bits(message.bit_length());
    message.ser(&mut writer);
    writer.to_bytes()
}

fn decode<T: Serde>(bytes: &[u8], name: &'static str) -> Result<T, SyncError> {
    let mut reader = BitReader::new(bytes);
    T::de(&mut reader).map_err(|_| SyncError::MalformedItemMessage { message: name })
}

/// Where an item is inside a node & where it is headed. Sent by the
/// authoritative side whenever an item enters a node or changes direction.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemPositionMessage {
    pub address: NodeAddress,
    pub item_id: TravelingItemId,
    pub position: f32,
    pub speed: f32,
    pub input: Direction,
    pub output: Direction,
}

impl ItemPositionMessage {
    pub fn to_bytes(&self) -> Vec<u8> {
        encode(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SyncError> {
        decode(bytes, "item position")
    }
}

impl Serde for ItemPositionMessage {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.address.ser(writer);
        self.item_id.ser(writer);
        self.position.ser(writer);
        self.speed.ser(writer);
        self.input.ser(writer);
        self.output.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            address: NodeAddress::de(reader)?,
            item_id: TravelingItemId::de(reader)?,
            position: f32::de(reader)?,
            speed: f32::de(reader)?,
            input: Direction::de(reader)?,
            output: Direction::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.address.bit_length()
            + self.item_id.bit_length()
            + self.position.bit_length()
            + self.speed.bit_length()
            + self.input.bit_length()
            + self.output.bit_length()
    }
}

/// Contents of an item, answering an `ItemContentRequest`
#[derive(Clone, Debug, PartialEq)]
pub struct ItemContentMessage {
    pub item_id: TravelingItemId,
    pub stack: Option<ItemStack>,
}

impl ItemContentMessage {
    pub fn to_bytes(&self) -> Vec<u8> {
        encode(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SyncError> {
        decode(bytes, "item content")
    }
}

impl Serde for ItemContentMessage {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.item_id.ser(writer);
        self.stack.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            item_id: TravelingItemId::de(reader)?,
            stack: Option::<ItemStack>::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.item_id.bit_length() + self.stack.bit_length()
    }
}

/// Sent by an observer for item ids it has seen move but whose contents it
/// doesn't know yet
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ItemContentRequest {
    pub item_ids: Vec<TravelingItemId>,
}

impl ItemContentRequest {
    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SyncError> {
        decode(bytes, "item content request")
    }
}

impl Serde for ItemContentRequest {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.item_ids.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            item_ids: Vec::<TravelingItemId>::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.item_ids.bit_length()
    }
}
