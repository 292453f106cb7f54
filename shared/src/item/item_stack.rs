use serde::{Deserialize, Serialize};

use conveyor_serde::{BitReader, BitWrite, Serde, SerdeErr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FluidIdentifier(pub u32);

/// Fluid carried inside a fluid container item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FluidStack {
    pub fluid: FluidIdentifier,
    pub amount: u32,
}

/// The kind of an item, independent of how many of it there are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemIdentifier {
    pub item_id: u32,
    pub damage: u16,
    /// Set only for fluid containers, which can never be split
    #[serde(default)]
    pub fluid: Option<FluidStack>,
}

impl ItemIdentifier {
    pub fn new(item_id: u32, damage: u16) -> Self {
        Self {
            item_id,
            damage,
            fluid: None,
        }
    }

    pub fn fluid_container(item_id: u32, fluid: FluidStack) -> Self {
        Self {
            item_id,
            damage: 0,
            fluid: Some(fluid),
        }
    }

    pub fn is_fluid_container(&self) -> bool {
        self.fluid.is_some()
    }

    pub fn make_stack(self, quantity: i32) -> ItemStack {
        ItemStack::new(self, quantity)
    }
}

/// An item kind together with a quantity. Quantity is signed so that
/// corrupted (empty or negative) stacks can be represented & detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemIdentifier,
    pub quantity: i32,
}

impl ItemStack {
    pub fn new(item: ItemIdentifier, quantity: i32) -> Self {
        Self { item, quantity }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity <= 0
    }
}

impl Serde for FluidStack {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.fluid.0.ser(writer);
        self.amount.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            fluid: FluidIdentifier(u32::de(reader)?),
            amount: u32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        64
    }
}

impl Serde for ItemIdentifier {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.item_id.ser(writer);
        self.damage.ser(writer);
        self.fluid.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            item_id: u32::de(reader)?,
            damage: u16::de(reader)?,
            fluid: Option::<FluidStack>::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.item_id.bit_length() + self.damage.bit_length() + self.fluid.bit_length()
    }
}

impl Serde for ItemStack {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.item.ser(writer);
        self.quantity.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            item: ItemIdentifier::de(reader)?,
            quantity: i32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.item.bit_length() + self.quantity.bit_length()
    }
}
