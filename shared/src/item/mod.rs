mod item_stack;

pub use item_stack::{FluidIdentifier, FluidStack, ItemIdentifier, ItemStack};
