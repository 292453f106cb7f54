use conveyor_serde::{BitReader, BitWrite, SerdeErr};

/// A piece of node state that the authority serializes & observers restore.
/// Each implementation owns its own byte format.
pub trait ClientState {
    fn write_data(&self, writer: &mut dyn BitWrite);
    fn read_data(&mut self, reader: &mut BitReader) -> Result<(), SerdeErr>;
}
