use conveyor_serde::{BitReader, BitWrite, Serde, SerdeErr, StreamWriter};

use crate::{
    sync::{ClientState, PipeStateSource, StateTargetWorld, SyncError},
    NodeAddress,
};

/// The four independently serialized sub-states of a node, in wire order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubStateKind {
    Render,
    Core,
    Plugin,
    Pipe,
}

impl SubStateKind {
    pub const ORDER: [SubStateKind; 4] = [
        SubStateKind::Render,
        SubStateKind::Core,
        SubStateKind::Plugin,
        SubStateKind::Pipe,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// Nothing lives at the addressed node anymore, the message was dropped
    NodeVanished,
}

/// Full state snapshot of one node.
///
/// Wire layout: node address, then for render, core, plugin & pipe state a
/// big-endian `u32` length followed by exactly that many bytes. Blocks are
/// carried opaquely and only interpreted when applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipeStateMessage {
    address: NodeAddress,
    render_state: Vec<u8>,
    core_state: Vec<u8>,
    plugin_state: Vec<u8>,
    pipe_state: Vec<u8>,
}

impl PipeStateMessage {
    pub fn new(
        address: NodeAddress,
        render_state: Vec<u8>,
        core_state: Vec<u8>,
        plugin_state: Vec<u8>,
        pipe_state: Vec<u8>,
    ) -> Self {
        Self {
            address,
            render_state,
            core_state,
            plugin_state,
            pipe_state,
        }
    }

    /// Serializes every sub-state of `source` at this instant
    pub fn capture(address: NodeAddress, source: &dyn PipeStateSource) -> Self {
        Self::new(
            address,
            encode_state(source.render_state()),
            encode_state(source.core_state()),
            encode_state(source.plugin_state()),
            encode_state(source.pipe_state()),
        )
    }

    pub fn address(&self) -> &NodeAddress {
        &self.address
    }

    pub fn block(&self, kind: SubStateKind) -> &[u8] {
        match kind {
            SubStateKind::Render => &self.render_state,
            SubStateKind::Core => &self.core_state,
            SubStateKind::Plugin => &self.plugin_state,
            SubStateKind::Pipe => &self.pipe_state,
        }
    }

    fn block_mut(&mut self, kind: SubStateKind) -> &mut Vec<u8> {
        match kind {
            SubStateKind::Render => &mut self.render_state,
            SubStateKind::Core => &mut self.core_state,
            SubStateKind::Plugin => &mut self.plugin_state,
            SubStateKind::Pipe => &mut self.pipe_state,
        }
    }

    // Wire

    pub fn write(&self, writer: &mut dyn BitWrite) {
        self.address.ser(writer);
        for kind in SubStateKind::ORDER {
            let block = self.block(kind);
            (block.len() as u32).ser(writer);
            writer.write_bytes(block);
        }
    }

    pub fn read(reader: &mut BitReader) -> Result<Self, SyncError> {
        let address = NodeAddress::de(reader).map_err(|_| SyncError::MalformedEnvelope)?;

        let mut message = Self::new(address, Vec::new(), Vec::new(), Vec::new(), Vec::new());
        for kind in SubStateKind::ORDER {
            *message.block_mut(kind) =
                read_block(reader).map_err(|_| SyncError::TruncatedBlock { kind })?;
        }
        Ok(message)
    }

    /// Number of bits `write` produces
    pub fn bit_length(&self) -> u32 {
        let blocks: u32 = SubStateKind::ORDER
            .iter()
            .map(|kind| 32 + (self.block(*kind).len() as u32) * 8)
            .sum();
        self.address.bit_length() + blocks
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = StreamWriter::for_bits(self.bit_length());
        self.write(&mut writer);
        writer.to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SyncError> {
        let mut reader = BitReader::new(bytes);
        Self::read(&mut reader)
    }

    // Apply

    /// Restores render, core & plugin state, runs the node's post-update
    /// hook, then restores pipe state. A block that fails to parse aborts
    /// the rest of the message; earlier blocks are not rolled back.
    pub fn apply(&self, world: &mut dyn StateTargetWorld) -> Result<ApplyOutcome, SyncError> {
        let Some(target) = world.pipe_state_target(&self.address) else {
            return Ok(ApplyOutcome::NodeVanished);
        };

        self.restore(target.render_state_mut(), SubStateKind::Render)?;
        self.restore(target.core_state_mut(), SubStateKind::Core)?;
        self.restore(target.plugin_state_mut(), SubStateKind::Plugin)?;
        target.after_state_updated();
        self.restore(target.pipe_state_mut(), SubStateKind::Pipe)?;

        Ok(ApplyOutcome::Applied)
    }

    fn restore(&self, state: &mut dyn ClientState, kind: SubStateKind) -> Result<(), SyncError> {
        let mut reader = BitReader::new(self.block(kind));
        state
            .read_data(&mut reader)
            .map_err(|_| SyncError::MalformedSubState {
                address: self.address,
                kind,
            })
    }
}

fn encode_state(state: &dyn ClientState) -> Vec<u8> {
    let mut writer = StreamWriter::new();
    state.write_data(&mut writer);
    writer.to_bytes()
}

fn read_block(reader: &mut BitReader) -> Result<Vec<u8>, SerdeErr> {
    let length = u32::de(reader)? as usize;
    reader.read_bytes(length)
}
