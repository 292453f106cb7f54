use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use conveyor_shared::{
    BitReader, BitWrite, ClientState, NodeAddress, PipeStateSource, PipeStateTarget, Serde,
    SerdeErr, StateSourceWorld, StateTargetWorld,
};

/// Ordered log of state restores, shared by every node of a world
pub type Journal = Arc<Mutex<Vec<String>>>;

/// Sub-state holding an opaque byte payload. Writes it length-prefixed and
/// logs every successful read to the journal.
pub struct RecordingState {
    name: &'static str,
    pub value: Vec<u8>,
    pub reject_reads: bool,
    journal: Journal,
}

impl RecordingState {
    fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            value: Vec::new(),
            reject_reads: false,
            journal: journal.clone(),
        }
    }
}

impl ClientState for RecordingState {
    fn write_data(&self, writer: &mut dyn BitWrite) {
        self.value.ser(writer);
    }

    fn read_data(&mut self, reader: &mut BitReader) -> Result<(), SerdeErr> {
        if self.reject_reads {
            return Err(SerdeErr);
        }
        self.value = Vec::<u8>::de(reader)?;
        if let Ok(mut journal) = self.journal.lock() {
            journal.push(self.name.to_string());
        }
        Ok(())
    }
}

pub struct TestPipeNode {
    pub render: RecordingState,
    pub core: RecordingState,
    pub plugin: RecordingState,
    pub pipe: RecordingState,
    journal: Journal,
}

impl TestPipeNode {
    pub fn new(journal: &Journal) -> Self {
        Self {
            render: RecordingState::new("render", journal),
            core: RecordingState::new("core", journal),
            plugin: RecordingState::new("plugin", journal),
            pipe: RecordingState::new("pipe", journal),
            journal: journal.clone(),
        }
    }

    pub fn with_values(
        journal: &Journal,
        render: Vec<u8>,
        core: Vec<u8>,
        plugin: Vec<u8>,
        pipe: Vec<u8>,
    ) -> Self {
        let mut node = Self::new(journal);
        node.render.value = render;
        node.core.value = core;
        node.plugin.value = plugin;
        node.pipe.value = pipe;
        node
    }

    pub fn values(&self) -> [&[u8]; 4] {
        [
            self.render.value.as_slice(),
            self.core.value.as_slice(),
            self.plugin.value.as_slice(),
            self.pipe.value.as_slice(),
        ]
    }
}

impl PipeStateSource for TestPipeNode {
    fn render_state(&self) -> &dyn ClientState {
        &self.render
    }
    fn core_state(&self) -> &dyn ClientState {
        &self.core
    }
    fn plugin_state(&self) -> &dyn ClientState {
        &self.plugin
    }
    fn pipe_state(&self) -> &dyn ClientState {
        &self.pipe
    }
}

impl PipeStateTarget for TestPipeNode {
    fn render_state_mut(&mut self) -> &mut dyn ClientState {
        &mut self.render
    }
    fn core_state_mut(&mut self) -> &mut dyn ClientState {
        &mut self.core
    }
    fn plugin_state_mut(&mut self) -> &mut dyn ClientState {
        &mut self.plugin
    }
    fn pipe_state_mut(&mut self) -> &mut dyn ClientState {
        &mut self.pipe
    }
    fn after_state_updated(&mut self) {
        if let Ok(mut journal) = self.journal.lock() {
            journal.push("after_state_updated".to_string());
        }
    }
}

/// Collection of pipe nodes standing in for either side's world
#[derive(Default)]
pub struct TestPipeWorld {
    pub nodes: HashMap<NodeAddress, TestPipeNode>,
    pub journal: Journal,
}

impl TestPipeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty node and returns it
    pub fn add_node(&mut self, address: NodeAddress) -> &mut TestPipeNode {
        let node = TestPipeNode::new(&self.journal);
        self.nodes.entry(address).or_insert(node)
    }

    pub fn node(&self, address: &NodeAddress) -> Option<&TestPipeNode> {
        self.nodes.get(address)
    }

    /// Drains the journal
    pub fn take_journal(&self) -> Vec<String> {
        self.journal
            .lock()
            .map(|mut journal| std::mem::take(&mut *journal))
            .unwrap_or_default()
    }
}

impl StateSourceWorld for TestPipeWorld {
    fn pipe_state_source(&self, address: &NodeAddress) -> Option<&dyn PipeStateSource> {
        self.nodes
            .get(address)
            .map(|node| node as &dyn PipeStateSource)
    }
}

impl StateTargetWorld for TestPipeWorld {
    fn pipe_state_target(&mut self, address: &NodeAddress) -> Option<&mut dyn PipeStateTarget> {
        self.nodes
            .get_mut(address)
            .map(|node| node as &mut dyn PipeStateTarget)
    }
}
