use crate::BitWrite;

/// A BitWrite implementation backed by a growable buffer. State blocks have
/// no fixed upper size, so nothing here is bounded by a packet MTU.
pub struct StreamWriter {
    scratch: u8,
    scratch_index: u8,
    buffer: Vec<u8>,
    bits_written: u32,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Pre-sizes the buffer, usually from `Serde::bit_length`
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            scratch: 0,
            scratch_index: 0,
            buffer: Vec::with_capacity(bytes),
            bits_written: 0,
        }
    }

    pub fn for_bits(bits: u32) -> Self {
        Self::with_capacity(bits.div_ceil(8) as usize)
    }

    fn flush_scratch(&mut self) {
        if self.scratch_index > 0 {
            let byte = (self.scratch << (8 - self.scratch_index)).reverse_bits();
            self.buffer.push(byte);
            self.scratch = 0;
            self.scratch_index = 0;
        }
    }

    pub fn to_bytes(mut self) -> Vec<u8> {
        self.flush_scratch();
        self.buffer
    }

    pub fn bits_written(&self) -> u32 {
        self.bits_written
    }

    /// True when the next write starts on a byte boundary
    pub fn is_aligned(&self) -> bool {
        self.scratch_index == 0
    }
}

impl Default for StreamWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWrite for StreamWriter {
    fn write_bit(&mut self, bit: bool) {
        self.scratch <<= 1;

        if bit {
            self.scratch |= 1;
        }

        self.scratch_index += 1;
        self.bits_written += 1;

        if self.scratch_index >= 8 {
            self.buffer.push(self.scratch.reverse_bits());
            self.scratch_index = 0;
            self.scratch = 0;
        }
    }

    fn write_byte(&mut self, byte: u8) {
        if self.scratch_index == 0 {
            self.buffer.push(byte);
            self.bits_written += 8;
            return;
        }

        let mut temp = byte;
        for _ in 0..8 {
            self.write_bit(temp & 1 != 0);
            temp >>= 1;
        }
    }
}
