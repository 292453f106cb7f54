use crate::SerdeErr;

/// Reads bits & bytes back out of a buffer produced by a `BitWrite`
/// implementation. Bits within a byte are consumed LSB first.
pub struct BitReader<'b> {
    buffer: &'b [u8],
    buffer_index: usize,
    scratch_bit_index: u8,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            buffer_index: 0,
            scratch_bit_index: 0,
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        let Some(byte) = self.buffer.get(self.buffer_index) else {
            return Err(SerdeErr);
        };

        let bit = (byte >> self.scratch_bit_index) & 1 != 0;

        self.scratch_bit_index += 1;
        if self.scratch_bit_index >= 8 {
            self.scratch_bit_index = 0;
            self.buffer_index += 1;
        }

        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        if self.scratch_bit_index == 0 {
            let Some(byte) = self.buffer.get(self.buffer_index) else {
                return Err(SerdeErr);
            };
            self.buffer_index += 1;
            return Ok(*byte);
        }

        let mut output: u8 = 0;
        for index in 0..8 {
            if self.read_bit()? {
                output |= 1 << index;
            }
        }
        Ok(output)
    }

    /// Reads exactly `length` bytes, failing without consuming anything if
    /// fewer remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>, SerdeErr> {
        if length > self.bytes_remaining() {
            return Err(SerdeErr);
        }

        if self.scratch_bit_index == 0 {
            let start = self.buffer_index;
            self.buffer_index += length;
            return Ok(self.buffer[start..self.buffer_index].to_vec());
        }

        let mut output = Vec::with_capacity(length);
        for _ in 0..length {
            output.push(self.read_byte()?);
        }
        Ok(output)
    }

    /// Whole bytes that can still be read from the current bit position
    pub fn bytes_remaining(&self) -> usize {
        let remaining_bits = self.bits_remaining();
        remaining_bits / 8
    }

    pub fn bits_remaining(&self) -> usize {
        let total_bits = self.buffer.len() * 8;
        let read_bits = self.buffer_index * 8 + self.scratch_bit_index as usize;
        total_bits.saturating_sub(read_bits)
    }

    pub fn is_exhausted(&self) -> bool {
        self.bits_remaining() == 0
    }
}
