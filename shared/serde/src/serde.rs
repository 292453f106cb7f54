use crate::{BitReader, BitWrite, SerdeErr};

/// A type that can be written to and read back from a bit stream
pub trait Serde: Sized + Clone + PartialEq {
    /// Writes the value into the given writer
    fn ser(&self, writer: &mut dyn BitWrite);

    /// Parses a value from the given reader
    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr>;

    /// Number of bits `ser` will produce for this value
    fn bit_length(&self) -> u32;
}

impl Serde for bool {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_bit(*self);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        reader.read_bit()
    }

    fn bit_length(&self) -> u32 {
        1
    }
}

// Integers go out big-endian & byte-aligned, the same layout a
// `DataOutputStream` peer expects.
macro_rules! impl_serde_for_integer {
    ($type:ty) => {
        impl Serde for $type {
            fn ser(&self, writer: &mut dyn BitWrite) {
                writer.write_bytes(&self.to_be_bytes());
            }

            fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                let mut bytes = [0u8; std::mem::size_of::<$type>()];
                for byte in bytes.iter_mut() {
                    *byte = reader.read_byte()?;
                }
                Ok(<$type>::from_be_bytes(bytes))
            }

            fn bit_length(&self) -> u32 {
                (std::mem::size_of::<$type>() as u32) * 8
            }
        }
    };
}

impl_serde_for_integer!(u8);
impl_serde_for_integer!(u16);
impl_serde_for_integer!(u32);
impl_serde_for_integer!(u64);
impl_serde_for_integer!(i8);
impl_serde_for_integer!(i16);
impl_serde_for_integer!(i32);
impl_serde_for_integer!(i64);

impl Serde for f32 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.to_bits().ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(f32::from_bits(u32::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        32
    }
}

impl Serde for f64 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.to_bits().ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(f64::from_bits(u64::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        64
    }
}

impl<T: Serde> Serde for Option<T> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        match self {
            Some(value) => {
                true.ser(writer);
                value.ser(writer);
            }
            None => {
                false.ser(writer);
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        if bool::de(reader)? {
            Ok(Some(T::de(reader)?))
        } else {
            Ok(None)
        }
    }

    fn bit_length(&self) -> u32 {
        match self {
            Some(value) => 1 + value.bit_length(),
            None => 1,
        }
    }
}

impl<T: Serde> Serde for Vec<T> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        (self.len() as u32).ser(writer);
        for value in self {
            value.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = u32::de(reader)? as usize;
        // every element costs at least one bit, so a longer claim is garbage
        if length > reader.bits_remaining() {
            return Err(SerdeErr);
        }
        let mut output = Vec::with_capacity(length);
        for _ in 0..length {
            output.push(T::de(reader)?);
        }
        Ok(output)
    }

    fn bit_length(&self) -> u32 {
        32 + self.iter().map(T::bit_length).sum::<u32>()
    }
}

impl Serde for String {
    fn ser(&self, writer: &mut dyn BitWrite) {
        (self.len() as u32).ser(writer);
        writer.write_bytes(self.as_bytes());
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = u32::de(reader)? as usize;
        let bytes = reader.read_bytes(length)?;
        String::from_utf8(bytes).map_err(|_| SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        32 + (self.len() as u32) * 8
    }
}
