use conveyor_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// The six faces of a node, plus `Unknown` for items not yet oriented.
///
/// Ordinals are part of the persisted & wire format and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
    #[default]
    Unknown,
}

impl Direction {
    pub const VALID: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
            Direction::North => 2,
            Direction::South => 3,
            Direction::West => 4,
            Direction::East => 5,
            Direction::Unknown => 6,
        }
    }

    /// Out-of-range ordinals map to `Unknown` rather than failing
    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Direction::Down,
            1 => Direction::Up,
            2 => Direction::North,
            3 => Direction::South,
            4 => Direction::West,
            5 => Direction::East,
            _ => Direction::Unknown,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::Unknown => Direction::Unknown,
        }
    }

    /// Unit step along this direction as (x, y, z). North is -z, West is -x.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
            Direction::Unknown => (0, 0, 0),
        }
    }
}

impl Serde for Direction {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.ordinal().ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let ordinal = u8::de(reader)?;
        if ordinal > Direction::Unknown.ordinal() {
            return Err(SerdeErr);
        }
        Ok(Direction::from_ordinal(i32::from(ordinal)))
    }

    fn bit_length(&self) -> u32 {
        8
    }
}
