//! Codecs for the individual records of a save
//!
//! Each record is decoded by reading its fields in file order from a
//! [`Reader`] and encoded by writing the same fields in the same order to a
//! [`Writer`]. Optional sub-structures are `Option`s whose presence flag is
//! derived on write, so a record can't describe a flag without its payload.

mod improvement;
mod map_header;
mod player;
mod tile;
mod unit;

pub use self::improvement::{Improvement, Rebellion};
pub use self::map_header::{MapHeader, TribeSkin};
pub use self::player::{Aggression, Diplomacy, DiplomacyMessage, Player, Rgba, Task};
pub use self::tile::{GridPosition, Tile, TileImprovement, TileUnit, UnitSlot};
pub use self::unit::Unit;

use crate::{
    binary::{Reader, Writer},
    Error,
};

/// A record whose layout doesn't depend on its surroundings
pub trait BinaryRecord: Sized {
    /// Read the record starting at the reader's position
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error>;

    /// Append the record to the writer
    fn encode(&self, writer: &mut Writer) -> Result<(), Error>;

    /// Decode a record from the start of `data`
    ///
    /// Bytes following the record are ignored.
    fn from_slice(data: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader::new(data);
        Self::decode(&mut reader)
    }

    /// Encode the record into a fresh buffer
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::new();
        self.encode(&mut writer)?;
        Ok(writer.into_inner())
    }
}

/// Unsigned world coordinates as stored for tiles and units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub x: u32,
    pub y: u32,
}

impl Coordinates {
    pub const fn new(x: u32, y: u32) -> Self {
        Coordinates { x, y }
    }

    pub(crate) fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let x = reader.read_u32()?;
        let y = reader.read_u32()?;
        Ok(Coordinates { x, y })
    }

    pub(crate) fn encode(&self, writer: &mut Writer) {
        writer.write_u32(self.x);
        writer.write_u32(self.y);
    }
}

/// Signed coordinates where `-1` marks an unset location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const UNSET: Position = Position { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub(crate) fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let x = reader.read_i32()?;
        let y = reader.read_i32()?;
        Ok(Position { x, y })
    }

    pub(crate) fn encode(&self, writer: &mut Writer) {
        writer.write_i32(self.x);
        writer.write_i32(self.y);
    }
}
