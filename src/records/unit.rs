use super::{BinaryRecord, Coordinates};
use crate::{
    binary::{Reader, Writer},
    Error,
};

/// A unit standing on a tile or carried by another unit
///
/// Follower and leader ids link units together, they don't imply ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Unit {
    pub id: u32,
    pub owner: u8,
    pub unit_type: u16,
    pub follower_unit_id: u32,
    pub leader_unit_id: u32,
    pub current_coordinates: Coordinates,
    pub home_coordinates: Coordinates,
    pub health: u16,
    pub promotion_level: u16,
    pub experience: u16,
    pub moved: bool,
    pub attacked: bool,
    pub flipped: bool,
    pub created_turn: u16,
}

impl Unit {
    /// Encoded size of every unit
    pub const SIZE: usize = 42;
}

impl BinaryRecord for Unit {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        Ok(Unit {
            id: reader.read_u32()?,
            owner: reader.read_u8()?,
            unit_type: reader.read_u16()?,
            follower_unit_id: reader.read_u32()?,
            leader_unit_id: reader.read_u32()?,
            current_coordinates: Coordinates::decode(reader)?,
            home_coordinates: Coordinates::decode(reader)?,
            health: reader.read_u16()?,
            promotion_level: reader.read_u16()?,
            experience: reader.read_u16()?,
            moved: reader.read_bool()?,
            attacked: reader.read_bool()?,
            flipped: reader.read_bool()?,
            created_turn: reader.read_u16()?,
        })
    }

    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u32(self.id);
        writer.write_u8(self.owner);
        writer.write_u16(self.unit_type);
        writer.write_u32(self.follower_unit_id);
        writer.write_u32(self.leader_unit_id);
        self.current_coordinates.encode(writer);
        self.home_coordinates.encode(writer);
        writer.write_u16(self.health);
        writer.write_u16(self.promotion_level);
        writer.write_u16(self.experience);
        writer.write_bool(self.moved);
        writer.write_bool(self.attacked);
        writer.write_bool(self.flipped);
        writer.write_u16(self.created_turn);
        Ok(())
    }
}
