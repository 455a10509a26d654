use super::{BinaryRecord, Coordinates, Improvement, Position, Unit};
use crate::{
    binary::{Reader, Writer},
    Error, ErrorKind,
};

/// The grid cell a tile is expected to describe, `x` being the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: u32,
    pub y: u32,
}

impl GridPosition {
    pub const fn new(x: u32, y: u32) -> Self {
        GridPosition { x, y }
    }
}

/// A single map cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Tile {
    #[cfg_attr(feature = "serde", serde(rename = "worldCoordinates"))]
    pub coordinates: Coordinates,
    pub terrain: u16,
    pub climate: u16,
    pub altitude: i16,
    pub owner: u8,
    pub capital: u8,
    pub capital_coordinates: Position,
    pub resource: Option<u16>,
    pub improvement: Option<TileImprovement>,
    pub unit: Option<TileUnit>,
    pub player_visibility: Vec<u8>,
    pub has_road: bool,
    pub has_water_route: bool,
    pub skin: u16,
    pub unknown: [u8; 2],

    /// Only stored from game version 105 onwards
    pub flood_flag: u8,

    /// Only stored when `flood_flag` is 1
    pub flood_value: u32,
}

/// A structure built on a tile along with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileImprovement {
    pub kind: u16,
    pub data: Improvement,
}

/// The unit occupying a tile, possibly carrying a passenger
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileUnit {
    pub primary: UnitSlot,
    pub passenger: Option<UnitSlot>,
}

/// A unit with the per-unit effect and direction data stored next to it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSlot {
    pub unit: Unit,
    pub effects: Vec<u16>,
    pub directions: [u8; 5],
}

impl UnitSlot {
    pub fn new(unit: Unit) -> Self {
        UnitSlot {
            unit,
            effects: Vec::new(),
            directions: [0; 5],
        }
    }

    fn decode_extras(reader: &mut Reader<'_>) -> Result<(Vec<u16>, [u8; 5]), Error> {
        let effects = reader.read_u16_list()?;
        let directions = reader.read_array::<5>()?;
        Ok((effects, directions))
    }

    fn encode_extras(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u16_list(&self.effects, "unit effects")?;
        writer.write_bytes(&self.directions);
        Ok(())
    }
}

impl TileUnit {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let unit = Unit::decode(reader)?;
        if !reader.read_presence()? {
            let (effects, directions) = UnitSlot::decode_extras(reader)?;
            return Ok(TileUnit {
                primary: UnitSlot {
                    unit,
                    effects,
                    directions,
                },
                passenger: None,
            });
        }

        let passenger = Unit::decode(reader)?;
        let offset = reader.position();
        let nested = reader.read_u8()?;
        if nested != 0 {
            return Err(Error::new(ErrorKind::InvalidPassengerFlag {
                offset,
                value: nested,
            }));
        }

        // The passenger's extras precede the primary unit's
        let (passenger_effects, passenger_directions) = UnitSlot::decode_extras(reader)?;
        let (effects, directions) = UnitSlot::decode_extras(reader)?;
        Ok(TileUnit {
            primary: UnitSlot {
                unit,
                effects,
                directions,
            },
            passenger: Some(UnitSlot {
                unit: passenger,
                effects: passenger_effects,
                directions: passenger_directions,
            }),
        })
    }

    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        self.primary.unit.encode(writer)?;
        match &self.passenger {
            Some(passenger) => {
                writer.write_u8(1);
                passenger.unit.encode(writer)?;
                writer.write_u8(0);
                passenger.encode_extras(writer)?;
            }
            None => writer.write_u8(0),
        }

        self.primary.encode_extras(writer)
    }
}

impl Tile {
    /// Size of the fixed header at the start of every tile
    pub const HEADER_SIZE: usize = 24;

    /// First game version that stores flood data on tiles
    pub const FLOOD_VERSION: u32 = 105;

    /// Improvement kind of a city
    pub const CITY: u16 = 1;

    /// An empty tile at the given coordinates
    pub fn new(coordinates: Coordinates) -> Self {
        Tile {
            coordinates,
            capital_coordinates: Position::UNSET,
            ..Tile::default()
        }
    }

    /// The resource type with the `-1` sentinel used when none exists
    pub fn resource_type(&self) -> i32 {
        self.resource.map_or(-1, i32::from)
    }

    /// The improvement type with the `-1` sentinel used when none exists
    pub fn improvement_type(&self) -> i32 {
        self.improvement.as_ref().map_or(-1, |x| i32::from(x.kind))
    }

    /// True when the tile holds a city
    pub fn is_city(&self) -> bool {
        matches!(&self.improvement, Some(x) if x.kind == Tile::CITY)
    }

    fn stores_flood(game_version: u32) -> bool {
        game_version >= Tile::FLOOD_VERSION
    }

    /// Decodes a tile that is expected to sit at `expected` in the grid.
    ///
    /// Coordinates that disagree with `expected` mean an earlier field was
    /// read with the wrong width, so decoding stops with
    /// [`ErrorKind::Desync`].
    pub fn decode(
        reader: &mut Reader<'_>,
        expected: GridPosition,
        game_version: u32,
    ) -> Result<Self, Error> {
        let offset = reader.position();
        let coordinates = Coordinates::decode(reader)?;
        if coordinates.x != expected.x || coordinates.y != expected.y {
            return Err(Error::new(ErrorKind::Desync {
                offset,
                expected_x: expected.x,
                expected_y: expected.y,
                found_x: coordinates.x,
                found_y: coordinates.y,
            }));
        }

        let terrain = reader.read_u16()?;
        let climate = reader.read_u16()?;
        let altitude = reader.read_i16()?;
        let owner = reader.read_u8()?;
        let capital = reader.read_u8()?;
        let capital_coordinates = Position::decode(reader)?;

        let resource = if reader.read_presence()? {
            Some(reader.read_u16()?)
        } else {
            None
        };

        let improvement = if reader.read_presence()? {
            let kind = reader.read_u16()?;
            let data = Improvement::decode(reader)?;
            Some(TileImprovement { kind, data })
        } else {
            None
        };

        let unit = if reader.read_presence()? {
            Some(TileUnit::decode(reader)?)
        } else {
            None
        };

        let player_visibility = reader.read_byte_list_u8()?;
        let has_road = reader.read_bool()?;
        let has_water_route = reader.read_bool()?;
        let skin = reader.read_u16()?;
        let unknown = reader.read_array::<2>()?;

        let mut flood_flag = 0;
        let mut flood_value = 0;
        if Tile::stores_flood(game_version) {
            flood_flag = reader.read_u8()?;
            if flood_flag == 1 {
                flood_value = reader.read_u32()?;
            }
        }

        Ok(Tile {
            coordinates,
            terrain,
            climate,
            altitude,
            owner,
            capital,
            capital_coordinates,
            resource,
            improvement,
            unit,
            player_visibility,
            has_road,
            has_water_route,
            skin,
            unknown,
            flood_flag,
            flood_value,
        })
    }

    /// Encodes the tile as it would be stored for the given game version
    pub fn encode(&self, writer: &mut Writer, game_version: u32) -> Result<(), Error> {
        self.coordinates.encode(writer);
        writer.write_u16(self.terrain);
        writer.write_u16(self.climate);
        writer.write_i16(self.altitude);
        writer.write_u8(self.owner);
        writer.write_u8(self.capital);
        self.capital_coordinates.encode(writer);

        match self.resource {
            Some(resource) => {
                writer.write_u8(1);
                writer.write_u16(resource);
            }
            None => writer.write_u8(0),
        }

        match &self.improvement {
            Some(improvement) => {
                writer.write_u8(1);
                writer.write_u16(improvement.kind);
                improvement.data.encode(writer)?;
            }
            None => writer.write_u8(0),
        }

        match &self.unit {
            Some(unit) => {
                writer.write_u8(1);
                unit.encode(writer)?;
            }
            None => writer.write_u8(0),
        }

        writer.write_byte_list_u8(&self.player_visibility, "player visibility")?;
        writer.write_bool(self.has_road);
        writer.write_bool(self.has_water_route);
        writer.write_u16(self.skin);
        writer.write_bytes(&self.unknown);

        if Tile::stores_flood(game_version) {
            writer.write_u8(self.flood_flag);
            if self.flood_flag == 1 {
                writer.write_u32(self.flood_value);
            }
        }

        Ok(())
    }

    /// Decodes a tile from the start of `data`
    pub fn from_slice(data: &[u8], expected: GridPosition, game_version: u32) -> Result<Self, Error> {
        Tile::decode(&mut Reader::new(data), expected, game_version)
    }

    /// Encodes the tile into a fresh buffer
    pub fn to_bytes(&self, game_version: u32) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::new();
        self.encode(&mut writer, game_version)?;
        Ok(writer.into_inner())
    }
}
