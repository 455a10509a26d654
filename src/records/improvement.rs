use super::BinaryRecord;
use crate::{
    binary::{Reader, Writer},
    Error,
};
use std::num::NonZeroU16;

/// State of a city or other structure built on a tile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Improvement {
    pub level: u16,
    pub founded_turn: u16,
    pub current_population: i16,
    pub total_population: u16,
    pub production: i16,
    pub base_score: i16,
    pub border_size: i16,
    pub upgrade_count: i16,
    pub connected_player_capital: u8,
    pub city_name: Option<String>,
    pub founded_tribe: u8,
    pub rewards: Vec<u16>,
    pub rebellion: Option<Rebellion>,
}

/// Opaque rebellion data attached to a city
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rebellion {
    /// The raw, non-zero flag that announced the buffer
    pub flag: NonZeroU16,
    pub buffer: Vec<u8>,
}

impl Improvement {
    /// The city name, or an empty string for unnamed structures
    pub fn city_name_or_empty(&self) -> &str {
        self.city_name.as_deref().unwrap_or("")
    }
}

impl BinaryRecord for Improvement {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let level = reader.read_u16()?;
        let founded_turn = reader.read_u16()?;
        let current_population = reader.read_i16()?;
        let total_population = reader.read_u16()?;
        let production = reader.read_i16()?;
        let base_score = reader.read_i16()?;
        let border_size = reader.read_i16()?;
        let upgrade_count = reader.read_i16()?;
        let connected_player_capital = reader.read_u8()?;

        let city_name = if reader.read_presence()? {
            Some(reader.read_string()?)
        } else {
            None
        };

        let founded_tribe = reader.read_u8()?;
        let rewards = reader.read_u16_list()?;

        let rebellion = match NonZeroU16::new(reader.read_u16()?) {
            Some(flag) => Some(Rebellion {
                flag,
                buffer: reader.read_byte_list_u16()?,
            }),
            None => None,
        };

        Ok(Improvement {
            level,
            founded_turn,
            current_population,
            total_population,
            production,
            base_score,
            border_size,
            upgrade_count,
            connected_player_capital,
            city_name,
            founded_tribe,
            rewards,
            rebellion,
        })
    }

    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u16(self.level);
        writer.write_u16(self.founded_turn);
        writer.write_i16(self.current_population);
        writer.write_u16(self.total_population);
        writer.write_i16(self.production);
        writer.write_i16(self.base_score);
        writer.write_i16(self.border_size);
        writer.write_i16(self.upgrade_count);
        writer.write_u8(self.connected_player_capital);

        match &self.city_name {
            Some(name) => {
                writer.write_u8(1);
                writer.write_string(name, "city name")?;
            }
            None => writer.write_u8(0),
        }

        writer.write_u8(self.founded_tribe);
        writer.write_u16_list(&self.rewards, "city rewards")?;

        match &self.rebellion {
            Some(rebellion) => {
                writer.write_u16(rebellion.flag.get());
                writer.write_byte_list_u16(&rebellion.buffer, "rebellion buffer")?;
            }
            None => writer.write_u16(0),
        }

        Ok(())
    }
}
