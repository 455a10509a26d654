use super::BinaryRecord;
use crate::{
    binary::{Reader, Writer},
    Error,
};

/// Game wide settings that open every game state
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MapHeader {
    /// The game version. Later fields of the file are laid out according to
    /// the version found in the first header.
    pub version: u32,
    pub version2: u32,
    pub total_actions: u16,
    pub current_turn: u32,
    pub current_player_index: u8,
    pub max_unit_id: u32,
    pub current_game_state: u8,
    pub seed: i32,
    pub turn_limit: u32,
    pub score_limit: u32,
    pub win_by_capital: u8,
    pub settings: [u8; 6],
    pub game_mode_base: u8,
    pub game_mode_rules: u8,
    pub map_name: String,
    pub map_square_size: u32,
    pub disabled_tribes: Vec<u16>,
    pub unlocked_tribes: Vec<u16>,
    pub difficulty: u16,
    pub opponents: u32,
    pub game_type: u16,
    pub map_preset: u8,
    pub turn_time_limit_minutes: i32,
    pub unknown_float1: [u8; 4],
    pub unknown_float2: [u8; 4],
    pub base_time_seconds: f32,
    pub time_settings: [u8; 4],
    pub tribe_skins: Vec<TribeSkin>,
    pub width: u16,
    pub height: u16,
}

/// A skin selected for a tribe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TribeSkin {
    pub tribe: u16,
    pub skin: u16,
}

impl MapHeader {
    /// Number of tiles the header declares
    pub fn tile_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl BinaryRecord for MapHeader {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let version = reader.read_u32()?;
        let version2 = reader.read_u32()?;
        let total_actions = reader.read_u16()?;
        let current_turn = reader.read_u32()?;
        let current_player_index = reader.read_u8()?;
        let max_unit_id = reader.read_u32()?;
        let current_game_state = reader.read_u8()?;
        let seed = reader.read_i32()?;
        let turn_limit = reader.read_u32()?;
        let score_limit = reader.read_u32()?;
        let win_by_capital = reader.read_u8()?;
        let settings = reader.read_array::<6>()?;
        let game_mode_base = reader.read_u8()?;
        let game_mode_rules = reader.read_u8()?;

        let map_name = reader.read_string()?;
        let map_square_size = reader.read_u32()?;
        let disabled_tribes = reader.read_u16_list()?;
        let unlocked_tribes = reader.read_u16_list()?;
        let difficulty = reader.read_u16()?;
        let opponents = reader.read_u32()?;
        let game_type = reader.read_u16()?;
        let map_preset = reader.read_u8()?;
        let turn_time_limit_minutes = reader.read_i32()?;
        let unknown_float1 = reader.read_array::<4>()?;
        let unknown_float2 = reader.read_array::<4>()?;
        let base_time_seconds = reader.read_f32()?;
        let time_settings = reader.read_array::<4>()?;

        let skins = reader.read_u32()?;
        let tribe_skins = reader.read_list(skins as usize, |r| {
            let tribe = r.read_u16()?;
            let skin = r.read_u16()?;
            Ok(TribeSkin { tribe, skin })
        })?;

        let width = reader.read_u16()?;
        let height = reader.read_u16()?;

        Ok(MapHeader {
            version,
            version2,
            total_actions,
            current_turn,
            current_player_index,
            max_unit_id,
            current_game_state,
            seed,
            turn_limit,
            score_limit,
            win_by_capital,
            settings,
            game_mode_base,
            game_mode_rules,
            map_name,
            map_square_size,
            disabled_tribes,
            unlocked_tribes,
            difficulty,
            opponents,
            game_type,
            map_preset,
            turn_time_limit_minutes,
            unknown_float1,
            unknown_float2,
            base_time_seconds,
            time_settings,
            tribe_skins,
            width,
            height,
        })
    }

    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u32(self.version);
        writer.write_u32(self.version2);
        writer.write_u16(self.total_actions);
        writer.write_u32(self.current_turn);
        writer.write_u8(self.current_player_index);
        writer.write_u32(self.max_unit_id);
        writer.write_u8(self.current_game_state);
        writer.write_i32(self.seed);
        writer.write_u32(self.turn_limit);
        writer.write_u32(self.score_limit);
        writer.write_u8(self.win_by_capital);
        writer.write_bytes(&self.settings);
        writer.write_u8(self.game_mode_base);
        writer.write_u8(self.game_mode_rules);

        writer.write_string(&self.map_name, "map name")?;
        writer.write_u32(self.map_square_size);
        writer.write_u16_list(&self.disabled_tribes, "disabled tribes")?;
        writer.write_u16_list(&self.unlocked_tribes, "unlocked tribes")?;
        writer.write_u16(self.difficulty);
        writer.write_u32(self.opponents);
        writer.write_u16(self.game_type);
        writer.write_u8(self.map_preset);
        writer.write_i32(self.turn_time_limit_minutes);
        writer.write_bytes(&self.unknown_float1);
        writer.write_bytes(&self.unknown_float2);
        writer.write_f32(self.base_time_seconds);
        writer.write_bytes(&self.time_settings);

        writer.write_len_u32(self.tribe_skins.len(), "tribe skins")?;
        for skin in &self.tribe_skins {
            writer.write_u16(skin.tribe);
            writer.write_u16(skin.skin);
        }

        writer.write_u16(self.width);
        writer.write_u16(self.height);
        Ok(())
    }
}
