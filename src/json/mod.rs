//! Mirrors the current game state of a save as JSON
//!
//! The top level keys and the tile coordinate key follow the established
//! Polytopia save JSON layout. Nested records keep this crate's field names
//! and shapes, so JSON in that layout isn't importable wholesale.
//!
//! ```
//! use polysave::document::{GameState, SaveDocument};
//! use polysave::json::SaveJson;
//! use polysave::records::MapHeader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let header = MapHeader { width: 1, height: 1, ..MapHeader::default() };
//! let document = SaveDocument::new(GameState::blank(header.clone()), GameState::blank(header));
//!
//! let json = SaveJson::from_document(&document).to_string_pretty()?;
//! let parsed = SaveJson::from_slice(json.as_bytes())?;
//! assert_eq!(parsed.game_name, "Battle of Polytopia");
//! assert_eq!(parsed.into_game_state()?, document.current);
//! # Ok(())
//! # }
//! ```

use crate::{
    document::{GameState, SaveDocument, TileGrid},
    records::{MapHeader, Player, Tile},
    Error, ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// The JSON layout of an exported save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJson {
    pub game_name: String,
    pub file_format: String,

    /// Tiles grouped by row
    pub tile_data: Vec<Vec<Tile>>,
    pub player_data: Vec<Player>,

    #[serde(rename = "mapHeaderOutput")]
    pub map_header: MapHeader,
}

impl SaveJson {
    pub const GAME_NAME: &'static str = "Battle of Polytopia";
    pub const FILE_FORMAT: &'static str = "Polytopia Save State";

    /// Captures the current game state of a document
    pub fn from_document(document: &SaveDocument) -> Self {
        let state = &document.current;
        SaveJson {
            game_name: String::from(SaveJson::GAME_NAME),
            file_format: String::from(SaveJson::FILE_FORMAT),
            tile_data: state.tiles.rows().map(<[Tile]>::to_vec).collect(),
            player_data: state.players.clone(),
            map_header: state.header.clone(),
        }
    }

    /// Parses an exported save
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_string_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_writer_pretty<W>(&self, writer: W) -> Result<(), Error>
    where
        W: Write,
    {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    /// Converts the export back into a game state, failing when the rows
    /// don't match the dimensions in the map header
    pub fn into_game_state(self) -> Result<GameState, Error> {
        let width = self.map_header.width;
        let height = self.map_header.height;
        let rows_match = self.tile_data.len() == usize::from(height)
            && self.tile_data.iter().all(|row| row.len() == usize::from(width));

        if !rows_match {
            return Err(Error::new(ErrorKind::GridMismatch {
                width,
                height,
                tiles: self.tile_data.iter().map(Vec::len).sum(),
            }));
        }

        let tiles = TileGrid::new(width, height, self.tile_data.into_iter().flatten().collect())?;
        Ok(GameState {
            header: self.map_header,
            tiles,
            players: self.player_data,
        })
    }
}
