//! Assembles whole saves out of the individual records
//!
//! A decompressed save holds two game states back to back: the state the
//! game started in and the state as of the latest turn. Each state is a
//! [`MapHeader`], `width * height` tiles in row-major order and a list of
//! players. Three bytes separate the states.
//!
//! ```
//! use polysave::document::{GameState, SaveDocument};
//! use polysave::records::MapHeader;
//!
//! let header = MapHeader { version: 104, width: 2, height: 2, ..MapHeader::default() };
//! let state = GameState::blank(header);
//! let document = SaveDocument::new(state.clone(), state);
//!
//! let data = document.to_compressed()?;
//! let decoded = SaveDocument::from_compressed(&data)?;
//! assert_eq!(decoded.width(), 2);
//! assert_eq!(decoded.current, document.current);
//! # Ok::<(), polysave::Error>(())
//! ```

mod cities;
mod grid;
mod offsets;

pub use self::cities::{CityLocation, TribeCityIndex};
pub use self::grid::TileGrid;
pub use self::offsets::{OffsetIndex, OffsetLabel, Pass};

use crate::{
    binary::{Reader, Writer},
    container,
    records::{BinaryRecord, MapHeader, Player},
    Error, ErrorKind,
};
use log::{debug, trace};

/// Controls how a save is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    offsets: bool,
    trailing_data: bool,
}

impl DecodeOptions {
    /// Creates the structure with default options
    pub fn new() -> Self {
        DecodeOptions::default()
    }

    /// Sets if the byte offsets of structural boundaries are recorded
    pub fn with_offsets(mut self, offsets: bool) -> DecodeOptions {
        self.offsets = offsets;
        self
    }

    /// Sets if bytes after the current game state are kept. When disabled,
    /// leftover bytes are an error.
    pub fn with_trailing_data(mut self, trailing_data: bool) -> DecodeOptions {
        self.trailing_data = trailing_data;
        self
    }

    /// Decodes an already decompressed save
    pub fn decode(&self, data: &[u8]) -> Result<SaveDocument, Error> {
        SaveDocument::decode(data, *self)
    }

    /// Decompresses and decodes a save as found on disk
    pub fn decode_compressed(&self, data: &[u8]) -> Result<SaveDocument, Error> {
        let decompressed = container::decompress(data)?;
        self.decode(&decompressed)
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            offsets: true,
            trailing_data: true,
        }
    }
}

/// A map header along with the tiles and players it describes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GameState {
    pub header: MapHeader,
    pub tiles: TileGrid,
    pub players: Vec<Player>,
}

impl GameState {
    /// A state with blank tiles sized after the header and no players
    pub fn blank(header: MapHeader) -> Self {
        let tiles = TileGrid::blank(header.width, header.height);
        GameState {
            header,
            tiles,
            players: Vec::new(),
        }
    }

    /// Decodes one game state. Tiles are laid out according to
    /// `game_version`, or this state's own header version when absent.
    fn decode(
        reader: &mut Reader<'_>,
        pass: Pass,
        game_version: Option<u32>,
        offsets: &mut OffsetIndex,
    ) -> Result<Self, Error> {
        offsets.record(pass, OffsetLabel::MapHeaderStart, reader.position());
        let header = MapHeader::decode(reader)?;
        offsets.record(pass, OffsetLabel::MapHeaderEnd, reader.position());

        let game_version = game_version.unwrap_or(header.version);
        debug!(
            "{:?} map header: {}x{} tiles, version {}, turn {}",
            pass, header.width, header.height, game_version, header.current_turn
        );

        let tiles = TileGrid::decode(
            reader,
            header.width,
            header.height,
            game_version,
            pass,
            offsets,
        )?;

        offsets.record(pass, OffsetLabel::AllPlayersStart, reader.position());
        let count = reader.read_u16()?;
        let players = reader.read_list(usize::from(count), |r| {
            let offset = r.position();
            let player = Player::decode(r)?;
            trace!("player {} ({}) at offset {}", player.id, player.name, offset);
            Ok(player)
        })?;
        offsets.record(pass, OffsetLabel::AllPlayersEnd, reader.position());

        debug!("{:?} game state ends at offset {}", pass, reader.position());
        Ok(GameState {
            header,
            tiles,
            players,
        })
    }

    fn encode(&self, writer: &mut Writer, game_version: u32) -> Result<(), Error> {
        let grid = &self.tiles;
        if grid.width() != self.header.width
            || grid.height() != self.header.height
            || grid.len() != self.header.tile_count()
        {
            return Err(Error::new(ErrorKind::GridMismatch {
                width: self.header.width,
                height: self.header.height,
                tiles: grid.len(),
            }));
        }

        self.header.encode(writer)?;
        grid.encode(writer, game_version)?;

        writer.write_len_u16(self.players.len(), "players")?;
        for player in &self.players {
            player.encode(writer)?;
        }

        Ok(())
    }
}

/// A fully decoded save
#[derive(Debug, Clone, PartialEq)]
pub struct SaveDocument {
    /// The game state as it was when the game started
    pub initial: GameState,

    /// The game state as of the latest turn
    pub current: GameState,

    /// Opaque bytes between the two game states
    pub pass_separator: [u8; 3],

    /// Opaque bytes following the current game state
    pub trailer: Vec<u8>,

    offsets: OffsetIndex,
    tribe_cities: TribeCityIndex,
}

impl SaveDocument {
    /// Creates a document out of two game states
    pub fn new(initial: GameState, current: GameState) -> Self {
        let tribe_cities = TribeCityIndex::from_grid(&current.tiles);
        SaveDocument {
            initial,
            current,
            pass_separator: [0; 3],
            trailer: Vec::new(),
            offsets: OffsetIndex::new(),
            tribe_cities,
        }
    }

    /// Decodes an already decompressed save with default options
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        DecodeOptions::new().decode(data)
    }

    /// Decompresses and decodes a save with default options
    pub fn from_compressed(data: &[u8]) -> Result<Self, Error> {
        DecodeOptions::new().decode_compressed(data)
    }

    fn decode(data: &[u8], options: DecodeOptions) -> Result<Self, Error> {
        let mut offsets = if options.offsets {
            OffsetIndex::new()
        } else {
            OffsetIndex::disabled()
        };

        let mut reader = Reader::new(data);
        let initial = GameState::decode(&mut reader, Pass::Initial, None, &mut offsets)?;

        // The first header dictates the layout of both states
        let game_version = initial.header.version;
        let pass_separator = reader.read_array::<3>()?;
        let current =
            GameState::decode(&mut reader, Pass::Current, Some(game_version), &mut offsets)?;

        let trailer = reader.remainder();
        if !trailer.is_empty() {
            if !options.trailing_data {
                return Err(Error::new(ErrorKind::TrailingData {
                    offset: reader.position(),
                    remaining: trailer.len(),
                }));
            }

            debug!("keeping {} trailing bytes", trailer.len());
        }

        let tribe_cities = TribeCityIndex::from_grid(&current.tiles);
        Ok(SaveDocument {
            initial,
            current,
            pass_separator,
            trailer: trailer.to_vec(),
            offsets,
            tribe_cities,
        })
    }

    /// Encodes the document into a decompressed save
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let game_version = self.game_version();
        let mut writer = Writer::new();
        self.initial.encode(&mut writer, game_version)?;
        writer.write_bytes(&self.pass_separator);
        self.current.encode(&mut writer, game_version)?;
        writer.write_bytes(&self.trailer);
        debug!("encoded save of {} bytes", writer.position());
        Ok(writer.into_inner())
    }

    /// Encodes and compresses the document as it would be stored on disk
    pub fn to_compressed(&self) -> Result<Vec<u8>, Error> {
        let data = self.to_bytes()?;
        Ok(container::compress(&data))
    }

    /// The map width of the current game state
    pub fn width(&self) -> u16 {
        self.current.header.width
    }

    /// The map height of the current game state
    pub fn height(&self) -> u16 {
        self.current.header.height
    }

    /// The version that dictates the layout of both game states
    pub fn game_version(&self) -> u32 {
        self.initial.header.version
    }

    /// The turn of the current game state
    pub fn max_turn(&self) -> u32 {
        self.current.header.current_turn
    }

    /// Offsets recorded while decoding, empty for documents built in memory
    pub fn offsets(&self) -> &OffsetIndex {
        &self.offsets
    }

    /// Cities of the current game state grouped by owner
    pub fn tribe_cities(&self) -> &TribeCityIndex {
        &self.tribe_cities
    }

    /// Recomputes the city index after the current tiles were modified
    pub fn rebuild_tribe_cities(&mut self) -> &TribeCityIndex {
        self.tribe_cities = TribeCityIndex::from_grid(&self.current.tiles);
        &self.tribe_cities
    }
}
