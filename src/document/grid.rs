use super::offsets::{OffsetIndex, OffsetLabel, Pass};
use crate::{
    binary::{Reader, Writer},
    records::{Coordinates, GridPosition, Tile},
    Error, ErrorKind,
};

/// The map's tiles stored row-major, `x` being the column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Wraps row-major tiles, failing when the count isn't `width * height`
    pub fn new(width: u16, height: u16, tiles: Vec<Tile>) -> Result<Self, Error> {
        if tiles.len() != usize::from(width) * usize::from(height) {
            return Err(Error::new(ErrorKind::GridMismatch {
                width,
                height,
                tiles: tiles.len(),
            }));
        }

        Ok(TileGrid {
            width,
            height,
            tiles,
        })
    }

    /// A grid of empty tiles, each carrying its own coordinates
    pub fn blank(width: u16, height: u16) -> Self {
        let tiles = (0..u32::from(height))
            .flat_map(|y| (0..u32::from(width)).map(move |x| Tile::new(Coordinates::new(x, y))))
            .collect();

        TileGrid {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < u32::from(self.width) && y < u32::from(self.height) {
            Some(y as usize * usize::from(self.width) + x as usize)
        } else {
            None
        }
    }

    /// The tile in column `x` of row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        self.index(x, y).and_then(|i| self.tiles.get(i))
    }

    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Tile> {
        self.index(x, y).and_then(move |i| self.tiles.get_mut(i))
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(usize::from(self.width).max(1))
    }

    /// Tiles in file order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Tile> {
        self.tiles.iter_mut()
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    pub(crate) fn decode(
        reader: &mut Reader<'_>,
        width: u16,
        height: u16,
        game_version: u32,
        pass: Pass,
        offsets: &mut OffsetIndex,
    ) -> Result<Self, Error> {
        offsets.record(pass, OffsetLabel::MapStart, reader.position());

        // Dimensions come straight from the input so cap them by what could fit
        let declared = usize::from(width) * usize::from(height);
        let fits = reader.remainder().len() / Tile::HEADER_SIZE;
        let mut tiles = Vec::with_capacity(declared.min(fits));

        for y in 0..u32::from(height) {
            for x in 0..u32::from(width) {
                offsets.record(pass, OffsetLabel::TileStart { x, y }, reader.position());
                let tile = Tile::decode(reader, GridPosition::new(x, y), game_version)?;
                offsets.record(pass, OffsetLabel::TileEnd { x, y }, reader.position());
                tiles.push(tile);
            }
        }

        offsets.record(pass, OffsetLabel::MapEnd, reader.position());
        Ok(TileGrid {
            width,
            height,
            tiles,
        })
    }

    /// Writes tiles in file order. A tile whose coordinates disagree with its
    /// cell would desync any later decode, so it is rejected here.
    pub(crate) fn encode(&self, writer: &mut Writer, game_version: u32) -> Result<(), Error> {
        for (y, row) in (0u32..).zip(self.rows()) {
            for (x, tile) in (0u32..).zip(row) {
                if tile.coordinates != Coordinates::new(x, y) {
                    return Err(Error::new(ErrorKind::Desync {
                        offset: writer.position(),
                        expected_x: x,
                        expected_y: y,
                        found_x: tile.coordinates.x,
                        found_y: tile.coordinates.y,
                    }));
                }

                tile.encode(writer, game_version)?;
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a TileGrid {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
