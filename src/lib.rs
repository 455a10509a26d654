/*!

A lossless decoder and encoder for [The Battle of
Polytopia](https://polytopia.io/) save files.

A save is decoded into a typed model of its map header, tiles, units,
improvements and players, and that model encodes back into the exact bytes it
came from. Fields whose meaning is unknown are kept as opaque bytes rather than
dropped, so an untouched document always round-trips.

## Quick Start

```rust
use polysave::{
    document::{GameState, SaveDocument},
    records::{MapHeader, Player, Rgba},
};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let header = MapHeader {
    version: 105,
    width: 4,
    height: 4,
    map_name: String::from("Lakes"),
    ..MapHeader::default()
};

let mut state = GameState::blank(header);
state.players.push(Player::empty(1, "Player1", Rgba::new(255, 0, 0, 255))?);

let document = SaveDocument::new(state.clone(), state);
let file = document.to_compressed()?;

let decoded = SaveDocument::from_compressed(&file)?;
assert_eq!(decoded.width(), 4);
assert_eq!(decoded.current.players[0].name, "Player1");
assert_eq!(decoded.to_compressed()?, file);
# Ok(())
# }
```

## Layers

- [`container`]: the LZ4 envelope with its size difference header
- [`binary`]: the little endian cursor every record is written against
- [`records`]: map headers, tiles, units, improvements and players
- [`document`]: both game states of a save, an offset index for diagnostics
  and an index of cities by tribe

Decoding stops at the first inconsistency. Tiles carry their own coordinates,
and a tile that doesn't sit where the grid expects it is reported as a
desync, since any field read with the wrong width shifts everything after it.

## Features

- `serde`: derive `Serialize` and `Deserialize` on the model
- `json`: a JSON mirror of the current game state in [`json::SaveJson`]

*/

pub mod binary;
pub mod container;
pub mod document;
mod errors;
#[cfg(feature = "json")]
pub mod json;
pub mod records;

pub use self::document::{DecodeOptions, SaveDocument};
pub use self::errors::*;
