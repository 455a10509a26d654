use super::TileGrid;
use crate::records::Tile;
use std::collections::BTreeMap;

/// Where a city stands and what it's called
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CityLocation {
    pub x: u32,
    pub y: u32,

    /// Empty when the city is unnamed
    pub city_name: String,
    pub capital: u8,
}

/// Cities grouped by the tribe that owns the tile, in grid order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TribeCityIndex {
    cities: BTreeMap<u8, Vec<CityLocation>>,
}

impl TribeCityIndex {
    /// Scans a grid row by row for city improvements
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut cities: BTreeMap<u8, Vec<CityLocation>> = BTreeMap::new();
        for tile in grid {
            let Some(improvement) = tile.improvement.as_ref() else {
                continue;
            };

            if improvement.kind != Tile::CITY {
                continue;
            }

            cities.entry(tile.owner).or_default().push(CityLocation {
                x: tile.coordinates.x,
                y: tile.coordinates.y,
                city_name: String::from(improvement.data.city_name_or_empty()),
                capital: tile.capital,
            });
        }

        TribeCityIndex { cities }
    }

    /// Cities owned by a tribe, empty when it owns none
    pub fn get(&self, owner: u8) -> &[CityLocation] {
        self.cities.get(&owner).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Owners and their cities in ascending owner order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[CityLocation])> + '_ {
        self.cities.iter().map(|(&owner, x)| (owner, x.as_slice()))
    }

    /// Number of tribes that own at least one city
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
