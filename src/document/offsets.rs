use std::collections::HashMap;
use std::fmt;

/// Which of the two game states an offset was recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// The game state as it was when the game started
    Initial,

    /// The game state as of the last turn
    Current,
}

/// A structural boundary within the decompressed save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetLabel {
    MapHeaderStart,
    MapHeaderEnd,
    MapStart,
    MapEnd,
    TileStart { x: u32, y: u32 },
    TileEnd { x: u32, y: u32 },
    AllPlayersStart,
    AllPlayersEnd,
}

impl fmt::Display for OffsetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetLabel::MapHeaderStart => f.write_str("MapHeaderStart"),
            OffsetLabel::MapHeaderEnd => f.write_str("MapHeaderEnd"),
            OffsetLabel::MapStart => f.write_str("MapStart"),
            OffsetLabel::MapEnd => f.write_str("MapEnd"),
            OffsetLabel::TileStart { x, y } => write!(f, "TileStart{},{}", x, y),
            OffsetLabel::TileEnd { x, y } => write!(f, "TileEnd{},{}", x, y),
            OffsetLabel::AllPlayersStart => f.write_str("AllPlayersStart"),
            OffsetLabel::AllPlayersEnd => f.write_str("AllPlayersEnd"),
        }
    }
}

/// Byte offsets of structural boundaries, kept separately for each pass.
///
/// Offsets are relative to the start of the decompressed save. The index
/// is diagnostic only and is never consulted when encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetIndex {
    disabled: bool,
    initial: HashMap<OffsetLabel, usize>,
    current: HashMap<OffsetLabel, usize>,
}

impl OffsetIndex {
    pub fn new() -> Self {
        OffsetIndex::default()
    }

    /// An index that ignores everything recorded into it
    pub fn disabled() -> Self {
        OffsetIndex {
            disabled: true,
            ..OffsetIndex::default()
        }
    }

    pub(crate) fn record(&mut self, pass: Pass, label: OffsetLabel, offset: usize) {
        if self.disabled {
            return;
        }

        self.pass_mut(pass).insert(label, offset);
    }

    fn pass_mut(&mut self, pass: Pass) -> &mut HashMap<OffsetLabel, usize> {
        match pass {
            Pass::Initial => &mut self.initial,
            Pass::Current => &mut self.current,
        }
    }

    /// The offsets recorded in a single pass
    pub fn pass(&self, pass: Pass) -> &HashMap<OffsetLabel, usize> {
        match pass {
            Pass::Initial => &self.initial,
            Pass::Current => &self.current,
        }
    }

    /// The offset of a label in the most recent pass that recorded it
    ///
    /// ```
    /// use polysave::document::{OffsetIndex, OffsetLabel, Pass};
    ///
    /// let index = OffsetIndex::new();
    /// assert_eq!(index.get(OffsetLabel::MapStart), None);
    /// assert!(index.pass(Pass::Initial).is_empty());
    /// ```
    pub fn get(&self, label: OffsetLabel) -> Option<usize> {
        self.current
            .get(&label)
            .or_else(|| self.initial.get(&label))
            .copied()
    }

    /// The offset of a label within a specific pass
    pub fn get_in(&self, pass: Pass, label: OffsetLabel) -> Option<usize> {
        self.pass(pass).get(&label).copied()
    }

    /// Labels and offsets with the latest pass taking precedence, sorted by offset
    pub fn latest(&self) -> Vec<(OffsetLabel, usize)> {
        let mut result: Vec<_> = self
            .initial
            .iter()
            .filter(|(label, _)| !self.current.contains_key(*label))
            .chain(self.current.iter())
            .map(|(&label, &offset)| (label, offset))
            .collect();
        result.sort_by_key(|&(_, offset)| offset);
        result
    }

    pub fn len(&self) -> usize {
        self.initial.len() + self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.initial.is_empty() && self.current.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(OffsetLabel::MapHeaderStart, "MapHeaderStart")]
    #[case(OffsetLabel::MapEnd, "MapEnd")]
    #[case(OffsetLabel::TileStart { x: 3, y: 1 }, "TileStart3,1")]
    #[case(OffsetLabel::TileEnd { x: 0, y: 12 }, "TileEnd0,12")]
    #[case(OffsetLabel::AllPlayersEnd, "AllPlayersEnd")]
    fn test_label_names(#[case] label: OffsetLabel, #[case] expected: &str) {
        assert_eq!(label.to_string(), expected);
    }

    #[test]
    fn test_latest_pass_wins() {
        let mut index = OffsetIndex::new();
        index.record(Pass::Initial, OffsetLabel::MapHeaderStart, 0);
        index.record(Pass::Initial, OffsetLabel::MapStart, 10);
        index.record(Pass::Current, OffsetLabel::MapHeaderStart, 100);

        assert_eq!(index.get(OffsetLabel::MapHeaderStart), Some(100));
        assert_eq!(index.get(OffsetLabel::MapStart), Some(10));
        assert_eq!(index.get_in(Pass::Initial, OffsetLabel::MapHeaderStart), Some(0));
        assert_eq!(index.len(), 3);
        assert_eq!(
            index.latest(),
            vec![
                (OffsetLabel::MapStart, 10),
                (OffsetLabel::MapHeaderStart, 100)
            ]
        );
    }

    #[test]
    fn test_disabled_index_records_nothing() {
        let mut index = OffsetIndex::disabled();
        index.record(Pass::Current, OffsetLabel::MapEnd, 5);
        assert!(index.is_empty());
        assert_eq!(index.get(OffsetLabel::MapEnd), None);
    }
}
