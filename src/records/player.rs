use super::{BinaryRecord, Position};
use crate::{
    binary::{Reader, Writer},
    Error, ErrorKind,
};

/// A seat in the game along with everything the tribe has accomplished
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Player {
    pub id: u8,
    pub name: String,
    pub account_id: String,
    pub autoplay: bool,
    pub start_coordinates: Position,
    pub tribe: u16,
    pub unknown_byte1: u8,
    pub difficulty_handicap: u32,
    pub aggressions: Vec<Aggression>,
    pub currency: u32,
    pub score: u32,
    pub unknown_int2: [u8; 4],
    pub city_count: u16,
    pub techs: Vec<u16>,
    pub encountered_players: Vec<u8>,
    pub tasks: Vec<Task>,
    pub units_killed: i32,
    pub units_lost: i32,
    pub tribes_destroyed: i32,
    pub override_color: [u8; 4],
    pub override_tribe: u8,
    pub unique_improvements: Vec<u16>,
    pub diplomacy: Vec<Diplomacy>,
    pub diplomacy_messages: Vec<DiplomacyMessage>,
    pub destroyed_by: u8,
    pub destroyed_turn: u32,
    pub unknown_buffer2: [u8; 4],
    pub end_score: i32,
    pub skin: u16,
    pub unknown_buffer3: [u8; 4],
}

/// How aggressive a player is towards another
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Aggression {
    pub player_id: u8,
    pub aggression: i32,
}

/// An in progress task, its payload is kept opaque
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Task {
    pub task_type: u16,
    pub payload: Vec<u8>,
}

impl Task {
    /// Number of payload bytes that follow a task of the given type
    pub fn payload_len(task_type: u16) -> Option<usize> {
        match task_type {
            1 | 5 => Some(6),
            2..=4 | 6..=8 => Some(2),
            _ => None,
        }
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let offset = reader.position();
        let task_type = reader.read_u16()?;
        let len = Task::payload_len(task_type)
            .ok_or_else(|| Error::new(ErrorKind::UnknownTaskType { offset, task_type }))?;
        let payload = reader.read_bytes(len)?.to_vec();
        Ok(Task { task_type, payload })
    }

    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        let expected = Task::payload_len(self.task_type).ok_or_else(|| {
            Error::new(ErrorKind::UnknownTaskType {
                offset: writer.position(),
                task_type: self.task_type,
            })
        })?;

        if expected != self.payload.len() {
            return Err(Error::new(ErrorKind::TaskPayloadMismatch {
                task_type: self.task_type,
                expected,
                found: self.payload.len(),
            }));
        }

        writer.write_u16(self.task_type);
        writer.write_bytes(&self.payload);
        Ok(())
    }
}

/// Relations between a player and another seat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Diplomacy {
    pub player_id: u8,
    pub relation: u8,
    pub last_attack_turn: i32,
    pub embassy_level: u8,
    pub last_peace_broken_turn: i32,
    pub first_meet: i32,
    pub embassy_build_turn: i32,
    pub previous_attack_turn: i32,
}

impl Diplomacy {
    pub const SIZE: usize = 23;

    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        Ok(Diplomacy {
            player_id: reader.read_u8()?,
            relation: reader.read_u8()?,
            last_attack_turn: reader.read_i32()?,
            embassy_level: reader.read_u8()?,
            last_peace_broken_turn: reader.read_i32()?,
            first_meet: reader.read_i32()?,
            embassy_build_turn: reader.read_i32()?,
            previous_attack_turn: reader.read_i32()?,
        })
    }

    fn encode(&self, writer: &mut Writer) {
        writer.write_u8(self.player_id);
        writer.write_u8(self.relation);
        writer.write_i32(self.last_attack_turn);
        writer.write_u8(self.embassy_level);
        writer.write_i32(self.last_peace_broken_turn);
        writer.write_i32(self.first_meet);
        writer.write_i32(self.embassy_build_turn);
        writer.write_i32(self.previous_attack_turn);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DiplomacyMessage {
    pub message_type: u8,
    pub sender: u8,
}

/// An 8 bit per channel color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }
}

impl Player {
    /// Account id given to seats that aren't tied to an account
    pub const EMPTY_ACCOUNT_ID: &'static str = "00000000-0000-0000-0000-000000000000";

    /// Player id that the aggression table of every seat ends with
    pub const NATURE_ID: u8 = 255;

    /// Seat indices must stay below this value
    pub const MAX_SEATS: u8 = 254;

    /// Builds a fresh AI controlled seat.
    ///
    /// The aggression table lists every seat up to and including `index`
    /// followed by the nature entry. The override color is stored as blue,
    /// green, red with the alpha channel zeroed.
    ///
    /// ```
    /// use polysave::records::{Player, Rgba};
    ///
    /// let player = Player::empty(3, "Player3", Rgba::new(100, 150, 200, 255))?;
    /// assert_eq!(player.aggressions.len(), 4);
    /// assert_eq!(player.override_color, [200, 150, 100, 0]);
    /// # Ok::<(), polysave::Error>(())
    /// ```
    pub fn empty(index: u8, name: &str, color: Rgba) -> Result<Player, Error> {
        if index >= Player::MAX_SEATS {
            return Err(Error::new(ErrorKind::SeatIndex { index }));
        }

        let aggressions = (1..=index)
            .chain(std::iter::once(Player::NATURE_ID))
            .map(|player_id| Aggression {
                player_id,
                aggression: 0,
            })
            .collect();

        Ok(Player {
            id: index,
            name: String::from(name),
            account_id: String::from(Player::EMPTY_ACCOUNT_ID),
            autoplay: true,
            start_coordinates: Position::new(0, 0),
            tribe: 2,
            unknown_byte1: 1,
            difficulty_handicap: 2,
            aggressions,
            currency: 5,
            city_count: 1,
            override_color: [color.b, color.g, color.r, 0],
            unknown_buffer2: [255; 4],
            end_score: -1,
            unknown_buffer3: [255; 4],
            ..Player::default()
        })
    }
}

impl BinaryRecord for Player {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let id = reader.read_u8()?;
        let name = reader.read_string()?;
        let account_id = reader.read_string()?;
        let autoplay = reader.read_bool()?;
        let start_coordinates = Position::decode(reader)?;
        let tribe = reader.read_u16()?;
        let unknown_byte1 = reader.read_u8()?;
        let difficulty_handicap = reader.read_u32()?;

        let aggression_count = reader.read_u16()?;
        let aggressions = reader.read_list(usize::from(aggression_count), |r| {
            let player_id = r.read_u8()?;
            let aggression = r.read_i32()?;
            Ok(Aggression {
                player_id,
                aggression,
            })
        })?;

        let currency = reader.read_u32()?;
        let score = reader.read_u32()?;
        let unknown_int2 = reader.read_array::<4>()?;
        let city_count = reader.read_u16()?;
        let techs = reader.read_u16_list()?;
        let encountered_players = reader.read_byte_list_u16()?;

        let task_count = reader.read_u16()?;
        let tasks = reader.read_list(usize::from(task_count), Task::decode)?;

        let units_killed = reader.read_i32()?;
        let units_lost = reader.read_i32()?;
        let tribes_destroyed = reader.read_i32()?;
        let override_color = reader.read_array::<4>()?;
        let override_tribe = reader.read_u8()?;
        let unique_improvements = reader.read_u16_list()?;

        let diplomacy_count = reader.read_u16()?;
        let diplomacy = reader.read_list(usize::from(diplomacy_count), Diplomacy::decode)?;

        let message_count = reader.read_u16()?;
        let diplomacy_messages = reader.read_list(usize::from(message_count), |r| {
            let message_type = r.read_u8()?;
            let sender = r.read_u8()?;
            Ok(DiplomacyMessage {
                message_type,
                sender,
            })
        })?;

        let destroyed_by = reader.read_u8()?;
        let destroyed_turn = reader.read_u32()?;
        let unknown_buffer2 = reader.read_array::<4>()?;
        let end_score = reader.read_i32()?;
        let skin = reader.read_u16()?;
        let unknown_buffer3 = reader.read_array::<4>()?;

        Ok(Player {
            id,
            name,
            account_id,
            autoplay,
            start_coordinates,
            tribe,
            unknown_byte1,
            difficulty_handicap,
            aggressions,
            currency,
            score,
            unknown_int2,
            city_count,
            techs,
            encountered_players,
            tasks,
            units_killed,
            units_lost,
            tribes_destroyed,
            override_color,
            override_tribe,
            unique_improvements,
            diplomacy,
            diplomacy_messages,
            destroyed_by,
            destroyed_turn,
            unknown_buffer2,
            end_score,
            skin,
            unknown_buffer3,
        })
    }

    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u8(self.id);
        writer.write_string(&self.name, "player name")?;
        writer.write_string(&self.account_id, "account id")?;
        writer.write_bool(self.autoplay);
        self.start_coordinates.encode(writer);
        writer.write_u16(self.tribe);
        writer.write_u8(self.unknown_byte1);
        writer.write_u32(self.difficulty_handicap);

        writer.write_len_u16(self.aggressions.len(), "aggressions")?;
        for x in &self.aggressions {
            writer.write_u8(x.player_id);
            writer.write_i32(x.aggression);
        }

        writer.write_u32(self.currency);
        writer.write_u32(self.score);
        writer.write_bytes(&self.unknown_int2);
        writer.write_u16(self.city_count);
        writer.write_u16_list(&self.techs, "techs")?;
        writer.write_byte_list_u16(&self.encountered_players, "encountered players")?;

        writer.write_len_u16(self.tasks.len(), "tasks")?;
        for task in &self.tasks {
            task.encode(writer)?;
        }

        writer.write_i32(self.units_killed);
        writer.write_i32(self.units_lost);
        writer.write_i32(self.tribes_destroyed);
        writer.write_bytes(&self.override_color);
        writer.write_u8(self.override_tribe);
        writer.write_u16_list(&self.unique_improvements, "unique improvements")?;

        writer.write_len_u16(self.diplomacy.len(), "diplomacy")?;
        for x in &self.diplomacy {
            x.encode(writer);
        }

        writer.write_len_u16(self.diplomacy_messages.len(), "diplomacy messages")?;
        for x in &self.diplomacy_messages {
            writer.write_u8(x.message_type);
            writer.write_u8(x.sender);
        }

        writer.write_u8(self.destroyed_by);
        writer.write_u32(self.destroyed_turn);
        writer.write_bytes(&self.unknown_buffer2);
        writer.write_i32(self.end_score);
        writer.write_u16(self.skin);
        writer.write_bytes(&self.unknown_buffer3);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCategory;
    use rstest::*;

    const PLAYER_DATA: [u8; 677] = [
        1, 10, 84, 101, 115, 116, 80, 108, 97, 121, 101, 114, 36, 48, 48, 48, 48, 48, 48, 48, 48,
        45, 48, 48, 48, 48, 45, 48, 48, 48, 48, 45, 48, 48, 48, 48, 45, 48, 48, 48, 48, 48, 48, 48,
        48, 48, 48, 48, 48, 1, 6, 0, 0, 0, 22, 0, 0, 0, 15, 0, 1, 1, 0, 0, 0, 17, 0, 1, 0, 0, 0, 0,
        2, 80, 69, 0, 0, 3, 88, 29, 1, 0, 4, 39, 95, 0, 0, 5, 222, 34, 1, 0, 6, 218, 77, 1, 0, 7,
        134, 250, 0, 0, 8, 243, 153, 0, 0, 9, 131, 143, 0, 0, 10, 180, 147, 0, 0, 11, 74, 89, 0, 0,
        12, 7, 125, 0, 0, 13, 74, 69, 0, 0, 14, 66, 163, 0, 0, 15, 165, 216, 0, 0, 16, 41, 125, 0,
        0, 255, 0, 0, 0, 0, 132, 3, 0, 0, 16, 39, 0, 0, 0, 0, 0, 0, 11, 0, 11, 0, 0, 0, 8, 0, 15, 0,
        10, 0, 39, 0, 18, 0, 13, 0, 1, 0, 4, 0, 14, 0, 20, 0, 5, 0, 7, 11, 3, 5, 10, 4, 0, 6, 0, 1,
        1, 5, 0, 1, 1, 10, 0, 0, 0, 8, 0, 1, 0, 3, 0, 1, 1, 28, 0, 0, 0, 32, 0, 0, 0, 1, 0, 0, 0,
        153, 0, 255, 255, 0, 1, 0, 27, 0, 18, 0, 1, 0, 156, 255, 255, 255, 0, 156, 255, 255, 255,
        156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 2, 0, 156, 255, 255, 255, 0,
        156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 3, 0, 21, 0,
        0, 0, 0, 156, 255, 255, 255, 7, 0, 0, 0, 156, 255, 255, 255, 21, 0, 0, 0, 4, 0, 156, 255,
        255, 255, 0, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255,
        5, 0, 19, 0, 0, 0, 0, 156, 255, 255, 255, 8, 0, 0, 0, 156, 255, 255, 255, 21, 0, 0, 0, 6, 0,
        156, 255, 255, 255, 0, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255,
        255, 255, 7, 0, 20, 0, 0, 0, 0, 156, 255, 255, 255, 0, 0, 0, 0, 156, 255, 255, 255, 21, 0,
        0, 0, 8, 0, 156, 255, 255, 255, 0, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255,
        255, 156, 255, 255, 255, 9, 0, 156, 255, 255, 255, 0, 156, 255, 255, 255, 156, 255, 255,
        255, 156, 255, 255, 255, 156, 255, 255, 255, 10, 0, 15, 0, 0, 0, 0, 156, 255, 255, 255, 13,
        0, 0, 0, 156, 255, 255, 255, 156, 255, 255, 255, 11, 0, 156, 255, 255, 255, 0, 156, 255,
        255, 255, 0, 0, 0, 0, 156, 255, 255, 255, 156, 255, 255, 255, 12, 0, 156, 255, 255, 255, 0,
        156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 13, 0, 156,
        255, 255, 255, 0, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255,
        255, 14, 0, 156, 255, 255, 255, 0, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255,
        255, 156, 255, 255, 255, 15, 0, 156, 255, 255, 255, 0, 156, 255, 255, 255, 156, 255, 255,
        255, 156, 255, 255, 255, 156, 255, 255, 255, 16, 0, 156, 255, 255, 255, 0, 156, 255, 255,
        255, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 255, 0, 156, 255, 255, 255,
        0, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 0, 0,
        156, 255, 255, 255, 0, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255, 255, 255, 156, 255,
        255, 255, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255, 0, 0, 255, 255, 255,
        255,    ];

    const EMPTY_PLAYER_DATA: [u8; 217] = [
        17, 8, 80, 108, 97, 121, 101, 114, 49, 55, 36, 48, 48, 48, 48, 48, 48, 48, 48, 45, 48, 48,
        48, 48, 45, 48, 48, 48, 48, 45, 48, 48, 48, 48, 45, 48, 48, 48, 48, 48, 48, 48, 48, 48, 48,
        48, 48, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 2, 0, 0, 0, 18, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0,
        3, 0, 0, 0, 0, 4, 0, 0, 0, 0, 5, 0, 0, 0, 0, 6, 0, 0, 0, 0, 7, 0, 0, 0, 0, 8, 0, 0, 0, 0, 9,
        0, 0, 0, 0, 10, 0, 0, 0, 0, 11, 0, 0, 0, 0, 12, 0, 0, 0, 0, 13, 0, 0, 0, 0, 14, 0, 0, 0, 0,
        15, 0, 0, 0, 0, 16, 0, 0, 0, 0, 17, 0, 0, 0, 0, 255, 0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 200, 150, 100, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255, 0, 0, 255, 255, 255,
        255,    ];

    fn relation(
        player_id: u8,
        last_attack: i32,
        first_meet: i32,
        previous_attack: i32,
    ) -> Diplomacy {
        Diplomacy {
            player_id,
            relation: 0,
            last_attack_turn: last_attack,
            embassy_level: 0,
            last_peace_broken_turn: -100,
            first_meet,
            embassy_build_turn: -100,
            previous_attack_turn: previous_attack,
        }
    }

    fn player() -> Player {
        let aggressions = [
            (1, 0),
            (2, 17744),
            (3, 73048),
            (4, 24359),
            (5, 74462),
            (6, 85466),
            (7, 64134),
            (8, 39411),
            (9, 36739),
            (10, 37812),
            (11, 22858),
            (12, 32007),
            (13, 17738),
            (14, 41794),
            (15, 55461),
            (16, 32041),
            (255, 0),
        ];

        let diplomacy = (1..=16)
            .chain([255, 0])
            .map(|id| match id {
                3 => relation(3, 21, 7, 21),
                5 => relation(5, 19, 8, 21),
                7 => relation(7, 20, 0, 21),
                10 => relation(10, 15, 13, -100),
                11 => relation(11, -100, 0, -100),
                id => relation(id, -100, -100, -100),
            })
            .collect();

        Player {
            id: 1,
            name: String::from("TestPlayer"),
            account_id: String::from(Player::EMPTY_ACCOUNT_ID),
            autoplay: true,
            start_coordinates: Position::new(6, 22),
            tribe: 15,
            unknown_byte1: 1,
            difficulty_handicap: 1,
            aggressions: aggressions
                .iter()
                .map(|&(player_id, aggression)| Aggression {
                    player_id,
                    aggression,
                })
                .collect(),
            currency: 900,
            score: 10000,
            unknown_int2: [0; 4],
            city_count: 11,
            techs: vec![0, 8, 15, 10, 39, 18, 13, 1, 4, 14, 20],
            encountered_players: vec![7, 11, 3, 5, 10],
            tasks: vec![
                Task {
                    task_type: 6,
                    payload: vec![1, 1],
                },
                Task {
                    task_type: 5,
                    payload: vec![1, 1, 10, 0, 0, 0],
                },
                Task {
                    task_type: 8,
                    payload: vec![1, 0],
                },
                Task {
                    task_type: 3,
                    payload: vec![1, 1],
                },
            ],
            units_killed: 28,
            units_lost: 32,
            tribes_destroyed: 1,
            override_color: [153, 0, 255, 255],
            override_tribe: 0,
            unique_improvements: vec![27],
            diplomacy,
            diplomacy_messages: Vec::new(),
            destroyed_by: 0,
            destroyed_turn: 0,
            unknown_buffer2: [255; 4],
            end_score: -1,
            skin: 0,
            unknown_buffer3: [255; 4],
        }
    }

    #[test]
    fn test_decode_player() {
        let mut reader = Reader::new(&PLAYER_DATA);
        let actual = Player::decode(&mut reader).unwrap();
        assert_eq!(actual, player());
        assert!(reader.is_empty());
    }

    #[test]
    fn test_encode_player() {
        assert_eq!(player().to_bytes().unwrap(), PLAYER_DATA.to_vec());
    }

    #[test]
    fn test_encode_empty_player() {
        let player = Player::empty(17, "Player17", Rgba::new(100, 150, 200, 255)).unwrap();
        assert_eq!(player.aggressions.len(), 18);
        assert_eq!(player.aggressions.last().map(|x| x.player_id), Some(255));
        assert_eq!(player.to_bytes().unwrap(), EMPTY_PLAYER_DATA.to_vec());
    }

    #[test]
    fn test_empty_player_seat_limit() {
        assert!(Player::empty(253, "Player253", Rgba::default()).is_ok());
        let err = Player::empty(254, "Player254", Rgba::default()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.to_string().contains("Over 255 players"));
    }

    #[test]
    fn test_empty_player_zero_index() {
        let player = Player::empty(0, "Nobody", Rgba::default()).unwrap();
        assert_eq!(
            player.aggressions,
            vec![Aggression {
                player_id: 255,
                aggression: 0
            }]
        );
    }

    #[rstest]
    #[case(1, Some(6))]
    #[case(2, Some(2))]
    #[case(4, Some(2))]
    #[case(5, Some(6))]
    #[case(6, Some(2))]
    #[case(8, Some(2))]
    #[case(0, None)]
    #[case(9, None)]
    fn test_task_payload_len(#[case] task_type: u16, #[case] expected: Option<usize>) {
        assert_eq!(Task::payload_len(task_type), expected);
    }

    #[test]
    fn test_unknown_task_type() {
        // first task of the fixture retyped as 9
        let task_offset = 199;
        let mut data = PLAYER_DATA;
        assert_eq!(&data[task_offset..task_offset + 2], &[6, 0]);
        data[task_offset] = 9;

        let err = Player::from_slice(&data).unwrap_err();
        assert_eq!(err.offset(), Some(task_offset));
        assert!(matches!(
            err.kind(),
            ErrorKind::UnknownTaskType { task_type: 9, .. }
        ));
        assert!(err.to_string().contains("Invalid task type: 9"));
    }

    #[test]
    fn test_task_payload_mismatch() {
        let mut input = player();
        input.tasks[1].payload.pop();
        let err = input.to_bytes().unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::TaskPayloadMismatch {
                task_type: 5,
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_diplomacy_entry_width() {
        let mut writer = Writer::new();
        relation(3, 21, 7, 21).encode(&mut writer);
        assert_eq!(writer.position(), Diplomacy::SIZE);
    }

    #[test]
    fn test_diplomacy_messages_round_trip() {
        let input = Player {
            diplomacy_messages: vec![
                DiplomacyMessage {
                    message_type: 2,
                    sender: 4,
                },
                DiplomacyMessage {
                    message_type: 1,
                    sender: 9,
                },
            ],
            ..player()
        };

        let data = input.to_bytes().unwrap();
        assert_eq!(data.len(), PLAYER_DATA.len() + 4);
        assert_eq!(Player::from_slice(&data).unwrap(), input);
    }
}
