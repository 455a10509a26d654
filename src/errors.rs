use std::fmt;

/// An error that can occur when decoding or encoding save data
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Consume the error and return the specific type of error
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns the byte offset that the error occurs (if available)
    pub fn offset(&self) -> Option<usize> {
        self.0.offset()
    }

    /// Returns the broad class of failure
    pub fn category(&self) -> ErrorCategory {
        self.0.category()
    }
}

/// Broad class of an error.
///
/// Every class except [`ErrorCategory::Config`] means the remainder of the
/// input can't be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The compressed envelope is unreadable
    MalformedContainer,

    /// Decoded tile coordinates disagree with the grid position
    Desync,

    /// A structural invariant of the format was violated
    InvariantViolation,

    /// A read would run past the end of the buffer
    OutOfBounds,

    /// The caller asked for something the format can't represent
    Config,
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// Not enough data left to read the requested width
    OutOfBounds {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// The container header's size selector isn't a known width
    MalformedContainer { selector: u8 },

    /// The LZ4 payload didn't decompress to the length the header promised
    Decompress {
        expected: usize,
        source: Option<lz4_flex::block::DecompressError>,
    },

    /// Tile coordinates don't match the position being decoded
    Desync {
        offset: usize,
        expected_x: u32,
        expected_y: u32,
        found_x: u32,
        found_y: u32,
    },

    /// A passenger unit declared a unit of its own
    InvalidPassengerFlag { offset: usize, value: u8 },

    /// A presence flag held something other than 0 or 1
    InvalidPresenceFlag { offset: usize, value: u8 },

    /// A player task type outside of 1 through 8
    UnknownTaskType { offset: usize, task_type: u16 },

    /// A task payload length doesn't agree with its type
    TaskPayloadMismatch {
        task_type: u16,
        expected: usize,
        found: usize,
    },

    /// A length prefixed string wasn't valid UTF-8
    InvalidString { offset: usize },

    /// A string or list is too long for its count field
    LengthOverflow {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Tile grid dimensions disagree with the map header
    GridMismatch {
        width: u16,
        height: u16,
        tiles: usize,
    },

    /// Bytes remained after both game states were decoded
    TrailingData { offset: usize, remaining: usize },

    /// Player seats are limited to indices below 254
    SeatIndex { index: u8 },

    /// JSON mirror failure
    #[cfg(feature = "json")]
    Json(serde_json::Error),
}

impl ErrorKind {
    pub fn offset(&self) -> Option<usize> {
        match *self {
            ErrorKind::OutOfBounds { offset, .. } => Some(offset),
            ErrorKind::Desync { offset, .. } => Some(offset),
            ErrorKind::InvalidPassengerFlag { offset, .. } => Some(offset),
            ErrorKind::InvalidPresenceFlag { offset, .. } => Some(offset),
            ErrorKind::UnknownTaskType { offset, .. } => Some(offset),
            ErrorKind::InvalidString { offset } => Some(offset),
            ErrorKind::TrailingData { offset, .. } => Some(offset),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match *self {
            ErrorKind::OutOfBounds { .. } => ErrorCategory::OutOfBounds,
            ErrorKind::MalformedContainer { .. } | ErrorKind::Decompress { .. } => {
                ErrorCategory::MalformedContainer
            }
            ErrorKind::Desync { .. } => ErrorCategory::Desync,
            ErrorKind::SeatIndex { .. } => ErrorCategory::Config,
            _ => ErrorCategory::InvariantViolation,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::Decompress {
                source: Some(ref err),
                ..
            } => Some(err),
            #[cfg(feature = "json")]
            ErrorKind::Json(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::OutOfBounds {
                offset,
                requested,
                remaining,
            } => write!(
                f,
                "unexpected end of data (offset: {}, requested: {}, remaining: {})",
                offset, requested, remaining
            ),
            ErrorKind::MalformedContainer { selector } => write!(
                f,
                "Header sizeOfDiff is unrecognized value: {}",
                selector
            ),
            ErrorKind::Decompress { expected, ref source } => match source {
                Some(err) => write!(f, "unable to decompress {} bytes: {}", expected, err),
                None => write!(f, "decompressed length does not match expected {}", expected),
            },
            ErrorKind::Desync {
                offset,
                expected_x,
                expected_y,
                found_x,
                found_y,
            } => write!(
                f,
                "File reached unexpected location. Iteration ({}, {}) isn't equal to world coordinates ({}, {}) (offset: {})",
                expected_y, expected_x, found_x, found_y, offset
            ),
            ErrorKind::InvalidPassengerFlag { offset, value } => write!(
                f,
                "Passenger unit's other unit flag isn't zero (value: {}, offset: {})",
                value, offset
            ),
            ErrorKind::InvalidPresenceFlag { offset, value } => write!(
                f,
                "presence flag must be 0 or 1 (value: {}, offset: {})",
                value, offset
            ),
            ErrorKind::UnknownTaskType { offset, task_type } => {
                write!(f, "Invalid task type: {} (offset: {})", task_type, offset)
            }
            ErrorKind::TaskPayloadMismatch {
                task_type,
                expected,
                found,
            } => write!(
                f,
                "task type {} carries {} bytes but payload has {}",
                task_type, expected, found
            ),
            ErrorKind::InvalidString { offset } => {
                write!(f, "string is not valid utf-8 (offset: {})", offset)
            }
            ErrorKind::LengthOverflow { field, len, max } => write!(
                f,
                "{} has {} entries which exceeds the maximum of {}",
                field, len, max
            ),
            ErrorKind::GridMismatch {
                width,
                height,
                tiles,
            } => write!(
                f,
                "map header declares {}x{} tiles but grid holds {}",
                width, height, tiles
            ),
            ErrorKind::TrailingData { offset, remaining } => write!(
                f,
                "{} bytes remain after the current game state (offset: {})",
                remaining, offset
            ),
            ErrorKind::SeatIndex { index } => {
                write!(f, "Over 255 players (seat index: {})", index)
            }
            #[cfg(feature = "json")]
            ErrorKind::Json(ref err) => write!(f, "json error: {}", err),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(ErrorKind::Json(error))
    }
}
