use crate::{Error, ErrorKind};
use std::io::Write;

/// Width of the size difference field that follows the marker byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeFieldWidth {
    /// two byte field, marker `0x80`
    Short,

    /// four byte field, marker `0xC0`
    Long,
}

impl SizeFieldWidth {
    /// Payloads that decompress to at least this many bytes use a long field
    pub const LONG_THRESHOLD: usize = 65536;

    /// Selects the width from the top two bits of the marker byte
    pub fn from_marker(marker: u8) -> Result<Self, Error> {
        match marker >> 6 {
            0b10 => Ok(SizeFieldWidth::Short),
            0b11 => Ok(SizeFieldWidth::Long),
            selector => Err(Error::new(ErrorKind::MalformedContainer { selector })),
        }
    }

    /// The width needed to describe a payload of the given decompressed length
    pub fn for_decompressed_len(len: usize) -> Self {
        if len >= Self::LONG_THRESHOLD {
            SizeFieldWidth::Long
        } else {
            SizeFieldWidth::Short
        }
    }

    pub fn marker(&self) -> u8 {
        match self {
            SizeFieldWidth::Short => 0x80,
            SizeFieldWidth::Long => 0xC0,
        }
    }

    /// Number of bytes in the size difference field
    pub fn field_len(&self) -> usize {
        match self {
            SizeFieldWidth::Short => 2,
            SizeFieldWidth::Long => 4,
        }
    }

    fn mask(&self) -> u32 {
        match self {
            SizeFieldWidth::Short => u32::from(u16::MAX),
            SizeFieldWidth::Long => u32::MAX,
        }
    }
}

/// The marker byte and size difference at the start of a compressed save
///
/// The size difference is `decompressed - compressed` truncated to the field
/// width. A payload that grew under compression stores the wrapped
/// difference, which decodes to a length larger than the real output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    width: SizeFieldWidth,
    size_difference: u32,
}

impl ContainerHeader {
    /// Creates the header describing a compressed payload
    pub fn new(decompressed_len: usize, compressed_len: usize) -> Self {
        let width = SizeFieldWidth::for_decompressed_len(decompressed_len);
        let size_difference =
            (decompressed_len as u32).wrapping_sub(compressed_len as u32) & width.mask();
        ContainerHeader {
            width,
            size_difference,
        }
    }

    /// Parses the header from the start of a compressed save
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        let (&marker, rest) = data.split_first().ok_or_else(|| {
            Error::new(ErrorKind::OutOfBounds {
                offset: 0,
                requested: 1,
                remaining: 0,
            })
        })?;

        let width = SizeFieldWidth::from_marker(marker)?;
        let size_difference = match width {
            SizeFieldWidth::Short => rest
                .first_chunk::<2>()
                .map(|x| u32::from(u16::from_le_bytes(*x))),
            SizeFieldWidth::Long => rest.first_chunk::<4>().map(|x| u32::from_le_bytes(*x)),
        }
        .ok_or_else(|| {
            Error::new(ErrorKind::OutOfBounds {
                offset: 1,
                requested: width.field_len(),
                remaining: rest.len(),
            })
        })?;

        Ok(ContainerHeader {
            width,
            size_difference,
        })
    }

    pub fn width(&self) -> SizeFieldWidth {
        self.width
    }

    pub fn size_difference(&self) -> u32 {
        self.size_difference
    }

    /// Length of the marker plus the size difference field
    pub fn header_len(&self) -> usize {
        1 + self.width.field_len()
    }

    /// The decompressed length claimed for a file of the given length
    ///
    /// This is the payload length plus the size difference. The block may
    /// decompress to fewer bytes, in which case the shorter output is used.
    pub fn decompressed_len(&self, file_len: usize) -> usize {
        let payload_len = file_len.saturating_sub(self.header_len());
        payload_len.saturating_add(self.size_difference as usize)
    }

    /// The header in its on-disk layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.header_len());
        out.push(self.width.marker());
        match self.width {
            SizeFieldWidth::Short => {
                out.extend_from_slice(&(self.size_difference as u16).to_le_bytes())
            }
            SizeFieldWidth::Long => out.extend_from_slice(&self.size_difference.to_le_bytes()),
        }
        out
    }

    /// Writes the header in its on-disk layout
    pub fn write<W>(&self, mut writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        writer.write_all(&self.to_bytes())
    }
}
