//! The compressed envelope around a save file
//!
//! ```text
//! byte 0        top two bits select the size difference width
//!               (0b10: two bytes, 0b11: four bytes)
//! bytes 1..=N   size difference, little endian
//! bytes N+1..   LZ4 block
//! ```
//!
//! The size difference is the decompressed length minus the compressed length,
//! which is all that's needed to size the output buffer up front. The output
//! is whatever the block decompresses to within that buffer.
//!
//! ```
//! use polysave::container;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = b"tribe tribe tribe tribe tribe tribe";
//! let compressed = container::compress(data);
//! assert_eq!(compressed[0], 0x80);
//! assert_eq!(container::decompress(&compressed)?, data.to_vec());
//! # Ok(())
//! # }
//! ```

mod header;

pub use header::*;

use crate::{Error, ErrorKind};
use log::debug;

const MAX_EXPANSION: usize = 255;

/// Decompresses a whole save file into the flat document buffer
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, Error> {
    let header = ContainerHeader::from_slice(data)?;
    let expected = header.decompressed_len(data.len());
    let payload = &data[header.header_len()..];
    debug!(
        "decompressing {} byte payload into {} bytes ({:?} size field)",
        payload.len(),
        expected,
        header.width()
    );

    // An LZ4 block can't expand past this, so don't let a corrupt or wrapped
    // size difference dictate the allocation
    let capacity = expected.min(
        payload
            .len()
            .saturating_mul(MAX_EXPANSION)
            .saturating_add(MAX_EXPANSION),
    );

    let mut result = vec![0u8; capacity];
    let written = lz4_flex::block::decompress_into(payload, &mut result).map_err(|e| {
        Error::new(ErrorKind::Decompress {
            expected,
            source: Some(e),
        })
    })?;

    if written < expected {
        debug!("block decompressed to {} of {} bytes", written, expected);
    }

    result.truncate(written);
    Ok(result)
}

/// Compresses a document buffer and prefixes the container header
pub fn compress(data: &[u8]) -> Vec<u8> {
    let compressed = lz4_flex::block::compress(data);
    let header = ContainerHeader::new(data.len(), compressed.len());
    debug!(
        "compressed {} bytes into {} ({:?} size field)",
        data.len(),
        compressed.len(),
        header.width()
    );

    let mut out = header.to_bytes();
    out.extend_from_slice(&compressed);
    out
}
