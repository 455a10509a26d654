//! Sequential little endian cursor over save data
//!
//! Every record codec in this crate is written against [`Reader`] and
//! [`Writer`]. A read consumes exactly the width of the value being read and a
//! write appends exactly that width, so a decoder and its encoder stay in
//! lockstep as long as they call the same methods in the same order.
//!
//! ```
//! use polysave::binary::{Reader, Writer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut writer = Writer::new();
//! writer.write_u16(300);
//! writer.write_string("Imperius", "name")?;
//!
//! let data = writer.into_inner();
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.read_u16()?, 300);
//! assert_eq!(reader.read_string()?, "Imperius");
//! assert!(reader.is_empty());
//! # Ok(())
//! # }
//! ```

mod reader;
mod writer;

pub use self::reader::Reader;
pub use self::writer::Writer;
