use crate::{Error, ErrorKind};

/// Appends little endian values to a single growable buffer
#[derive(Debug, Default, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}

#[inline]
fn checked_len(field: &'static str, len: usize, max: usize) -> Result<usize, Error> {
    if len > max {
        Err(Error::new(ErrorKind::LengthOverflow { field, len, max }))
    } else {
        Ok(len)
    }
}

impl Writer {
    pub fn new() -> Self {
        Writer { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Writer {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far
    #[inline]
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Get the written data, keeping ownership
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes this writer, returning the written data
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    #[inline]
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    #[inline]
    pub fn write_u8(&mut self, x: u8) {
        self.buf.push(x);
    }

    #[inline]
    pub fn write_i8(&mut self, x: i8) {
        self.write_bytes(&x.to_le_bytes());
    }

    #[inline]
    pub fn write_u16(&mut self, x: u16) {
        self.write_bytes(&x.to_le_bytes());
    }

    #[inline]
    pub fn write_i16(&mut self, x: i16) {
        self.write_bytes(&x.to_le_bytes());
    }

    #[inline]
    pub fn write_u32(&mut self, x: u32) {
        self.write_bytes(&x.to_le_bytes());
    }

    #[inline]
    pub fn write_i32(&mut self, x: i32) {
        self.write_bytes(&x.to_le_bytes());
    }

    #[inline]
    pub fn write_f32(&mut self, x: f32) {
        self.write_bytes(&x.to_le_bytes());
    }

    #[inline]
    pub fn write_bool(&mut self, x: bool) {
        self.write_u8(u8::from(x));
    }

    /// Write a two byte count, failing when `len` doesn't fit
    #[inline]
    pub fn write_len_u16(&mut self, len: usize, field: &'static str) -> Result<(), Error> {
        let len = checked_len(field, len, usize::from(u16::MAX))?;
        self.write_u16(len as u16);
        Ok(())
    }

    /// Write a four byte count, failing when `len` doesn't fit
    #[inline]
    pub fn write_len_u32(&mut self, len: usize, field: &'static str) -> Result<(), Error> {
        let len = checked_len(field, len, u32::MAX as usize)?;
        self.write_u32(len as u32);
        Ok(())
    }

    /// Write a string prefixed with its single byte length
    pub fn write_string(&mut self, value: &str, field: &'static str) -> Result<(), Error> {
        let len = checked_len(field, value.len(), usize::from(u8::MAX))?;
        self.write_u8(len as u8);
        self.write_bytes(value.as_bytes());
        Ok(())
    }

    /// Write bytes prefixed with a single byte count
    pub fn write_byte_list_u8(&mut self, data: &[u8], field: &'static str) -> Result<(), Error> {
        let len = checked_len(field, data.len(), usize::from(u8::MAX))?;
        self.write_u8(len as u8);
        self.write_bytes(data);
        Ok(())
    }

    /// Write bytes prefixed with a two byte count
    pub fn write_byte_list_u16(&mut self, data: &[u8], field: &'static str) -> Result<(), Error> {
        self.write_len_u16(data.len(), field)?;
        self.write_bytes(data);
        Ok(())
    }

    /// Write two byte values prefixed with a two byte count
    pub fn write_u16_list(&mut self, data: &[u16], field: &'static str) -> Result<(), Error> {
        self.write_len_u16(data.len(), field)?;
        for &x in data {
            self.write_u16(x);
        }
        Ok(())
    }
}
