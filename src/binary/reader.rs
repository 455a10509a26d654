use crate::{Error, ErrorKind};

#[inline]
fn get_split<const N: usize>(data: &[u8]) -> Option<([u8; N], &[u8])> {
    data.split_first_chunk::<N>()
        .map(|(head, rest)| (*head, rest))
}

/// A forward only cursor over a byte slice
///
/// Offsets reported in errors are relative to the slice the reader was
/// created with.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    original_length: usize,
}

impl<'a> Reader<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            original_length: data.len(),
        }
    }

    /// Data that has yet to be read
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        self.data
    }

    /// Number of bytes consumed so far
    #[inline]
    pub fn position(&self) -> usize {
        self.original_length - self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn eof(&self, requested: usize) -> Error {
        Error::new(ErrorKind::OutOfBounds {
            offset: self.position(),
            requested,
            remaining: self.data.len(),
        })
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let (head, rest) = get_split::<N>(self.data).ok_or_else(|| self.eof(N))?;
        self.data = rest;
        Ok(head)
    }

    /// Borrow the next `len` bytes
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if len > self.data.len() {
            return Err(self.eof(len));
        }

        let (head, rest) = self.data.split_at(len);
        self.data = rest;
        Ok(head)
    }

    #[inline]
    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.read_bytes(len).map(|_| ())
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let (&first, rest) = self.data.split_first().ok_or_else(|| self.eof(1))?;
        self.data = rest;
        Ok(first)
    }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8, Error> {
        self.read_array::<1>().map(i8::from_le_bytes)
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        self.read_array::<2>().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn read_i16(&mut self) -> Result<i16, Error> {
        self.read_array::<2>().map(i16::from_le_bytes)
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_i32(&mut self) -> Result<i32, Error> {
        self.read_array::<4>().map(i32::from_le_bytes)
    }

    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, Error> {
        self.read_array::<4>().map(f32::from_le_bytes)
    }

    /// A byte where any non-zero value is true
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        self.read_u8().map(|x| x != 0)
    }

    /// A byte announcing whether an optional structure follows.
    ///
    /// Anything but 0 or 1 is rejected: it can't be written back unchanged.
    #[inline]
    pub fn read_presence(&mut self) -> Result<bool, Error> {
        let offset = self.position();
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(Error::new(ErrorKind::InvalidPresenceFlag { offset, value })),
        }
    }

    /// A string prefixed by a single byte length
    #[inline]
    pub fn read_string(&mut self) -> Result<String, Error> {
        let len = usize::from(self.read_u8()?);
        let offset = self.position();
        let data = self.read_bytes(len)?;
        std::str::from_utf8(data)
            .map(String::from)
            .map_err(|_| Error::new(ErrorKind::InvalidString { offset }))
    }

    /// Bytes prefixed by a single byte count
    #[inline]
    pub fn read_byte_list_u8(&mut self) -> Result<Vec<u8>, Error> {
        let len = usize::from(self.read_u8()?);
        self.read_bytes(len).map(<[u8]>::to_vec)
    }

    /// Bytes prefixed by a two byte count
    #[inline]
    pub fn read_byte_list_u16(&mut self) -> Result<Vec<u8>, Error> {
        let len = usize::from(self.read_u16()?);
        self.read_bytes(len).map(<[u8]>::to_vec)
    }

    /// Two byte values prefixed by a two byte count
    #[inline]
    pub fn read_u16_list(&mut self) -> Result<Vec<u16>, Error> {
        let len = self.read_u16()?;
        self.read_list(usize::from(len), Reader::read_u16)
    }

    /// Read `count` elements with the given element decoder
    #[inline]
    pub fn read_list<T, F>(&mut self, count: usize, mut f: F) -> Result<Vec<T>, Error>
    where
        F: FnMut(&mut Self) -> Result<T, Error>,
    {
        // Counts come straight from the input so don't let them size the allocation
        let mut result = Vec::with_capacity(count.min(self.data.len()));
        for _ in 0..count {
            result.push(f(self)?);
        }
        Ok(result)
    }
}
