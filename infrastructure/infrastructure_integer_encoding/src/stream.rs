//! Byte Stream Module
//!
//! Minimal reader/writer seams between the codecs and the bytes on the wire.
//! The reader owns the read discipline: it hands out exactly the number of
//! bytes asked for and advances its position, or fails without consuming.

use entities_cbor_header::Header;

use crate::error::DecodeError;

/// Source of encoded bytes
pub trait ByteReader {
    /// Take exactly `len` bytes from the stream
    ///
    /// # Errors
    ///
    /// `DecodeError::BufferTooShort` if fewer than `len` bytes remain; the
    /// position is left unchanged in that case.
    fn read_exact(&mut self, len: usize) -> Result<&[u8], DecodeError>;

    /// Number of bytes consumed so far
    fn position(&self) -> usize;

    /// Number of bytes still available
    fn remaining(&self) -> usize;

    /// Read and validate one initial byte
    fn read_header(&mut self) -> Result<Header, DecodeError> {
        let byte = self.read_exact(1)?[0];
        Ok(Header::from_byte(byte)?)
    }
}

/// Sink for encoded bytes
pub trait ByteWriter {
    /// Append `bytes` to the sink
    fn write_bytes(&mut self, bytes: &[u8]);
}

impl ByteWriter for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Reader over an in-memory byte slice
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> SliceReader<'a> {
    /// Create a reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }
}

impl ByteReader for SliceReader<'_> {
    fn read_exact(&mut self, len: usize) -> Result<&[u8], DecodeError> {
        let available = self.remaining();
        if len > available {
            return Err(DecodeError::BufferTooShort {
                needed: len,
                available,
            });
        }
        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    fn position(&self) -> usize {
        self.position
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}
