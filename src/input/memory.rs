//! In-memory byte source.
//!
//! [`InMemory`] owns a byte buffer and a cursor into it. Seeking is permissive and
//! reading is strict:
//!
//! - [`SeekableInput::seek`] accepts any position up to [`MAX_POSITION`], including
//!   positions past the end of the buffer.
//! - [`SeekableDataInput::read`] past the end reports `Ok(None)`; near the end it
//!   copies whatever is left.
//! - `read_fully` and every fixed-width primitive check the remaining length first
//!   and fail with [`crate::Error::Eof`] without moving the cursor.
//!
//! # Examples
//!
//! ```rust
//! use seekio::input::{memory::InMemory, SeekableDataInput, SeekableInput};
//!
//! let mut input = InMemory::new(vec![0x00, 0x2A, 0xFF]);
//! assert_eq!(input.read_u16()?, 42);
//!
//! let mut buf = [0u8; 4];
//! assert_eq!(input.read(&mut buf)?, Some(1));
//! assert_eq!(input.read(&mut buf)?, None);
//!
//! input.seek(0)?;
//! assert!(input.read_fully(&mut buf).is_err());
//! assert_eq!(input.pos()?, 0);
//! # Ok::<(), seekio::Error>(())
//! ```

use log::trace;

use super::{
    io::{read_be_at, BigEndian},
    SeekableDataInput, SeekableInput, SizedSeekableDataInput,
};
use crate::{Error, Error::Eof, Result};

/// Highest position an [`InMemory`] cursor may be moved to.
///
/// Slices are indexed by `usize` and no allocation may exceed `isize::MAX` bytes,
/// so this is the largest offset a buffer could ever contain.
pub const MAX_POSITION: u64 = isize::MAX as u64;

/// Byte source backed by an owned buffer.
#[derive(Debug, Clone, Default)]
pub struct InMemory {
    data: Vec<u8>,
    position: usize,
}

impl InMemory {
    /// Create a new in-memory source positioned at offset 0
    ///
    /// ## Arguments
    /// * 'data' - The data buffer to consume
    #[must_use]
    pub fn new(data: Vec<u8>) -> InMemory {
        InMemory { data, position: 0 }
    }

    /// Returns the size of the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes between the cursor and the end of the buffer; 0 once seeked past the end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Returns the entire buffer, independent of the cursor.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the source and hands back its buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    fn decode<T: BigEndian>(&mut self) -> Result<T> {
        read_be_at(&self.data, &mut self.position)
    }
}

impl From<Vec<u8>> for InMemory {
    fn from(data: Vec<u8>) -> Self {
        InMemory::new(data)
    }
}

impl From<&[u8]> for InMemory {
    fn from(data: &[u8]) -> Self {
        InMemory::new(data.to_vec())
    }
}

fn to_index(position: u64) -> Result<usize> {
    if position > MAX_POSITION {
        return Err(illegal_position(position));
    }

    usize::try_from(position).map_err(|_| illegal_position(position))
}

fn illegal_position(position: u64) -> Error {
    invalid_argument!(
        "position for InMemory may not exceed {}: {}",
        MAX_POSITION,
        position
    )
}

impl SeekableInput for InMemory {
    fn seek(&mut self, position: u64) -> Result<()> {
        let index = to_index(position)?;
        if index > self.data.len() {
            trace!(
                "seek to {} is past the end of a {} byte buffer",
                index,
                self.data.len()
            );
        }

        self.position = index;
        Ok(())
    }

    fn pos(&mut self) -> Result<u64> {
        Ok(self.position as u64)
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl SeekableDataInput for InMemory {
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        let remaining = self.remaining();
        if remaining == 0 {
            return Ok(None);
        }

        let count = remaining.min(buf.len());
        let end = self.position + count;
        buf[..count].copy_from_slice(&self.data[self.position..end]);
        self.position = end;

        Ok(Some(count))
    }

    fn read_fully(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.len() > self.remaining() {
            return Err(Eof);
        }

        let end = self.position + buf.len();
        buf.copy_from_slice(&self.data[self.position..end]);
        self.position = end;

        Ok(())
    }

    fn read_i8(&mut self) -> Result<i8> {
        self.decode()
    }

    fn read_i16(&mut self) -> Result<i16> {
        self.decode()
    }

    fn read_i32(&mut self) -> Result<i32> {
        self.decode()
    }

    fn read_i64(&mut self) -> Result<i64> {
        self.decode()
    }
}

impl SizedSeekableDataInput for InMemory {
    fn length(&self) -> i64 {
        i64::try_from(self.data.len()).unwrap_or(i64::MAX)
    }
}
