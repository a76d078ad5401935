//! Length-reporting decorator.
//!
//! [`SizedInput`] pairs any [`SeekableDataInput`] with a length supplied by the
//! caller, typically taken from a container header or a file-system stat, so code
//! that validates offsets against the extent of a stream can work with sources that
//! cannot report it themselves.
//!
//! The length is trusted. It is never compared against the inner source, and reads
//! stay governed by the inner source's own bounds: a wrong length gives wrong
//! [`SizedSeekableDataInput::length`] answers and nothing else.
//!
//! # Examples
//!
//! ```rust
//! use seekio::input::{
//!     memory::InMemory, sized::SizedInput, SeekableDataInput, SizedSeekableDataInput,
//! };
//!
//! let mut input = SizedInput::new(InMemory::new(vec![0x00, 0x00, 0x00, 0x10]), 4);
//! let offset = input.read_i32()?;
//! assert!(i64::from(offset) > input.length());
//! # Ok::<(), seekio::Error>(())
//! ```

use super::{
    value::{PrimitiveKind, Value},
    SeekableDataInput, SeekableInput, SizedSeekableDataInput,
};
use crate::Result;

/// Decorator attaching a fixed, caller-asserted length to a source.
///
/// Every operation is forwarded to the wrapped source unchanged, so overrides the
/// inner source makes (for example [`crate::input::memory::InMemory`]'s in-place
/// decoding) stay in effect.
#[derive(Debug, Clone)]
pub struct SizedInput<D> {
    inner: D,
    length: i64,
}

impl<D: SeekableDataInput> SizedInput<D> {
    /// Wraps `inner`, reporting `length` from [`SizedSeekableDataInput::length`].
    ///
    /// ## Arguments
    /// * 'inner'  - The source to forward to
    /// * 'length' - The total length to report
    #[must_use]
    pub fn new(inner: D, length: i64) -> Self {
        SizedInput { inner, length }
    }

    /// Returns a reference to the wrapped source.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped source.
    ///
    /// Moving the cursor through this reference is visible to the decorator.
    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.inner
    }

    /// Discards the length and returns the wrapped source.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: SeekableDataInput> SeekableInput for SizedInput<D> {
    fn seek(&mut self, position: u64) -> Result<()> {
        self.inner.seek(position)
    }

    fn pos(&mut self) -> Result<u64> {
        self.inner.pos()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }
}

impl<D: SeekableDataInput> SeekableDataInput for SizedInput<D> {
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        self.inner.read(buf)
    }

    fn skip(&mut self, n: i64) -> Result<i64> {
        self.inner.skip(n)
    }

    fn read_fully(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_fully(buf)
    }

    fn read_i8(&mut self) -> Result<i8> {
        self.inner.read_i8()
    }

    fn read_i16(&mut self) -> Result<i16> {
        self.inner.read_i16()
    }

    fn read_i32(&mut self) -> Result<i32> {
        self.inner.read_i32()
    }

    fn read_i64(&mut self) -> Result<i64> {
        self.inner.read_i64()
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.inner.read_u8()
    }

    fn read_u16(&mut self) -> Result<u16> {
        self.inner.read_u16()
    }

    fn read_char(&mut self) -> Result<u16> {
        self.inner.read_char()
    }

    fn read_bool(&mut self) -> Result<bool> {
        self.inner.read_bool()
    }

    fn read_f32(&mut self) -> Result<f32> {
        self.inner.read_f32()
    }

    fn read_f64(&mut self) -> Result<f64> {
        self.inner.read_f64()
    }

    fn read_line(&mut self) -> Result<String> {
        self.inner.read_line()
    }

    fn read_utf(&mut self) -> Result<String> {
        self.inner.read_utf()
    }

    fn read_value(&mut self, kind: PrimitiveKind) -> Result<Value> {
        self.inner.read_value(kind)
    }
}

impl<D: SeekableDataInput> SizedSeekableDataInput for SizedInput<D> {
    fn length(&self) -> i64 {
        self.length
    }
}
