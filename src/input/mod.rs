//! Seekable, position-tracked decoding of big-endian primitives.
//!
//! This module defines the capability contract every byte source satisfies and the
//! decoding algorithms derived from it. A source only has to know how to move its
//! cursor and how to copy a range of bytes; everything else (exact-length reads,
//! integer assembly, float reinterpretation, skipping) is provided here once.
//!
//! # Architecture
//!
//! - [`SeekableInput`] - cursor control: `seek`, `pos`, `close`
//! - [`SeekableDataInput`] - the raw ranged `read` plus every provided decode method
//! - [`SizedSeekableDataInput`] - a source that also reports a logical length
//!
//! ## Sources
//! - [`memory::InMemory`] - owned byte buffer with a permissive-seek, strict-read policy
//! - [`stream::StreamInput`] - adapter over any `std::io::Read + Seek` transport
//! - [`sized::SizedInput`] - decorator attaching a caller-supplied length to any source
//!
//! ## Codec
//! - [`io`] - the [`io::BigEndian`] trait and bounds-checked slice helpers
//! - [`value`] - [`value::PrimitiveKind`] and [`value::Value`] for table-driven decoding
//!
//! # Partial and exact reads
//!
//! [`SeekableDataInput::read`] may return fewer bytes than requested even when more
//! data follows, and reports end of data as `Ok(None)`. Callers that need an exact
//! amount use [`SeekableDataInput::read_fully`], which loops over `read` and fails
//! with [`crate::Error::Eof`] if the data runs out. Every fixed-width primitive is
//! built on the exact form.
//!
//! # Examples
//!
//! ```rust
//! use seekio::input::{memory::InMemory, SeekableDataInput, SeekableInput};
//!
//! let mut input = InMemory::new(vec![0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x05]);
//! assert_eq!(input.read_i32()?, 1);
//! assert_eq!(input.pos()?, 4);
//! assert_eq!(input.read_i32()?, 5);
//! assert!(matches!(input.read_i8(), Err(seekio::Error::Eof)));
//! # Ok::<(), seekio::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! Sources are not synchronized. The cursor is exclusive mutable state, which is why
//! every operation takes `&mut self`; share a source between threads only behind
//! external locking, or give each thread its own source.

pub mod io;
pub mod memory;
pub mod sized;
pub mod stream;
pub mod value;

use crate::{Error, Result};
use io::BigEndian;
use value::{PrimitiveKind, Value};

/// Cursor control for a seekable byte source.
pub trait SeekableInput {
    /// Moves the cursor to the absolute offset `position`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `position` is outside the range
    /// the backing storage can address. Whether positions past the end of the data
    /// are accepted is up to the implementation.
    fn seek(&mut self, position: u64) -> Result<()>;

    /// Returns the current absolute cursor offset.
    ///
    /// # Errors
    /// Only transport-backed sources can fail here.
    fn pos(&mut self) -> Result<u64>;

    /// Releases the backing resource.
    ///
    /// Calling `close` more than once is allowed and does nothing after the first
    /// call. Sources that hold no external resource treat it as a no-op.
    ///
    /// # Errors
    /// Propagates a failure reported by the transport while releasing it.
    fn close(&mut self) -> Result<()>;
}

/// Positioned decoding of big-endian primitives.
///
/// Implementors provide [`SeekableDataInput::read`]; the rest is derived. The four
/// width primitives ([`read_i8`](Self::read_i8), [`read_i16`](Self::read_i16),
/// [`read_i32`](Self::read_i32), [`read_i64`](Self::read_i64)) may be overridden by
/// sources that can decode in place, and every other primitive is defined in terms
/// of them.
pub trait SeekableDataInput: SeekableInput {
    /// Copies up to `buf.len()` bytes from the cursor into `buf` and advances the
    /// cursor by the number copied.
    ///
    /// Returns `Ok(Some(count))` when bytes were copied; `count` may be smaller than
    /// `buf.len()`. Returns `Ok(None)` when the cursor is at or past the end of the
    /// data.
    ///
    /// An empty `buf` copies nothing. Whether it reports `Some(0)` or `None` at the
    /// end of the data depends on the source: [`memory::InMemory`] knows its extent
    /// and answers `None`, [`stream::StreamInput`] cannot tell without reading and
    /// answers `Some(0)`.
    ///
    /// # Errors
    /// Only transport failures. Running out of data is never an error here.
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>>;

    /// Moves the cursor `n` bytes relative to its current position and returns `n`.
    ///
    /// Equivalent to `seek(pos() + n)`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if the target would be negative or
    /// overflow, or whatever `seek` returns for the target.
    fn skip(&mut self, n: i64) -> Result<i64> {
        let position = self.pos()?;
        let Some(target) = position.checked_add_signed(n) else {
            return Err(invalid_argument!(
                "cannot skip {} bytes from position {}",
                n,
                position
            ));
        };

        self.seek(target)?;
        Ok(n)
    }

    /// Fills `buf` completely, calling [`read`](Self::read) as many times as needed.
    ///
    /// To fill a sub-range, pass `&mut buf[offset..offset + length]`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if the data ends before `buf` is full. Bytes
    /// read up to that point are consumed.
    fn read_fully(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..])? {
                Some(count) if count > 0 => filled += count,
                // a zero-length read on a non-empty request would never make progress
                _ => return Err(Error::Eof),
            }
        }

        Ok(())
    }

    /// Reads any [`BigEndian`] primitive.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than `size_of::<T>()` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekio::input::{memory::InMemory, SeekableDataInput};
    ///
    /// let mut input = InMemory::new(vec![0xFF, 0xFE, 0x00, 0x00, 0x00, 0x2A]);
    /// assert_eq!(input.read_be::<u16>()?, 0xFFFE);
    /// assert_eq!(input.read_be::<u32>()?, 42);
    /// # Ok::<(), seekio::Error>(())
    /// ```
    fn read_be<T: BigEndian>(&mut self) -> Result<T>
    where
        Self: Sized,
    {
        decode(self)
    }

    /// Reads one signed byte.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] at the end of data.
    fn read_i8(&mut self) -> Result<i8> {
        decode(self)
    }

    /// Reads a big-endian 16-bit signed integer.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than 2 bytes remain.
    fn read_i16(&mut self) -> Result<i16> {
        decode(self)
    }

    /// Reads a big-endian 32-bit signed integer.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than 4 bytes remain.
    fn read_i32(&mut self) -> Result<i32> {
        decode(self)
    }

    /// Reads a big-endian 64-bit signed integer.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than 8 bytes remain.
    fn read_i64(&mut self) -> Result<i64> {
        decode(self)
    }

    /// Reads one byte as an unsigned value in `0..=255`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] at the end of data.
    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_i8()? as u8)
    }

    /// Reads a big-endian 16-bit value as unsigned, in `0..=65535`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than 2 bytes remain.
    fn read_u16(&mut self) -> Result<u16> {
        Ok(self.read_i16()? as u16)
    }

    /// Reads a big-endian UTF-16 code unit.
    ///
    /// The 16 bits are taken as-is; surrogates are not paired or validated.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than 2 bytes remain.
    fn read_char(&mut self) -> Result<u16> {
        Ok(self.read_i16()? as u16)
    }

    /// Reads one byte; any non-zero value is `true`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] at the end of data.
    fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_i8()? != 0)
    }

    /// Reads an IEEE-754 binary32 by reinterpreting the bits of [`read_i32`](Self::read_i32).
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than 4 bytes remain.
    fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_i32()? as u32))
    }

    /// Reads an IEEE-754 binary64 by reinterpreting the bits of [`read_i64`](Self::read_i64).
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than 8 bytes remain.
    fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_i64()? as u64))
    }

    /// Line decoding is not available on seekable inputs.
    ///
    /// # Errors
    /// Always returns [`crate::Error::NotSupported`].
    fn read_line(&mut self) -> Result<String> {
        Err(Error::NotSupported("read_line"))
    }

    /// Length-prefixed text decoding is not available on seekable inputs.
    ///
    /// # Errors
    /// Always returns [`crate::Error::NotSupported`].
    fn read_utf(&mut self) -> Result<String> {
        Err(Error::NotSupported("read_utf"))
    }

    /// Reads one primitive chosen at runtime.
    ///
    /// # Errors
    /// Returns [`crate::Error::Eof`] if fewer than `kind.width()` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekio::input::{memory::InMemory, value::{PrimitiveKind, Value}, SeekableDataInput};
    ///
    /// let mut input = InMemory::new(vec![0x01, 0xFF, 0xFF]);
    /// assert_eq!(input.read_value(PrimitiveKind::Boolean)?, Value::Boolean(true));
    /// assert_eq!(input.read_value(PrimitiveKind::UnsignedShort)?, Value::UnsignedShort(0xFFFF));
    /// # Ok::<(), seekio::Error>(())
    /// ```
    fn read_value(&mut self, kind: PrimitiveKind) -> Result<Value> {
        Ok(match kind {
            PrimitiveKind::Byte => Value::Byte(self.read_i8()?),
            PrimitiveKind::UnsignedByte => Value::UnsignedByte(self.read_u8()?),
            PrimitiveKind::Short => Value::Short(self.read_i16()?),
            PrimitiveKind::UnsignedShort => Value::UnsignedShort(self.read_u16()?),
            PrimitiveKind::Char => Value::Char(self.read_char()?),
            PrimitiveKind::Int => Value::Int(self.read_i32()?),
            PrimitiveKind::Long => Value::Long(self.read_i64()?),
            PrimitiveKind::Float => Value::Float(self.read_f32()?),
            PrimitiveKind::Double => Value::Double(self.read_f64()?),
            PrimitiveKind::Boolean => Value::Boolean(self.read_bool()?),
        })
    }
}

/// A source that knows its logical length.
pub trait SizedSeekableDataInput: SeekableDataInput {
    /// Total length of the source in bytes, as reported by the source.
    fn length(&self) -> i64;
}

/// Fills a `T::Bytes` scratch buffer through `read_fully` and assembles it big-endian.
fn decode<T: BigEndian, S: SeekableDataInput + ?Sized>(source: &mut S) -> Result<T> {
    let mut bytes = T::Bytes::default();
    source.read_fully(bytes.as_mut())?;
    Ok(T::from_be_bytes(bytes))
}

/// Forwards every operation through a pointer, keeping the pointee's overrides.
macro_rules! forward_through_pointer {
    ($($pointer:ty),* $(,)?) => {
        $(
            impl<T: SeekableInput + ?Sized> SeekableInput for $pointer {
                fn seek(&mut self, position: u64) -> Result<()> {
                    (**self).seek(position)
                }

                fn pos(&mut self) -> Result<u64> {
                    (**self).pos()
                }

                fn close(&mut self) -> Result<()> {
                    (**self).close()
                }
            }

            impl<T: SeekableDataInput + ?Sized> SeekableDataInput for $pointer {
                fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
                    (**self).read(buf)
                }

                fn skip(&mut self, n: i64) -> Result<i64> {
                    (**self).skip(n)
                }

                fn read_fully(&mut self, buf: &mut [u8]) -> Result<()> {
                    (**self).read_fully(buf)
                }

                fn read_i8(&mut self) -> Result<i8> {
                    (**self).read_i8()
                }

                fn read_i16(&mut self) -> Result<i16> {
                    (**self).read_i16()
                }

                fn read_i32(&mut self) -> Result<i32> {
                    (**self).read_i32()
                }

                fn read_i64(&mut self) -> Result<i64> {
                    (**self).read_i64()
                }

                fn read_u8(&mut self) -> Result<u8> {
                    (**self).read_u8()
                }

                fn read_u16(&mut self) -> Result<u16> {
                    (**self).read_u16()
                }

                fn read_char(&mut self) -> Result<u16> {
                    (**self).read_char()
                }

                fn read_bool(&mut self) -> Result<bool> {
                    (**self).read_bool()
                }

                fn read_f32(&mut self) -> Result<f32> {
                    (**self).read_f32()
                }

                fn read_f64(&mut self) -> Result<f64> {
                    (**self).read_f64()
                }

                fn read_line(&mut self) -> Result<String> {
                    (**self).read_line()
                }

                fn read_utf(&mut self) -> Result<String> {
                    (**self).read_utf()
                }

                fn read_value(&mut self, kind: PrimitiveKind) -> Result<Value> {
                    (**self).read_value(kind)
                }
            }

            impl<T: SizedSeekableDataInput + ?Sized> SizedSeekableDataInput for $pointer {
                fn length(&self) -> i64 {
                    (**self).length()
                }
            }
        )*
    };
}

forward_through_pointer!(Box<T>, &mut T);
