//! Big-endian codec for fixed-width primitives.
//!
//! Every multi-byte value handled by this crate is stored most significant byte
//! first. This module owns that contract: the [`BigEndian`] trait describes how a
//! primitive maps to and from its byte array, and the slice helpers below read or
//! write one value at a cursor with bounds checking.
//!
//! The helpers are what [`crate::input::memory::InMemory`] decodes with, and what
//! tests and benchmarks use to build fixtures.
//!
//! # Examples
//!
//! ```rust
//! use seekio::input::io::{read_be_at, write_be_at};
//!
//! let mut data = [0u8; 6];
//! let mut offset = 0;
//! write_be_at(&mut data, &mut offset, 1u16)?;
//! write_be_at(&mut data, &mut offset, 5i32)?;
//! assert_eq!(data, [0x00, 0x01, 0x00, 0x00, 0x00, 0x05]);
//!
//! offset = 0;
//! let first: u16 = read_be_at(&data, &mut offset)?;
//! let second: i32 = read_be_at(&data, &mut offset)?;
//! assert_eq!((first, second, offset), (1, 5, 6));
//! # Ok::<(), seekio::Error>(())
//! ```
//!
//! # Errors
//!
//! The slice helpers return [`crate::Error::Eof`] when fewer than
//! `size_of::<T>()` bytes remain after `offset`. The offset is left untouched on
//! failure.

use crate::{Error::Eof, Result};

/// A primitive that can be assembled from, and split into, big-endian bytes.
///
/// `Bytes` is the fixed-size array backing the value (`[u8; 4]` for `i32`). It is
/// `Default` so that readers can allocate a zeroed scratch buffer on the stack and
/// fill it through `AsMut<[u8]>`.
pub trait BigEndian: Sized + Copy {
    /// Byte array holding exactly one encoded value.
    type Bytes: Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Assemble a value, first byte most significant.
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Split a value, most significant byte first.
    fn to_be_bytes(self) -> Self::Bytes;
}

macro_rules! impl_big_endian {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BigEndian for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }
            }
        )*
    };
}

// f32/f64 go through `from_be_bytes`, which reinterprets the bits; no numeric cast.
impl_big_endian!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Reads a `T` from the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::Eof`] if `data` is shorter than `T`.
pub fn read_be<T: BigEndian>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_be_at(data, &mut offset)
}

/// Reads a `T` at `offset` and advances `offset` past it.
///
/// # Errors
/// Returns [`crate::Error::Eof`] if fewer than `size_of::<T>()` bytes remain,
/// in which case `offset` is not modified.
pub fn read_be_at<T: BigEndian>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(Eof);
    };
    if end > data.len() {
        return Err(Eof);
    }

    let mut bytes = T::Bytes::default();
    bytes.as_mut().copy_from_slice(&data[*offset..end]);
    *offset = end;

    Ok(T::from_be_bytes(bytes))
}

/// Writes `value` at the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::Eof`] if `data` is shorter than `T`.
pub fn write_be<T: BigEndian>(data: &mut [u8], value: T) -> Result<()> {
    let mut offset = 0_usize;
    write_be_at(data, &mut offset, value)
}

/// Writes `value` at `offset` and advances `offset` past it.
///
/// # Errors
/// Returns [`crate::Error::Eof`] if fewer than `size_of::<T>()` bytes remain,
/// in which case neither `data` nor `offset` is modified.
pub fn write_be_at<T: BigEndian>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(Eof);
    };
    if end > data.len() {
        return Err(Eof);
    }

    data[*offset..end].copy_from_slice(value.to_be_bytes().as_ref());
    *offset = end;

    Ok(())
}
