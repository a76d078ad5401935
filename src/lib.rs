// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # seekio
//!
//! Random-access, position-tracked decoding of big-endian binary primitives from any
//! byte source that can seek.
//!
//! A source implements four primitives (a possibly-partial ranged `read`, absolute
//! `seek`, `pos`, and `close`) and inherits the complete decode set: exact-length
//! reads, signed and unsigned integers, UTF-16 code units, booleans, and IEEE-754
//! floats by bit reinterpretation.
//!
//! ## Quick Start
//!
//! ```rust
//! use seekio::prelude::*;
//!
//! let mut input = InMemory::new(vec![0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x05]);
//! assert_eq!(input.read_i32()?, 1);
//! assert_eq!(input.pos()?, 4);
//!
//! input.skip(2)?;
//! assert_eq!(input.read_u16()?, 5);
//! # Ok::<(), seekio::Error>(())
//! ```
//!
//! ## Sources
//!
//! - [`input::memory::InMemory`] - an owned byte buffer
//! - [`input::stream::StreamInput`] - any `std::io::Read + Seek` transport
//! - [`input::sized::SizedInput`] - a decorator reporting a caller-supplied length
//!
//! ## Encoding
//!
//! Every multi-byte value is big-endian. Booleans are one byte, non-zero meaning
//! `true`. There is no framing, checksum or versioning at this layer, and text
//! decoding is rejected with [`Error::NotSupported`].
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result`]. Running out of data on an exact read is
//! [`Error::Eof`]; an unaddressable seek target is [`Error::InvalidArgument`];
//! transport failures arrive unchanged as [`Error::Io`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger. Seeks past
//! the end of an in-memory buffer are reported at `trace`, closing a transport at
//! `debug`.

#[macro_use]
pub(crate) mod error;

/// Capability traits, decoding layer and concrete sources.
pub mod input;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use seekio::prelude::*;
///
/// let mut input = SizedInput::new(InMemory::new(vec![0x01]), 1);
/// assert!(input.read_bool()?);
/// assert_eq!(input.length(), 1);
/// # Ok::<(), seekio::Error>(())
/// ```
pub mod prelude;

/// `seekio` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `seekio` Error type
///
/// # Examples
///
/// ```rust
/// use seekio::{Error, input::{memory::InMemory, SeekableInput}};
///
/// let mut input = InMemory::new(vec![]);
/// match input.seek(u64::MAX) {
///     Err(Error::InvalidArgument { message, .. }) => println!("rejected: {}", message),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub use error::Error;
