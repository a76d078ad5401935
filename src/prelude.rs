//! # seekio Prelude
//!
//! Import this module to get the capability traits, every concrete source and the
//! error types in one line.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all seekio operations
pub use crate::Error;

/// The result type used throughout seekio
pub use crate::Result;

// ================================================================================================
// Capability Traits
// ================================================================================================

/// Cursor control, decoding layer and length reporting
pub use crate::input::{SeekableDataInput, SeekableInput, SizedSeekableDataInput};

// ================================================================================================
// Sources
// ================================================================================================

/// Concrete sources and the length decorator
pub use crate::input::{memory::InMemory, sized::SizedInput, stream::StreamInput};

// ================================================================================================
// Codec
// ================================================================================================

/// Big-endian codec and runtime primitive descriptions
pub use crate::input::{
    io::BigEndian,
    value::{PrimitiveKind, Value},
};
