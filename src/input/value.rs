//! Runtime description of the decodable primitives.
//!
//! [`PrimitiveKind`] names each fixed-width primitive a [`crate::input::SeekableDataInput`]
//! can decode, and [`Value`] carries one decoded result. Together they let callers
//! describe a record layout as data and decode it with
//! [`crate::input::SeekableDataInput::read_value`].

use strum::{EnumCount, EnumIter, FromRepr};

use crate::{Error, Result};

/// Every primitive the decoding layer understands.
///
/// The `repr(u8)` discriminants are stable and may be stored by callers; convert a
/// stored byte back with [`PrimitiveKind::from_repr`] or `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum PrimitiveKind {
    /// Signed 8-bit integer
    Byte = 0x01,
    /// Unsigned 8-bit integer
    UnsignedByte = 0x02,
    /// Signed 16-bit integer
    Short = 0x03,
    /// Unsigned 16-bit integer
    UnsignedShort = 0x04,
    /// UTF-16 code unit
    Char = 0x05,
    /// Signed 32-bit integer
    Int = 0x06,
    /// Signed 64-bit integer
    Long = 0x07,
    /// IEEE-754 binary32
    Float = 0x08,
    /// IEEE-754 binary64
    Double = 0x09,
    /// Single byte, non-zero is `true`
    Boolean = 0x0A,
}

impl PrimitiveKind {
    /// Number of bytes one value of this kind occupies on the wire.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            PrimitiveKind::Byte | PrimitiveKind::UnsignedByte | PrimitiveKind::Boolean => 1,
            PrimitiveKind::Short | PrimitiveKind::UnsignedShort | PrimitiveKind::Char => 2,
            PrimitiveKind::Int | PrimitiveKind::Float => 4,
            PrimitiveKind::Long | PrimitiveKind::Double => 8,
        }
    }
}

impl TryFrom<u8> for PrimitiveKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        PrimitiveKind::from_repr(tag)
            .ok_or_else(|| invalid_argument!("unknown primitive kind tag: {:#04x}", tag))
    }
}

/// One decoded primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Signed 8-bit integer
    Byte(i8),
    /// Unsigned 8-bit integer
    UnsignedByte(u8),
    /// Signed 16-bit integer
    Short(i16),
    /// Unsigned 16-bit integer
    UnsignedShort(u16),
    /// UTF-16 code unit
    Char(u16),
    /// Signed 32-bit integer
    Int(i32),
    /// Signed 64-bit integer
    Long(i64),
    /// IEEE-754 binary32
    Float(f32),
    /// IEEE-754 binary64
    Double(f64),
    /// Boolean
    Boolean(bool),
}

impl Value {
    /// The kind this value was decoded as.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Value::Byte(_) => PrimitiveKind::Byte,
            Value::UnsignedByte(_) => PrimitiveKind::UnsignedByte,
            Value::Short(_) => PrimitiveKind::Short,
            Value::UnsignedShort(_) => PrimitiveKind::UnsignedShort,
            Value::Char(_) => PrimitiveKind::Char,
            Value::Int(_) => PrimitiveKind::Int,
            Value::Long(_) => PrimitiveKind::Long,
            Value::Float(_) => PrimitiveKind::Float,
            Value::Double(_) => PrimitiveKind::Double,
            Value::Boolean(_) => PrimitiveKind::Boolean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{memory::InMemory, SeekableDataInput, SeekableInput};
    use strum::IntoEnumIterator;

    #[test]
    fn kind_count() {
        assert_eq!(PrimitiveKind::COUNT, 10);
        assert_eq!(PrimitiveKind::iter().count(), PrimitiveKind::COUNT);
    }

    #[test]
    fn stored_tag_converts_back() {
        for kind in PrimitiveKind::iter() {
            let tag = kind as u8;
            assert_eq!(PrimitiveKind::from_repr(tag), Some(kind));
            assert_eq!(PrimitiveKind::try_from(tag).unwrap(), kind);
        }

        assert_eq!(PrimitiveKind::from_repr(0x00), None);
        assert_eq!(PrimitiveKind::from_repr(0x0B), None);
        assert!(matches!(
            PrimitiveKind::try_from(0xFF),
            Err(crate::Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn width_matches_cursor_advance() {
        for kind in PrimitiveKind::iter() {
            let mut input = InMemory::new(vec![0x7F; 8]);
            let value = input.read_value(kind).unwrap();
            assert_eq!(value.kind(), kind);
            assert_eq!(input.pos().unwrap(), kind.width() as u64, "{kind:?}");
        }
    }

    #[test]
    fn every_kind_fails_on_empty_input() {
        for kind in PrimitiveKind::iter() {
            let mut input = InMemory::new(vec![]);
            assert!(
                matches!(input.read_value(kind), Err(crate::Error::Eof)),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn record_layout() {
        let layout = [
            PrimitiveKind::UnsignedShort,
            PrimitiveKind::Boolean,
            PrimitiveKind::Float,
            PrimitiveKind::Char,
        ];
        let mut input = InMemory::new(vec![
            0x80, 0x01, // u16
            0x00, // bool
            0x3F, 0x80, 0x00, 0x00, // 1.0f32
            0x00, 0x41, // 'A'
        ]);

        let values = layout
            .iter()
            .map(|kind| input.read_value(*kind))
            .collect::<crate::Result<Vec<_>>>()
            .unwrap();

        assert_eq!(
            values,
            vec![
                Value::UnsignedShort(0x8001),
                Value::Boolean(false),
                Value::Float(1.0),
                Value::Char(u16::from(b'A')),
            ]
        );
    }
}
