#![no_main]

use libfuzzer_sys::fuzz_target;
use seekio::input::{memory::InMemory, value::PrimitiveKind, SeekableDataInput, SeekableInput};

const KINDS: [PrimitiveKind; 10] = [
    PrimitiveKind::Byte,
    PrimitiveKind::UnsignedByte,
    PrimitiveKind::Short,
    PrimitiveKind::UnsignedShort,
    PrimitiveKind::Char,
    PrimitiveKind::Int,
    PrimitiveKind::Long,
    PrimitiveKind::Float,
    PrimitiveKind::Double,
    PrimitiveKind::Boolean,
];

// The input doubles as the buffer under test and as the sequence of operations.
fuzz_target!(|data: &[u8]| {
    let mut input = InMemory::new(data.to_vec());
    let len = data.len() as u64;

    for op in data.chunks(2) {
        let before = input.pos().unwrap();
        let arg = op.get(1).copied().unwrap_or(0);

        match op[0] % 4 {
            0 => {
                let kind = KINDS[usize::from(arg) % KINDS.len()];
                match input.read_value(kind) {
                    Ok(value) => {
                        assert_eq!(value.kind(), kind);
                        assert_eq!(input.pos().unwrap(), before + kind.width() as u64);
                    }
                    Err(_) => {
                        assert!(before + kind.width() as u64 > len);
                        assert_eq!(input.pos().unwrap(), before);
                    }
                }
            }
            1 => {
                let mut buf = vec![0u8; usize::from(arg)];
                match input.read(&mut buf).unwrap() {
                    Some(count) => {
                        assert!(count <= buf.len());
                        assert_eq!(input.pos().unwrap(), before + count as u64);
                    }
                    None => assert!(before >= len),
                }
            }
            2 => {
                input.seek(u64::from(arg)).unwrap();
                assert_eq!(input.pos().unwrap(), u64::from(arg));
            }
            _ => {
                let delta = i64::from(arg as i8);
                match input.skip(delta) {
                    Ok(n) => assert_eq!(input.pos().unwrap() as i64, before as i64 + n),
                    Err(_) => assert!((before as i64) + delta < 0),
                }
            }
        }
    }
});
