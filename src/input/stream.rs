//! Adapter for `std::io` transports.
//!
//! [`StreamInput`] turns anything implementing [`std::io::Read`] and [`std::io::Seek`]
//! (an open `std::fs::File`, a `BufReader` around one, a `Cursor`, a custom network
//! reader) into a [`SeekableDataInput`]. It supplies only the raw primitives; every
//! decode operation comes from the trait's provided methods, so short reads from the
//! transport are absorbed by `read_fully`.
//!
//! Transport errors are returned as [`crate::Error::Io`] as soon as they occur. Nothing
//! is retried, `ErrorKind::Interrupted` included.
//!
//! # Examples
//!
//! ```rust
//! use seekio::input::{stream::StreamInput, SeekableDataInput, SeekableInput};
//! use std::io::Cursor;
//!
//! let mut input = StreamInput::new(Cursor::new(vec![0x3F, 0xF0, 0, 0, 0, 0, 0, 0]));
//! assert_eq!(input.read_f64()?, 1.0);
//! input.close()?;
//! assert!(input.is_closed());
//! # Ok::<(), seekio::Error>(())
//! ```

use std::io::{Read, Seek, SeekFrom};

use log::debug;

use super::{SeekableDataInput, SeekableInput};
use crate::{Error, Result};

/// Source reading from a seekable `std::io` transport.
///
/// `close` drops the transport, which releases file handles and sockets. Every
/// operation after that returns [`crate::Error::Closed`].
///
/// A `read` into an empty buffer returns `Some(0)` without touching the transport,
/// even at the end of the data: a `Read` implementation only reveals the end by
/// returning 0 for a non-empty buffer.
#[derive(Debug)]
pub struct StreamInput<R> {
    reader: Option<R>,
}

impl<R: Read + Seek> StreamInput<R> {
    /// Wraps an open transport. The cursor is wherever the transport currently is.
    #[must_use]
    pub fn new(reader: R) -> Self {
        StreamInput {
            reader: Some(reader),
        }
    }

    /// Returns `true` once [`SeekableInput::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Returns the transport, or `None` if the source was closed.
    pub fn into_inner(self) -> Option<R> {
        self.reader
    }

    fn reader(&mut self) -> Result<&mut R> {
        self.reader.as_mut().ok_or(Error::Closed)
    }
}

impl<R: Read + Seek> SeekableInput for StreamInput<R> {
    fn seek(&mut self, position: u64) -> Result<()> {
        // std transports address with a signed 64-bit offset
        if i64::try_from(position).is_err() {
            return Err(invalid_argument!(
                "position for StreamInput may not exceed {}: {}",
                i64::MAX,
                position
            ));
        }

        self.reader()?.seek(SeekFrom::Start(position))?;
        Ok(())
    }

    fn pos(&mut self) -> Result<u64> {
        Ok(self.reader()?.stream_position()?)
    }

    fn close(&mut self) -> Result<()> {
        match self.reader.take() {
            Some(reader) => {
                debug!("closing stream input");
                drop(reader);
            }
            None => debug!("stream input already closed"),
        }

        Ok(())
    }
}

impl<R: Read + Seek> SeekableDataInput for StreamInput<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        let reader = self.reader()?;
        if buf.is_empty() {
            return Ok(Some(0));
        }

        match reader.read(buf)? {
            0 => Ok(None),
            count => Ok(Some(count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, ErrorKind};

    /// Hands out one byte per read call.
    struct OneByte(Cursor<Vec<u8>>);

    impl Read for OneByte {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let len = buf.len().min(1);
            self.0.read(&mut buf[..len])
        }
    }

    impl Seek for OneByte {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.0.seek(pos)
        }
    }

    /// Fails every read with the given kind.
    struct Broken(ErrorKind);

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "transport failure"))
        }
    }

    impl Seek for Broken {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Ok(0)
        }
    }

    #[test]
    fn decodes_from_cursor() {
        let mut input = StreamInput::new(Cursor::new(vec![
            0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x05,
        ]));

        assert_eq!(input.read_i32().unwrap(), 1);
        assert_eq!(input.pos().unwrap(), 4);
        assert_eq!(input.read_i32().unwrap(), 5);
        assert_eq!(input.pos().unwrap(), 8);
        assert!(matches!(input.read_i8(), Err(Error::Eof)));
    }

    #[test]
    fn short_reads_are_absorbed() {
        let mut input = StreamInput::new(OneByte(Cursor::new(vec![
            0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        ])));

        let mut buf = [0u8; 4];
        assert_eq!(input.read(&mut buf).unwrap(), Some(1));
        input.seek(0).unwrap();
        assert_eq!(input.read_i64().unwrap(), i64::MAX);
    }

    #[test]
    fn seek_past_end_then_read() {
        let mut input = StreamInput::new(Cursor::new(vec![1, 2, 3]));
        input.seek(10).unwrap();
        assert_eq!(input.pos().unwrap(), 10);
        assert_eq!(input.read(&mut [0u8; 1]).unwrap(), None);
        assert!(matches!(input.read_u16(), Err(Error::Eof)));
    }

    #[test]
    fn seek_beyond_signed_range_is_invalid() {
        let mut input = StreamInput::new(Cursor::new(vec![1]));
        let result = input.seek(u64::MAX);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
        assert_eq!(input.pos().unwrap(), 0);
    }

    #[test]
    fn skip_relative() {
        let mut input = StreamInput::new(Cursor::new((0u8..16).collect::<Vec<_>>()));
        input.read_i16().unwrap();
        assert_eq!(input.skip(5).unwrap(), 5);
        assert_eq!(input.read_u8().unwrap(), 7);
    }

    #[test]
    fn empty_read_request() {
        let mut input = StreamInput::new(Cursor::new(Vec::<u8>::new()));
        assert_eq!(input.read(&mut []).unwrap(), Some(0));
        assert_eq!(input.read(&mut [0u8; 1]).unwrap(), None);
    }

    #[test]
    fn empty_read_request_at_end() {
        let mut input = StreamInput::new(Cursor::new(vec![1, 2]));
        input.seek(2).unwrap();
        assert_eq!(input.read(&mut []).unwrap(), Some(0));
        input.seek(9).unwrap();
        assert_eq!(input.read(&mut []).unwrap(), Some(0));
        assert_eq!(input.read(&mut [0u8; 1]).unwrap(), None);
        assert_eq!(input.pos().unwrap(), 9);
    }

    #[test]
    fn transport_error_propagates() {
        let mut input = StreamInput::new(Broken(ErrorKind::ConnectionReset));
        match input.read_i32() {
            Err(Error::Io(error)) => assert_eq!(error.kind(), ErrorKind::ConnectionReset),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn interrupted_is_not_retried() {
        let mut input = StreamInput::new(Broken(ErrorKind::Interrupted));
        assert!(matches!(input.read(&mut [0u8; 2]), Err(Error::Io(_))));
    }

    #[test]
    fn close_is_idempotent() {
        let mut input = StreamInput::new(Cursor::new(vec![1, 2]));
        input.close().unwrap();
        input.close().unwrap();
        assert!(input.is_closed());
        assert!(input.into_inner().is_none());
    }

    #[test]
    fn use_after_close() {
        let mut input = StreamInput::new(Cursor::new(vec![1, 2]));
        input.close().unwrap();

        assert!(matches!(input.seek(0), Err(Error::Closed)));
        assert!(matches!(input.pos(), Err(Error::Closed)));
        assert!(matches!(input.read(&mut [0u8; 1]), Err(Error::Closed)));
        assert!(matches!(input.read_u8(), Err(Error::Closed)));
    }

    #[test]
    fn text_decoding_unsupported() {
        let mut input = StreamInput::new(Cursor::new(b"abc\n".to_vec()));
        assert!(matches!(input.read_line(), Err(Error::NotSupported(_))));
        assert!(matches!(input.read_utf(), Err(Error::NotSupported(_))));
    }
}
