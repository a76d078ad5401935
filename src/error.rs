use thiserror::Error;

/// Builds an [`Error::InvalidArgument`] tagged with the source location that raised it.
macro_rules! invalid_argument {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which covers every failure a source or decode operation can return.
///
/// # Error Categories
///
/// ## Decoding Errors
/// - [`Error::Eof`] - An exact-length read ran out of data
/// - [`Error::NotSupported`] - Variable-length text decoding was requested
///
/// ## Positioning Errors
/// - [`Error::InvalidArgument`] - A seek or skip target is outside the addressable range
///
/// ## Transport Errors
/// - [`Error::Io`] - Failure reported by the backing reader, passed through unchanged
/// - [`Error::Closed`] - A transport-backed source was used after `close()`
///
/// # Examples
///
/// ```rust
/// use seekio::{Error, input::{memory::InMemory, SeekableDataInput}};
///
/// let mut input = InMemory::new(vec![0x00, 0x01]);
/// match input.read_i32() {
///     Ok(value) => println!("value: {value}"),
///     Err(Error::Eof) => eprintln!("truncated input"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer bytes remained than an exact-length read demanded.
    ///
    /// Raised by `read_fully` and every fixed-width primitive. The raw ranged
    /// read never raises it; it reports end of data as `Ok(None)` instead.
    #[error("Unexpected end of data")]
    Eof,

    /// A position argument is outside what the backing storage can address.
    ///
    /// # Fields
    ///
    /// * `message` - Description of the rejected argument
    /// * `file` - Source file where the error was raised
    /// * `line` - Source line where the error was raised
    #[error("Invalid argument - {file}:{line}: {message}")]
    InvalidArgument {
        /// The message to be printed for the InvalidArgument error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The operation is not supported at this layer.
    ///
    /// Text decoding (`read_line`, `read_utf`) always returns this. The value
    /// names the rejected operation.
    #[error("Operation not supported: {0}")]
    NotSupported(&'static str),

    /// The source was already closed.
    #[error("Source has been closed")]
    Closed,

    /// I/O error from the backing transport.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
