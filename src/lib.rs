//! # ip_printer
//!
//! Prints values as dot-separated, IP-address-like lines.
//!
//! ## Shapes
//!
//! A value is rendered according to its shape, chosen when the program is
//! compiled:
//!
//! - **Integers** print their bytes, most significant first. Negative numbers
//!   print their two's-complement bit pattern (`-1i8` prints `255`).
//! - **Integer sequences** (`Vec`, `VecDeque`, `LinkedList`, arrays, slices)
//!   print their elements in order.
//! - **Strings** print verbatim.
//! - **Tuples** print every slot with its `Display` form, in declared order.
//!
//! Anything else does not implement [`IpShape`] and is rejected by the
//! compiler. There is no fallback.
//!
//! ## Quick Start
//!
//! ```rust
//! use ip_printer::{print_ip, to_dotted};
//!
//! print_ip(2130706433i32); // 127.0.0.1
//! print_ip(vec![10, 0, 0, 1]); // 10.0.0.1
//! print_ip("hello"); // hello
//! print_ip((1, "a", 3.5)); // 1.a.3.5
//!
//! assert_eq!(to_dotted(&-1i8), "255");
//! assert_eq!(to_dotted(&0i16), "0.0");
//! assert_eq!(to_dotted(&8875824491850138409i64), "123.45.67.89.101.112.131.41");
//! ```
//!
//! ## Run-time Dispatch
//!
//! Values only known through `Serialize` go through [`to_string`], which
//! picks the same paths from the serde data model and reports unsupported
//! shapes as [`Error::UnsupportedType`] without producing any output:
//!
//! ```rust
//! use ip_printer::{to_string, Error};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Address(u8, u8, u8, u8);
//!
//! assert_eq!(to_string(&Address(192, 168, 0, 1)).unwrap(), "192.168.0.1");
//!
//! #[derive(Serialize)]
//! struct Host { name: String }
//!
//! let host = Host { name: "gateway".to_string() };
//! assert!(matches!(to_string(&host), Err(Error::UnsupportedType(_))));
//! ```
//!
//! ## Logging
//!
//! Every rendering emits a `tracing` event at `TRACE` level naming the shape
//! and type. Rejections are logged at `DEBUG`.

pub mod dotted;
pub mod error;
pub mod macros;
pub mod octets;
pub mod ser;
pub mod shape;

pub use error::{Error, Result};
pub use octets::Integral;
pub use ser::Serializer;
pub use shape::{IpShape, Shape};

use serde::Serialize;
use std::any;
use std::io;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Prints the dotted rendering of `value` to standard output, followed by a
/// newline.
///
/// Standard output is locked for the whole line. An empty sequence prints
/// nothing. A failed write is logged and otherwise ignored.
///
/// # Examples
///
/// ```rust
/// use ip_printer::print_ip;
///
/// print_ip(-1i8); // 255
/// print_ip(0i16); // 0.0
/// print_ip(2130706433i32); // 127.0.0.1
/// print_ip(8875824491850138409i64); // 123.45.67.89.101.112.131.41
/// ```
pub fn print_ip<T: IpShape>(value: T) {
    let stdout = io::stdout();
    if let Err(err) = write_ip(stdout.lock(), &value) {
        tracing::error!(%err, "failed to print dotted rendering");
    }
}

/// Writes the dotted rendering of `value` and a newline to `writer`.
///
/// An empty sequence has no rendering and writes nothing, not even the
/// newline.
///
/// # Examples
///
/// ```rust
/// use ip_printer::write_ip;
///
/// let mut buffer = Vec::new();
/// write_ip(&mut buffer, &vec![1, 2, 3]).unwrap();
/// assert_eq!(buffer, b"1.2.3\n");
///
/// let mut buffer = Vec::new();
/// write_ip(&mut buffer, &Vec::<u8>::new()).unwrap();
/// assert!(buffer.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_ip<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + IpShape,
{
    write_line(&mut writer, to_dotted(value), T::SHAPE)
}

/// Writes `rendered` as one flushed line. An empty sequence writes nothing.
fn write_line<W: io::Write>(writer: &mut W, mut rendered: String, shape: Shape) -> Result<()> {
    if shape == Shape::Sequence && rendered.is_empty() {
        return Ok(());
    }
    rendered.push('\n');
    writer
        .write_all(rendered.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Returns the dotted rendering of `value`, without a line terminator.
///
/// # Examples
///
/// ```rust
/// use ip_printer::to_dotted;
///
/// assert_eq!(to_dotted(&2130706433i32), "127.0.0.1");
/// assert_eq!(to_dotted(&Vec::<u8>::new()), "");
/// assert_eq!(to_dotted("1.2.3"), "1.2.3");
/// ```
#[must_use]
pub fn to_dotted<T>(value: &T) -> String
where
    T: ?Sized + IpShape,
{
    let rendered = value.to_dotted();
    tracing::trace!(
        shape = %T::SHAPE,
        ty = any::type_name::<T>(),
        rendered = %rendered,
        "rendered"
    );
    rendered
}

/// Renders any `T: Serialize` whose shape is only checked at run time.
///
/// # Examples
///
/// ```rust
/// use ip_printer::to_string;
///
/// assert_eq!(to_string(&(1, "a", 3.5)).unwrap(), "1.a.3.5");
/// assert!(to_string(&1.5f64).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value is not an integer, a
/// sequence of integers, a string or a tuple of scalars.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Writes the run-time rendering of `value` and a newline to `writer`.
///
/// Nothing is written when the shape is rejected or the value is an empty
/// sequence. The writer is flushed after the line.
///
/// # Examples
///
/// ```rust
/// use ip_printer::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[127u8, 0, 0, 1]).unwrap();
/// assert_eq!(buffer, b"127.0.0.1\n");
/// ```
///
/// # Errors
///
/// Returns an error if the shape is unsupported or writing to the writer
/// fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    let shape = serializer.shape();
    match shape {
        Some(shape) => write_line(&mut writer, serializer.into_inner(), shape),
        None => Err(Error::unsupported_type("empty value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingWriter {
        written: Vec<u8>,
        flushes: usize,
    }

    impl io::Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_ip_appends_newline() {
        let mut buffer = Vec::new();
        write_ip(&mut buffer, &2130706433i32).unwrap();
        assert_eq!(buffer, b"127.0.0.1\n");
    }

    #[test]
    fn test_write_ip_empty_sequence_writes_nothing() {
        let mut buffer = Vec::new();
        write_ip(&mut buffer, &Vec::<i32>::new()).unwrap();
        assert!(buffer.is_empty());

        write_ip(&mut buffer, &<[u8; 0]>::default()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_write_ip_empty_string_is_bare_newline() {
        let mut buffer = Vec::new();
        write_ip(&mut buffer, "").unwrap();
        assert_eq!(buffer, b"\n");
    }

    #[test]
    fn test_to_writer_empty_sequence_writes_nothing() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &Vec::<u16>::new()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_line_writers_flush() {
        let mut writer = CountingWriter::default();
        write_ip(&mut writer, &1u8).unwrap();
        assert_eq!(writer.flushes, 1);

        to_writer(&mut writer, &1u8).unwrap();
        assert_eq!(writer.flushes, 2);
        assert_eq!(writer.written, b"1\n1\n");
    }

    #[test]
    fn test_write_ip_reports_io_errors() {
        let result = write_ip(FailingWriter, &1u8);
        assert!(matches!(result, Err(Error::Io(msg)) if msg.contains("closed")));
    }

    #[test]
    fn test_to_writer_writes_nothing_on_rejection() {
        let mut map = BTreeMap::new();
        map.insert("a", 1u8);

        let mut buffer = Vec::new();
        let result = to_writer(&mut buffer, &map);
        assert_eq!(result, Err(Error::unsupported_type("map")));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_runtime_agrees_with_static() {
        assert_eq!(to_string(&-1i8).unwrap(), to_dotted(&-1i8));
        assert_eq!(to_string(&vec![4, 5]).unwrap(), to_dotted(&vec![4, 5]));
        assert_eq!(to_string("x.y").unwrap(), to_dotted("x.y"));
        assert_eq!(
            to_string(&(1, "a", 3.5)).unwrap(),
            to_dotted(&(1, "a", 3.5))
        );
    }
}
