//! Compile-time shape dispatch.
//!
//! [`IpShape`] is implemented for exactly four families of types, one per
//! rendering path:
//!
//! | Shape | Types | Rendering |
//! |-------|-------|-----------|
//! | [`Shape::Integer`] | every primitive integer | byte groups, most significant first |
//! | [`Shape::Sequence`] | `Vec`, `VecDeque`, `LinkedList`, arrays and slices of integers | elements in iteration order |
//! | [`Shape::Text`] | `str`, `String`, `Cow<str>` | verbatim |
//! | [`Shape::Tuple`] | tuples of 1 to 12 `Display` elements | slots in declared order |
//!
//! The trait is sealed, so any other type is rejected when the program is
//! compiled:
//!
//! ```compile_fail
//! ip_printer::print_ip(1.5f64);
//! ```
//!
//! ```compile_fail
//! ip_printer::print_ip(vec!["a", "b"]);
//! ```

use crate::dotted;
use crate::octets::{octets, Integral};
use crate::sealed::Sealed;
use std::borrow::Cow;
use std::collections::{LinkedList, VecDeque};
use std::fmt;

/// The structural category a value is rendered as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Integer,
    Sequence,
    Text,
    Tuple,
}

impl Shape {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Shape::Integer => "integer",
            Shape::Sequence => "sequence",
            Shape::Text => "text",
            Shape::Tuple => "tuple",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that has a dotted rendering.
///
/// # Examples
///
/// ```rust
/// use ip_printer::{IpShape, Shape};
///
/// assert_eq!(2130706433i32.to_dotted(), "127.0.0.1");
/// assert_eq!(vec![1, 2, 3].to_dotted(), "1.2.3");
/// assert_eq!("hello".to_dotted(), "hello");
/// assert_eq!((1, "a", 3.5).to_dotted(), "1.a.3.5");
///
/// assert_eq!(<(u8, u8)>::SHAPE, Shape::Tuple);
/// ```
pub trait IpShape: Sealed {
    /// Path this type is rendered through.
    const SHAPE: Shape;

    /// Appends the rendering to `out`, without a line terminator.
    fn write_dotted(&self, out: &mut String);

    /// Returns the rendering as a new string.
    #[must_use]
    fn to_dotted(&self) -> String {
        let mut out = String::new();
        self.write_dotted(&mut out);
        out
    }
}

impl<T: Sealed + ?Sized> Sealed for &T {}

impl<T: IpShape + ?Sized> IpShape for &T {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn write_dotted(&self, out: &mut String) {
        (**self).write_dotted(out)
    }
}

macro_rules! impl_integer_shape {
    ($($int:ty),* $(,)?) => { $(
        impl Sealed for $int {}

        impl IpShape for $int {
            const SHAPE: Shape = Shape::Integer;

            fn write_dotted(&self, out: &mut String) {
                dotted::join_into(out, octets(*self));
            }
        }
    )* };
}

impl_integer_shape!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_sequence_shape {
    ($($seq:ident),* $(,)?) => { $(
        impl<T: Integral> Sealed for $seq<T> {}

        impl<T: Integral> IpShape for $seq<T> {
            const SHAPE: Shape = Shape::Sequence;

            fn write_dotted(&self, out: &mut String) {
                dotted::join_into(out, self.iter());
            }
        }
    )* };
}

impl_sequence_shape!(Vec, VecDeque, LinkedList);

impl<T: Integral, const N: usize> Sealed for [T; N] {}

impl<T: Integral, const N: usize> IpShape for [T; N] {
    const SHAPE: Shape = Shape::Sequence;

    fn write_dotted(&self, out: &mut String) {
        dotted::join_into(out, self.iter());
    }
}

impl<T: Integral> Sealed for [T] {}

impl<T: Integral> IpShape for [T] {
    const SHAPE: Shape = Shape::Sequence;

    fn write_dotted(&self, out: &mut String) {
        dotted::join_into(out, self.iter());
    }
}

impl Sealed for str {}

impl IpShape for str {
    const SHAPE: Shape = Shape::Text;

    #[inline]
    fn write_dotted(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Sealed for String {}

impl IpShape for String {
    const SHAPE: Shape = Shape::Text;

    #[inline]
    fn write_dotted(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Sealed for Cow<'_, str> {}

impl IpShape for Cow<'_, str> {
    const SHAPE: Shape = Shape::Text;

    #[inline]
    fn write_dotted(&self, out: &mut String) {
        out.push_str(self);
    }
}

/// One impl per arity; every slot is visited in declared order.
macro_rules! impl_tuple_shape {
    ($($idx:tt $name:ident),+) => {
        impl<$($name: fmt::Display),+> Sealed for ($($name,)+) {}

        impl<$($name: fmt::Display),+> IpShape for ($($name,)+) {
            const SHAPE: Shape = Shape::Tuple;

            fn write_dotted(&self, out: &mut String) {
                dotted::join_into(out, [$(&self.$idx as &dyn fmt::Display),+]);
            }
        }
    };
}

impl_tuple_shape!(0 A);
impl_tuple_shape!(0 A, 1 B);
impl_tuple_shape!(0 A, 1 B, 2 C);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
impl_tuple_shape!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);
